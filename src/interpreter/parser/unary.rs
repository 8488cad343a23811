use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is numeric negation `-`, which is
/// right-associative (`--x` parses as `-(-x)`). If no operator is present,
/// the function delegates to [`parse_primary`] and then applies any postfix
/// operators via [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::UnaryOp` or a primary expression possibly followed by postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line, });
    }
    let primary = parse_primary(tokens)?;
    parse_postfix(tokens, primary)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string and `None` literals
/// - identifiers
/// - list literals (`[ ... ]`)
/// - parenthesized expressions
///
/// This function does not handle unary operators or postfix operators; it
/// dispatches on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | "[" elements "]"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary `Expr` or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..) | Token::Str(..) | Token::NoneLiteral, _) => {
            parse_literal(tokens)
        },
        (Token::Identifier(_), _) => parse_variable(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles
/// two kinds of postfix constructs, chained left-associatively:
///
/// 1. **Subscripts** `expr[index]`, including chains like `grid[i][j]`.
/// 2. **Calls** `expr(arg, ...)`, including calls on call results.
///
/// Parsing continues until no further postfix operator is found.
///
/// Grammar:
/// ```text
///     postfix := "[" expression "]"
///              | "(" [ expression ("," expression)* ] ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression to which postfix operators will be applied.
///
/// # Returns
/// An updated `Expr` with all postfix operators folded in.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        if let Some((Token::LBracket, line)) = tokens.peek() {
            let line = *line;
            tokens.next();
            let index = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RBracket, _)) => {
                    node = Expr::Index { sequence: Box::new(node),
                                         index: Box::new(index),
                                         line };
                },
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        token: "Expected ']' after subscript index".to_string(),
                        line,
                    });
                },
            }
            continue;
        }
        if let Some((Token::LParen, line)) = tokens.peek() {
            let line = *line;
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            node = Expr::Call { callee: Box::new(node),
                                arguments,
                                line };
            continue;
        }
        break;
    }
    Ok(node)
}

/// Parses a literal token into a literal expression.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                              line:  *line, }),
        Some((Token::Real(r), line)) => Ok(Expr::Literal { value: LiteralValue::Real(*r),
                                                           line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((Token::NoneLiteral, line)) => Ok(Expr::Literal { value: LiteralValue::None,
                                                               line:  *line, }),
        _ => unreachable!("parse_primary dispatched on a literal token"),
    }
}

/// Parses an identifier token into a variable expression.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        _ => unreachable!("parse_primary dispatched on an identifier token"),
    }
}

/// Parses a list literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// Elements are parsed using [`parse_expression`] and collected into an
/// `Expr::ListLiteral` node. An empty list `[]` is accepted.
///
/// Grammar: `list := "[" (expression ("," expression)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
///
/// # Returns
/// An `Expr::ListLiteral` with its list of element expressions.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBracket, line)) => *line,
        _ => unreachable!("parse_primary dispatched on '['"),
    };

    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Expr::ListLiteral { elements, line })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        _ => unreachable!("parse_primary dispatched on '('"),
    };

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ')', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
