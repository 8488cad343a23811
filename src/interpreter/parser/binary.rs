use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses the `and`/`or` level.
///
/// Both connectives share one precedence level and associate to the left, so
/// `a or b and c` parses as `(a or b) and c`.
///
/// Grammar: `andor := comparison (("and" | "or") comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_andor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            let line = *line;
            tokens.next();
            let right = parse_comparison(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses the comparison level.
///
/// At most one comparator is allowed in a chain; `a < b < c` is rejected with
/// a dedicated error instead of a generic unexpected-token failure later.
///
/// Grammar: `comparison := additive [ ("<" | ">" | "<=" | ">=" | "==" | "!=") additive ]`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A comparison node, or the underlying additive expression.
///
/// # Errors
/// Returns `ChainedComparison` when a second comparator follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && is_comparison_op(op)
    {
        let line = *line;
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };

        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && is_comparison_op(op)
        {
            return Err(crate::error::ParseError::ChainedComparison { line: *line });
        }
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, the comparison operators, `and` and `or`).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use step::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// Supported categories:
/// - Strict relations: `<`, `>`
/// - Non-strict relations: `<=`, `>=`
/// - Equality: `==`, `!=`
///
/// # Example
/// ```
/// use step::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(is_comparison_op(BinaryOperator::NotEqual));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
