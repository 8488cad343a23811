use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14` or `12.` (a trailing dot
    /// is allowed; a leading dot is not).
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double-quoted string literal tokens. Strings have no escape sequences
    /// and may span several lines.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `def`
    #[token("def")]
    Def,
    /// `None`
    #[token("None")]
    NoneLiteral,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Newlines are skipped but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte index of the current line
/// start, so lexical errors can report both line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// The byte index where the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into 64 bits.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes off a string literal and counts the newlines it spans.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the surrounding quotes.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let newlines = slice.chars().filter(|&c| c == '\n').count();
    if newlines > 0 {
        lex.extras.line += newlines;
        lex.extras.line_start = lex.span().start + slice.rfind('\n').expect("newline counted") + 1;
    }
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a whole source string into `(token, line)` pairs.
///
/// This is the entry point of the lexing stage. Whitespace and comments are
/// skipped; every remaining token is paired with the line it was read on.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The token stream consumed by the parser.
///
/// # Errors
/// Returns a [`LexError`] (with line and column) for unterminated strings,
/// number literals that do not fit into 64 bits, and characters that start no
/// token.
///
/// # Example
/// ```
/// use step::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1], (Token::Equals, 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let token = lexer.slice().to_string();
                let line = lexer.extras.line;
                let column = lexer.span().start - lexer.extras.line_start + 1;

                return Err(if token.starts_with('"') {
                    LexError::UnterminatedString { line, column }
                } else if token.starts_with(|c: char| c.is_ascii_digit()) {
                    LexError::MalformedNumber { token, line, column }
                } else {
                    LexError::UnrecognizedToken { token, line, column }
                });
            },
        }
    }

    Ok(tokens)
}
