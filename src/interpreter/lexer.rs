use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Classifies a lexical token in the source input.
///
/// Matching is longest-match, and fixed tokens win over the generic regex
/// rules of the same length. That is what makes `==` beat `=`, `<=` beat `<`
/// and `while` beat the identifier rule, while `whiles` is still an
/// identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `int`
    #[token("int")]
    Int,
    /// `float`, reserved.
    #[token("float")]
    Float,
    /// `bool`, reserved.
    #[token("bool")]
    Bool,
    /// `string`, reserved.
    #[token("string")]
    String,
    /// `print`
    #[token("print")]
    Print,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`, reserved.
    #[token("for")]
    For,
    /// `true`, reserved.
    #[token("true")]
    True,
    /// `false`, reserved.
    #[token("false")]
    False,

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
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
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
    /// `=`
    #[token("=")]
    Equals,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// Floating-point literal such as `3.14`. Lexed but never executed.
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatNumber,
    /// Integer literal such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// String literal such as `"hi"`. Lexed but never executed.
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,
    /// Variable names such as `x` or `total_1`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    /// Line breaks only move the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns the fixed spelling of keyword, operator and punctuation kinds.
    ///
    /// Literal and identifier kinds have no fixed spelling and return `None`.
    ///
    /// # Example
    /// ```
    /// use minipython::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::AndAnd.spelling(), Some("&&"));
    /// assert_eq!(TokenKind::Identifier.spelling(), None);
    /// ```
    #[must_use]
    pub const fn spelling(self) -> Option<&'static str> {
        Some(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Print => "print",
            Self::While => "while",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::True => "true",
            Self::False => "false",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::AndAnd => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::FloatNumber
            | Self::Number
            | Self::StringLiteral
            | Self::Identifier
            | Self::NewLine
            | Self::Ignored => return None,
        })
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so every token gets a
/// line/column position.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

/// A classified lexeme with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// 1-based line.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}

/// Converts source text into the ordered list of tokens it is made of.
///
/// Whitespace is dropped. The first piece of text that matches no rule stops
/// lexing with [`LexError::UnrecognizedToken`].
///
/// # Errors
/// Returns `LexError::UnrecognizedToken` with the offending text and its
/// position.
///
/// # Example
/// ```
/// use minipython::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x <= 10;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::LessEqual, TokenKind::Number, TokenKind::Semicolon]);
///
/// assert!(tokenize("x = 1 $ 2;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line:       1,
                                                                        line_start: 0, });

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column = source[lexer.extras.line_start..span.start].chars().count() + 1;
        let lexeme = lexer.slice().to_string();

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme,
                                            line,
                                            column }),
            Err(()) => {
                return Err(LexError::UnrecognizedToken { text: lexeme,
                                                         line,
                                                         column });
            },
        }
    }

    debug!(tokens = tokens.len(), "lexed source");
    Ok(tokens)
}
