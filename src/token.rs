use std::fmt;

/// Maximum number of characters in an identifier, number, or other
/// lexeme. Longer runs are a lexical error, not a truncation.
pub const MAX_IDENT_LEN: usize = 15;

/// Source location for error reporting and token positions.
///
/// Lines and columns are 1-based and always point at the *first*
/// character of the token or error, before any lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. Terminates every token stream.
    Eof,
    /// Identifier; the token carries its lexeme.
    Ident,
    /// Unsigned integer literal, kept as text; the token carries
    /// its lexeme.
    Number,
    /// Character literal `'c'`; the token carries the single
    /// character as its lexeme.
    CharLiteral,
    /// Sentinel for input that forms no token. Emitted only
    /// alongside a [`LexError`](crate::LexError).
    Invalid,

    // Keywords. Matched case-sensitively against the uppercase
    // reserved spellings.
    KwProgram,
    KwConst,
    KwType,
    KwVar,
    KwInteger,
    KwChar,
    KwArray,
    KwOf,
    KwFunction,
    KwProcedure,
    KwBegin,
    KwEnd,
    KwCall,
    KwIf,
    KwThen,
    KwElse,
    KwWhile,
    KwDo,
    KwFor,
    KwTo,

    // Symbols.
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `:=`
    Assign,
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Look up an identifier-shaped run in the reserved-word table.
    ///
    /// Exact, case-sensitive match: `BEGIN` is a keyword, `Begin` and
    /// `begin` are plain identifiers.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        Some(match text {
            "PROGRAM" => Self::KwProgram,
            "CONST" => Self::KwConst,
            "TYPE" => Self::KwType,
            "VAR" => Self::KwVar,
            "INTEGER" => Self::KwInteger,
            "CHAR" => Self::KwChar,
            "ARRAY" => Self::KwArray,
            "OF" => Self::KwOf,
            "FUNCTION" => Self::KwFunction,
            "PROCEDURE" => Self::KwProcedure,
            "BEGIN" => Self::KwBegin,
            "END" => Self::KwEnd,
            "CALL" => Self::KwCall,
            "IF" => Self::KwIf,
            "THEN" => Self::KwThen,
            "ELSE" => Self::KwElse,
            "WHILE" => Self::KwWhile,
            "DO" => Self::KwDo,
            "FOR" => Self::KwFor,
            "TO" => Self::KwTo,
            _ => return None,
        })
    }

    /// Whether tokens of this kind carry a lexeme.
    #[must_use]
    pub const fn has_lexeme(self) -> bool {
        matches!(self, Self::Ident | Self::Number | Self::CharLiteral)
    }

    /// Stable display name, as printed by the token dump format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "TK_EOF",
            Self::Ident => "TK_IDENT",
            Self::Number => "TK_NUMBER",
            Self::CharLiteral => "TK_CHAR",
            Self::Invalid => "TK_NONE",
            Self::KwProgram => "KW_PROGRAM",
            Self::KwConst => "KW_CONST",
            Self::KwType => "KW_TYPE",
            Self::KwVar => "KW_VAR",
            Self::KwInteger => "KW_INTEGER",
            Self::KwChar => "KW_CHAR",
            Self::KwArray => "KW_ARRAY",
            Self::KwOf => "KW_OF",
            Self::KwFunction => "KW_FUNCTION",
            Self::KwProcedure => "KW_PROCEDURE",
            Self::KwBegin => "KW_BEGIN",
            Self::KwEnd => "KW_END",
            Self::KwCall => "KW_CALL",
            Self::KwIf => "KW_IF",
            Self::KwThen => "KW_THEN",
            Self::KwElse => "KW_ELSE",
            Self::KwWhile => "KW_WHILE",
            Self::KwDo => "KW_DO",
            Self::KwFor => "KW_FOR",
            Self::KwTo => "KW_TO",
            Self::Semicolon => "SB_SEMICOLON",
            Self::Colon => "SB_COLON",
            Self::Period => "SB_PERIOD",
            Self::Comma => "SB_COMMA",
            Self::Assign => "SB_ASSIGN",
            Self::Eq => "SB_EQ",
            Self::Neq => "SB_NEQ",
            Self::Lt => "SB_LT",
            Self::Le => "SB_LE",
            Self::Gt => "SB_GT",
            Self::Ge => "SB_GE",
            Self::Plus => "SB_PLUS",
            Self::Minus => "SB_MINUS",
            Self::Times => "SB_TIMES",
            Self::Slash => "SB_SLASH",
            Self::LParen => "SB_LPAR",
            Self::RParen => "SB_RPAR",
        }
    }
}

/// A single token with its kind, lexeme, and source location.
///
/// `lexeme` is empty for keyword, symbol, and end-of-input tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// A token with no lexeme (keywords, symbols, EOF, invalid).
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            lexeme: String::new(),
            span,
        }
    }

    /// A lexeme-bearing token (identifier, number, char literal).
    #[must_use]
    pub const fn with_lexeme(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

/// Token dump format: `<line>-<column>:<KIND>` with `(<lexeme>)`
/// appended for lexeme-bearing kinds.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}:{}",
            self.span.line,
            self.span.column,
            self.kind.name()
        )?;
        if self.kind.has_lexeme() {
            write!(f, "({})", self.lexeme)?;
        }
        Ok(())
    }
}
