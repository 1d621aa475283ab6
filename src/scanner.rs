use std::fmt;

use crate::charclass::{CharClass, classify};
use crate::cursor::Cursor;
use crate::token::{MAX_IDENT_LEN, Span, Token, TokenKind};

/// Classifies a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `(*` reached end of input before a closing `*)`.
    UnterminatedComment,
    /// Identifier or number run longer than
    /// [`MAX_IDENT_LEN`](crate::MAX_IDENT_LEN) characters.
    IdentifierTooLong,
    /// Character literal not closed by a quote immediately after one
    /// character.
    InvalidCharConstant,
    /// A character that cannot start any token, or a `!` not followed
    /// by `=`.
    InvalidSymbol,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedComment => {
                write!(f, "End of comment expected.")
            }
            Self::IdentifierTooLong => {
                write!(f, "Identifier too long.")
            }
            Self::InvalidCharConstant => {
                write!(f, "Invalid char constant.")
            }
            Self::InvalidSymbol => {
                write!(f, "Invalid symbol.")
            }
        }
    }
}

/// Error produced during scanning.
///
/// Some faults still yield a token for the offending input (`!` with
/// no `=`, and unrecognized characters); that token travels in
/// `token` so callers that continue past errors can keep it for
/// resynchronization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}-{}:{kind}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub token: Option<Token>,
}

impl LexError {
    const fn new(kind: LexErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            token: None,
        }
    }
}

/// Tokenize a KPL source string into a sequence of tokens.
///
/// The returned sequence always ends with an EOF token. The first
/// lexical fault aborts the scan: no partial token list is returned.
///
/// # Errors
///
/// Returns `LexError` on unterminated comments, overlong lexemes,
/// malformed character literals, or unrecognized symbols.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Tokenize a KPL source string, collecting errors instead of
/// stopping at the first one.
///
/// Faults that produce a token for the offending input keep that
/// token in the stream; scanning resumes past the fault. The token
/// sequence always ends with an EOF token.
#[must_use]
pub fn tokenize_lenient(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        match scanner.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::Eof;
                tokens.push(token);
                if done {
                    return (tokens, errors);
                }
            }
            Err(mut err) => {
                if let Some(token) = err.token.take() {
                    tokens.push(token);
                }
                errors.push(err);
            }
        }
    }
}

/// The scanning state machine.
///
/// Produces one token per [`next_token`](Scanner::next_token) call.
/// Each scanner owns its own [`Cursor`], so independent scans over
/// different inputs can run side by side.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Produce the next token.
    ///
    /// Returns an EOF token once the input is exhausted; calling again
    /// after that keeps returning EOF at the same position.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on a lexical fault. The cursor is always
    /// left past the fault (or at end of input), so a caller may keep
    /// calling to scan past the error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        // Whitespace skipping and comment skipping loop back here
        // instead of recursing; neither yields a token of its own.
        loop {
            match classify(self.cursor.current()) {
                CharClass::Eof => {
                    return Ok(Token::new(TokenKind::Eof, self.cursor.span()));
                }
                CharClass::Space => {
                    while classify(self.cursor.current()) == CharClass::Space {
                        self.cursor.advance();
                    }
                }
                CharClass::Letter => return self.read_ident_or_keyword(),
                CharClass::Digit => return self.read_number(),
                CharClass::SingleQuote => return self.read_char_literal(),
                CharClass::Colon => {
                    return Ok(self.read_maybe_eq(TokenKind::Assign, TokenKind::Colon));
                }
                CharClass::Lt => {
                    return Ok(self.read_maybe_eq(TokenKind::Le, TokenKind::Lt));
                }
                CharClass::Gt => {
                    return Ok(self.read_maybe_eq(TokenKind::Ge, TokenKind::Gt));
                }
                CharClass::Exclamation => return self.read_neq(),
                CharClass::LParen => {
                    let span = self.cursor.span();
                    self.cursor.advance();
                    if self.cursor.current() == Some(b'*') {
                        // A comment, not a parenthesis. Skip it and go
                        // find the real next token.
                        self.skip_comment(span)?;
                    } else {
                        return Ok(Token::new(TokenKind::LParen, span));
                    }
                }
                CharClass::Equal => return Ok(self.read_symbol(TokenKind::Eq)),
                CharClass::Plus => return Ok(self.read_symbol(TokenKind::Plus)),
                CharClass::Minus => return Ok(self.read_symbol(TokenKind::Minus)),
                CharClass::Times => return Ok(self.read_symbol(TokenKind::Times)),
                CharClass::Slash => return Ok(self.read_symbol(TokenKind::Slash)),
                CharClass::Semicolon => {
                    return Ok(self.read_symbol(TokenKind::Semicolon));
                }
                CharClass::Comma => return Ok(self.read_symbol(TokenKind::Comma)),
                CharClass::Period => return Ok(self.read_symbol(TokenKind::Period)),
                CharClass::RParen => return Ok(self.read_symbol(TokenKind::RParen)),
                CharClass::Unknown => {
                    let span = self.cursor.span();
                    self.cursor.advance();
                    return Err(LexError {
                        kind: LexErrorKind::InvalidSymbol,
                        span,
                        token: Some(Token::new(TokenKind::Invalid, span)),
                    });
                }
            }
        }
    }

    /// One single-character symbol token at the current position.
    fn read_symbol(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.cursor.span());
        self.cursor.advance();
        token
    }

    /// A symbol that becomes `two` when followed by `=`, else `one`.
    /// The follower stays current when it is not `=`.
    fn read_maybe_eq(&mut self, two: TokenKind, one: TokenKind) -> Token {
        let span = self.cursor.span();
        self.cursor.advance();
        if self.cursor.current() == Some(b'=') {
            self.cursor.advance();
            Token::new(two, span)
        } else {
            Token::new(one, span)
        }
    }

    /// `!` must be followed by `=`. The `!=` token is built either
    /// way; on a mismatch it rides along in the error so callers that
    /// continue can still see it.
    fn read_neq(&mut self) -> Result<Token, LexError> {
        let span = self.cursor.span();
        self.cursor.advance();
        let matched = self.cursor.current() == Some(b'=');
        self.cursor.advance();
        let token = Token::new(TokenKind::Neq, span);
        if matched {
            Ok(token)
        } else {
            Err(LexError {
                kind: LexErrorKind::InvalidSymbol,
                span,
                token: Some(token),
            })
        }
    }

    /// Maximal letter/digit run starting with a letter. The first
    /// character past the run is left unconsumed.
    fn read_ident_or_keyword(&mut self) -> Result<Token, LexError> {
        let span = self.cursor.span();
        let text = self.read_run(span, |class| {
            matches!(class, CharClass::Letter | CharClass::Digit)
        })?;
        Ok(match TokenKind::keyword(&text) {
            Some(kind) => Token::new(kind, span),
            None => Token::with_lexeme(TokenKind::Ident, text, span),
        })
    }

    /// Maximal digit run. No sign, decimal point, or exponent; the
    /// value stays as text at this layer.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let span = self.cursor.span();
        let text = self.read_run(span, |class| class == CharClass::Digit)?;
        Ok(Token::with_lexeme(TokenKind::Number, text, span))
    }

    /// Accumulate characters while `keep` holds, bounds-checked
    /// against `MAX_IDENT_LEN`. The whole run is consumed even when
    /// it is overlong, so the cursor is past it on error.
    fn read_run(
        &mut self,
        span: Span,
        keep: impl Fn(CharClass) -> bool,
    ) -> Result<String, LexError> {
        let mut text = String::new();
        while let Some(byte) = self.cursor.current() {
            if !keep(classify(Some(byte))) {
                break;
            }
            text.push(char::from(byte));
            self.cursor.advance();
        }
        if text.len() > MAX_IDENT_LEN {
            return Err(LexError::new(LexErrorKind::IdentifierTooLong, span));
        }
        Ok(text)
    }

    /// `'c'`: exactly one character between quotes. Any byte is
    /// accepted as the character, including a quote.
    fn read_char_literal(&mut self) -> Result<Token, LexError> {
        let span = self.cursor.span();
        self.cursor.advance(); // opening quote
        let Some(byte) = self.cursor.current() else {
            return Err(LexError::new(LexErrorKind::InvalidCharConstant, span));
        };
        self.cursor.advance();
        if self.cursor.current() != Some(b'\'') {
            return Err(LexError::new(LexErrorKind::InvalidCharConstant, span));
        }
        self.cursor.advance(); // closing quote
        Ok(Token::with_lexeme(
            TokenKind::CharLiteral,
            char::from(byte).to_string(),
            span,
        ))
    }

    /// Skip a comment body, entered with the cursor on the `*` of
    /// `(*`. Any `*` immediately followed by `)` closes the comment;
    /// a lone `*` does not. Comments do not nest.
    fn skip_comment(&mut self, open: Span) -> Result<(), LexError> {
        self.cursor.advance(); // the '*' that opened the comment
        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::new(LexErrorKind::UnterminatedComment, open));
                }
                Some(b'*') => {
                    self.cursor.advance();
                    if self.cursor.current() == Some(b')') {
                        self.cursor.advance();
                        return Ok(());
                    }
                }
                Some(_) => self.cursor.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("should tokenize")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn assignment_statement() {
        let tokens = tokenize("aaa:=1").expect("should tokenize");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "aaa");
        assert_eq!(tokens[1].kind, TokenKind::Assign);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].lexeme, "1");
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn keyword_vs_ident() {
        assert_eq!(
            kinds("BEGIN x END"),
            vec![
                TokenKind::KwBegin,
                TokenKind::Ident,
                TokenKind::KwEnd,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn keyword_tokens_carry_no_lexeme() {
        let tokens = tokenize("WHILE").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::KwWhile);
        assert!(tokens[0].lexeme.is_empty());
    }

    #[test]
    fn lowercase_keyword_is_ident() {
        let tokens = tokenize("begin").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "begin");
    }

    #[test]
    fn number_stops_at_non_digit() {
        let tokens = tokenize("12ab").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].lexeme, "ab");
    }

    #[test]
    fn colon_without_eq() {
        assert_eq!(
            kinds("a:b"),
            vec![
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn relational_symbols() {
        assert_eq!(
            kinds("< <= > >= = !="),
            vec![
                TokenKind::Lt,
                TokenKind::Le,
                TokenKind::Gt,
                TokenKind::Ge,
                TokenKind::Eq,
                TokenKind::Neq,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn char_literal() {
        let tokens = tokenize("'a'").expect("should tokenize");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].lexeme, "a");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn char_literal_not_closed() {
        let err = tokenize("'ab'").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidCharConstant);
        assert_eq!(err.span, Span { line: 1, column: 1 });
        assert_eq!(err.token, None);
    }

    #[test]
    fn comment_yields_no_token() {
        let tokens = tokenize("x (* a comment *) y").expect("should tokenize");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[1].lexeme, "y");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn lparen_without_star_stands() {
        assert_eq!(
            kinds("(a)"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn unterminated_comment() {
        let err = tokenize("(* never closes").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(err.span, Span { line: 1, column: 1 });
    }

    #[test]
    fn stray_star_does_not_close_comment() {
        let tokens = tokenize("(* a * b *) x").expect("should tokenize");
        assert_eq!(tokens[0].lexeme, "x");
    }

    #[test]
    fn double_star_close() {
        let tokens = tokenize("(* text **) x").expect("should tokenize");
        assert_eq!(tokens[0].lexeme, "x");
    }

    #[test]
    fn bang_without_eq_still_produces_token() {
        let err = tokenize("!x").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidSymbol);
        assert_eq!(err.span, Span { line: 1, column: 1 });
        let token = err.token.expect("token should ride along");
        assert_eq!(token.kind, TokenKind::Neq);
        assert_eq!(token.span, Span { line: 1, column: 1 });
    }

    #[test]
    fn unknown_character() {
        let err = tokenize("a # b").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidSymbol);
        assert_eq!(err.span, Span { line: 1, column: 3 });
        assert_eq!(err.token.map(|t| t.kind), Some(TokenKind::Invalid));
    }

    #[test]
    fn eof_is_sticky() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
        let eof = scanner.next_token().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().unwrap(), eof);
    }
}
