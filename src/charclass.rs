//! Character classification for the scanner's dispatch table.

/// Coarse category of a single input byte, used to dispatch the
/// scanner's state machine. `Eof` stands for the end-of-input
/// sentinel rather than any byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Blank: space, tab, carriage return, or newline.
    Space,
    /// ASCII letter.
    Letter,
    /// ASCII digit.
    Digit,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!`
    Exclamation,
    /// `=`
    Equal,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `'`
    SingleQuote,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
    /// Any byte that cannot start or continue a token.
    Unknown,
}

/// Classify one byte of input, or the end-of-input sentinel (`None`).
#[must_use]
pub const fn classify(byte: Option<u8>) -> CharClass {
    match byte {
        None => CharClass::Eof,
        Some(b) => match b {
            b' ' | b'\t' | b'\r' | b'\n' => CharClass::Space,
            b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
            b'0'..=b'9' => CharClass::Digit,
            b'+' => CharClass::Plus,
            b'-' => CharClass::Minus,
            b'*' => CharClass::Times,
            b'/' => CharClass::Slash,
            b'<' => CharClass::Lt,
            b'>' => CharClass::Gt,
            b'!' => CharClass::Exclamation,
            b'=' => CharClass::Equal,
            b',' => CharClass::Comma,
            b'.' => CharClass::Period,
            b';' => CharClass::Semicolon,
            b':' => CharClass::Colon,
            b'\'' => CharClass::SingleQuote,
            b'(' => CharClass::LParen,
            b')' => CharClass::RParen,
            _ => CharClass::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(classify(Some(b'a')), CharClass::Letter);
        assert_eq!(classify(Some(b'Z')), CharClass::Letter);
        assert_eq!(classify(Some(b'0')), CharClass::Digit);
        assert_eq!(classify(Some(b'9')), CharClass::Digit);
    }

    #[test]
    fn eof_sentinel() {
        assert_eq!(classify(None), CharClass::Eof);
    }

    #[test]
    fn non_ascii_is_unknown() {
        assert_eq!(classify(Some(0xC3)), CharClass::Unknown);
        assert_eq!(classify(Some(b'#')), CharClass::Unknown);
        assert_eq!(classify(Some(b'_')), CharClass::Unknown);
    }
}
