//! Byte cursor shared by the stylesheet and declaration-list parsers.

/// A locally recoverable parse failure at a byte position.
///
/// Sub-parsers fail without committing partial state; the caller
/// resynchronizes and resumes from the recorded position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset into the input at which parsing gave up.
    pub position: usize,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Explicit cursor over raw stylesheet bytes.
///
/// Every consuming method other than whitespace skipping strictly advances
/// the cursor on success. The recovery loops in the parser rely on this to
/// terminate on arbitrary input.
pub struct Cursor<'src> {
    /// Underlying input bytes.
    bytes: &'src [u8],
    /// Current cursor index into `bytes`.
    index: usize,
}

impl<'src> Cursor<'src> {
    #[inline]
    pub const fn new(input: &'src str) -> Self {
        Self {
            bytes: input.as_bytes(),
            index: 0,
        }
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.index >= self.bytes.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    #[inline]
    pub fn bump(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// A `ParseError` pointing at the current position.
    #[inline]
    pub const fn error(&self) -> ParseError {
        ParseError {
            position: self.index,
        }
    }

    #[inline]
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Consume `expected` or fail without advancing.
    #[inline]
    pub fn expect(&mut self, expected: u8) -> ParseResult<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// The input between `start` and the current position, lossily decoded.
    #[inline]
    pub fn slice_from(&self, start: usize) -> String {
        let slice = self.bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_string()
    }

    /// Consume a run of bytes matching `keep`; fails without advancing when
    /// the run is empty.
    fn consume_run(&mut self, keep: fn(u8) -> bool) -> ParseResult<String> {
        let start = self.index;
        while matches!(self.peek(), Some(byte) if keep(byte)) {
            self.bump();
        }
        if self.index == start {
            return Err(self.error());
        }
        Ok(self.slice_from(start))
    }

    /// Consume an identifier: ASCII alphanumerics, `-` and `_`.
    #[inline]
    pub fn consume_identifier(&mut self) -> ParseResult<String> {
        self.consume_run(is_identifier_byte)
    }

    /// Consume a value token: the identifier alphabet plus `#`, `.` and `%`,
    /// enough for keywords, lengths, percentages, and hex colors.
    #[inline]
    pub fn consume_value_token(&mut self) -> ParseResult<String> {
        self.consume_run(is_value_byte)
    }

    /// Advance until one of `stops` (not consumed) or end of input.
    #[inline]
    pub fn consume_until_any(&mut self, stops: &[u8]) {
        while matches!(self.peek(), Some(byte) if !stops.contains(&byte)) {
            self.bump();
        }
    }

    /// Advance past the next occurrence of `stop`, consuming it. Returns
    /// false when the input ends first.
    #[inline]
    pub fn skip_past(&mut self, stop: u8) -> bool {
        self.consume_until_any(&[stop]);
        if self.is_eof() {
            return false;
        }
        self.bump();
        true
    }
}

const fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

const fn is_value_byte(byte: u8) -> bool {
    is_identifier_byte(byte) || byte == b'#' || byte == b'.' || byte == b'%'
}
