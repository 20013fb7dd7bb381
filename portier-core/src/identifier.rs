//! Badge identifiers
//!
//! A badge reader sends its tag as ASCII hexadecimal digits with no framing.
//! The terminal keeps only `0-9` and `A-F` and calls the tag complete after
//! exactly [`TAG_LEN`] of them; everything else on the line is noise.

use core::fmt;

use heapless::Vec;

/// Number of accepted characters that make a complete tag
pub const TAG_LEN: usize = 10;

/// Check whether `byte` belongs to the tag alphabet (`0-9`, `A-F`)
///
/// Lowercase hex is not part of the alphabet.
pub const fn is_tag_char(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'A'..=b'F')
}

/// Errors from [`Identifier::parse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdentifierError {
    /// Not exactly [`TAG_LEN`] characters
    WrongLength { len: usize },
    /// Character outside the tag alphabet
    InvalidChar { index: usize, byte: u8 },
}

/// A complete badge identifier
///
/// Always exactly [`TAG_LEN`] characters of the tag alphabet. Equality is
/// byte equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    chars: Vec<u8, TAG_LEN>,
}

impl Identifier {
    /// Parse a complete identifier from text
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let bytes = text.as_bytes();
        if bytes.len() != TAG_LEN {
            return Err(IdentifierError::WrongLength { len: bytes.len() });
        }

        let mut chars = Vec::new();
        for (index, &byte) in bytes.iter().enumerate() {
            if !is_tag_char(byte) {
                return Err(IdentifierError::InvalidChar { index, byte });
            }
            // Length checked above
            let _ = chars.push(byte);
        }

        Ok(Self { chars })
    }

    /// Raw ASCII bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Identifier as text
    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits ever get in
        core::str::from_utf8(&self.chars).unwrap_or("")
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Identifier {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Outcome of feeding one received byte to the [`TagAssembler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// Byte is outside the alphabet and was dropped
    Discarded,
    /// Byte was kept; `count` characters collected so far
    Accepted { count: usize },
    /// Byte completed a tag; the assembler is empty again
    Complete(Identifier),
}

/// In-progress identifier, filled one received byte at a time
#[derive(Debug, Default)]
pub struct TagAssembler {
    chars: Vec<u8, TAG_LEN>,
}

impl TagAssembler {
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Number of accepted characters since the last completed tag
    pub fn accepted(&self) -> usize {
        self.chars.len()
    }

    /// Drop any partial tag
    pub fn reset(&mut self) {
        self.chars.clear();
    }

    /// Feed one received byte
    pub fn feed(&mut self, byte: u8) -> Feed {
        if !is_tag_char(byte) {
            return Feed::Discarded;
        }

        // Never full here: a full buffer is handed out and cleared below
        let _ = self.chars.push(byte);

        if self.chars.is_full() {
            let chars = core::mem::take(&mut self.chars);
            Feed::Complete(Identifier { chars })
        } else {
            Feed::Accepted {
                count: self.chars.len(),
            }
        }
    }
}
