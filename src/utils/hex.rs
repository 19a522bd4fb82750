//! Hexadecimal codec
//!
//! Converts between byte sequences, their lower-case hexadecimal form and
//! UTF-8 text. Decoding is tolerant of formatting noise: anything that is not
//! a hex digit (spaces, separators, enclosing `<` `>`) is skipped.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{PeaksError, Result};

/// Canonical hexadecimal string
///
/// Always lower-case and unseparated, exactly two digits per byte. Only the
/// codec produces values of this type, so holding a `HexString` means the
/// conversion already happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexString(String);

impl HexString {
    /// Encode bytes into their canonical hex form
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Borrow the hex digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into the bytes this string represents
    ///
    /// Never fails: a canonical string decodes to exactly the bytes it was
    /// built from, including the empty sequence.
    pub fn to_bytes(&self) -> Vec<u8> {
        Hex::tokens(&self.0).collect()
    }

    /// Number of bytes represented
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    /// Consume into the underlying `String`
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for HexString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<HexString> for String {
    fn from(hex: HexString) -> Self {
        hex.0
    }
}

impl PartialEq<str> for HexString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parses any noisy hex input into canonical form; fails like [`Hex::decode`].
impl FromStr for HexString {
    type Err = PeaksError;

    fn from_str(s: &str) -> Result<Self> {
        Hex::decode(s).map(|bytes| Self::from_bytes(&bytes))
    }
}

impl Serialize for HexString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Deserialization canonicalizes the input. The empty string is accepted
/// since it is the encoding of the empty byte sequence.
impl<'de> Deserialize<'de> for HexString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Self::default());
        }
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Scanner over the hex tokens of a string
///
/// Yields one byte per maximal run of one or two hex digits, skipping every
/// other character. `"fff"` yields `0xff` then `0x0f`.
#[derive(Debug, Clone)]
pub struct HexTokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for HexTokens<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        // Multi-byte UTF-8 sequences only contain bytes >= 0x80, so scanning
        // raw bytes never mistakes part of a wide character for a digit.
        while self.pos < self.bytes.len() {
            let Some(high) = nibble(self.bytes[self.pos]) else {
                self.pos += 1;
                continue;
            };
            self.pos += 1;

            let Some(low) = self.bytes.get(self.pos).copied().and_then(nibble) else {
                return Some(high);
            };
            self.pos += 1;
            return Some((high << 4) | low);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bytes.len() - self.pos))
    }
}

const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Hexadecimal codec
pub struct Hex;

impl Hex {
    /// Convert a byte array to its lower-case hexadecimal string
    ///
    /// Never fails. The output has exactly two digits per input byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use peaks_strings::utils::Hex;
    ///
    /// assert_eq!(Hex::encode(b"foo"), "666f6f");
    /// assert_eq!(Hex::encode(&[0x00, 0x0a, 0xff]), "000aff");
    /// assert_eq!(Hex::encode(&[]), "");
    /// ```
    pub fn encode(arr: &[u8]) -> HexString {
        HexString::from_bytes(arr)
    }

    /// Convert a hexadecimal string to bytes
    ///
    /// Scans left to right for runs of one or two hex digits (any case) and
    /// ignores every other character.
    ///
    /// # Errors
    ///
    /// Returns [`PeaksError::Decode`] when the input holds no hex digit at
    /// all, including the empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use peaks_strings::utils::Hex;
    ///
    /// assert_eq!(Hex::decode("<66 6F-6f>").unwrap(), b"foo".to_vec());
    /// assert_eq!(Hex::decode("fff").unwrap(), vec![0xff, 0x0f]);
    /// assert!(Hex::decode("!!!").is_err());
    /// ```
    pub fn decode(hex_str: &str) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(hex_str.len() / 2);
        buffer.extend(Self::tokens(hex_str));

        if buffer.is_empty() {
            debug!(input_len = hex_str.len(), "hex scan found no digits");
            return Err(PeaksError::Decode);
        }

        trace!(bytes = buffer.len(), "decoded hex input");
        Ok(buffer)
    }

    /// Iterate over the bytes encoded in a noisy hex string
    pub fn tokens(hex_str: &str) -> HexTokens<'_> {
        HexTokens {
            bytes: hex_str.as_bytes(),
            pos: 0,
        }
    }

    /// Hex-encode the UTF-8 bytes of a text string
    ///
    /// # Example
    ///
    /// ```rust
    /// use peaks_strings::utils::Hex;
    ///
    /// assert_eq!(Hex::text_to_hex("foo"), "666f6f");
    /// ```
    pub fn text_to_hex(text: &str) -> HexString {
        Self::encode(text.as_bytes())
    }

    /// Decode a hex string and interpret the bytes as UTF-8 text
    ///
    /// # Errors
    ///
    /// Propagates [`PeaksError::Decode`] from [`Hex::decode`] and returns
    /// [`PeaksError::Encoding`] when the bytes are not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```rust
    /// use peaks_strings::utils::Hex;
    ///
    /// assert_eq!(Hex::hex_to_text("<666f6f>").unwrap(), "foo");
    /// ```
    pub fn hex_to_text(hex_str: &str) -> Result<String> {
        let bytes = Self::decode(hex_str)?;
        String::from_utf8(bytes).map_err(|e| {
            debug!(error = %e, "decoded hex is not valid UTF-8");
            PeaksError::from(e)
        })
    }
}
