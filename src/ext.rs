//! Method-call access to the codec and string helpers
//!
//! ```rust
//! use peaks_strings::StringExt;
//!
//! assert_eq!("foo".to_hex(), "666f6f");
//! assert_eq!("<66 6f 6f>".hex_to_text().unwrap(), "foo");
//! assert_eq!("42".pad_left(4, "0"), "0042");
//! ```

use std::ops::Range;

use crate::error::Result;
use crate::utils::hex::{Hex, HexString};
use crate::utils::strings;

/// Extension methods on `str`
///
/// Names that would collide with inherent `str` methods carry a suffix
/// (`trim_ws`, `split_components`).
pub trait StringExt {
    /// See [`strings::trim`]
    fn trim_ws(&self) -> String;

    fn last_path_component(&self) -> String;

    fn path_extension(&self) -> String;

    fn append_path_component(&self, component: &str) -> String;

    /// See [`strings::append_path_extension`]
    fn append_path_extension(&self, ext: &str) -> Result<String>;

    fn base64_encoded(&self) -> String;

    /// See [`strings::base64_decoded`]
    fn base64_decoded(&self) -> Result<String>;

    /// See [`strings::sub_string`]
    fn sub_string(&self, start: usize, end: usize) -> Result<String>;

    fn split_components(&self, separator: &str) -> Vec<String>;

    /// See [`strings::replace_characters_in_range`]
    fn replace_characters_in_range(&self, range: Range<usize>, with: &str) -> Result<String>;

    fn remove_emoji(&self) -> String;

    fn remove_characters(&self, forbidden: &str) -> String;

    fn pad_left(&self, total_width: usize, pad: &str) -> String;

    /// Hex-encode the UTF-8 bytes of this text
    fn to_hex(&self) -> HexString;

    /// Decode this hex string into bytes, see [`Hex::decode`]
    fn hex_bytes(&self) -> Result<Vec<u8>>;

    /// Decode this hex string into UTF-8 text, see [`Hex::hex_to_text`]
    fn hex_to_text(&self) -> Result<String>;
}

impl StringExt for str {
    fn trim_ws(&self) -> String {
        strings::trim(self)
    }

    fn last_path_component(&self) -> String {
        strings::last_path_component(self)
    }

    fn path_extension(&self) -> String {
        strings::path_extension(self)
    }

    fn append_path_component(&self, component: &str) -> String {
        strings::append_path_component(self, component)
    }

    fn append_path_extension(&self, ext: &str) -> Result<String> {
        strings::append_path_extension(self, ext)
    }

    fn base64_encoded(&self) -> String {
        strings::base64_encoded(self)
    }

    fn base64_decoded(&self) -> Result<String> {
        strings::base64_decoded(self)
    }

    fn sub_string(&self, start: usize, end: usize) -> Result<String> {
        strings::sub_string(self, start, end)
    }

    fn split_components(&self, separator: &str) -> Vec<String> {
        strings::split(self, separator)
    }

    fn replace_characters_in_range(&self, range: Range<usize>, with: &str) -> Result<String> {
        strings::replace_characters_in_range(self, range, with)
    }

    fn remove_emoji(&self) -> String {
        strings::remove_emoji(self)
    }

    fn remove_characters(&self, forbidden: &str) -> String {
        strings::remove_characters(self, forbidden)
    }

    fn pad_left(&self, total_width: usize, pad: &str) -> String {
        strings::pad_left(self, total_width, pad)
    }

    fn to_hex(&self) -> HexString {
        Hex::text_to_hex(self)
    }

    fn hex_bytes(&self) -> Result<Vec<u8>> {
        Hex::decode(self)
    }

    fn hex_to_text(&self) -> Result<String> {
        Hex::hex_to_text(self)
    }
}
