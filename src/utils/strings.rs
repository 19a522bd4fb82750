//! String helper functions
//!
//! Small leaf transforms over `&str`: trimming, `/`-separated path handling,
//! base64, code-point substring and range replacement, emoji and character
//! removal, and left padding. All character offsets count Unicode scalar
//! values, not bytes.

use std::ops::Range;

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::error::{PeaksError, Result};

/// Emoji blocks stripped by [`remove_emoji`]: musical symbols through
/// alchemical symbols, and letterlike symbols through miscellaneous symbols.
const EMOJI_RANGES: [(char, char); 2] = [('\u{1D000}', '\u{1F77F}'), ('\u{2100}', '\u{26FF}')];

/// Trim leading and trailing whitespace and newlines
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::trim;
///
/// assert_eq!(trim(" Hello   "), "Hello");
/// ```
pub fn trim(input: &str) -> String {
    input.trim().to_string()
}

/// Check whether a string has no characters at all
///
/// Whitespace counts as content: `" "` is not empty.
pub const fn is_empty(input: &str) -> bool {
    input.is_empty()
}

/// Last component of a `/`-separated path
///
/// Trailing slashes are ignored. A path made only of slashes yields `"/"`.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::last_path_component;
///
/// assert_eq!(last_path_component("/tmp/scratch.tiff"), "scratch.tiff");
/// assert_eq!(last_path_component("/tmp/"), "tmp");
/// assert_eq!(last_path_component("/"), "/");
/// ```
pub fn last_path_component(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
}

/// Extension of the last path component, without the dot
///
/// Returns an empty string when the component has no extension. A leading
/// dot alone (`".profile"`) does not start an extension.
pub fn path_extension(path: &str) -> String {
    let component = last_path_component(path);
    match component.rfind('.') {
        Some(idx) if idx > 0 => component[idx + 1..].to_string(),
        _ => String::new(),
    }
}

/// Append a component to a path with a single `/` between them
///
/// Runs of slashes are collapsed and a trailing slash is dropped.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::append_path_component;
///
/// assert_eq!(append_path_component("/tmp", "scratch.tiff"), "/tmp/scratch.tiff");
/// assert_eq!(append_path_component("/tmp/", "scratch.tiff"), "/tmp/scratch.tiff");
/// assert_eq!(append_path_component("", "scratch.tiff"), "scratch.tiff");
/// ```
pub fn append_path_component(path: &str, component: &str) -> String {
    if path.is_empty() {
        return normalize_slashes(component);
    }
    normalize_slashes(&format!("{path}/{component}"))
}

/// Append `.ext` to the last component of a path
///
/// # Errors
///
/// Returns [`PeaksError::InvalidPathExtension`] when `ext` contains a slash
/// or the path has no last component to extend (`""` or `"/"`).
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::append_path_extension;
///
/// assert_eq!(append_path_extension("/tmp/scratch.old", "tiff").unwrap(), "/tmp/scratch.old.tiff");
/// assert_eq!(append_path_extension("/tmp/", "tiff").unwrap(), "/tmp.tiff");
/// ```
pub fn append_path_extension(path: &str, ext: &str) -> Result<String> {
    if ext.contains('/') {
        return Err(PeaksError::InvalidPathExtension(format!(
            "extension {ext:?} contains a path separator"
        )));
    }

    let base = normalize_slashes(path);
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Err(PeaksError::InvalidPathExtension(format!(
            "path {path:?} has no component to extend"
        )));
    }

    Ok(format!("{base}.{ext}"))
}

fn normalize_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && result.ends_with('/') {
            continue;
        }
        result.push(ch);
    }
    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    result
}

/// Standard base64 encoding of the UTF-8 bytes of a string
pub fn base64_encoded(input: &str) -> String {
    general_purpose::STANDARD.encode(input.as_bytes())
}

/// Decode standard base64 into UTF-8 text
///
/// # Errors
///
/// Returns [`PeaksError::Base64`] for malformed base64 and
/// [`PeaksError::Encoding`] when the decoded bytes are not UTF-8.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::{base64_decoded, base64_encoded};
///
/// assert_eq!(base64_encoded("Hello"), "SGVsbG8=");
/// assert_eq!(base64_decoded("SGVsbG8=").unwrap(), "Hello");
/// ```
pub fn base64_decoded(input: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD.decode(input).map_err(|e| {
        debug!(error = %e, "invalid base64 input");
        PeaksError::from(e)
    })?;
    Ok(String::from_utf8(bytes)?)
}

/// Byte offset of the character at `index`, where `index == len` maps to the
/// end of the string.
fn byte_offset(input: &str, index: usize) -> Option<usize> {
    input
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(input.len()))
        .nth(index)
}

/// Characters `start..=end` of a string
///
/// # Errors
///
/// Returns [`PeaksError::InvalidRange`] when `start > end` and
/// [`PeaksError::OutOfBounds`] when `end` is not a character of the string.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::sub_string;
///
/// assert_eq!(sub_string("Hello World", 6, 10).unwrap(), "World");
/// assert_eq!(sub_string("héllo", 1, 1).unwrap(), "é");
/// ```
pub fn sub_string(input: &str, start: usize, end: usize) -> Result<String> {
    if start > end {
        return Err(PeaksError::InvalidRange { start, end });
    }

    let len = input.chars().count();
    if end >= len {
        return Err(PeaksError::OutOfBounds { index: end, len });
    }

    match (byte_offset(input, start), byte_offset(input, end + 1)) {
        (Some(from), Some(to)) => Ok(input[from..to].to_string()),
        _ => Err(PeaksError::OutOfBounds { index: end, len }),
    }
}

/// Split on every occurrence of `separator`, keeping empty components
///
/// An empty separator leaves the input whole.
pub fn split(input: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![input.to_string()];
    }
    input.split(separator).map(String::from).collect()
}

/// Replace the characters in a half-open range with another string
///
/// # Errors
///
/// Returns [`PeaksError::InvalidRange`] when the range is reversed and
/// [`PeaksError::OutOfBounds`] when it ends past the last character.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::replace_characters_in_range;
///
/// assert_eq!(replace_characters_in_range("Hello World", 6..11, "Rust").unwrap(), "Hello Rust");
/// ```
pub fn replace_characters_in_range(input: &str, range: Range<usize>, with: &str) -> Result<String> {
    if range.start > range.end {
        return Err(PeaksError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let len = input.chars().count();
    let (Some(from), Some(to)) = (byte_offset(input, range.start), byte_offset(input, range.end)) else {
        return Err(PeaksError::OutOfBounds {
            index: range.end,
            len,
        });
    };

    let mut result = String::with_capacity(input.len() - (to - from) + with.len());
    result.push_str(&input[..from]);
    result.push_str(with);
    result.push_str(&input[to..]);
    Ok(result)
}

/// Check whether a character falls in one of the emoji blocks
pub fn is_emoji(ch: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(low, high)| (low..=high).contains(&ch))
}

/// Remove every emoji character
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::remove_emoji;
///
/// assert_eq!(remove_emoji("Hi 😀 there ☀"), "Hi  there ");
/// ```
pub fn remove_emoji(input: &str) -> String {
    remove_characters_where(input, is_emoji)
}

/// Remove every character that appears in `forbidden`
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::remove_characters;
///
/// assert_eq!(remove_characters("a-b_c d", "-_ "), "abcd");
/// ```
pub fn remove_characters(input: &str, forbidden: &str) -> String {
    remove_characters_where(input, |ch| forbidden.contains(ch))
}

/// Remove every character matching a predicate
pub fn remove_characters_where<F>(input: &str, forbidden: F) -> String
where
    F: Fn(char) -> bool,
{
    input.chars().filter(|&ch| !forbidden(ch)).collect()
}

/// Left-pad to `total_width` characters, cycling through `pad`
///
/// Strings already at least `total_width` long, and an empty `pad`, leave
/// the input unchanged.
///
/// # Example
///
/// ```rust
/// use peaks_strings::utils::strings::pad_left;
///
/// assert_eq!(pad_left("42", 5, "0"), "00042");
/// assert_eq!(pad_left("7", 6, "ab"), "ababa7");
/// ```
pub fn pad_left(input: &str, total_width: usize, pad: &str) -> String {
    let len = input.chars().count();
    if len >= total_width || pad.is_empty() {
        return input.to_string();
    }

    let mut result: String = pad.chars().cycle().take(total_width - len).collect();
    result.push_str(input);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trim() {
        assert_eq!(trim(" Hello   "), "Hello");
        assert_eq!(trim("\t\nworld\t\n"), "world");
        assert_eq!(trim("no spaces"), "no spaces");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
        assert!(!is_empty("a"));
    }

    #[test]
    fn test_last_path_component() {
        assert_eq!(last_path_component("/tmp/scratch.tiff"), "scratch.tiff");
        assert_eq!(last_path_component("/tmp/scratch"), "scratch");
        assert_eq!(last_path_component("/tmp/"), "tmp");
        assert_eq!(last_path_component("scratch///"), "scratch");
        assert_eq!(last_path_component("/"), "/");
        assert_eq!(last_path_component("///"), "/");
        assert_eq!(last_path_component(""), "");
    }

    #[test]
    fn test_path_extension() {
        assert_eq!(path_extension("/tmp/scratch.tiff"), "tiff");
        assert_eq!(path_extension("archive.tar.gz"), "gz");
        assert_eq!(path_extension("/tmp/scratch"), "");
        assert_eq!(path_extension("/home/user/.profile"), "");
        assert_eq!(path_extension("/tmp.d/scratch"), "");
        assert_eq!(path_extension("/"), "");
    }

    #[test]
    fn test_append_path_component() {
        assert_eq!(append_path_component("/tmp", "scratch.tiff"), "/tmp/scratch.tiff");
        assert_eq!(append_path_component("/tmp/", "scratch.tiff"), "/tmp/scratch.tiff");
        assert_eq!(append_path_component("/", "scratch.tiff"), "/scratch.tiff");
        assert_eq!(append_path_component("", "scratch.tiff"), "scratch.tiff");
        assert_eq!(append_path_component("/tmp//", "/a//b/"), "/tmp/a/b");
        assert_eq!(append_path_component("/tmp", ""), "/tmp");
    }

    #[test]
    fn test_append_path_extension() {
        assert_eq!(append_path_extension("/tmp/scratch.old", "tiff").unwrap(), "/tmp/scratch.old.tiff");
        assert_eq!(append_path_extension("/tmp/", "tiff").unwrap(), "/tmp.tiff");
        assert_eq!(append_path_extension("scratch", "tiff").unwrap(), "scratch.tiff");

        assert!(matches!(
            append_path_extension("/tmp/scratch", "a/b"),
            Err(PeaksError::InvalidPathExtension(_))
        ));
        assert!(append_path_extension("/", "tiff").is_err());
        assert!(append_path_extension("", "tiff").is_err());
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64_encoded("Hello World"), "SGVsbG8gV29ybGQ=");
        assert_eq!(base64_encoded(""), "");
        assert_eq!(base64_decoded("SGVsbG8gV29ybGQ=").unwrap(), "Hello World");
        assert_eq!(base64_decoded(&base64_encoded("héllo 👋")).unwrap(), "héllo 👋");
    }

    #[test]
    fn test_base64_errors() {
        assert!(matches!(base64_decoded("not base64!"), Err(PeaksError::Base64(_))));
        // "//4=" is 0xff 0xfe
        assert!(base64_decoded("//4=").unwrap_err().is_encoding_error());
    }

    #[test]
    fn test_sub_string() {
        assert_eq!(sub_string("Hello World", 0, 4).unwrap(), "Hello");
        assert_eq!(sub_string("Hello World", 6, 10).unwrap(), "World");
        assert_eq!(sub_string("a😀b", 1, 2).unwrap(), "😀b");
        assert_eq!(sub_string("x", 0, 0).unwrap(), "x");
    }

    #[test]
    fn test_sub_string_errors() {
        assert_eq!(
            sub_string("Hello", 3, 1),
            Err(PeaksError::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(
            sub_string("Hello", 0, 5),
            Err(PeaksError::OutOfBounds { index: 5, len: 5 })
        );
        assert!(sub_string("", 0, 0).unwrap_err().is_range_error());
    }

    #[test]
    fn test_split() {
        assert_eq!(split("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split("a,,b,", ","), vec!["a", "", "b", ""]);
        assert_eq!(split("a--b", "--"), vec!["a", "b"]);
        assert_eq!(split("abc", ""), vec!["abc"]);
        assert_eq!(split("", ","), vec![""]);
    }

    #[test]
    fn test_replace_characters_in_range() {
        assert_eq!(replace_characters_in_range("Hello World", 6..11, "Rust").unwrap(), "Hello Rust");
        assert_eq!(replace_characters_in_range("abc", 1..1, "X").unwrap(), "aXbc");
        assert_eq!(replace_characters_in_range("abc", 3..3, "d").unwrap(), "abcd");
        assert_eq!(replace_characters_in_range("h😀llo", 1..2, "e").unwrap(), "hello");
        assert_eq!(replace_characters_in_range("abc", 0..3, "").unwrap(), "");
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_replace_characters_in_range_errors() {
        assert_eq!(
            replace_characters_in_range("abc", 2..1, "X"),
            Err(PeaksError::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(
            replace_characters_in_range("abc", 1..4, "X"),
            Err(PeaksError::OutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_remove_emoji() {
        assert_eq!(remove_emoji("Hi 😀 there"), "Hi  there");
        assert_eq!(remove_emoji("☀☂♥"), "");
        assert_eq!(remove_emoji("𝄞 music"), " music");
        assert_eq!(remove_emoji("plain ascii"), "plain ascii");
        assert!(is_emoji('🚀'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('é'));
    }

    #[test]
    fn test_remove_characters() {
        assert_eq!(remove_characters("a-b_c d", "-_ "), "abcd");
        assert_eq!(remove_characters("hello", ""), "hello");
        assert_eq!(remove_characters("héllo", "é"), "hllo");
        assert_eq!(remove_characters_where("a1b2c3", |c| c.is_ascii_digit()), "abc");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("42", 5, "0"), "00042");
        assert_eq!(pad_left("7", 6, "ab"), "ababa7");
        assert_eq!(pad_left("long", 2, "0"), "long");
        assert_eq!(pad_left("same", 4, "0"), "same");
        assert_eq!(pad_left("x", 3, ""), "x");
        assert_eq!(pad_left("é", 3, "·"), "··é");
    }
}
