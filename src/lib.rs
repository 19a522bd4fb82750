//! peaks-strings
//!
//! String and byte convenience transforms built around a hexadecimal codec.
//!
//! # Features
//!
//! - **Hex codec**: bytes ⇄ lower-case hex ⇄ UTF-8 text, with a decoder that
//!   skips separators, whitespace and brackets
//! - **Path helpers**: last component, extension, joining on `/`
//! - **Base64**: standard alphabet, text in and out
//! - **Code-point editing**: substrings, range replacement, padding
//! - **Filtering**: emoji and arbitrary character-set removal
//!
//! # Quick Start
//!
//! ```rust
//! use peaks_strings::{Hex, PeaksError, StringExt};
//!
//! let hex = Hex::text_to_hex("foo");
//! assert_eq!(hex, "666f6f");
//!
//! // Formatting noise is ignored on decode
//! assert_eq!(Hex::hex_to_text("<66 6F 6f>")?, "foo");
//!
//! // Input with no hex digits is an error, not an empty result
//! assert_eq!(Hex::decode("!!!"), Err(PeaksError::Decode));
//!
//! assert_eq!("/tmp/scratch.tiff".path_extension(), "tiff");
//! # Ok::<(), PeaksError>(())
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod ext;
pub mod utils;

// Re-exports for convenience
pub use error::{PeaksError, Result};
pub use ext::StringExt;
pub use utils::hex::{Hex, HexString, HexTokens};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_crate_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hex>();
        assert_send_sync::<HexString>();
        assert_send_sync::<HexTokens<'static>>();
        assert_send_sync::<PeaksError>();
    }

    #[test]
    fn test_concurrent_decoding() {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                std::thread::spawn(move || {
                    let bytes = vec![i; 64];
                    Hex::decode(&Hex::encode(&bytes)).map(|decoded| decoded == bytes)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    }
}
