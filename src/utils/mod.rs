//! Utility modules for peaks-strings
//!
//! The hex codec and the string helpers. The two are independent: no string
//! helper goes through the codec.

pub mod hex;
pub mod strings;

// Re-export commonly used utilities
pub use strings::{
    append_path_component,
    append_path_extension,
    base64_decoded,
    base64_encoded,
    is_emoji,
    last_path_component,
    pad_left,
    path_extension,
    remove_characters,
    remove_characters_where,
    remove_emoji,
    replace_characters_in_range,
    split,
    sub_string,
    trim,
};

pub use hex::{Hex, HexString, HexTokens};
