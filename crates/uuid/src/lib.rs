//! Textual codec for 128-bit identifiers.
//!
//! An identifier is exactly 16 bytes. Nothing inside it is interpreted: version and variant bits
//! are carried as-is, and the all-zero value is an ordinary identifier rather than a sentinel.
//!
//! This crate provides:
//! - The [`Uuid`] value type, a fixed-size `[u8; 16]` wrapper.
//! - The [`codec`] functions that convert between that value and text.
//! - Text marshal hooks ([`Uuid::marshal_text`], [`Uuid::unmarshal_text`]) and, with the `serde`
//!   feature, `Serialize`/`Deserialize` implementations that carry the canonical string.
//!
//! ## Canonical form
//! - Length: 36
//! - Characters: lowercase `0-9a-f`, with `-` at offsets 8, 13, 18 and 23
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! ## Accepted input forms
//! | Length | Example |
//! |---|---|
//! | 32 | `550e8400e29b41d4a716446655440000` |
//! | 36 | `550e8400-e29b-41d4-a716-446655440000` |
//! | 38 | `{550e8400-e29b-41d4-a716-446655440000}` |
//! | 45 | `urn:uuid:550e8400-e29b-41d4-a716-446655440000` |
//!
//! Hex digits may be in either case, and so may the `urn:uuid:` prefix.
//!
//! ```
//! use uuidtext::Uuid;
//!
//! let id: Uuid = "URN:UUID:550E8400-E29B-41D4-A716-446655440000".parse().unwrap();
//! assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//! ```

pub mod codec;
mod id;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export public types
pub use id::Uuid;

/// Error type for identifier parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Input length is not one of the accepted forms.
    #[error("invalid UUID length: {0}")]
    InvalidLength(usize),
    /// The 45-byte form does not start with `urn:uuid:`.
    #[error("invalid urn prefix: \"{}\"", .0.escape_ascii())]
    InvalidPrefix([u8; 9]),
    /// A separator is missing or a hex pair contains a non-hex character.
    #[error("invalid UUID format")]
    InvalidFormat,
}

/// Result type for identifier parsing.
pub type UuidResult<T> = Result<T, UuidError>;
