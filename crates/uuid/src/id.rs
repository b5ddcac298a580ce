//! The identifier value type.

use crate::codec;
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// A 128-bit identifier.
///
/// This wrapper guarantees exactly 16 bytes. The bytes are opaque: version and variant bits are
/// neither checked nor set, and the all-zero value ([`Uuid::nil`], also the `Default`) is not
/// treated specially.
///
/// # Construction
/// - [`Uuid::from_bytes`] (or `From<[u8; 16]>`) wraps raw bytes.
/// - [`Uuid::parse_str`] / [`Uuid::parse_bytes`] accept any of the textual forms listed in
///   [`codec::parse`].
///
/// # Display format
/// `Display` always produces the canonical 36-character lowercase dashed form.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero identifier.
    pub const fn nil() -> Self {
        Self([0; 16])
    }

    /// Wraps 16 raw bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the identifier, returning its raw bytes.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if every byte is zero.
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Parses any accepted textual form.
    ///
    /// # Errors
    ///
    /// See [`codec::parse`].
    pub fn parse_str(input: &str) -> UuidResult<Self> {
        Self::parse_bytes(input.as_bytes())
    }

    /// Like [`Uuid::parse_str`], but for a byte slice that need not be UTF-8.
    ///
    /// # Errors
    ///
    /// See [`codec::parse`].
    pub fn parse_bytes(input: &[u8]) -> UuidResult<Self> {
        codec::parse(input).map(Self)
    }

    /// Text marshal hook: the canonical form as ASCII bytes.
    pub fn marshal_text(&self) -> [u8; codec::CANONICAL_LEN] {
        codec::encode(&self.0)
    }

    /// Text unmarshal hook: replaces `self` with the parsed value.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves `self` untouched if `text` is not an accepted form.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> UuidResult<()> {
        *self = Self::parse_bytes(text)?;
        Ok(())
    }
}

impl fmt::Display for Uuid {
    /// Formats the identifier in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.marshal_text();
        let text = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = UuidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(id: Uuid) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";
    const SAMPLE_BYTES: [u8; 16] = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];

    #[test]
    fn test_parse_str_valid_canonical() {
        let result = Uuid::parse_str(SAMPLE);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_bytes(), &SAMPLE_BYTES);
    }

    #[test]
    fn test_parse_accepts_every_form() {
        let expected = Uuid::from_bytes(SAMPLE_BYTES);

        for input in [
            "550e8400e29b41d4a716446655440000",
            "550e8400-e29b-41d4-a716-446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "URN:UUID:550E8400-E29B-41D4-A716-446655440000",
        ] {
            assert_eq!(Uuid::parse_str(input), Ok(expected), "input {input}");
        }
    }

    #[test]
    fn test_parse_rejects_too_short() {
        let result = Uuid::parse_str("550e8400e29b41d4a71644665544000");

        assert_eq!(result, Err(UuidError::InvalidLength(31)));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let result = Uuid::parse_str("550e8400-e29b-41d4-a716-4466554400000");

        assert_eq!(result, Err(UuidError::InvalidLength(37)));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        let result = Uuid::parse_str("550e8400e29b41d4a716446655440zzz");

        assert_eq!(result, Err(UuidError::InvalidFormat));
    }

    #[test]
    fn test_display_format() {
        let uuid = Uuid::from_bytes(SAMPLE_BYTES);

        assert_eq!(format!("{}", uuid), SAMPLE);
    }

    #[test]
    fn test_display_normalises_uppercase_input() {
        let uuid: Uuid = "{550E8400-E29B-41D4-A716-446655440000}".parse().unwrap();

        assert_eq!(uuid.to_string(), SAMPLE);
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", Uuid::from_bytes(SAMPLE_BYTES));

        assert_eq!(debug, format!("Uuid({SAMPLE})"));
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Uuid, _> = "not-a-uuid".parse();

        assert_eq!(result, Err(UuidError::InvalidLength(10)));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Uuid::try_from(SAMPLE), Ok(Uuid::from_bytes(SAMPLE_BYTES)));
    }

    #[test]
    fn test_nil_is_default_and_all_zero() {
        assert_eq!(Uuid::default(), Uuid::nil());
        assert!(Uuid::nil().is_nil());
        assert!(!Uuid::from_bytes(SAMPLE_BYTES).is_nil());
        assert_eq!(
            Uuid::nil().to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_byte_conversions() {
        let uuid = Uuid::from(SAMPLE_BYTES);
        let bytes: [u8; 16] = uuid.into();

        assert_eq!(bytes, SAMPLE_BYTES);
        assert_eq!(uuid.into_bytes(), SAMPLE_BYTES);
        assert_eq!(uuid.as_ref(), &SAMPLE_BYTES[..]);
    }

    #[test]
    fn test_marshal_text() {
        let uuid = Uuid::from_bytes(SAMPLE_BYTES);

        assert_eq!(&uuid.marshal_text()[..], SAMPLE.as_bytes());
    }

    #[test]
    fn test_unmarshal_text_replaces_value() {
        let mut uuid = Uuid::nil();

        uuid.unmarshal_text(b"550e8400e29b41d4a716446655440000")
            .unwrap();

        assert_eq!(uuid, Uuid::from_bytes(SAMPLE_BYTES));
    }

    #[test]
    fn test_unmarshal_text_failure_leaves_value_unchanged() {
        let mut uuid = Uuid::from_bytes(SAMPLE_BYTES);

        let result = uuid.unmarshal_text(b"xrn:uuid:00010203-0405-0607-0809-0a0b0c0d0e0f");

        assert_eq!(result, Err(UuidError::InvalidPrefix(*b"xrn:uuid:")));
        assert_eq!(uuid, Uuid::from_bytes(SAMPLE_BYTES));
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let low = Uuid::from_bytes([0; 16]);
        let mut high_bytes = [0; 16];
        high_bytes[0] = 1;
        let high = Uuid::from_bytes(high_bytes);

        assert!(low < high);
    }

    #[test]
    fn test_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let uuid1 = Uuid::parse_str(SAMPLE).unwrap();
        let uuid2 = Uuid::parse_str("550e8400e29b41d4a716446655440000").unwrap();

        let mut hasher1 = DefaultHasher::new();
        let mut hasher2 = DefaultHasher::new();

        uuid1.hash(&mut hasher1);
        uuid2.hash(&mut hasher2);

        assert_eq!(hasher1.finish(), hasher2.finish());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UuidError::InvalidLength(7).to_string(),
            "invalid UUID length: 7"
        );
        assert_eq!(
            UuidError::InvalidPrefix(*b"xrn:uuid:").to_string(),
            "invalid urn prefix: \"xrn:uuid:\""
        );
        assert_eq!(UuidError::InvalidFormat.to_string(), "invalid UUID format");
    }
}
