//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes
//! of an object's frame. They are the only key the store knows about.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "45b983be36b73c0788dc9cbcb76cbb80fc7bb057")
//! - Raw: 20 bytes, as embedded in tree entries
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::core::{StoreError, StoreResult};
use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// Content address of an object
///
/// Always holds exactly 40 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case digits are accepted and normalized to lower case.
    pub fn try_parse(id: String) -> StoreResult<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StoreError::InvalidObjectId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from its raw 20-byte form
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Raw 20-byte form, as written inside tree entries
    pub fn to_raw(&self) -> [u8; RAW_OBJECT_ID_LENGTH] {
        let mut raw = [0; RAW_OBJECT_ID_LENGTH];
        // the constructor guarantees 40 hex digits
        hex::decode_to_slice(&self.0, &mut raw).unwrap_or_default();
        raw
    }

    /// Read an object ID from binary format (20 bytes)
    ///
    /// Fails with `UnexpectedEof` when fewer than 20 bytes remain.
    pub fn read_raw_from<R: io::Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut raw = [0; RAW_OBJECT_ID_LENGTH];
        reader.read_exact(&mut raw)?;
        Ok(Self::from_raw(&raw))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl FromStr for ObjectId {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        Self::try_parse(s.to_string())
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const HI_OID: &str = "45b983be36b73c0788dc9cbcb76cbb80fc7bb057";

    #[rstest]
    #[case("")]
    #[case("45b983be")]
    #[case("45b983be36b73c0788dc9cbcb76cbb80fc7bb0571")]
    #[case("zzb983be36b73c0788dc9cbcb76cbb80fc7bb057")]
    fn rejects_invalid_ids(#[case] id: &str) {
        assert!(matches!(
            ObjectId::try_parse(id.to_string()),
            Err(StoreError::InvalidObjectId(_))
        ));
    }

    #[test]
    fn normalizes_upper_case_digits() {
        let oid = ObjectId::try_parse(HI_OID.to_uppercase()).unwrap();
        assert_eq!(oid.as_ref(), HI_OID);
    }

    #[test]
    fn splits_into_fan_out_path() {
        let oid: ObjectId = HI_OID.parse().unwrap();
        assert_eq!(
            oid.to_path(),
            PathBuf::from("45").join("b983be36b73c0788dc9cbcb76cbb80fc7bb057")
        );
    }

    #[test]
    fn raw_form_is_twenty_bytes() {
        let oid: ObjectId = HI_OID.parse().unwrap();
        let raw = oid.to_raw();

        assert_eq!(raw[0], 0x45);
        assert_eq!(ObjectId::from_raw(&raw), oid);
        assert_eq!(ObjectId::read_raw_from(&mut &raw[..]).unwrap(), oid);
    }

    #[test]
    fn reading_short_raw_form_fails() {
        let mut short: &[u8] = &[0u8; 12];
        let err = ObjectId::read_raw_from(&mut short).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
