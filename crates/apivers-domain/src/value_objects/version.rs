//! API version keys
//!
//! A version key is a zero-padded ISO calendar date. For that format the
//! lexicographic and chronological orders coincide, so the key orders by
//! its string form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{VERSION_KEY_FORMAT, VERSION_KEY_LEN};
use crate::error::{Error, Result};

/// Calendar-date identifier of one API description (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(String);

impl VersionKey {
    /// Parse and validate a version key
    ///
    /// # Example
    ///
    /// ```
    /// use apivers_domain::VersionKey;
    ///
    /// let key = VersionKey::parse("2012-08-10").unwrap();
    /// assert_eq!(key.as_str(), "2012-08-10");
    /// assert!(VersionKey::parse("2012-8-10").is_err());
    /// ```
    pub fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref().trim();
        if value.len() != VERSION_KEY_LEN {
            return Err(Error::invalid_version_key(value));
        }
        NaiveDate::parse_from_str(value, VERSION_KEY_FORMAT)
            .map_err(|_| Error::invalid_version_key(value))?;
        Ok(Self(value.to_string()))
    }

    /// The key as written (`YYYY-MM-DD`)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key without separators (`YYYYMMDD`), used in synthesized type names
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }

    /// The calendar date this key denotes
    pub fn date(&self) -> NaiveDate {
        // Validated in `parse`, the only constructor.
        NaiveDate::parse_from_str(&self.0, VERSION_KEY_FORMAT).unwrap_or_default()
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VersionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for VersionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for VersionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VersionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
