use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref VERSION_REGEX: Regex = Regex::new(r"^(\d{1,3})\.(\d{1,3})$").unwrap();
}

/// Version announced in the top-level `jsonapi` member
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct JsonApiVersion {
    pub major: u8,
    pub minor: u8,
}

impl JsonApiVersion {
    pub const V1_0: JsonApiVersion = JsonApiVersion { major: 1, minor: 0 };
    pub const V1_1: JsonApiVersion = JsonApiVersion { major: 1, minor: 1 };

    /// 1.x documents share the resource shape this crate reads, later minors only add members
    pub fn is_supported(&self) -> bool { self.major == 1 }
}

impl Default for JsonApiVersion {
    /// Servers that omit the member are treated as 1.0
    fn default() -> Self { Self::V1_0 }
}

impl fmt::Display for JsonApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for JsonApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidJsonApiVersion(s.into());
        let caps = VERSION_REGEX.captures(s).ok_or_else(invalid)?;
        let major = caps[1].parse().map_err(|_| invalid())?;
        let minor = caps[2].parse().map_err(|_| invalid())?;
        Ok(JsonApiVersion { major, minor })
    }
}
