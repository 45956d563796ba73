//! Employee identifier parsed from a request path

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;

/// Path identifier that failed to parse as an ObjectId
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid id '{value}': expected 24 hex characters")]
pub struct InvalidId {
    pub value: String,
}

/// Validated employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(ObjectId);

impl EmployeeId {
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        ObjectId::parse_str(s).map(Self).map_err(|_| InvalidId {
            value: s.to_owned(),
        })
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl FromStr for EmployeeId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ObjectId> for EmployeeId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
