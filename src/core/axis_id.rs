use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Identifier linking a dataset to the y-scale it is plotted against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AxisId(String);

impl AxisId {
    pub fn new(value: impl Into<String>) -> ChartResult<Self> {
        let value = value.into();
        if value.is_empty() || value.trim() != value {
            return Err(ChartError::InvalidAxisId { value });
        }
        Ok(Self(value))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.is_empty() && value.trim() == value);
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AxisId {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AxisId {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AxisId> for String {
    fn from(value: AxisId) -> Self {
        value.0
    }
}

impl PartialEq<str> for AxisId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AxisId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_padded_ids() {
        assert!(AxisId::new("").is_err());
        assert!(AxisId::new(" y-densities").is_err());
        assert!(AxisId::new("y-densities\n").is_err());
    }

    #[test]
    fn compares_with_str() {
        let id = AxisId::new("y-temperatures").expect("valid id");
        assert_eq!(id, "y-temperatures");
        assert_eq!(id.to_string(), "y-temperatures");
    }
}
