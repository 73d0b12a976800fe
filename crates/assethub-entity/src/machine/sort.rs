//! Report sort keys.

use serde::{Deserialize, Serialize};

/// Columns the report view can be ordered by.
///
/// Query parameters carrying any other key fall back to [`MachineSortKey::Name`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineSortKey {
    /// Machine name.
    #[default]
    Name,
    /// Department label.
    Department,
    /// Registration date.
    #[serde(rename = "date")]
    Date,
}

impl MachineSortKey {
    /// Parse a sort key from a query parameter, falling back to name.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "department" => Self::Department,
            "date" => Self::Date,
            _ => Self::Name,
        }
    }

    /// Return the SQL order expression for this key.
    ///
    /// The department column is a Postgres enum; casting to text keeps the
    /// ordering alphabetical rather than declaration-ordered.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department::text",
            Self::Date => "created_at",
        }
    }

    /// Return the query-parameter form of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Date => "date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_name() {
        assert_eq!(MachineSortKey::parse_or_default("date"), MachineSortKey::Date);
        assert_eq!(
            MachineSortKey::parse_or_default("department"),
            MachineSortKey::Department
        );
        assert_eq!(MachineSortKey::parse_or_default("ram"), MachineSortKey::Name);
        assert_eq!(MachineSortKey::parse_or_default(""), MachineSortKey::Name);
    }
}
