//! Status enums for catalog and cart entities.

use serde::{Deserialize, Serialize};

/// Stock availability for a cart line item.
///
/// The serialized form matches the seed-data identifiers (`in-stock`,
/// `low-stock`, `backorder`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    Backorder,
}

impl StockStatus {
    /// The stable identifier for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::Backorder => "backorder",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Self::InStock),
            "low-stock" => Ok(Self::LowStock),
            "backorder" => Ok(Self::Backorder),
            _ => Err(format!("invalid stock status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::Backorder,
        ] {
            let parsed: StockStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"low-stock\"");
    }

    #[test]
    fn test_invalid() {
        assert!("sold-out".parse::<StockStatus>().is_err());
    }
}
