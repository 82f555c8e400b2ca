use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::InventoryError;

/// Tri-state stock availability predicate.
///
/// Wire tokens are `in_stock`, `out_of_stock` and `all`, parsed
/// case-insensitively. `All` is the default and matches every record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
    #[default]
    All,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::All => "all",
        }
    }

    /// Whether a record with the given quantity passes this predicate.
    pub fn matches(&self, quantity_in_stock: u32) -> bool {
        match self {
            Self::InStock => quantity_in_stock > 0,
            Self::OutOfStock => quantity_in_stock == 0,
            Self::All => true,
        }
    }
}

impl FromStr for Availability {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in_stock" => Ok(Self::InStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            "all" => Ok(Self::All),
            other => Err(InventoryError::unrecognized_availability(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("in_stock".parse::<Availability>().unwrap(), Availability::InStock);
        assert_eq!("IN_STOCK".parse::<Availability>().unwrap(), Availability::InStock);
        assert_eq!("Out_Of_Stock".parse::<Availability>().unwrap(), Availability::OutOfStock);
        assert_eq!("ALL".parse::<Availability>().unwrap(), Availability::All);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = "sold_out".parse::<Availability>().unwrap_err();
        assert!(matches!(err, InventoryError::UnrecognizedAvailability(_)));
    }

    #[test]
    fn predicate_splits_on_zero_quantity() {
        let quantities = [10u32, 0, 25];

        let in_stock = quantities.iter().filter(|q| Availability::InStock.matches(**q)).count();
        let out = quantities.iter().filter(|q| Availability::OutOfStock.matches(**q)).count();
        let all = quantities.iter().filter(|q| Availability::All.matches(**q)).count();

        assert_eq!((in_stock, out, all), (2, 1, 3));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Availability::default(), Availability::All);
    }
}
