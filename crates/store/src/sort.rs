use core::cmp::Ordering;
use core::str::FromStr;

use stockroom_catalog::{Product, ProductField};
use stockroom_core::InventoryError;

/// Sort direction for one key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply this direction to an already-computed natural ordering.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(InventoryError::validation(format!(
                "invalid sort direction: {other}"
            ))),
        }
    }
}

/// One (property, direction) pair. A list of these is a composite sort:
/// the first key is primary, later keys break ties in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: ProductField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: ProductField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: ProductField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: ProductField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Stable in-place sort by a composite key list.
///
/// An empty key list leaves the slice in its incoming (natural enumeration)
/// order. Null policy: a record whose value for a key is absent sorts after
/// every record with a present value, under both directions; direction only
/// reverses the order *between* present values.
pub fn sort_products(products: &mut [Product], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    products.sort_by(|a, b| compare(a, b, keys));
}

fn compare(a: &Product, b: &Product, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = compare_by_key(a, b, key);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_by_key(a: &Product, b: &Product, key: &SortKey) -> Ordering {
    // Null placement is decided before direction is applied, so descending
    // sorts do not move absent values to the front.
    match (key.field.sort_value(a), key.field.sort_value(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(va), Some(vb)) => key.direction.apply(va.compare(&vb)),
    }
}
