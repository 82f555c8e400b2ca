use serde::Deserialize;

use stockroom_catalog::{Availability, ProductField};
use stockroom_core::{InventoryError, InventoryResult, PageRequest};
use stockroom_store::{SortDirection, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Requested sizes above this are clamped rather than rejected.
pub const MAX_PAGE_SIZE: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
    pub name: Option<String>,
    pub categories: Option<String>,
    pub availability: Option<String>,
}

/// Builds the page window from optional `page`/`size` parameters.
pub fn page_request(page: Option<usize>, size: Option<usize>) -> InventoryResult<PageRequest> {
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 {
        return Err(InventoryError::validation("page size must be at least 1"));
    }
    Ok(PageRequest::new(page.unwrap_or(0), size.min(MAX_PAGE_SIZE)))
}

/// Parses a comma separated list of `field` or `field:direction` entries.
///
/// An absent or empty parameter falls back to ascending name order.
pub fn parse_sort(raw: Option<&str>) -> InventoryResult<Vec<SortKey>> {
    let raw = raw.map(str::trim).unwrap_or_default();

    let mut keys = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let key = match entry.split_once(':') {
            Some((field, direction)) => SortKey::new(
                ProductField::parse(field.trim())?,
                direction.trim().parse::<SortDirection>()?,
            ),
            None => SortKey::asc(ProductField::parse(entry)?),
        };
        keys.push(key);
    }

    if keys.is_empty() {
        keys.push(SortKey::asc(ProductField::Name));
    }
    Ok(keys)
}

/// Splits the comma separated category list, dropping blank entries.
pub fn parse_categories(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_availability(raw: Option<&str>) -> InventoryResult<Availability> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Availability::All),
        Some(token) => token.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_defaults_to_the_first_window() {
        let request = page_request(None, None).unwrap();

        assert_eq!(request, PageRequest::new(0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = page_request(Some(0), Some(0)).unwrap_err();

        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn oversized_pages_are_clamped() {
        let request = page_request(Some(3), Some(5_000)).unwrap();

        assert_eq!(request, PageRequest::new(3, MAX_PAGE_SIZE));
    }

    #[test]
    fn absent_sort_falls_back_to_name_ascending() {
        for raw in [None, Some(""), Some("  "), Some(",")] {
            assert_eq!(parse_sort(raw).unwrap(), vec![SortKey::asc(ProductField::Name)]);
        }
    }

    #[test]
    fn sort_entries_parse_field_and_direction() {
        let keys = parse_sort(Some("unit_price:desc, name")).unwrap();

        assert_eq!(
            keys,
            vec![
                SortKey::desc(ProductField::UnitPrice),
                SortKey::asc(ProductField::Name),
            ]
        );
    }

    #[test]
    fn camel_case_sort_fields_are_accepted() {
        let keys = parse_sort(Some("quantityInStock:desc")).unwrap();

        assert_eq!(keys, vec![SortKey::desc(ProductField::QuantityInStock)]);
    }

    #[test]
    fn unknown_sort_fields_fail_fast() {
        let err = parse_sort(Some("name,brand:desc")).unwrap_err();

        assert!(matches!(err, InventoryError::UnsupportedSortProperty(ref p) if p == "brand"));
    }

    #[test]
    fn bad_sort_direction_is_a_validation_error() {
        let err = parse_sort(Some("name:sideways")).unwrap_err();

        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn category_lists_are_split_and_trimmed() {
        assert_eq!(parse_categories(None), Vec::<String>::new());
        assert_eq!(
            parse_categories(Some(" Electronics , Audio ,")),
            vec!["Electronics".to_string(), "Audio".to_string()]
        );
    }

    #[test]
    fn availability_defaults_to_all() {
        assert_eq!(parse_availability(None).unwrap(), Availability::All);
        assert_eq!(parse_availability(Some("")).unwrap(), Availability::All);
        assert_eq!(
            parse_availability(Some("in_stock")).unwrap(),
            Availability::InStock
        );
    }

    #[test]
    fn unknown_availability_tokens_are_rejected() {
        let err = parse_availability(Some("sometimes")).unwrap_err();

        assert!(matches!(err, InventoryError::UnrecognizedAvailability(ref t) if t == "sometimes"));
    }
}
