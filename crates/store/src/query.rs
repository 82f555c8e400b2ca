//! Compound filtering and the fixed filter -> sort -> paginate pipeline.

use stockroom_catalog::{Availability, Product};
use stockroom_core::{InventoryResult, Page, PageRequest, paginate};

use crate::sort::{SortKey, sort_products};
use crate::store::ProductStore;

/// Category token that turns the category filter into a match-all.
const CATEGORY_WILDCARD: &str = "all";

/// Filter criteria for product searches. All predicates are AND-composed;
/// every field's empty/absent state matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring match against the record name.
    pub name: Option<String>,
    /// Case-insensitive membership test. The literal token `all` (any
    /// case) anywhere in the set disables the restriction.
    pub categories: Vec<String>,
    /// Tri-state stock predicate; `All` by default.
    pub availability: Availability,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_name(product)
            && self.matches_category(product)
            && self.availability.matches(product.quantity_in_stock)
    }

    fn matches_name(&self, product: &Product) -> bool {
        match self.name.as_deref() {
            None | Some("") => true,
            Some(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }

    fn matches_category(&self, product: &Product) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        self.categories.iter().any(|candidate| {
            candidate.eq_ignore_ascii_case(CATEGORY_WILDCARD)
                || candidate.eq_ignore_ascii_case(&product.category)
        })
    }
}

/// Run a search end to end: snapshot, filter, sort, paginate.
///
/// The order is fixed so that `total` counts matching records only, never
/// the whole store.
pub fn run_query(
    store: &ProductStore,
    filter: &ProductFilter,
    keys: &[SortKey],
    page: PageRequest,
) -> InventoryResult<Page<Product>> {
    let mut candidates = store.list()?;
    candidates.retain(|p| filter.matches(p));
    sort_products(&mut candidates, keys);
    Ok(paginate(candidates, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use stockroom_catalog::{ProductDraft, ProductField};
    use stockroom_core::ProductId;

    fn product(name: &str, category: &str, price: Decimal, qty: u32) -> Product {
        let draft = ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            unit_price: price,
            expiration_date: None,
            quantity_in_stock: qty,
        };
        Product::create(
            ProductId::new(),
            draft,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn seeded_store() -> ProductStore {
        let store = ProductStore::new();
        store
            .put_many(vec![
                product("Test Laptop", "Electronics", dec!(999.99), 10),
                product("Test Mouse", "Electronics", dec!(25.00), 0),
                product("Test Keyboard", "Peripherals", dec!(45.00), 25),
            ])
            .unwrap();
        store
    }

    fn filter_names(store: &ProductStore, filter: &ProductFilter) -> Vec<String> {
        let mut names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.name)
            .collect();
        names.sort();
        names
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring() {
        let store = seeded_store();
        let filter = ProductFilter {
            name: Some("LAPTOP".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_names(&store, &filter), vec!["Test Laptop"]);
    }

    #[test]
    fn empty_name_matches_everything() {
        let store = seeded_store();
        let filter = ProductFilter {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_names(&store, &filter).len(), 3);
    }

    #[test]
    fn category_membership_ignores_case() {
        let store = seeded_store();
        let filter = ProductFilter {
            categories: vec!["ELECTRONICS".to_string()],
            ..Default::default()
        };
        assert_eq!(
            filter_names(&store, &filter),
            vec!["Test Laptop", "Test Mouse"]
        );
    }

    #[test]
    fn several_categories_widen_the_match() {
        let store = seeded_store();
        let filter = ProductFilter {
            categories: vec!["electronics".to_string(), "peripherals".to_string()],
            ..Default::default()
        };
        assert_eq!(filter_names(&store, &filter).len(), 3);
    }

    #[test]
    fn the_all_token_disables_the_category_restriction() {
        let store = seeded_store();
        for token in ["all", "All", "ALL"] {
            let filter = ProductFilter {
                categories: vec![token.to_string()],
                ..Default::default()
            };
            assert_eq!(filter_names(&store, &filter).len(), 3, "token {token}");
        }
    }

    #[test]
    fn empty_category_set_matches_everything() {
        let store = seeded_store();
        let filter = ProductFilter::default();
        assert_eq!(filter_names(&store, &filter).len(), 3);
    }

    #[test]
    fn availability_narrows_by_quantity() {
        let store = seeded_store(); // quantities 10, 0, 25

        let in_stock = ProductFilter {
            availability: Availability::InStock,
            ..Default::default()
        };
        let out = ProductFilter {
            availability: Availability::OutOfStock,
            ..Default::default()
        };
        let all = ProductFilter::default();

        assert_eq!(filter_names(&store, &in_stock).len(), 2);
        assert_eq!(filter_names(&store, &out), vec!["Test Mouse"]);
        assert_eq!(filter_names(&store, &all).len(), 3);
    }

    #[test]
    fn predicates_compose_with_and() {
        let store = seeded_store();
        let filter = ProductFilter {
            name: Some("test".to_string()),
            categories: vec!["Electronics".to_string()],
            availability: Availability::InStock,
        };
        assert_eq!(filter_names(&store, &filter), vec!["Test Laptop"]);
    }

    #[test]
    fn pipeline_totals_count_matches_not_the_store() {
        let store = seeded_store();
        let filter = ProductFilter {
            categories: vec!["Electronics".to_string()],
            ..Default::default()
        };
        let page = run_query(
            &store,
            &filter,
            &[SortKey::asc(ProductField::Name)],
            PageRequest::new(0, 1),
        )
        .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Test Laptop");
    }

    #[test]
    fn pipeline_sorts_after_filtering() {
        let store = seeded_store();
        let page = run_query(
            &store,
            &ProductFilter::default(),
            &[SortKey::desc(ProductField::UnitPrice)],
            PageRequest::new(0, 20),
        )
        .unwrap();

        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Test Laptop", "Test Keyboard", "Test Mouse"]);
    }

    #[test]
    fn searching_one_matching_name_returns_exactly_that_record() {
        let store = seeded_store();
        let filter = ProductFilter {
            name: Some("Laptop".to_string()),
            ..Default::default()
        };
        let page = run_query(&store, &filter, &[], PageRequest::new(0, 20)).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Test Laptop");
    }

    #[test]
    fn no_matches_is_an_empty_page_with_zero_total() {
        let store = seeded_store();
        let filter = ProductFilter {
            name: Some("printer".to_string()),
            ..Default::default()
        };
        let page = run_query(&store, &filter, &[], PageRequest::new(0, 20)).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}
