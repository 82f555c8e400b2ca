//! Category-grouped inventory metrics.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use stockroom_catalog::Product;

/// Label of the aggregation group covering every record.
pub const OVERALL_LABEL: &str = "Overall";

/// Derived per-group figures; computed fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryMetric {
    pub category: String,
    pub total_quantity: u64,
    pub total_value: Decimal,
    /// Quantity-weighted average: total value / total quantity, rounded to
    /// two decimals half-up. Exactly zero when the group holds no stock.
    pub average_price: Decimal,
}

/// Group the full record set by raw category string and compute per-group
/// metrics plus the `Overall` entry.
///
/// Grouping is case-sensitive on purpose: categories are canonical strings
/// as their authors wrote them, unlike the case-insensitive *filter* input.
/// Per-category order is unspecified; `Overall` is always present and
/// always last, even for an empty input.
pub fn inventory_metrics(products: &[Product]) -> Vec<InventoryMetric> {
    let mut groups: HashMap<&str, Vec<&Product>> = HashMap::new();
    for product in products {
        groups.entry(product.category.as_str()).or_default().push(product);
    }

    let mut metrics: Vec<InventoryMetric> = groups
        .into_iter()
        .map(|(category, members)| metric_for(category, members))
        .collect();
    metrics.push(metric_for(OVERALL_LABEL, products));
    metrics
}

fn metric_for<'a, I>(category: &str, products: I) -> InventoryMetric
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut total_quantity: u64 = 0;
    let mut total_value = Decimal::ZERO;
    for product in products {
        total_quantity += u64::from(product.quantity_in_stock);
        total_value += product.stock_value();
    }

    let average_price = if total_quantity == 0 {
        Decimal::ZERO
    } else {
        (total_value / Decimal::from(total_quantity))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    InventoryMetric {
        category: category.to_string(),
        total_quantity,
        total_value,
        average_price,
    }
}
