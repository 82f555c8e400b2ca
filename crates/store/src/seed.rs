//! Sample-data helper for dev servers, benchmarks and tests.
//!
//! Seeding is always an explicit call; nothing in the production paths
//! invokes it. Generation is deterministic so seeded stores are
//! reproducible across runs.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use stockroom_catalog::{Product, ProductDraft};
use stockroom_core::{InventoryResult, ProductId};

use crate::service::InventoryService;

const NAMES: [&str; 20] = [
    "Laptop Pro",
    "Gaming Mouse X",
    "Ergonomic Keyboard",
    "4K Ultra Monitor",
    "HD Webcam Pro",
    "Wireless Headphones",
    "Studio Microphone",
    "Laser Printer 3000",
    "Dual-Band Router",
    "High-Speed SSD",
    "Smartphone Elite",
    "Tablet Lite",
    "Smartwatch Gear",
    "Mini Drone Pro",
    "VR Headset X1",
    "Portable HDD",
    "Super USB Drive",
    "E-Reader Oasis",
    "Compact Projector",
    "Bluetooth Speaker",
];

const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Peripherals",
    "Computing",
    "Mobile Devices",
    "Storage",
    "Audio",
    "Visual",
    "Networking",
];

const BRANDS: [&str; 10] = [
    "TechCo",
    "GigaGear",
    "Innovate",
    "VisionPro",
    "SoundWave",
    "DataSwift",
    "MobileTech",
    "HomeGadget",
    "FutureLink",
    "Aura",
];

/// Fill the store with `count` sample products dated `today`.
///
/// Names, categories and brands cycle through fixed pools; prices land in
/// [50.00, 1500.00), quantities in [1, 199], expiries within 1..=36 months.
pub fn seed_products(
    service: &InventoryService,
    count: usize,
    today: NaiveDate,
) -> InventoryResult<usize> {
    let products: Vec<Product> = (0..count)
        .map(|i| Product::create(ProductId::new(), sample_draft(i, today), today))
        .collect();
    let stored = service.store().put_many(products)?;
    Ok(stored.len())
}

fn sample_draft(i: usize, today: NaiveDate) -> ProductDraft {
    let name = format!("{} ({})", NAMES[i % NAMES.len()], BRANDS[i % BRANDS.len()]);
    let category = CATEGORIES[i % CATEGORIES.len()].to_string();

    let whole = 50 + (i as i64 * 431) % 1450;
    let cents = (i as i64 * 7) % 100;
    let unit_price = Decimal::new(whole * 100 + cents, 2);

    let months_ahead = (i as u32 % 36) + 1;
    let expiration_date = today
        .checked_add_months(Months::new(months_ahead))
        .unwrap_or(today);

    let quantity_in_stock = 1 + (i as u32 * 13) % 199;

    ProductDraft {
        name,
        category,
        unit_price,
        expiration_date: Some(expiration_date),
        quantity_in_stock,
    }
}
