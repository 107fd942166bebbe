use contracts::domain::category::Category;

/// Fixed sample set shown when the category list cannot be fetched.
pub fn sample_categories() -> Vec<Category> {
    let rows = [
        (1, "Electronics", true, 45),
        (2, "Accessories", true, 120),
        (3, "Peripherals", true, 67),
        (4, "Software", false, 23),
        (5, "Networking", true, 34),
    ];
    rows.into_iter()
        .map(|(id, name, active, quantity_products)| Category {
            id,
            name: name.to_string(),
            active,
            quantity_products,
        })
        .collect()
}
