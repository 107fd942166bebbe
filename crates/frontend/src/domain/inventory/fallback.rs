use chrono::NaiveDate;
use contracts::domain::inventory::Inventory;

/// Fixed sample set shown when the inventory list cannot be fetched.
pub fn sample_inventories() -> Vec<Inventory> {
    let rows = [
        (1, "Main Warehouse", "Company central warehouse", "Building A, Floor 1", 245, "2024-01-01"),
        (2, "South Depot", "Finished goods depot", "South Industrial Zone", 189, "2024-01-05"),
        (3, "North Depot", "Raw materials", "North Industrial Zone", 312, "2024-01-10"),
        (4, "Transit Storage", "Goods in transit", "Building B", 56, "2024-01-15"),
    ];
    rows.into_iter()
        .map(|(id, name, description, location, quantity, created)| Inventory {
            id,
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            active: true,
            quantity,
            create_date: NaiveDate::parse_from_str(created, "%Y-%m-%d").ok(),
        })
        .collect()
}
