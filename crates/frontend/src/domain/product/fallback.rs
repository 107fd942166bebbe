use contracts::domain::product::Product;

/// Fixed sample set shown when the product list cannot be fetched.
pub fn sample_products() -> Vec<Product> {
    let rows = [
        (1, "Dell XPS Laptop", "High-end workstation laptop", 15, "DELL-001", Some(1)),
        (2, "Samsung 27\" Monitor", "4K UHD monitor", 30, "SAM-002", Some(2)),
        (3, "Mechanical RGB Keyboard", "Gaming keyboard", 50, "KEY-003", Some(1)),
        (4, "Logitech Mouse", "Wireless mouse", 100, "LOG-004", Some(3)),
        (5, "HD Webcam", "1080p camera", 25, "CAM-005", Some(1)),
    ];
    rows.into_iter()
        .map(|(id, name, description, quantity, serial_number, batch)| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            quantity,
            serial_number: serial_number.to_string(),
            batch,
            active: id != 4,
            categories: Vec::new(),
            inventory: None,
            created_by_user_id: None,
        })
        .collect()
}
