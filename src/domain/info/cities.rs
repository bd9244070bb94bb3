// src/domain/info/cities.rs

/// Cities targeted when a campaign does not name any.
pub const DEFAULT_CITIES: [&str; 11] = [
    "Bali",
    "Bandung",
    "Cilegon",
    "Jakarta",
    "Lombok",
    "Makassar",
    "Manado",
    "Medan",
    "Palembang",
    "Semarang",
    "Surabaya",
];
