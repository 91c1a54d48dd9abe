//! Fixture pools the generators draw from.
//!
//! Names, cities and states are index-paired: customer `i` gets
//! `FIRST_NAMES[i]`, `LAST_NAMES[i]`, `CITIES[i]` and `STATES[i]` (modulo
//! pool length), so base records are stable for a given id list.

/// Default customer identifiers used by the CLI.
pub const DEFAULT_CUSTOMER_IDS: [&str; 10] = [
    "CUST001", "CUST002", "CUST003", "CUST004", "CUST005", "CUST006", "CUST007", "CUST008",
    "CUST009", "CUST010",
];

pub const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack",
];

pub const LAST_NAMES: [&str; 10] = [
    "Johnson", "Smith", "Brown", "Davis", "Wilson", "Miller", "Moore", "Taylor", "Anderson",
    "Thomas",
];

pub const CITIES: [&str; 10] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

/// State abbreviations, index-paired with [`CITIES`].
pub const STATES: [&str; 10] = ["NY", "CA", "IL", "TX", "AZ", "PA", "TX", "CA", "TX", "CA"];

pub const STREETS: [&str; 6] = [
    "Main St", "Oak Ave", "Elm Dr", "Park Rd", "Broadway", "First Ave",
];

pub const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Customer display names used on orders.
pub const ORDER_CUSTOMERS: [&str; 6] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Brown",
    "Diana Prince",
    "Eve Adams",
    "Frank Miller",
];

pub const REGIONS: [&str; 4] = ["US-East", "US-West", "EU-Central", "AP-Southeast"];

/// A product catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub const PRODUCTS: [Product; 6] = [
    Product {
        id: "prod_1",
        name: "Wireless Headphones",
        price: 99.99,
    },
    Product {
        id: "prod_2",
        name: "Smartphone Case",
        price: 19.99,
    },
    Product {
        id: "prod_3",
        name: "USB Cable",
        price: 9.99,
    },
    Product {
        id: "prod_4",
        name: "Bluetooth Speaker",
        price: 49.99,
    },
    Product {
        id: "prod_5",
        name: "Power Bank",
        price: 29.99,
    },
    Product {
        id: "prod_6",
        name: "Screen Protector",
        price: 12.99,
    },
];
