//! Synthetic record generator for the shopstream event pipeline.
//!
//! This crate produces fabricated customer and order records with a fixed
//! schema and randomized content. A seeded RNG makes runs reproducible:
//! the same seed and id set yield the same sequence of records.
//!
//! # Architecture
//!
//! ```text
//! fixture pools (names, cities, products, ...)
//!        │
//!        ▼
//! ┌───────────────────┐      ┌───────────────────┐
//! │ CustomerGenerator │      │  OrderGenerator   │
//! │                   │      │                   │
//! │ - id → Customer   │      │ - rng (StdRng)    │
//! │ - rng (StdRng)    │      │                   │
//! └─────────┬─────────┘      └─────────┬─────────┘
//!           │                          │
//!           ▼                          ▼
//!   (customer_id, Customer)          Order
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopstream_generator::CustomerGenerator;
//!
//! let mut generator = CustomerGenerator::new(&["CUST001", "CUST002"], 42).unwrap();
//! let (customer_id, customer) = generator.next_update();
//! println!("updated {customer_id}: tier={:?}", customer.tier);
//! ```
//!
//! # Update kinds
//!
//! Each call to [`CustomerGenerator::next_update`] applies exactly one of:
//!
//! - `Phone` - new phone number
//! - `Address` - new address, city, state and zip
//! - `TierUpgrade` - advance one tier (no-op at platinum)
//! - `StatusChange` - random status
//! - `OrderActivity` - bump order count, lifetime value, last order date
//! - `Email` - recompute email from name and a random domain
//! - `Profile` - phone plus a small order-count/value bump

pub mod customer;
pub mod fixtures;
pub mod generator;
pub mod order;

// Re-exports for convenience
pub use customer::{Customer, CustomerStatus, Tier};
pub use generator::{CustomerGenerator, GeneratorError, OrderGenerator, UpdateKind};
pub use order::{Order, OrderStatus};
