//! shopstream library
//!
//! Command implementations and script fixtures behind the `shopstream` CLI.
//! The record generators live in `shopstream-generator` and the batching
//! transport layer in `shopstream-publisher`; this crate wires them into the
//! event publishing loops.
//!
//! # Subcommands
//!
//! Each subcommand mirrors one standalone publishing scenario:
//!
//! - `seed-customers` - base customer records plus a burst of updates
//! - `customer-updates` - endless simulated customer update stream
//! - `orders` - endless bursts of synthetic orders
//! - `sample-orders` - fixed sample order records
//! - `targeted-updates` - hand-written customer upserts
//! - `smoke-test` - one test order, then exit

pub mod commands;
pub mod fixtures;
