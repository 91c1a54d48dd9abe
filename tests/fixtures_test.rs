//! Consistency checks over the hand-written fixture records.

use chrono::Utc;
use shopstream::fixtures;
use shopstream_generator::{Customer, Order};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn sample_orders_have_consistent_totals_and_unique_ids() {
    let orders = fixtures::sample_orders();
    assert_eq!(orders.len(), 5);

    let mut ids: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), orders.len());

    for order in &orders {
        assert_eq!(
            order.total_amount,
            round2(order.unit_price * f64::from(order.quantity))
        );
        assert!(order.created_at <= Utc::now());
    }
}

#[test]
fn sample_orders_round_trip_through_json() {
    for order in fixtures::sample_orders() {
        let json = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, decoded);
    }
}

#[test]
fn targeted_updates_are_complete_keyed_records() {
    let updates = fixtures::targeted_updates();
    assert_eq!(updates.len(), 3);

    let mut ids: Vec<&str> = updates.iter().map(|c| c.customer_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), updates.len());

    for customer in &updates {
        // Values ride the wire with 2-decimal precision
        assert_eq!(customer.lifetime_value, round2(customer.lifetime_value));
        assert!(customer.created_at < customer.updated_at);
        assert!(customer.last_order_date.is_some());

        let json = serde_json::to_string(customer).unwrap();
        let decoded: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(*customer, decoded);
    }
}

#[test]
fn test_order_is_self_consistent() {
    let order = fixtures::test_order();
    assert_eq!(order.order_id, "test_order_001");
    assert_eq!(
        order.total_amount,
        round2(order.unit_price * f64::from(order.quantity))
    );
}
