//! Hand-written fixture records for the one-shot commands.
//!
//! These mirror real records a consumer may already hold, so publishing them
//! again exercises upsert-by-key behavior downstream. Timestamps are taken
//! relative to the current time at call.

use chrono::{Duration, Utc};
use shopstream_generator::{Customer, CustomerStatus, Order, OrderStatus, Tier};

/// Five fixed sample orders, one per region and status mix.
pub fn sample_orders() -> Vec<Order> {
    let now = Utc::now();

    vec![
        Order {
            order_id: "order_001".to_string(),
            customer_name: "Alice Johnson".to_string(),
            product_id: "prod_1".to_string(),
            product_name: "Wireless Headphones".to_string(),
            unit_price: 99.99,
            quantity: 2,
            total_amount: 199.98,
            status: OrderStatus::Confirmed,
            created_at: now - Duration::minutes(5),
            region: "US-East".to_string(),
        },
        Order {
            order_id: "order_002".to_string(),
            customer_name: "Bob Smith".to_string(),
            product_id: "prod_2".to_string(),
            product_name: "Smartphone Case".to_string(),
            unit_price: 19.99,
            quantity: 1,
            total_amount: 19.99,
            status: OrderStatus::Shipped,
            created_at: now - Duration::minutes(4),
            region: "US-West".to_string(),
        },
        Order {
            order_id: "order_003".to_string(),
            customer_name: "Charlie Brown".to_string(),
            product_id: "prod_3".to_string(),
            product_name: "USB Cable".to_string(),
            unit_price: 9.99,
            quantity: 3,
            total_amount: 29.97,
            status: OrderStatus::Delivered,
            created_at: now - Duration::minutes(3),
            region: "EU-Central".to_string(),
        },
        Order {
            order_id: "order_004".to_string(),
            customer_name: "Diana Prince".to_string(),
            product_id: "prod_4".to_string(),
            product_name: "Bluetooth Speaker".to_string(),
            unit_price: 49.99,
            quantity: 1,
            total_amount: 49.99,
            status: OrderStatus::Pending,
            created_at: now - Duration::minutes(2),
            region: "AP-Southeast".to_string(),
        },
        Order {
            order_id: "order_005".to_string(),
            customer_name: "Eve Adams".to_string(),
            product_id: "prod_5".to_string(),
            product_name: "Power Bank".to_string(),
            unit_price: 29.99,
            quantity: 2,
            total_amount: 59.98,
            status: OrderStatus::Confirmed,
            created_at: now - Duration::minutes(1),
            region: "US-East".to_string(),
        },
    ]
}

/// Three targeted customer upserts: full records that should overwrite
/// whatever the consumer holds for these ids.
pub fn targeted_updates() -> Vec<Customer> {
    let now = Utc::now();

    vec![
        Customer {
            customer_id: "CUST001".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            email: "alice.johnson.new@gmail.com".to_string(),
            phone: "555-1111".to_string(),
            address: "123 New Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94105".to_string(),
            tier: Tier::Platinum,
            status: CustomerStatus::Active,
            total_orders: 5,
            lifetime_value: 899.99,
            last_order_date: Some(now),
            created_at: now - Duration::days(255),
            updated_at: now,
        },
        Customer {
            customer_id: "CUST004".to_string(),
            first_name: "Diana".to_string(),
            last_name: "Davis".to_string(),
            email: "diana.davis@gmail.com".to_string(),
            phone: "555-4444".to_string(),
            address: "456 Oak Avenue".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip_code: "98101".to_string(),
            tier: Tier::Gold,
            status: CustomerStatus::Active,
            total_orders: 8,
            lifetime_value: 1299.99,
            last_order_date: Some(now),
            created_at: now - Duration::days(280),
            updated_at: now,
        },
        Customer {
            customer_id: "CUST007".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Moore".to_string(),
            email: "grace.moore@outlook.com".to_string(),
            phone: "555-7777".to_string(),
            address: "789 Pine Street".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip_code: "97201".to_string(),
            tier: Tier::Platinum,
            status: CustomerStatus::Active,
            total_orders: 12,
            lifetime_value: 2199.50,
            last_order_date: Some(now),
            created_at: now - Duration::days(326),
            updated_at: now,
        },
    ]
}

/// A single order for connectivity smoke tests.
pub fn test_order() -> Order {
    Order {
        order_id: "test_order_001".to_string(),
        customer_name: "Test Customer".to_string(),
        product_id: "prod_test".to_string(),
        product_name: "Test Product".to_string(),
        unit_price: 19.99,
        quantity: 1,
        total_amount: 19.99,
        status: OrderStatus::Confirmed,
        created_at: Utc::now(),
        region: "US-East".to_string(),
    }
}
