//! Seeded generators producing base records and simulated updates.

use crate::customer::{Customer, CustomerStatus, Tier};
use crate::fixtures::{
    CITIES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, ORDER_CUSTOMERS, PRODUCTS, REGIONS, STATES,
    STREETS,
};
use crate::order::{Order, OrderStatus};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The generator was configured with unusable input.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Pick a uniformly random element from a non-empty pool.
fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Round to 2 decimal places, the precision carried on the wire.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_phone<R: Rng>(rng: &mut R) -> String {
    format!("555-{}", rng.gen_range(1000..=9999))
}

fn random_address<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", rng.gen_range(100..=9999), pick(rng, &STREETS))
}

fn random_zip<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(10000..=99999).to_string()
}

/// A random phone number guaranteed to differ from `current`.
fn fresh_phone<R: Rng>(rng: &mut R, current: &str) -> String {
    loop {
        let phone = random_phone(rng);
        if phone != current {
            return phone;
        }
    }
}

/// The closed set of simulated customer update categories.
///
/// Each variant mutates exactly the fields listed in its doc line; every
/// update also refreshes `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// New phone number.
    Phone,
    /// New address, city, state and zip.
    Address,
    /// Advance one tier; a no-op at platinum apart from the timestamp.
    TierUpgrade,
    /// Random account status.
    StatusChange,
    /// 1-3 new orders, lifetime value bump, last order date set to now.
    OrderActivity,
    /// Email recomputed from the customer's name and a random domain.
    Email,
    /// Composite change: phone, one order, small lifetime value bump.
    Profile,
}

impl UpdateKind {
    /// All update categories, selected uniformly by the generator.
    pub const ALL: [UpdateKind; 7] = [
        UpdateKind::Phone,
        UpdateKind::Address,
        UpdateKind::TierUpgrade,
        UpdateKind::StatusChange,
        UpdateKind::OrderActivity,
        UpdateKind::Email,
        UpdateKind::Profile,
    ];

    /// Apply this category's field mutations to `customer`.
    ///
    /// Aggregate fields only ever grow, and `tier` only ever advances, so
    /// repeated application keeps the record's monotonicity invariants.
    pub fn apply<R: Rng>(self, customer: &mut Customer, rng: &mut R, now: DateTime<Utc>) {
        customer.updated_at = now;

        match self {
            UpdateKind::Phone => {
                customer.phone = fresh_phone(rng, &customer.phone);
            }
            UpdateKind::Address => {
                customer.address = random_address(rng);
                customer.city = pick(rng, &CITIES).to_string();
                customer.state = pick(rng, &STATES).to_string();
                customer.zip_code = random_zip(rng);
            }
            UpdateKind::TierUpgrade => {
                customer.tier = customer.tier.next();
            }
            UpdateKind::StatusChange => {
                // Exclude the current status so the update is visible
                let choices: Vec<CustomerStatus> = CustomerStatus::ALL
                    .into_iter()
                    .filter(|status| *status != customer.status)
                    .collect();
                customer.status = *pick(rng, &choices);
            }
            UpdateKind::OrderActivity => {
                customer.total_orders += rng.gen_range(1..=3);
                let order_value = round2(rng.gen_range(25.0..=500.0));
                customer.lifetime_value = round2(customer.lifetime_value + order_value);
                customer.last_order_date = Some(now);
            }
            UpdateKind::Email => {
                // Exclude the current domain so back-to-back email updates
                // still produce a visible change
                let current_domain = customer.email.split('@').next_back().unwrap_or("");
                let choices: Vec<&str> = EMAIL_DOMAINS
                    .into_iter()
                    .filter(|domain| *domain != current_domain)
                    .collect();
                let domain = pick(rng, &choices);
                customer.email = format!(
                    "{}.{}@{domain}",
                    customer.first_name.to_lowercase(),
                    customer.last_name.to_lowercase()
                );
            }
            UpdateKind::Profile => {
                customer.phone = fresh_phone(rng, &customer.phone);
                customer.total_orders += 1;
                let bump = rng.gen_range(10.0..=100.0);
                customer.lifetime_value = round2(customer.lifetime_value + bump);
            }
        }
    }
}

/// Stateful customer generator simulating a stream of record updates.
///
/// Holds the latest full record per customer id and mutates copies in place,
/// so each emitted event is a complete record suitable for consumer-side
/// upserts. The RNG is seeded for reproducibility; timestamps come from the
/// wall clock at generation time.
#[derive(Debug)]
pub struct CustomerGenerator {
    /// Seed-order customer ids, fixed at construction
    ids: Vec<String>,
    /// Latest known record per id
    customers: HashMap<String, Customer>,
    rng: StdRng,
}

impl CustomerGenerator {
    /// Seed one complete base record per id.
    ///
    /// Name, city and state come from the fixture pools by id index; phone,
    /// address, zip and tier are randomized; aggregates start at zero and
    /// `created_at` falls 30-365 days in the past.
    pub fn new(ids: &[&str], seed: u64) -> Result<Self, GeneratorError> {
        if ids.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "customer id set must not be empty".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc::now();
        let mut customers = HashMap::with_capacity(ids.len());

        for (i, id) in ids.iter().enumerate() {
            let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last_name = LAST_NAMES[i % LAST_NAMES.len()];

            let customer = Customer {
                customer_id: id.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!(
                    "{}.{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                phone: random_phone(&mut rng),
                address: random_address(&mut rng),
                city: CITIES[i % CITIES.len()].to_string(),
                state: STATES[i % STATES.len()].to_string(),
                zip_code: random_zip(&mut rng),
                tier: *pick(&mut rng, &Tier::ALL),
                status: CustomerStatus::Active,
                total_orders: 0,
                lifetime_value: 0.0,
                last_order_date: None,
                created_at: now - Duration::days(rng.gen_range(30..=365)),
                updated_at: now,
            };
            customers.insert(id.to_string(), customer);
        }

        Ok(Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            customers,
            rng,
        })
    }

    /// The customer ids in seed order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The latest known record for `id`, if it exists.
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Iterate the latest records in seed order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.ids.iter().filter_map(|id| self.customers.get(id))
    }

    /// Generate the next simulated update.
    ///
    /// Picks a uniformly random customer and update category, applies the
    /// category's mutations to a copy of the latest record, stores the copy
    /// back, and returns the id with the new record.
    pub fn next_update(&mut self) -> (String, Customer) {
        let id = self.ids[self.rng.gen_range(0..self.ids.len())].clone();
        let kind = UpdateKind::ALL[self.rng.gen_range(0..UpdateKind::ALL.len())];

        // Every id is seeded in new(), so the entry always exists
        let mut customer = match self.customers.get(&id) {
            Some(customer) => customer.clone(),
            None => unreachable!("id {id} seeded at construction"),
        };

        kind.apply(&mut customer, &mut self.rng, Utc::now());

        self.customers.insert(id.clone(), customer.clone());
        (id, customer)
    }
}

/// Stateless order generator; each record is independent.
pub struct OrderGenerator {
    rng: StdRng,
}

impl OrderGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build one complete order record.
    ///
    /// The id combines the current epoch millis with a random suffix to stay
    /// unique within a run; `created_at` falls uniformly in the preceding 24
    /// hours and never in the future.
    pub fn next_order(&mut self) -> Order {
        let now = Utc::now();
        let order_id = format!(
            "order_{}{}",
            now.timestamp_millis(),
            self.rng.gen_range(100..=999)
        );

        let product = pick(&mut self.rng, &PRODUCTS);
        let quantity = self.rng.gen_range(1..=5);
        let total_amount = round2(product.price * f64::from(quantity));

        Order {
            order_id,
            customer_name: pick(&mut self.rng, &ORDER_CUSTOMERS).to_string(),
            product_id: product.id.to_string(),
            product_name: product.name.to_string(),
            unit_price: product.price,
            quantity,
            total_amount,
            status: *pick(&mut self.rng, &OrderStatus::ALL),
            created_at: now - Duration::minutes(self.rng.gen_range(0..=1440)),
            region: pick(&mut self.rng, &REGIONS).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zero out wall-clock fields so records from two runs can be compared.
    fn scrub(mut customer: Customer) -> Customer {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        customer.created_at = epoch;
        customer.updated_at = epoch;
        customer.last_order_date = customer.last_order_date.map(|_| epoch);
        customer
    }

    #[test]
    fn test_empty_id_set_is_invalid_configuration() {
        let err = CustomerGenerator::new(&[], 42).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_seeding_builds_complete_base_records() {
        let generator = CustomerGenerator::new(&["CUST001", "CUST002", "CUST003"], 42).unwrap();

        assert_eq!(generator.customers().count(), 3);
        for customer in generator.customers() {
            assert!(!customer.customer_id.is_empty());
            assert_eq!(customer.status, CustomerStatus::Active);
            assert_eq!(customer.total_orders, 0);
            assert_eq!(customer.lifetime_value, 0.0);
            assert!(customer.last_order_date.is_none());
            assert!(customer.created_at < customer.updated_at);
            assert!(customer.email.contains('@'));
            assert!(customer.phone.starts_with("555-"));
        }

        // Index-paired fixtures: CUST001 is Alice Johnson in New York
        let first = generator.get("CUST001").unwrap();
        assert_eq!(first.first_name, "Alice");
        assert_eq!(first.last_name, "Johnson");
        assert_eq!(first.city, "New York");
        assert_eq!(first.state, "NY");
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut a = CustomerGenerator::new(&["A", "B"], 42).unwrap();
        let mut b = CustomerGenerator::new(&["A", "B"], 42).unwrap();

        for _ in 0..50 {
            let (id_a, customer_a) = a.next_update();
            let (id_b, customer_b) = b.next_update();
            assert!(id_a == "A" || id_a == "B");
            assert_eq!(id_a, id_b);
            assert_eq!(scrub(customer_a), scrub(customer_b));
        }
    }

    #[test]
    fn test_update_changes_a_field_unless_tier_is_terminal() {
        let mut generator = CustomerGenerator::new(&["A", "B", "C"], 7).unwrap();

        for _ in 0..300 {
            let before: HashMap<String, Customer> = generator
                .customers()
                .map(|c| (c.customer_id.clone(), c.clone()))
                .collect();

            let (id, after) = generator.next_update();
            let prior = &before[&id];

            if scrub(after.clone()) == scrub(prior.clone()) {
                // Only a tier upgrade at the terminal tier may leave the
                // record otherwise untouched
                assert_eq!(prior.tier, Tier::Platinum);
            }
        }
    }

    #[test]
    fn test_aggregates_are_monotonic() {
        let mut generator = CustomerGenerator::new(&["A", "B"], 99).unwrap();
        let mut orders_seen: HashMap<String, u32> = HashMap::new();
        let mut value_seen: HashMap<String, f64> = HashMap::new();

        for _ in 0..500 {
            let (id, customer) = generator.next_update();
            let prior_orders = orders_seen.get(&id).copied().unwrap_or(0);
            let prior_value = value_seen.get(&id).copied().unwrap_or(0.0);

            assert!(customer.total_orders >= prior_orders);
            assert!(customer.lifetime_value >= prior_value);

            orders_seen.insert(id.clone(), customer.total_orders);
            value_seen.insert(id, customer.lifetime_value);
        }
    }

    #[test]
    fn test_tier_advances_one_step_at_most() {
        let mut generator = CustomerGenerator::new(&["A", "B", "C", "D"], 3).unwrap();
        let mut tiers: HashMap<String, Tier> = generator
            .customers()
            .map(|c| (c.customer_id.clone(), c.tier))
            .collect();

        for _ in 0..500 {
            let (id, customer) = generator.next_update();
            let prior = tiers[&id];
            assert!(
                customer.tier == prior || customer.tier == prior.next(),
                "tier jumped from {prior:?} to {:?}",
                customer.tier
            );
            tiers.insert(id, customer.tier);
        }
    }

    #[test]
    fn test_order_activity_ranges() {
        let mut generator = CustomerGenerator::new(&["CUST001"], 42).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut customer = generator.get("CUST001").unwrap().clone();
        let now = Utc::now();
        UpdateKind::OrderActivity.apply(&mut customer, &mut rng, now);

        assert!((1..=3).contains(&customer.total_orders));
        assert!((25.0..=500.0).contains(&customer.lifetime_value));
        assert_eq!(customer.lifetime_value, round2(customer.lifetime_value));
        assert_eq!(customer.last_order_date, Some(now));
        assert_eq!(customer.updated_at, now);
    }

    #[test]
    fn test_email_update_uses_name_and_known_domain() {
        let mut generator = CustomerGenerator::new(&["CUST001"], 42).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut customer = generator.get("CUST001").unwrap().clone();
        UpdateKind::Email.apply(&mut customer, &mut rng, Utc::now());

        assert!(customer.email.starts_with("alice.johnson@"));
        let domain = customer.email.split('@').next_back().unwrap();
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_customer_round_trips_through_json() {
        let mut generator = CustomerGenerator::new(&["CUST001", "CUST002"], 42).unwrap();
        for _ in 0..20 {
            let (_, customer) = generator.next_update();
            let json = serde_json::to_string(&customer).unwrap();
            let decoded: Customer = serde_json::from_str(&json).unwrap();
            assert_eq!(customer, decoded);
        }
    }

    #[test]
    fn test_generated_orders_are_consistent() {
        let mut generator = OrderGenerator::new(42);

        for _ in 0..100 {
            let before = Utc::now();
            let order = generator.next_order();

            assert!(order.order_id.starts_with("order_"));
            assert!((1..=5).contains(&order.quantity));
            assert_eq!(
                order.total_amount,
                round2(order.unit_price * f64::from(order.quantity))
            );
            assert!(REGIONS.contains(&order.region.as_str()));
            // Within the preceding 24 hours, never in the future
            assert!(order.created_at <= Utc::now());
            assert!(order.created_at >= before - Duration::hours(24) - Duration::seconds(1));
        }
    }

    #[test]
    fn test_order_round_trips_through_json() {
        let mut generator = OrderGenerator::new(1);
        let order = generator.next_order();
        let json = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, decoded);
    }
}
