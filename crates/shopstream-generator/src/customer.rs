//! Customer record schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loyalty tier with a fixed ordered progression.
///
/// Upgrades advance exactly one step and never regress; `Platinum` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// All tiers in progression order.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// The next tier in the progression, or `self` when already at the top.
    pub fn next(self) -> Tier {
        match self {
            Tier::Bronze => Tier::Silver,
            Tier::Silver => Tier::Gold,
            Tier::Gold => Tier::Platinum,
            Tier::Platinum => Tier::Platinum,
        }
    }
}

/// Account status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 4] = [
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Suspended,
        CustomerStatus::Pending,
    ];
}

/// A full customer record as published on the wire.
///
/// `customer_id` doubles as the routing key so that downstream consumers can
/// upsert by identity. `lifetime_value` is kept rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub tier: Tier,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub lifetime_value: f64,
    pub last_order_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_progression_is_forward_only() {
        assert_eq!(Tier::Bronze.next(), Tier::Silver);
        assert_eq!(Tier::Silver.next(), Tier::Gold);
        assert_eq!(Tier::Gold.next(), Tier::Platinum);
        // Terminal tier stays put
        assert_eq!(Tier::Platinum.next(), Tier::Platinum);

        for tier in Tier::ALL {
            assert!(tier.next() >= tier);
        }
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Bronze).unwrap(), "\"bronze\"");
        assert_eq!(
            serde_json::to_string(&CustomerStatus::Suspended).unwrap(),
            "\"suspended\""
        );
    }
}
