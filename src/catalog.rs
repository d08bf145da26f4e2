//! Static merchant catalogs used to synthesize realistic transaction
//! descriptions. Deposit-account activity and card activity draw from
//! separate pools since their merchant mixes differ.

/// How often a merchant shows up relative to the rest of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyClass {
    High,
    Medium,
    Low,
    Monthly,
}

impl FrequencyClass {
    /// Sampling weight. Not normalized; the sampler divides by the total.
    pub fn weight(&self) -> f64 {
        match self {
            FrequencyClass::High => 0.5,
            FrequencyClass::Medium => 0.3,
            FrequencyClass::Low => 0.15,
            FrequencyClass::Monthly => 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Merchant {
    pub name: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub avg_amount: f64,
    pub frequency: FrequencyClass,
}

pub const DEPOSIT_MERCHANTS: &[Merchant] = &[
    Merchant { name: "Whole Foods Market", category: "Groceries", icon: "shopping-cart", avg_amount: 87.40, frequency: FrequencyClass::High },
    Merchant { name: "Trader Joe's", category: "Groceries", icon: "shopping-cart", avg_amount: 54.20, frequency: FrequencyClass::High },
    Merchant { name: "Shell Oil", category: "Gas", icon: "fuel", avg_amount: 48.75, frequency: FrequencyClass::High },
    Merchant { name: "Starbucks", category: "Coffee", icon: "coffee", avg_amount: 7.85, frequency: FrequencyClass::High },
    Merchant { name: "Chipotle", category: "Dining", icon: "utensils", avg_amount: 14.60, frequency: FrequencyClass::High },
    Merchant { name: "Target", category: "Shopping", icon: "shopping-bag", avg_amount: 64.30, frequency: FrequencyClass::Medium },
    Merchant { name: "CVS Pharmacy", category: "Health", icon: "heart-pulse", avg_amount: 32.15, frequency: FrequencyClass::Medium },
    Merchant { name: "Uber", category: "Transport", icon: "car", avg_amount: 21.40, frequency: FrequencyClass::Medium },
    Merchant { name: "AMC Theatres", category: "Entertainment", icon: "clapperboard", avg_amount: 28.50, frequency: FrequencyClass::Low },
    Merchant { name: "Home Depot", category: "Home", icon: "hammer", avg_amount: 112.80, frequency: FrequencyClass::Low },
    Merchant { name: "PG&E", category: "Utilities", icon: "zap", avg_amount: 145.20, frequency: FrequencyClass::Monthly },
    Merchant { name: "Comcast Xfinity", category: "Utilities", icon: "wifi", avg_amount: 89.99, frequency: FrequencyClass::Monthly },
    Merchant { name: "State Farm Insurance", category: "Insurance", icon: "shield", avg_amount: 168.50, frequency: FrequencyClass::Monthly },
];

pub const CARD_MERCHANTS: &[Merchant] = &[
    Merchant { name: "Amazon", category: "Shopping", icon: "package", avg_amount: 42.80, frequency: FrequencyClass::High },
    Merchant { name: "DoorDash", category: "Dining", icon: "utensils", avg_amount: 31.25, frequency: FrequencyClass::High },
    Merchant { name: "Safeway", category: "Groceries", icon: "shopping-cart", avg_amount: 68.90, frequency: FrequencyClass::High },
    Merchant { name: "Chevron", category: "Gas", icon: "fuel", avg_amount: 52.30, frequency: FrequencyClass::High },
    Merchant { name: "Best Buy", category: "Electronics", icon: "monitor", avg_amount: 156.40, frequency: FrequencyClass::Medium },
    Merchant { name: "Nordstrom", category: "Shopping", icon: "shopping-bag", avg_amount: 128.70, frequency: FrequencyClass::Medium },
    Merchant { name: "Delta Air Lines", category: "Travel", icon: "plane", avg_amount: 385.00, frequency: FrequencyClass::Low },
    Merchant { name: "Marriott Hotels", category: "Travel", icon: "bed", avg_amount: 245.60, frequency: FrequencyClass::Low },
    Merchant { name: "Netflix", category: "Entertainment", icon: "tv", avg_amount: 15.49, frequency: FrequencyClass::Monthly },
    Merchant { name: "Spotify", category: "Entertainment", icon: "music", avg_amount: 11.99, frequency: FrequencyClass::Monthly },
    Merchant { name: "Planet Fitness", category: "Health", icon: "dumbbell", avg_amount: 24.99, frequency: FrequencyClass::Monthly },
];

/// Sanity-check the compile-time catalogs. Malformed entries are programmer
/// errors, so this panics rather than returning a Result. Called once at the
/// top of dataset generation.
pub fn validate() {
    for catalog in [DEPOSIT_MERCHANTS, CARD_MERCHANTS] {
        assert!(!catalog.is_empty(), "merchant catalog must be non-empty");
        for m in catalog {
            assert!(!m.name.is_empty(), "merchant with empty name");
            assert!(!m.category.is_empty(), "merchant {} missing category", m.name);
            assert!(m.avg_amount > 0.0, "merchant {} has non-positive avg amount", m.name);
        }
    }
}
