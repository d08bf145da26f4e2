use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use rand::Rng;

use crate::catalog::Merchant;
use crate::models::Transaction;

/// An event injected on a fixed cadence, keyed off the day offset modulo its
/// period. "Bi-weekly" here is anchored to the generation run, not to any
/// real pay calendar.
#[derive(Debug, Clone, Copy)]
pub struct RecurringEvent {
    pub period_days: u32,
    pub merchant: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub amount: f64,
    pub incoming: bool,
    pub message: Option<&'static str>,
}

/// Generation parameters for one kind of entity. Deposit accounts and cards
/// differ in merchant pool, amount jitter, and how often money comes in.
pub struct Profile {
    pub catalog: &'static [Merchant],
    /// Uniform perturbation band around a merchant's average amount.
    pub variance: f64,
    /// Probability that a random transaction is incoming (a credit).
    pub incoming_prob: f64,
    pub recurring: Vec<RecurringEvent>,
}

impl Profile {
    pub fn deposit(recurring: Vec<RecurringEvent>) -> Self {
        Self {
            catalog: crate::catalog::DEPOSIT_MERCHANTS,
            variance: 0.15,
            incoming_prob: 0.15,
            recurring,
        }
    }

    pub fn card(recurring: Vec<RecurringEvent>) -> Self {
        Self {
            catalog: crate::catalog::CARD_MERCHANTS,
            variance: 0.20,
            incoming_prob: 0.08,
            recurring,
        }
    }
}

const CITIES: &[&str] = &[
    "San Francisco, CA",
    "Oakland, CA",
    "Berkeley, CA",
    "San Jose, CA",
    "Sacramento, CA",
];

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesize a transaction history for one account or card, walking from
/// `now` backward one day at a time over `months` (approximated as 30-day
/// blocks). Each day gets 0-5 random merchant transactions, more on
/// weekends, plus whichever recurring events land on that day offset.
///
/// The returned list is in generation order, not sorted; callers sort
/// descending by timestamp before display.
pub fn synthesize(
    user_id: &str,
    entity_id: &str,
    months: u32,
    now: NaiveDateTime,
    profile: &Profile,
    rng: &mut impl Rng,
) -> Vec<Transaction> {
    let days = months * 30;
    let mut txns = Vec::new();
    let mut seq = 0u32;

    for day_offset in 0..days {
        let date = now.date() - Duration::days(day_offset as i64);
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

        let mut count = rng.gen_range(0..=3);
        if weekend {
            count += rng.gen_range(0..=2);
        }

        for _ in 0..count {
            let merchant = crate::sampler::sample_merchant(profile.catalog, rng);
            let jitter = rng.gen_range(-profile.variance..profile.variance);
            let amount = round_cents(merchant.avg_amount * (1.0 + jitter));
            let incoming = rng.gen_bool(profile.incoming_prob);
            let location = if rng.gen_bool(0.4) {
                Some(CITIES[rng.gen_range(0..CITIES.len())].to_string())
            } else {
                None
            };

            txns.push(Transaction {
                id: format!("txn-{user_id}-{entity_id}-{seq:05}"),
                account_id: entity_id.to_string(),
                timestamp: timestamp_on(date, day_offset, now, rng),
                merchant: merchant.name.to_string(),
                category: merchant.category.to_string(),
                icon: merchant.icon.to_string(),
                amount,
                incoming,
                location,
                message: None,
                status: status_for(day_offset),
            });
            seq += 1;
        }

        for event in &profile.recurring {
            if day_offset % event.period_days != 0 {
                continue;
            }
            txns.push(Transaction {
                id: format!("txn-{user_id}-{entity_id}-{seq:05}"),
                account_id: entity_id.to_string(),
                timestamp: timestamp_on(date, day_offset, now, rng),
                merchant: event.merchant.to_string(),
                category: event.category.to_string(),
                icon: event.icon.to_string(),
                amount: round_cents(event.amount),
                incoming: event.incoming,
                location: None,
                message: event.message.map(str::to_string),
                status: status_for(day_offset),
            });
            seq += 1;
        }
    }

    txns
}

/// Random time of day on `date`, clamped so nothing on day 0 postdates `now`.
fn timestamp_on(
    date: chrono::NaiveDate,
    day_offset: u32,
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> NaiveDateTime {
    let hour = rng.gen_range(6..23);
    let minute = rng.gen_range(0..60);
    let ts = date.and_hms_opt(hour, minute, 0).unwrap_or(now);
    if day_offset == 0 && ts > now {
        now
    } else {
        ts
    }
}

fn status_for(day_offset: u32) -> String {
    if day_offset == 0 { "pending" } else { "posted" }.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    const PAYROLL: RecurringEvent = RecurringEvent {
        period_days: 14,
        merchant: "Acme Corp Payroll",
        category: "Income",
        icon: "banknote",
        amount: 2840.00,
        incoming: true,
        message: Some("Direct Deposit"),
    };

    #[test]
    fn test_amounts_are_non_negative() {
        let mut rng = StdRng::seed_from_u64(1);
        let txns = synthesize("u1", "acc1", 6, fixed_now(), &Profile::deposit(vec![PAYROLL]), &mut rng);
        assert!(!txns.is_empty());
        for t in &txns {
            assert!(t.amount >= 0.0, "negative amount on {}", t.merchant);
        }
    }

    #[test]
    fn test_dates_stay_within_horizon() {
        let mut rng = StdRng::seed_from_u64(2);
        let now = fixed_now();
        let txns = synthesize("u1", "acc1", 3, now, &Profile::deposit(vec![]), &mut rng);
        assert!(!txns.is_empty());
        let floor = now.date() - Duration::days(90);
        for t in &txns {
            assert!(t.timestamp.date() > floor, "{} before window", t.timestamp);
            assert!(t.timestamp <= now, "{} after generation time", t.timestamp);
        }
    }

    #[test]
    fn test_zero_month_horizon_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let txns = synthesize("u1", "acc1", 0, fixed_now(), &Profile::deposit(vec![PAYROLL]), &mut rng);
        assert!(txns.is_empty());
    }

    #[test]
    fn test_deposit_incoming_fraction_converges() {
        let mut rng = StdRng::seed_from_u64(4);
        // No recurring events so only the 0.15 coin decides direction.
        let profile = Profile::deposit(vec![]);
        let mut total = 0usize;
        let mut incoming = 0usize;
        for run in 0..40 {
            let txns = synthesize("u1", &format!("acc{run}"), 12, fixed_now(), &profile, &mut rng);
            total += txns.len();
            incoming += txns.iter().filter(|t| t.incoming).count();
        }
        let fraction = incoming as f64 / total as f64;
        assert!((0.12..0.18).contains(&fraction), "deposit incoming fraction {fraction}");
    }

    #[test]
    fn test_card_credit_fraction_converges() {
        let mut rng = StdRng::seed_from_u64(5);
        let profile = Profile::card(vec![]);
        let mut total = 0usize;
        let mut credits = 0usize;
        for run in 0..40 {
            let txns = synthesize("u1", &format!("card{run}"), 12, fixed_now(), &profile, &mut rng);
            total += txns.len();
            credits += txns.iter().filter(|t| t.incoming).count();
        }
        let fraction = credits as f64 / total as f64;
        assert!((0.05..0.11).contains(&fraction), "card credit fraction {fraction}");
    }

    #[test]
    fn test_recurring_cadence() {
        let mut rng = StdRng::seed_from_u64(6);
        let txns = synthesize("u1", "acc1", 3, fixed_now(), &Profile::deposit(vec![PAYROLL]), &mut rng);
        let payroll: Vec<_> = txns.iter().filter(|t| t.merchant == PAYROLL.merchant).collect();
        // Day offsets 0, 14, 28, ..., 84 inside a 90-day walk.
        assert_eq!(payroll.len(), 7);
        for t in &payroll {
            assert!(t.incoming);
            assert_eq!(t.amount, 2840.00);
            assert_eq!(t.message.as_deref(), Some("Direct Deposit"));
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(77);
            synthesize("u1", "acc1", 4, fixed_now(), &Profile::deposit(vec![PAYROLL]), &mut rng)
        };
        let a = run();
        let b = run();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.merchant, y.merchant);
            assert_eq!(x.amount, y.amount);
            assert_eq!(x.timestamp, y.timestamp);
        }
    }

    #[test]
    fn test_pending_only_on_day_zero() {
        let mut rng = StdRng::seed_from_u64(8);
        let now = fixed_now();
        let txns = synthesize("u1", "acc1", 2, now, &Profile::deposit(vec![]), &mut rng);
        for t in &txns {
            if t.status == "pending" {
                assert_eq!(t.timestamp.date(), now.date());
            } else {
                assert_eq!(t.status, "posted");
            }
        }
    }
}
