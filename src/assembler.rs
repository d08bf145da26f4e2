use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::catalog;
use crate::grouping::group_by_date;
use crate::models::{
    Account, AccountType, CreditCard, Dataset, Loan, LoanType, Transaction, User,
};
use crate::synth::{synthesize, Profile, RecurringEvent};

/// Bi-weekly paycheck for the working adult's checking account.
const PAYROLL: RecurringEvent = RecurringEvent {
    period_days: 14,
    merchant: "Meridian Labs Payroll",
    category: "Income",
    icon: "banknote",
    amount: 2984.63,
    incoming: true,
    message: Some("Direct Deposit"),
};

const MORTGAGE_PAYMENT: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "Evergreen Home Lending",
    category: "Housing",
    icon: "home",
    amount: 2450.00,
    incoming: false,
    message: Some("Mortgage Payment"),
};

const CARD_AUTOPAY: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "Card Payment - AutoPay",
    category: "Payment",
    icon: "credit-card",
    amount: 450.00,
    incoming: false,
    message: None,
};

/// Monthly pension distribution for the retiree.
const PENSION: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "CalSTRS Retirement",
    category: "Income",
    icon: "banknote",
    amount: 3120.00,
    incoming: true,
    message: Some("Pension Distribution"),
};

const SOCIAL_SECURITY: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "SSA Treasury 310",
    category: "Income",
    icon: "landmark",
    amount: 2214.00,
    incoming: true,
    message: Some("Social Security"),
};

const RETIREE_HOUSING: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "Oakmont Property Mgmt",
    category: "Housing",
    icon: "home",
    amount: 1680.00,
    incoming: false,
    message: Some("HOA and Lease"),
};

/// Incoming payment credited to a card once a month.
const CARD_PAYMENT_RECEIVED: RecurringEvent = RecurringEvent {
    period_days: 30,
    merchant: "Payment Received",
    category: "Payment",
    icon: "credit-card",
    amount: 450.00,
    incoming: true,
    message: Some("Thank You"),
};

fn users(now: NaiveDateTime) -> Vec<User> {
    let today = now.date();
    vec![
        User {
            id: "u1".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@example.com".to_string(),
            phone: "(415) 555-0132".to_string(),
            masked_ssn: "***-**-4821".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1991, 6, 14).unwrap(),
            occupation: "Product Designer".to_string(),
            annual_income: 128_000.0,
            member_since: today - Duration::days(365 * 6),
        },
        User {
            id: "u2".to_string(),
            name: "Frank Delgado".to_string(),
            email: "frank.delgado@example.com".to_string(),
            phone: "(510) 555-0176".to_string(),
            masked_ssn: "***-**-7348".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1954, 11, 2).unwrap(),
            occupation: "Retired Teacher".to_string(),
            annual_income: 64_000.0,
            member_since: today - Duration::days(365 * 22),
        },
        User {
            id: "u3".to_string(),
            name: "Maya Okafor".to_string(),
            email: "maya.okafor@example.com".to_string(),
            phone: "(628) 555-0109".to_string(),
            masked_ssn: "***-**-1566".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 2, 27).unwrap(),
            occupation: "Graduate Student".to_string(),
            annual_income: 31_000.0,
            member_since: today - Duration::days(3),
        },
    ]
}

fn accounts(now: NaiveDateTime) -> Vec<Account> {
    let today = now.date();
    vec![
        Account {
            id: "acc1".to_string(),
            user_id: "u1".to_string(),
            account_type: AccountType::Checking,
            balance: 8_427.19,
            available_balance: 8_227.19,
            interest_rate: 0.01,
            opened: today - Duration::days(365 * 6),
            maturity_date: None,
        },
        Account {
            id: "acc2".to_string(),
            user_id: "u1".to_string(),
            account_type: AccountType::Savings,
            balance: 24_850.62,
            available_balance: 24_850.62,
            interest_rate: 4.15,
            opened: today - Duration::days(365 * 5),
            maturity_date: None,
        },
        Account {
            id: "acc3".to_string(),
            user_id: "u2".to_string(),
            account_type: AccountType::Checking,
            balance: 12_304.88,
            available_balance: 12_304.88,
            interest_rate: 0.01,
            opened: today - Duration::days(365 * 22),
            maturity_date: None,
        },
        Account {
            id: "acc4".to_string(),
            user_id: "u2".to_string(),
            account_type: AccountType::MoneyMarket,
            balance: 86_210.44,
            available_balance: 86_210.44,
            interest_rate: 4.60,
            opened: today - Duration::days(365 * 12),
            maturity_date: None,
        },
        Account {
            id: "acc5".to_string(),
            user_id: "u2".to_string(),
            account_type: AccountType::Cd,
            balance: 50_000.00,
            available_balance: 0.0,
            interest_rate: 5.10,
            opened: today - Duration::days(200),
            maturity_date: Some(today + Duration::days(165)),
        },
        // Freshly opened; the new user has no history yet.
        Account {
            id: "acc6".to_string(),
            user_id: "u3".to_string(),
            account_type: AccountType::Checking,
            balance: 25.00,
            available_balance: 25.00,
            interest_rate: 0.01,
            opened: today - Duration::days(3),
            maturity_date: None,
        },
    ]
}

fn credit_cards(now: NaiveDateTime) -> Vec<CreditCard> {
    let today = now.date();
    vec![
        CreditCard {
            id: "card1".to_string(),
            user_id: "u1".to_string(),
            card_number: "**** **** **** 4821".to_string(),
            credit_limit: 15_000.0,
            current_balance: 2_347.52,
            available_credit: 12_652.48,
            due_date: today + Duration::days(18),
            minimum_payment: 70.43,
            rewards_balance: 42_380.0,
            rewards_type: "points".to_string(),
            rewards_rate: 2.0,
            color: "indigo".to_string(),
        },
        CreditCard {
            id: "card2".to_string(),
            user_id: "u1".to_string(),
            card_number: "**** **** **** 9957".to_string(),
            credit_limit: 8_000.0,
            current_balance: 612.09,
            available_credit: 7_387.91,
            due_date: today + Duration::days(9),
            minimum_payment: 25.00,
            rewards_balance: 183.42,
            rewards_type: "cashback".to_string(),
            rewards_rate: 1.5,
            color: "slate".to_string(),
        },
        CreditCard {
            id: "card3".to_string(),
            user_id: "u2".to_string(),
            card_number: "**** **** **** 3310".to_string(),
            credit_limit: 12_000.0,
            current_balance: 891.34,
            available_credit: 11_108.66,
            due_date: today + Duration::days(23),
            minimum_payment: 35.00,
            rewards_balance: 96.10,
            rewards_type: "cashback".to_string(),
            rewards_rate: 2.0,
            color: "emerald".to_string(),
        },
    ]
}

fn loans(now: NaiveDateTime) -> Vec<Loan> {
    let today = now.date();
    vec![
        Loan {
            id: "loan1".to_string(),
            user_id: "u1".to_string(),
            loan_type: LoanType::Mortgage,
            original_amount: 640_000.0,
            current_balance: 588_412.77,
            interest_rate: 6.125,
            monthly_payment: 2_450.00,
            payments_made: 38,
            payments_total: 360,
            originated: today - Duration::days(38 * 30),
            next_payment_due: today + Duration::days(12),
        },
        Loan {
            id: "loan2".to_string(),
            user_id: "u1".to_string(),
            loan_type: LoanType::Auto,
            original_amount: 38_500.0,
            current_balance: 21_094.18,
            interest_rate: 5.49,
            monthly_payment: 612.40,
            payments_made: 29,
            payments_total: 72,
            originated: today - Duration::days(29 * 30),
            next_payment_due: today + Duration::days(6),
        },
        Loan {
            id: "loan3".to_string(),
            user_id: "u2".to_string(),
            loan_type: LoanType::HomeEquity,
            original_amount: 75_000.0,
            current_balance: 31_877.50,
            interest_rate: 7.25,
            monthly_payment: 580.00,
            payments_made: 84,
            payments_total: 180,
            originated: today - Duration::days(84 * 30),
            next_payment_due: today + Duration::days(20),
        },
    ]
}

/// Build the full mock dataset: users, accounts, cards, loans, a synthesized
/// history for every account and card, and the grouped view of each user's
/// primary account. Deposit accounts and cards use separate horizons.
pub fn generate(months: u32, card_months: u32, now: NaiveDateTime, rng: &mut impl Rng) -> Dataset {
    catalog::validate();

    let users = users(now);
    let accounts = accounts(now);
    let credit_cards = credit_cards(now);
    let loans = loans(now);

    let mut transactions: BTreeMap<String, BTreeMap<String, Vec<Transaction>>> = BTreeMap::new();
    for user in &users {
        transactions.insert(user.id.clone(), BTreeMap::new());
    }

    for account in &accounts {
        let profile = deposit_profile(account);
        let horizon = match account.account_type {
            // CDs sit still until maturity.
            AccountType::Cd => 0,
            _ if account.user_id == "u3" => 0,
            _ => months,
        };
        let mut txns =
            synthesize(&account.user_id, &account.id, horizon, now, &profile, rng);
        txns.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
            .get_mut(&account.user_id)
            .expect("account references a generated user")
            .insert(account.id.clone(), txns);
    }

    for card in &credit_cards {
        let profile = Profile::card(vec![CARD_PAYMENT_RECEIVED]);
        let mut txns = synthesize(&card.user_id, &card.id, card_months, now, &profile, rng);
        txns.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
            .get_mut(&card.user_id)
            .expect("card references a generated user")
            .insert(card.id.clone(), txns);
    }

    let mut grouped_transactions = BTreeMap::new();
    for user in &users {
        let primary = accounts
            .iter()
            .find(|a| a.user_id == user.id && a.account_type == AccountType::Checking);
        let groups = match primary {
            Some(account) => {
                let txns = &transactions[&user.id][&account.id];
                group_by_date(txns, now.date())
            }
            None => Vec::new(),
        };
        grouped_transactions.insert(user.id.clone(), groups);
    }

    Dataset {
        users,
        accounts,
        credit_cards,
        loans,
        transactions,
        grouped_transactions,
    }
}

/// Recurring mix for a deposit account. Only checking accounts carry the
/// payroll/housing cadence; savings-style accounts get organic activity only.
fn deposit_profile(account: &Account) -> Profile {
    let recurring = match (account.user_id.as_str(), account.account_type) {
        ("u1", AccountType::Checking) => vec![PAYROLL, MORTGAGE_PAYMENT, CARD_AUTOPAY],
        ("u2", AccountType::Checking) => {
            vec![PENSION, SOCIAL_SECURITY, RETIREE_HOUSING, CARD_AUTOPAY]
        }
        _ => Vec::new(),
    };
    Profile::deposit(recurring)
}
