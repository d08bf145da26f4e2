use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub masked_ssn: String,
    pub date_of_birth: NaiveDate,
    pub occupation: String,
    pub annual_income: f64,
    pub member_since: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Checking,
    Savings,
    MoneyMarket,
    Cd,
}

impl AccountType {
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::MoneyMarket => "Money Market",
            AccountType::Cd => "CD",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub available_balance: f64,
    /// APY as a percentage, e.g. 4.25 for 4.25%.
    pub interest_rate: f64,
    pub opened: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub user_id: String,
    pub card_number: String,
    pub credit_limit: f64,
    pub current_balance: f64,
    pub available_credit: f64,
    pub due_date: NaiveDate,
    pub minimum_payment: f64,
    pub rewards_balance: f64,
    pub rewards_type: String,
    pub rewards_rate: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanType {
    Mortgage,
    Auto,
    HomeEquity,
    Personal,
}

impl LoanType {
    pub fn label(&self) -> &'static str {
        match self {
            LoanType::Mortgage => "Mortgage",
            LoanType::Auto => "Auto",
            LoanType::HomeEquity => "Home Equity",
            LoanType::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub user_id: String,
    pub loan_type: LoanType,
    pub original_amount: f64,
    pub current_balance: f64,
    pub interest_rate: f64,
    pub monthly_payment: f64,
    pub payments_made: u32,
    pub payments_total: u32,
    pub originated: NaiveDate,
    pub next_payment_due: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Owning account or card id.
    pub account_id: String,
    pub timestamp: NaiveDateTime,
    pub merchant: String,
    pub category: String,
    pub icon: String,
    /// Always non-negative; direction is carried by `incoming`.
    pub amount: f64,
    pub incoming: bool,
    pub location: Option<String>,
    pub message: Option<String>,
    pub status: String,
}

/// A UI-facing projection: one calendar date's transactions, newest-first,
/// under a `TODAY` / `YESTERDAY` / formatted-date label. Derived data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDateGroup {
    pub label: String,
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

/// The full generated object graph. Field names are the output contract
/// consumed by display layers, so they serialize exactly as listed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub credit_cards: Vec<CreditCard>,
    pub loans: Vec<Loan>,
    /// Nested by user id, then account/card id.
    pub transactions: BTreeMap<String, BTreeMap<String, Vec<Transaction>>>,
    /// Precomputed grouped view of each user's primary account, by user id.
    pub grouped_transactions: BTreeMap<String, Vec<TransactionDateGroup>>,
}

impl Dataset {
    pub fn transaction_count(&self) -> usize {
        self.transactions
            .values()
            .flat_map(|by_entity| by_entity.values())
            .map(|txns| txns.len())
            .sum()
    }

    /// Flat view of one account's or card's history, or None if the id is
    /// unknown under any user.
    pub fn transactions_for(&self, entity_id: &str) -> Option<&Vec<Transaction>> {
        self.transactions
            .values()
            .find_map(|by_entity| by_entity.get(entity_id))
    }
}
