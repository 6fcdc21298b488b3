use serde::{Deserialize, Serialize};

use crate::record::{Customer, Invoice, LedgerEntry, Product, User};

/// Seed data for one session, as read from `data.toml`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub ledger: Vec<LedgerEntry>,
}
