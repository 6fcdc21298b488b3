use serde::{Deserialize, Serialize};
use std::fmt;

use super::{lenient_amount, require_amount, require_text, Record};
use crate::error::Result;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Asset => "asset",
            AccountType::Liability => "liability",
            AccountType::Equity => "equity",
            AccountType::Income => "income",
            AccountType::Expense => "expense",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub date: String,
    pub account: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub debit: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub credit: f64,
}

impl Record for LedgerEntry {
    const ENTITY: &'static str = "ledger entry";

    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.account.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.account_type.as_str())
    }

    fn date(&self) -> Option<&str> {
        Some(self.date.as_str())
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::ENTITY, &self.id, "id", &self.id)?;
        require_text(Self::ENTITY, &self.id, "account", &self.account)?;
        require_amount(Self::ENTITY, &self.id, "debit", self.debit)?;
        require_amount(Self::ENTITY, &self.id, "credit", self.credit)
    }
}
