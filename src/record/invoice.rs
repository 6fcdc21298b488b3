use serde::{Deserialize, Serialize};
use std::fmt;

use super::{lenient_amount, require_amount, require_text, Record};
use crate::error::{Result, ViewError};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Partial,
    Overdue,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Partial => "partial",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales invoice keyed by its business number.
///
/// `customer_id` is a plain key into the customer store; `customer` carries
/// the display name so the invoice list can be searched by it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Invoice {
    pub number: String,
    pub customer_id: String,
    pub customer: String,
    pub date: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub outstanding: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn paid_amount(&self) -> f64 {
        self.amount - self.outstanding
    }
}

impl Record for Invoice {
    const ENTITY: &'static str = "invoice";

    fn key(&self) -> &str {
        &self.number
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.customer.as_str(),
            self.customer_id.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn date(&self) -> Option<&str> {
        Some(self.date.as_str())
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::ENTITY, &self.number, "number", &self.number)?;
        require_text(Self::ENTITY, &self.number, "customer_id", &self.customer_id)?;
        require_text(Self::ENTITY, &self.number, "date", &self.date)?;
        require_amount(Self::ENTITY, &self.number, "amount", self.amount)?;
        require_amount(Self::ENTITY, &self.number, "outstanding", self.outstanding)?;
        if self.outstanding > self.amount {
            return Err(ViewError::invalid_record(
                Self::ENTITY,
                &self.number,
                format!(
                    "outstanding {:.2} exceeds invoice amount {:.2}",
                    self.outstanding, self.amount
                ),
            ));
        }
        Ok(())
    }
}
