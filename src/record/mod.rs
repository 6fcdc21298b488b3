mod amount;
mod customer;
mod invoice;
mod ledger;
mod product;
mod user;

pub use amount::{coerce_amount, lenient_amount};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus};
pub use ledger::{AccountType, LedgerEntry};
pub use product::Product;
pub use user::{Role, User};

use crate::error::{Result, ViewError};

/// A typed row owned by a [`RecordStore`](crate::store::RecordStore).
///
/// Implementors declare which fields the filter stage may look at: the
/// free-text search fields, an optional categorical field and an optional
/// date field kept exactly as the data source supplied it.
pub trait Record: Clone {
    /// Entity name used in log lines and validation errors.
    const ENTITY: &'static str;

    fn key(&self) -> &str;

    /// Fields matched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    /// Raw date string, parsed only when a date predicate is active.
    fn date(&self) -> Option<&str> {
        None
    }

    /// Checks required fields before the record enters a store.
    fn validate(&self) -> Result<()>;
}

/// Reject an empty (or whitespace-only) required text field.
pub(crate) fn require_text(
    entity: &'static str,
    key: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ViewError::invalid_record(
            entity,
            key,
            format!("{field} is required"),
        ));
    }
    Ok(())
}

/// Reject a negative or non-finite numeric field.
pub(crate) fn require_amount(
    entity: &'static str,
    key: &str,
    field: &str,
    value: f64,
) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ViewError::invalid_record(
            entity,
            key,
            format!("{field} must be a non-negative number (got {value})"),
        ));
    }
    Ok(())
}
