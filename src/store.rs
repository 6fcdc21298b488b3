use crate::config::Dataset;
use crate::error::Result;
use crate::record::{Customer, Invoice, LedgerEntry, Product, Record, User};

/// Authoritative in-memory list of one entity's records, in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, validating each one.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Append a record. Key uniqueness is left to the caller.
    pub fn add(&mut self, record: R) -> Result<()> {
        record.validate()?;
        tracing::debug!(entity = R::ENTITY, key = record.key(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Replace the first record with `key`.
    ///
    /// Returns `Ok(false)` and leaves the store untouched when no record has
    /// that key. The replacement is validated before anything changes.
    pub fn update(&mut self, key: &str, record: R) -> Result<bool> {
        record.validate()?;
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = record;
                tracing::debug!(entity = R::ENTITY, key, "record updated");
                Ok(true)
            }
            None => {
                tracing::debug!(entity = R::ENTITY, key, "update ignored, key not found");
                Ok(false)
            }
        }
    }

    /// Remove the first record with `key`, if any.
    pub fn remove(&mut self, key: &str) -> Option<R> {
        let idx = self.records.iter().position(|r| r.key() == key)?;
        tracing::debug!(entity = R::ENTITY, key, "record removed");
        Some(self.records.remove(idx))
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One store per entity for the lifetime of a single mount of the app.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub customers: RecordStore<Customer>,
    pub users: RecordStore<User>,
    pub products: RecordStore<Product>,
    pub invoices: RecordStore<Invoice>,
    pub ledger: RecordStore<LedgerEntry>,
}

impl Session {
    /// Load seed data. Any invalid record aborts the whole session.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let session = Self {
            customers: RecordStore::from_records(dataset.customers)?,
            users: RecordStore::from_records(dataset.users)?,
            products: RecordStore::from_records(dataset.products)?,
            invoices: RecordStore::from_records(dataset.invoices)?,
            ledger: RecordStore::from_records(dataset.ledger)?,
        };
        tracing::debug!(
            customers = session.customers.len(),
            users = session.users.len(),
            products = session.products.len(),
            invoices = session.invoices.len(),
            ledger = session.ledger.len(),
            "session loaded"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = RecordStore::new();
        store.add(customer("c2", "Beta")).unwrap();
        store.add(customer("c1", "Alpha")).unwrap();
        let keys: Vec<_> = store.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(keys, ["c2", "c1"]);
    }

    #[test]
    fn add_rejects_missing_required_fields() {
        let mut store = RecordStore::new();
        let err = store.add(customer("c1", "  ")).unwrap_err();
        assert!(err.to_string().contains("name is required"));
        assert!(store.is_empty());
    }

    #[test]
    fn update_unknown_key_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add(customer("c1", "Alpha")).unwrap();
        let changed = store.update("missing", customer("missing", "Ghost")).unwrap();
        assert!(!changed);
        assert_eq!(store.list(), &[customer("c1", "Alpha")]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = RecordStore::new();
        store.add(customer("c1", "Alpha")).unwrap();
        store.add(customer("c2", "Beta")).unwrap();
        assert!(store.update("c1", customer("c1", "Alpha Ltd")).unwrap());
        assert_eq!(store.list()[0].name, "Alpha Ltd");
        assert_eq!(store.list()[1].name, "Beta");
    }

    #[test]
    fn invalid_update_leaves_store_untouched() {
        let mut store = RecordStore::new();
        store.add(customer("c1", "Alpha")).unwrap();
        assert!(store.update("c1", customer("c1", "")).is_err());
        assert_eq!(store.get("c1").unwrap().name, "Alpha");
    }

    #[test]
    fn remove_unknown_key_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add(customer("c1", "Alpha")).unwrap();
        assert!(store.remove("nope").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove("c1").unwrap().name, "Alpha");
        assert!(store.is_empty());
    }
}
