use super::{Cell, Tabular};
use crate::record::{Customer, Invoice, LedgerEntry, Product, User};

impl Tabular for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "email", "phone", "address"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::text(&self.phone),
            Cell::text(&self.address),
        ]
    }
}

impl Tabular for User {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "email", "role"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::text(self.role.as_str()),
        ]
    }
}

impl Tabular for Product {
    fn headers() -> Vec<&'static str> {
        vec!["sku", "name", "category", "quantity", "unit price", "value"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.sku),
            Cell::text(&self.name),
            Cell::text(&self.category),
            Cell::quantity(self.quantity),
            Cell::Amount(self.unit_price),
            Cell::Amount(self.value()),
        ]
    }
}

impl Tabular for Invoice {
    fn headers() -> Vec<&'static str> {
        vec!["number", "date", "customer", "status", "amount", "outstanding"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.number),
            Cell::text(&self.date),
            Cell::text(&self.customer),
            Cell::text(self.status.as_str()),
            Cell::Amount(self.amount),
            Cell::Amount(self.outstanding),
        ]
    }
}

impl Tabular for LedgerEntry {
    fn headers() -> Vec<&'static str> {
        vec!["id", "date", "account", "type", "description", "debit", "credit"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.date),
            Cell::text(&self.account),
            Cell::text(self.account_type.as_str()),
            Cell::text(&self.description),
            Cell::Amount(self.debit),
            Cell::Amount(self.credit),
        ]
    }
}
