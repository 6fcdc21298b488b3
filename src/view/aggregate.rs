use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::filter::DATE_FORMAT;
use crate::record::{Invoice, InvoiceStatus, LedgerEntry, Product};

/// How a report groups records and what it sums.
pub trait BucketRule<R> {
    /// Ordered names of the summed columns.
    fn columns(&self) -> &[&'static str];

    fn group_key(&self, record: &R) -> String;

    /// Add `record` into `sums`, which has one slot per column.
    fn contribute(&self, record: &R, sums: &mut [f64]);

    /// Header of the per-bucket derived total, if the report shows one.
    fn total_column(&self) -> Option<&'static str> {
        Some("total")
    }

    fn row_total(&self, sums: &[f64]) -> f64 {
        sums.iter().fold(0.0, |acc, s| acc + s)
    }
}

/// Summed columns for one group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateBucket {
    pub key: String,
    pub count: usize,
    pub sums: Vec<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub columns: Vec<&'static str>,
    pub total_column: Option<&'static str>,
    pub buckets: Vec<AggregateBucket>,
}

impl AggregateReport {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == name)
    }

    pub fn bucket(&self, key: &str) -> Option<&AggregateBucket> {
        self.buckets.iter().find(|b| b.key == key)
    }

    /// Column-wise sum over every bucket.
    pub fn totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.columns.len()];
        for bucket in &self.buckets {
            for (slot, value) in totals.iter_mut().zip(&bucket.sums) {
                *slot += value;
            }
        }
        totals
    }

    /// Sum of the derived per-bucket totals, when the report has them.
    pub fn totals_row_total(&self) -> Option<f64> {
        self.total_column?;
        Some(self.buckets.iter().filter_map(|b| b.total).fold(0.0, |acc, t| acc + t))
    }

    /// Sum of every column of every bucket.
    pub fn grand_total(&self) -> f64 {
        self.totals().iter().fold(0.0, |acc, t| acc + t)
    }

    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Group `records` by the rule's key, in first-seen order.
///
/// Groups with no records are not reported.
pub fn aggregate<R, B>(records: &[&R], rule: &B) -> AggregateReport
where
    B: BucketRule<R>,
{
    aggregate_with_groups(records, rule, std::iter::empty())
}

/// Like [`aggregate`], but `known` groups are always reported, first and in
/// the order given, even when no record falls into them.
pub fn aggregate_with_groups<R, B, I>(records: &[&R], rule: &B, known: I) -> AggregateReport
where
    B: BucketRule<R>,
    I: IntoIterator<Item = String>,
{
    let width = rule.columns().len();
    let mut buckets: Vec<AggregateBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut slot_for = |key: String, buckets: &mut Vec<AggregateBucket>| -> usize {
        *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(AggregateBucket {
                key,
                count: 0,
                sums: vec![0.0; width],
                total: None,
            });
            buckets.len() - 1
        })
    };

    for key in known {
        slot_for(key, &mut buckets);
    }

    for record in records {
        let idx = slot_for(rule.group_key(record), &mut buckets);
        let bucket = &mut buckets[idx];
        bucket.count += 1;
        rule.contribute(record, &mut bucket.sums);
    }

    if rule.total_column().is_some() {
        for bucket in &mut buckets {
            bucket.total = Some(rule.row_total(&bucket.sums));
        }
    }

    tracing::debug!(
        records = records.len(),
        buckets = buckets.len(),
        "aggregate computed"
    );

    AggregateReport {
        columns: rule.columns().to_vec(),
        total_column: rule.total_column(),
        buckets,
    }
}

pub const AGING_COLUMNS: [&str; 4] = ["current", "30 days", "60 days", "90+ days"];

/// Receivables aging bucket of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgingBucket {
    Current,
    Days30,
    Days60,
    Days90Plus,
}

impl AgingBucket {
    pub fn column(self) -> usize {
        match self {
            AgingBucket::Current => 0,
            AgingBucket::Days30 => 1,
            AgingBucket::Days60 => 2,
            AgingBucket::Days90Plus => 3,
        }
    }
}

/// Outstanding balance per customer, bucketed by invoice status.
///
/// With an `as_of` date, overdue invoices whose due date is more than 90 days
/// earlier move to the 90+ column.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgingRule {
    pub as_of: Option<NaiveDate>,
}

impl AgingRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_of(as_of: NaiveDate) -> Self {
        Self { as_of: Some(as_of) }
    }

    pub fn bucket_for(&self, invoice: &Invoice) -> AgingBucket {
        match invoice.status {
            InvoiceStatus::Pending | InvoiceStatus::Paid => AgingBucket::Current,
            InvoiceStatus::Partial => AgingBucket::Days30,
            InvoiceStatus::Overdue => {
                if self.days_past_due(invoice).is_some_and(|days| days > 90) {
                    AgingBucket::Days90Plus
                } else {
                    AgingBucket::Days60
                }
            }
        }
    }

    fn days_past_due(&self, invoice: &Invoice) -> Option<i64> {
        let as_of = self.as_of?;
        let due = invoice.due_date.as_deref()?;
        let due = NaiveDate::parse_from_str(due.trim(), DATE_FORMAT).ok()?;
        Some((as_of - due).num_days())
    }
}

impl BucketRule<Invoice> for AgingRule {
    fn columns(&self) -> &[&'static str] {
        &AGING_COLUMNS
    }

    fn group_key(&self, invoice: &Invoice) -> String {
        invoice.customer_id.clone()
    }

    fn contribute(&self, invoice: &Invoice, sums: &mut [f64]) {
        sums[self.bucket_for(invoice).column()] += invoice.outstanding;
    }
}

/// Stock quantity and value per product category.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockRule;

impl BucketRule<Product> for StockRule {
    fn columns(&self) -> &[&'static str] {
        &["quantity", "value"]
    }

    fn group_key(&self, product: &Product) -> String {
        product.category.clone()
    }

    fn contribute(&self, product: &Product, sums: &mut [f64]) {
        sums[0] += product.quantity;
        sums[1] += product.value();
    }

    fn total_column(&self) -> Option<&'static str> {
        None
    }
}

/// Debit and credit per account type; the derived total is the balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceRule;

impl BucketRule<LedgerEntry> for BalanceRule {
    fn columns(&self) -> &[&'static str] {
        &["debit", "credit"]
    }

    fn group_key(&self, entry: &LedgerEntry) -> String {
        entry.account_type.as_str().to_string()
    }

    fn contribute(&self, entry: &LedgerEntry, sums: &mut [f64]) {
        sums[0] += entry.debit;
        sums[1] += entry.credit;
    }

    fn total_column(&self) -> Option<&'static str> {
        Some("balance")
    }

    fn row_total(&self, sums: &[f64]) -> f64 {
        sums[0] - sums[1]
    }
}
