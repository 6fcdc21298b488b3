use chrono::NaiveDate;
use ledgerview::view::{aggregate, total_pages, AgingRule, BalanceRule, StockRule};
use ledgerview::{
    Customer, DataView, ExportTable, FilterCriteria, Invoice, InvoiceStatus, LedgerEntry,
    Product, RecordStore,
};

fn customer(i: usize, city: &str) -> Customer {
    Customer {
        id: format!("c{i}"),
        name: format!("Customer {i}"),
        email: format!("c{i}@example.com"),
        phone: format!("+91 90000 {i:05}"),
        address: format!("{i} Main Road, {city}"),
    }
}

/// 12 customers, 7 of them in Pune.
fn customer_store() -> RecordStore<Customer> {
    let mut store = RecordStore::new();
    for i in 1..=12 {
        let city = if i <= 7 { "Pune" } else { "Chennai" };
        store.add(customer(i, city)).unwrap();
    }
    store
}

fn invoice(number: &str, customer: &str, date: &str, status: InvoiceStatus, out: f64) -> Invoice {
    Invoice {
        number: number.to_string(),
        customer_id: customer.to_string(),
        customer: format!("Customer {customer}"),
        date: date.to_string(),
        due_date: None,
        amount: out.max(100.0),
        outstanding: out,
        status,
    }
}

fn invoice_store() -> RecordStore<Invoice> {
    RecordStore::from_records(vec![
        invoice("INV-1", "c1", "2024-01-05", InvoiceStatus::Pending, 10000.0),
        invoice("INV-2", "c2", "2024-01-20", InvoiceStatus::Partial, 20000.0),
        invoice("INV-3", "c1", "2024-02-11", InvoiceStatus::Overdue, 35000.0),
        invoice("INV-4", "c3", "2024-03-01", InvoiceStatus::Paid, 0.0),
        invoice("INV-5", "c2", "31/03/2024", InvoiceStatus::Pending, 500.0),
    ])
    .unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn search_scenario_pages_seven_matches_into_five_and_two() {
    let store = customer_store();
    let mut view = DataView::new(5).unwrap();
    view.set_criteria(FilterCriteria::new().query("PUNE"));

    let first = view.page(store.list());
    assert_eq!(first.total_count, 7);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 5);

    view.go_to(store.list(), 2);
    let second = view.page(store.list());
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[1].id, "c7");
}

#[test]
fn filtered_rows_are_an_ordered_subsequence() {
    let store = customer_store();
    let criteria = [
        FilterCriteria::new(),
        FilterCriteria::new().query("chennai"),
        FilterCriteria::new().query("1"),
        FilterCriteria::new().query("no such customer"),
    ];
    for c in &criteria {
        let rows = ledgerview::view::filter(store.list(), c);
        let positions = rows
            .iter()
            .map(|r| store.list().iter().position(|s| s.id == r.id).unwrap());
        let mut last = None;
        for pos in positions {
            assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);
        }
    }
}

#[test]
fn empty_criteria_returns_the_whole_store() {
    let store = customer_store();
    let rows = ledgerview::view::filter(store.list(), &FilterCriteria::new());
    let expected: Vec<&Customer> = store.list().iter().collect();
    assert_eq!(rows, expected);
}

#[test]
fn pages_concatenate_back_to_the_filtered_sequence() {
    let store = customer_store();
    for page_size in 1..=13 {
        let mut view = DataView::new(page_size).unwrap();
        view.set_criteria(FilterCriteria::new().query("road"));
        let filtered = view.filtered(store.list());
        let pages = total_pages(filtered.len(), page_size);
        let mut joined = Vec::new();
        for n in 1..=pages {
            view.go_to(store.list(), n);
            joined.extend(view.page(store.list()).items);
        }
        assert_eq!(joined, filtered, "page size {page_size}");
    }
}

#[test]
fn page_count_matches_ceiling() {
    assert_eq!(total_pages(0, 5), 1);
    for count in 1..50 {
        for size in 1..12 {
            assert_eq!(total_pages(count, size), (count + size - 1) / size);
        }
    }
}

#[test]
fn add_update_remove_restores_the_store() {
    let mut store = customer_store();
    let before = store.list().to_vec();

    let added = customer(99, "Nagpur");
    store.add(added.clone()).unwrap();
    let mut changed = added.clone();
    changed.name = "Renamed".to_string();
    assert!(store.update(&added.id, changed).unwrap());
    assert_eq!(store.get("c99").unwrap().name, "Renamed");
    assert!(store.remove(&added.id).is_some());

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn aging_scenario_buckets_sixty_five_thousand() {
    let store = invoice_store();
    let records: Vec<&Invoice> = store.list()[..4].iter().collect();
    let report = aggregate(&records, &AgingRule::new());

    let totals = report.totals();
    let current = report.column("current").unwrap();
    let sixty = report.column("60 days").unwrap();
    assert_eq!(totals[current], 10000.0);
    assert_eq!(totals[sixty], 35000.0);
    assert_eq!(report.grand_total(), 65000.0);
}

#[test]
fn aggregate_conserves_the_filtered_total() {
    let store = invoice_store();
    let mut view = DataView::new(10).unwrap();
    let criterias = [
        FilterCriteria::new(),
        FilterCriteria::new().from(day("2024-01-15")),
        FilterCriteria::new().category("pending"),
        FilterCriteria::new().query("c2"),
    ];
    for criteria in criterias {
        view.set_criteria(criteria);
        let filtered = view.filtered(store.list());
        let expected: f64 = filtered.iter().map(|i| i.outstanding).sum();
        let report = view.aggregate(store.list(), &AgingRule::new());
        assert_eq!(report.grand_total(), expected);
        assert_eq!(report.record_count(), filtered.len());
    }
}

#[test]
fn malformed_invoice_date_is_dropped_only_by_date_ranges() {
    let store = invoice_store();
    let mut view = DataView::new(10).unwrap();
    assert_eq!(view.filtered(store.list()).len(), 5);

    view.set_criteria(FilterCriteria::new().from(day("2024-01-01")).to(day("2024-12-31")));
    let numbers: Vec<_> = view
        .filtered(store.list())
        .iter()
        .map(|i| i.number.as_str())
        .collect();
    assert_eq!(numbers, ["INV-1", "INV-2", "INV-3", "INV-4"]);
}

#[test]
fn stock_and_balance_reports_conserve_totals() {
    let products = RecordStore::from_records(vec![
        Product {
            sku: "A".into(),
            name: "Bolt".into(),
            category: "hardware".into(),
            quantity: 10.0,
            unit_price: 3.0,
        },
        Product {
            sku: "B".into(),
            name: "Wire".into(),
            category: "electrical".into(),
            quantity: 2.0,
            unit_price: 50.0,
        },
    ])
    .unwrap();
    let view = DataView::new(10).unwrap();
    let stock = view.aggregate(products.list(), &StockRule);
    let value = stock.column("value").unwrap();
    assert_eq!(stock.totals()[value], 130.0);

    let entry = |id: &str, debit: f64, credit: f64| LedgerEntry {
        id: id.into(),
        date: "2024-02-01".into(),
        account: "Bank".into(),
        account_type: ledgerview::record::AccountType::Asset,
        description: "transfer".into(),
        debit,
        credit,
    };
    let ledger =
        RecordStore::from_records(vec![entry("1", 500.0, 0.0), entry("2", 0.0, 120.0)]).unwrap();
    let balances = view.aggregate(ledger.list(), &BalanceRule);
    assert_eq!(balances.totals(), vec![500.0, 120.0]);
    assert_eq!(balances.totals_row_total(), Some(380.0));
}

#[test]
fn export_uses_the_filtered_rows_not_the_store() {
    let store = customer_store();
    let mut view = DataView::new(5).unwrap();
    view.set_criteria(FilterCriteria::new().query("chennai"));
    let rows = view.filtered(store.list());
    let table = ExportTable::from_records("Customers", &rows);

    assert_eq!(table.rows.len(), 5);
    assert!(table.rows.iter().all(|r| r.len() == table.headers.len()));
    assert_eq!(table.rows[0][0], ledgerview::Cell::text("c8"));
}
