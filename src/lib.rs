pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod store;
pub mod view;

pub use config::{Company, Config, Dataset};
pub use error::{Result, ViewError};
pub use export::{Cell, ExportTable, Exporter, JsonExporter, Tabular, TypstExporter};
pub use record::{Customer, Invoice, InvoiceStatus, LedgerEntry, Product, Record, User};
pub use store::{RecordStore, Session};
pub use view::{DataView, FilterCriteria, Page, PageWindow};
