use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use ledgerview::config::{
    config_dir, init_config_dir, load_config, load_dataset, resolve_output_dir, Config,
};
use ledgerview::error::{Result, ViewError};
use ledgerview::export::{
    format_amount, render_text, Cell, ExportTable, Exporter, JsonExporter, Tabular, TypstExporter,
};
use ledgerview::record::Record;
use ledgerview::store::Session;
use ledgerview::view::{
    aggregate_with_groups, parse_date_arg, AgingRule, BalanceRule, BucketRule, DataView,
    FilterCriteria, Page, StockRule,
};

#[derive(Parser)]
#[command(name = "ledgerview")]
#[command(version, about = "Search, page, report and export accounting records", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.ledgerview or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with config.toml and seed data.toml
    Init,

    /// Show company, page size and record counts
    Status,

    /// Show one page of an entity list
    List {
        entity: Entity,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show one page of an aggregate report
    Report {
        kind: ReportKind,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Export a filtered list or report to PDF or JSON
    Export {
        target: ExportTarget,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pdf)]
        format: Format,

        /// Custom output file path (default: output_dir/<title>-<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct ViewArgs {
    /// Case-insensitive text search over the entity's searchable fields
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact match on status, category, role or account type
    #[arg(long)]
    category: Option<String>,

    /// Only records dated on or after this day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Only records dated on or before this day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Page number, 1-based (export: restrict to this page)
    #[arg(short, long)]
    page: Option<usize>,

    /// Rows per page (default: [view] page_size from config.toml)
    #[arg(long)]
    page_size: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
struct ReportArgs {
    /// Aging reference date; overdue invoices due over 90 days earlier age to 90+
    #[arg(long)]
    as_of: Option<String>,

    /// Include every known group, even with nothing in range
    #[arg(long)]
    all_groups: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Entity {
    Customers,
    Users,
    Products,
    Invoices,
    Ledger,
}

impl Entity {
    fn title(self) -> &'static str {
        match self {
            Entity::Customers => "Customers",
            Entity::Users => "Users",
            Entity::Products => "Products",
            Entity::Invoices => "Invoices",
            Entity::Ledger => "Ledger",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportKind {
    /// Outstanding receivables per customer by age
    Aging,
    /// Stock quantity and value per product category
    Stock,
    /// Debit, credit and balance per account type
    Balances,
}

impl ReportKind {
    fn title(self) -> &'static str {
        match self {
            ReportKind::Aging => "Aging Report",
            ReportKind::Stock => "Stock Report",
            ReportKind::Balances => "Account Balances",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportTarget {
    Customers,
    Users,
    Products,
    Invoices,
    Ledger,
    Aging,
    Stock,
    Balances,
}

impl ExportTarget {
    fn source(self) -> Source {
        match self {
            ExportTarget::Customers => Source::List(Entity::Customers),
            ExportTarget::Users => Source::List(Entity::Users),
            ExportTarget::Products => Source::List(Entity::Products),
            ExportTarget::Invoices => Source::List(Entity::Invoices),
            ExportTarget::Ledger => Source::List(Entity::Ledger),
            ExportTarget::Aging => Source::Report(ReportKind::Aging),
            ExportTarget::Stock => Source::Report(ReportKind::Stock),
            ExportTarget::Balances => Source::Report(ReportKind::Balances),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Source {
    List(Entity),
    Report(ReportKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Pdf,
    Json,
}

/// Where a rendered table sits in the full sequence.
struct PageInfo {
    page: usize,
    total_pages: usize,
    total_count: usize,
    range: Option<(usize, usize)>,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            range: page.range(),
        }
    }
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LEDGERVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Status => cmd_status(&cfg_dir),
        Commands::List { entity, view } => cmd_list(&cfg_dir, entity, &view),
        Commands::Report { kind, view, report } => cmd_report(&cfg_dir, kind, &view, &report),
        Commands::Export {
            target,
            format,
            output,
            view,
            report,
        } => cmd_export(&cfg_dir, target.source(), format, output, &view, &report),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    init_config_dir(cfg_dir)?;

    println!("Initialized ledgerview config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your company details:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Replace the seed records:   $EDITOR {}/data.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then browse them:");
    println!("  ledgerview list invoices --search acme");

    Ok(())
}

/// Load config and mount a fresh session from the seed data
fn load_session(cfg_dir: &Path) -> Result<(Config, Session)> {
    if !cfg_dir.exists() {
        return Err(ViewError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    let config = load_config(cfg_dir)?;
    let session = Session::from_dataset(load_dataset(cfg_dir)?)?;
    Ok((config, session))
}

fn cmd_status(cfg_dir: &Path) -> Result<()> {
    let (config, session) = load_session(cfg_dir)?;

    println!("Ledgerview Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("Company:          {}", config.company.name);
    if let Some(gstin) = &config.company.gstin {
        println!("GSTIN:            {}", gstin);
    }
    println!("Page size:        {}", config.view.page_size);
    println!("Customers:        {}", session.customers.len());
    println!("Users:            {}", session.users.len());
    println!("Products:         {}", session.products.len());
    println!("Invoices:         {}", session.invoices.len());
    println!("Ledger entries:   {}", session.ledger.len());

    Ok(())
}

/// Turn CLI flags into view state, validating dates and page size first
fn build_view(config: &Config, args: &ViewArgs) -> Result<DataView> {
    let mut criteria = FilterCriteria::new().query(args.search.clone());
    if let Some(category) = &args.category {
        criteria = criteria.category(category.clone());
    }
    if let Some(from) = &args.from {
        criteria = criteria.from(parse_date_arg("--from", from)?);
    }
    if let Some(to) = &args.to {
        criteria = criteria.to(parse_date_arg("--to", to)?);
    }

    let mut view = DataView::new(config.view.page_size)?;
    if let Some(page_size) = args.page_size {
        view.set_page_size(page_size)?;
    }
    view.set_criteria(criteria);
    view.set_page(args.page.unwrap_or(1));
    Ok(view)
}

fn list_table<R: Record + Tabular>(
    title: &str,
    records: &[R],
    view: &DataView,
    whole: bool,
) -> (ExportTable, PageInfo) {
    let rows = view.filtered(records);
    let page = view.paginate(rows.clone());
    let info = PageInfo::from(&page);
    let table = if whole {
        ExportTable::from_records(title, &rows)
    } else {
        ExportTable::from_records(title, &page.items)
    };
    (table, info)
}

fn entity_table(
    session: &Session,
    entity: Entity,
    view: &DataView,
    whole: bool,
) -> (ExportTable, PageInfo) {
    let title = entity.title();
    match entity {
        Entity::Customers => list_table(title, session.customers.list(), view, whole),
        Entity::Users => list_table(title, session.users.list(), view, whole),
        Entity::Products => list_table(title, session.products.list(), view, whole),
        Entity::Invoices => list_table(title, session.invoices.list(), view, whole),
        Entity::Ledger => list_table(title, session.ledger.list(), view, whole),
    }
}

#[allow(clippy::too_many_arguments)]
fn bucket_table<R: Record, B: BucketRule<R>>(
    title: &str,
    key_header: &str,
    records: &[R],
    rule: &B,
    known: Vec<String>,
    view: &DataView,
    whole: bool,
    label: impl Fn(&str) -> String,
) -> (ExportTable, PageInfo) {
    let report = aggregate_with_groups(&view.filtered(records), rule, known);
    let page = view.paginate(report.buckets.iter().collect());
    let info = PageInfo::from(&page);
    let table = if whole {
        let all: Vec<_> = report.buckets.iter().collect();
        ExportTable::from_report(title, key_header, &report, &all, label)
    } else {
        ExportTable::from_report(title, key_header, &report, &page.items, label)
    };
    (table, info)
}

fn report_table(
    session: &Session,
    kind: ReportKind,
    view: &DataView,
    args: &ReportArgs,
    whole: bool,
) -> Result<(ExportTable, PageInfo)> {
    let title = kind.title();
    let table = match kind {
        ReportKind::Aging => {
            let rule = match &args.as_of {
                Some(date) => AgingRule::as_of(parse_date_arg("--as-of", date)?),
                None => AgingRule::new(),
            };
            let known = if args.all_groups {
                session.customers.list().iter().map(|c| c.id.clone()).collect()
            } else {
                Vec::new()
            };
            bucket_table(
                title,
                "customer",
                session.invoices.list(),
                &rule,
                known,
                view,
                whole,
                |key| {
                    session
                        .customers
                        .get(key)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| key.to_string())
                },
            )
        }
        ReportKind::Stock => {
            let known = if args.all_groups {
                let mut categories: Vec<String> = Vec::new();
                for product in session.products.list() {
                    if !categories.contains(&product.category) {
                        categories.push(product.category.clone());
                    }
                }
                categories
            } else {
                Vec::new()
            };
            bucket_table(
                title,
                "category",
                session.products.list(),
                &StockRule,
                known,
                view,
                whole,
                |key| key.to_string(),
            )
        }
        ReportKind::Balances => {
            let known = if args.all_groups {
                ["asset", "liability", "equity", "income", "expense"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            } else {
                Vec::new()
            };
            bucket_table(
                title,
                "account type",
                session.ledger.list(),
                &BalanceRule,
                known,
                view,
                whole,
                |key| key.to_string(),
            )
        }
    };
    Ok(table)
}

fn print_page(table: &ExportTable, info: &PageInfo) {
    if table.rows.is_empty() {
        println!("No {} match the given filters.", table.title.to_lowercase());
        return;
    }
    println!("{}", render_text(table));
    if let Some((first, last)) = info.range {
        println!(
            "Showing {}-{} of {} (page {} of {})",
            first, last, info.total_count, info.page, info.total_pages
        );
    }
}

fn cmd_list(cfg_dir: &Path, entity: Entity, args: &ViewArgs) -> Result<()> {
    let (config, session) = load_session(cfg_dir)?;
    let view = build_view(&config, args)?;
    let (table, info) = entity_table(&session, entity, &view, false);
    print_page(&table, &info);
    Ok(())
}

fn cmd_report(
    cfg_dir: &Path,
    kind: ReportKind,
    args: &ViewArgs,
    report: &ReportArgs,
) -> Result<()> {
    let (config, session) = load_session(cfg_dir)?;
    let view = build_view(&config, args)?;
    let (table, info) = report_table(&session, kind, &view, report, false)?;

    println!("{}", table.title);
    print_page(&table, &info);

    // Footer's last cell is the grand total of the report's derived column
    if let (Some(footer), ReportKind::Aging) = (&table.footer, kind) {
        if let Some(Cell::Amount(total)) = footer.last() {
            println!(
                "Total outstanding: {}{}",
                config.company.currency_symbol,
                format_amount(*total)
            );
        }
    }
    Ok(())
}

fn cmd_export(
    cfg_dir: &Path,
    source: Source,
    format: Format,
    output: Option<PathBuf>,
    args: &ViewArgs,
    report: &ReportArgs,
) -> Result<()> {
    let (config, session) = load_session(cfg_dir)?;
    let view = build_view(&config, args)?;
    let whole = args.page.is_none();

    let (table, _) = match source {
        Source::List(entity) => entity_table(&session, entity, &view, whole),
        Source::Report(kind) => report_table(&session, kind, &view, report, whole)?,
    };

    let exporter: Box<dyn Exporter> = match format {
        Format::Pdf => Box::new(TypstExporter::new(config.company.name.clone())),
        Format::Json => Box::new(JsonExporter),
    };

    let path = match output {
        Some(path) => path,
        None => {
            let output_dir = resolve_output_dir(&config.export.output_dir, cfg_dir);
            std::fs::create_dir_all(&output_dir)?;
            let today: NaiveDate = chrono::Local::now().date_naive();
            output_dir.join(table.suggested_file_name(today, exporter.extension()))
        }
    };

    exporter.export(&table, &path)?;

    println!("Exported {}", table.title);
    println!("  Rows:  {}", table.rows.len());
    println!("  Saved: {}", path.display());

    Ok(())
}
