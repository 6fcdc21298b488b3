mod company;
mod dataset;

pub use company::{Company, Config, ExportSettings, ViewSettings};
pub use dataset::Dataset;

use crate::error::{Result, ViewError};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.ledgerview/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "ledgerview") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.ledgerview/
    let home = dirs_home().ok_or_else(|| {
        ViewError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".ledgerview"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Relative output dirs resolve against the config directory.
pub fn resolve_output_dir(output_dir: &str, config_dir: &Path) -> PathBuf {
    let path = expand_path(output_dir);
    if path.is_absolute() {
        path
    } else {
        config_dir.join(path)
    }
}

fn load_toml<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(ViewError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ViewError::ConfigParse { path, source: e })
}

/// Load and validate config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let config: Config = load_toml(config_dir.join("config.toml"))?;
    config.validate()?;
    Ok(config)
}

/// Load the seed records from data.toml
pub fn load_dataset(config_dir: &Path) -> Result<Dataset> {
    load_toml(config_dir.join("data.toml"))
}

/// Write the template files into a fresh config directory.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if config_dir.exists() {
        return Err(ViewError::AlreadyInitialized(config_dir.to_path_buf()));
    }
    fs::create_dir_all(config_dir.join("output"))?;
    fs::write(config_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(config_dir.join("data.toml"), DATA_TEMPLATE)?;
    Ok(())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "Your Company Name"
currency_symbol = "₹"
# gstin = "27AAACR5055K1Z7"   # optional

[view]
page_size = 10

[export]
output_dir = "output"   # relative to this directory, or an absolute/~ path
"#;

/// Template content for data.toml
pub const DATA_TEMPLATE: &str = r#"# Seed records loaded into memory on every run.
# Amounts may be numbers or strings such as "1,20,000"; anything that
# does not parse is treated as 0.

[[customers]]
id = "c1"
name = "Acme Traders"
email = "accounts@acme.example"
phone = "+91 98200 11111"
address = "12 MG Road, Pune"

[[customers]]
id = "c2"
name = "Globex Industries"
email = "finance@globex.example"
phone = "+91 98200 22222"
address = "4 Park Street, Kolkata"

[[customers]]
id = "c3"
name = "Initech Solutions"
email = "ap@initech.example"
phone = "+91 98200 33333"
address = "88 Brigade Road, Bengaluru"

[[customers]]
id = "c4"
name = "Umbrella Pharma"
email = "billing@umbrella.example"
address = "7 Marine Drive, Mumbai"

[[users]]
id = "u1"
name = "Asha Rao"
email = "asha@yourcompany.example"
role = "admin"

[[users]]
id = "u2"
name = "Vikram Shah"
email = "vikram@yourcompany.example"
role = "accountant"

[[users]]
id = "u3"
name = "Meera Iyer"
email = "meera@yourcompany.example"
role = "viewer"

[[products]]
sku = "HW-001"
name = "Steel Bolt M8"
category = "hardware"
quantity = 500
unit_price = 4.5

[[products]]
sku = "HW-002"
name = "Hex Nut M8"
category = "hardware"
quantity = 800
unit_price = 1.25

[[products]]
sku = "EL-001"
name = "Copper Wire 1.5mm"
category = "electrical"
quantity = 40
unit_price = "1,250.00"

[[products]]
sku = "PK-001"
name = "Carton Box Large"
category = "packaging"
quantity = 300
unit_price = 18

[[invoices]]
number = "INV-2024-001"
customer_id = "c1"
customer = "Acme Traders"
date = "2024-01-15"
due_date = "2024-02-14"
amount = 10000
outstanding = 10000
status = "pending"

[[invoices]]
number = "INV-2024-002"
customer_id = "c2"
customer = "Globex Industries"
date = "2024-02-03"
due_date = "2024-03-04"
amount = 45000
outstanding = 20000
status = "partial"

[[invoices]]
number = "INV-2024-003"
customer_id = "c1"
customer = "Acme Traders"
date = "2024-02-20"
due_date = "2024-03-21"
amount = 35000
outstanding = 35000
status = "overdue"

[[invoices]]
number = "INV-2024-004"
customer_id = "c3"
customer = "Initech Solutions"
date = "2024-03-05"
due_date = "2024-04-04"
amount = "1,20,000"
outstanding = 0
status = "paid"

[[ledger]]
id = "L1"
date = "2024-01-15"
account = "Accounts Receivable"
account_type = "asset"
description = "INV-2024-001 Acme Traders"
debit = 10000

[[ledger]]
id = "L2"
date = "2024-01-15"
account = "Sales"
account_type = "income"
description = "INV-2024-001 Acme Traders"
credit = 10000

[[ledger]]
id = "L3"
date = "2024-02-10"
account = "Office Rent"
account_type = "expense"
description = "February rent"
debit = 25000

[[ledger]]
id = "L4"
date = "2024-02-10"
account = "Bank"
account_type = "asset"
description = "February rent"
credit = 25000
"#;
