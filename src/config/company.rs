use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::view::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub company: Company,
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.view.page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        Ok(())
    }
}

/// Tenant shown in report headers.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub name: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub gstin: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewSettings {
    pub page_size: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExportSettings {
    pub output_dir: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}
