use serde::{Deserialize, Serialize};

use super::{require_text, Record};
use crate::error::Result;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl Record for Customer {
    const ENTITY: &'static str = "customer";

    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ]
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::ENTITY, &self.id, "id", &self.id)?;
        require_text(Self::ENTITY, &self.id, "name", &self.name)?;
        require_text(Self::ENTITY, &self.id, "email", &self.email)
    }
}
