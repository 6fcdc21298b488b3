use serde::{Deserialize, Serialize};
use std::fmt;

use super::{require_text, Record};
use crate::error::Result;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Accountant,
    Viewer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Accountant => "accountant",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard login, filterable by role.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Record for User {
    const ENTITY: &'static str = "user";

    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.role.as_str())
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::ENTITY, &self.id, "id", &self.id)?;
        require_text(Self::ENTITY, &self.id, "name", &self.name)?;
        require_text(Self::ENTITY, &self.id, "email", &self.email)
    }
}
