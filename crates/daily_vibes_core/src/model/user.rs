//! Fixed user catalog for multi-user journals.
//!
//! # Invariants
//! - A catalog is never empty.
//! - Names are trimmed, non-blank, and unique.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Names offered by the user picker when nothing else is configured.
pub const DEFAULT_USERS: [&str; 3] = ["Shin", "Zaw", "Cho"];

/// Validation error raised while building a `UserCatalog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    BlankName,
    Duplicate(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "user catalog must contain at least one name"),
            Self::BlankName => write!(f, "user catalog contains a blank name"),
            Self::Duplicate(name) => write!(f, "user catalog lists `{name}` more than once"),
        }
    }
}

impl Error for CatalogError {}

/// Closed, ordered set of selectable user names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCatalog {
    names: Vec<String>,
}

impl UserCatalog {
    /// Builds a catalog, preserving the given order.
    pub fn new<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(CatalogError::BlankName);
            }
            if normalized.iter().any(|existing| existing == name) {
                return Err(CatalogError::Duplicate(name.to_string()));
            }
            normalized.push(name.to_string());
        }

        if normalized.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { names: normalized })
    }

    /// First name in picker order; the default selection.
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for UserCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_USERS.iter().map(|name| name.to_string()).collect(),
        }
    }
}
