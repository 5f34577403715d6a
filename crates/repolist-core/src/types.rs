//! Common types used throughout repolist-core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repository metadata from GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Primary language
    pub language: Option<String>,

    /// Star count
    pub stargazers_count: u64,

    /// Fork count
    pub forks_count: u64,

    /// Last updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Get the repository description or an empty string if `None`.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Get the language label or an empty string if `None`.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}

/// How fetched repositories are ordered before rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Case-insensitive by name
    #[default]
    Name,

    /// Keep the order the API returned
    Api,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Name => f.write_str("name"),
            SortOrder::Api => f.write_str("api"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortOrder::Name),
            "api" => Ok(SortOrder::Api),
            other => Err(format!("unknown sort order `{}` (expected `name` or `api`)", other)),
        }
    }
}

/// What the target shows when the fetch fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Leave the loading indicator in place
    #[default]
    KeepLoading,

    /// Replace the loading indicator with an error message
    ShowError,
}

impl ErrorPolicy {
    /// State the target is left in after a failed fetch
    pub fn failure_state(&self) -> ListerState {
        match self {
            ErrorPolicy::KeepLoading => ListerState::Loading,
            ErrorPolicy::ShowError => ListerState::Failed,
        }
    }
}

/// Observable state of a render target driven by the lister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListerState {
    /// Loading indicator written, fetch not resolved
    Loading,

    /// Repository list written
    Rendered,

    /// Error message written (only with `ErrorPolicy::ShowError`)
    Failed,
}
