//! # repolist-core
//!
//! Core library for repolist - render a GitHub user's repositories as HTML.
//!
//! This library provides:
//! - GitHub API integration
//! - Sorting and selection of repositories
//! - HTML rendering with relative "updated" times
//! - Render targets and the loading/rendered lister
//! - Configuration management

pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod humanize;
pub mod lister;
pub mod render;
pub mod target;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use github::{GitHubClient, RepositorySource};
pub use lister::{Lister, ListerConfig};
pub use target::{FileTarget, MemoryTarget, RenderTarget};
pub use types::{ErrorPolicy, ListerState, Repository, SortOrder};
