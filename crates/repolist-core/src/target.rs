//! Render targets the lister writes into

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A container whose whole contents are replaced on every write.
///
/// Targets are owned by the caller and shared with the lister by reference,
/// so implementations use interior mutability.
pub trait RenderTarget: Send + Sync {
    /// Replace the current contents with `html`
    fn replace(&self, html: &str) -> Result<()>;
}

/// In-memory target; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    inner: Arc<Mutex<String>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current contents
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RenderTarget for MemoryTarget {
    fn replace(&self, html: &str) -> Result<()> {
        let mut contents = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        contents.clear();
        contents.push_str(html);
        Ok(())
    }
}

/// Target backed by a file that is rewritten on every replace
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for FileTarget {
    fn replace(&self, html: &str) -> Result<()> {
        debug!("Writing {} bytes to {}", html.len(), self.path.display());
        std::fs::write(&self.path, html)?;
        Ok(())
    }
}
