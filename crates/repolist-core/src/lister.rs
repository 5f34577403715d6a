//! The repository lister: loading indicator, one fetch, one render

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::{select_for_render, sort_repositories};
use crate::github::RepositorySource;
use crate::render::{self, Links};
use crate::target::RenderTarget;
use crate::types::{ErrorPolicy, ListerState, Repository, SortOrder};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lister options
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// Web base URL for outbound links
    pub web_url: String,

    /// Account used in outbound links; `None` uses the listed username
    pub link_owner: Option<String>,

    /// Ordering applied before selection
    pub sort: SortOrder,

    /// What the target shows after a failed fetch
    pub error_policy: ErrorPolicy,

    /// Give up on the fetch after this long; `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ListerConfig {
    /// Build lister options from the file configuration
    pub fn from_config(config: &Config) -> Self {
        let link_owner = Some(config.render.link_owner.clone()).filter(|o| !o.is_empty());

        Self {
            web_url: config.github.web_url.clone(),
            link_owner,
            sort: config.render.sort,
            error_policy: config.render.error_policy,
            timeout: config.github.timeout(),
        }
    }

    fn links_for(&self, username: &str) -> Result<Links> {
        Links::new(&self.web_url, self.link_owner.as_deref().unwrap_or(username))
    }
}

/// Sort, select and render fetched repositories for `username`
pub fn render_repositories(
    config: &ListerConfig,
    mut repos: Vec<Repository>,
    username: &str,
    count: Option<usize>,
    now: DateTime<Utc>,
) -> Result<String> {
    let links = config.links_for(username)?;

    sort_repositories(&mut repos, config.sort);
    let selected = select_for_render(&repos, username, count);
    debug!(
        "Selected {} of {} repositories for {}",
        selected.len(),
        repos.len(),
        username
    );

    Ok(render::list_html(&selected, &links, now))
}

/// Fills a render target with a user's repositories
pub struct Lister<S> {
    source: S,
    config: ListerConfig,
}

impl<S: RepositorySource> Lister<S> {
    pub fn new(source: S, config: ListerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    /// Replace `target` with a loading indicator, then with the rendered list.
    ///
    /// The loading indicator is written before the first await point. On a
    /// failed fetch the error is returned and the target is left in
    /// `self.config().error_policy.failure_state()`.
    pub async fn list(
        &self,
        target: &dyn RenderTarget,
        username: &str,
        count: Option<usize>,
    ) -> Result<ListerState> {
        if username.trim().is_empty() {
            return Err(Error::InvalidUsername(username.to_string()));
        }
        self.config.links_for(username)?;

        target.replace(&render::loading_html(username))?;
        info!("Querying GitHub for {}'s repositories", username);

        let repos = match self.fetch(username).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!("Failed to fetch repositories for {}: {}", username, e);
                if self.config.error_policy == ErrorPolicy::ShowError {
                    let html = render::error_html(username, &e.to_string());
                    if let Err(write_err) = target.replace(&html) {
                        warn!("Failed to write error message for {}: {}", username, write_err);
                    }
                }
                return Err(e);
            }
        };

        let total = repos.len();
        let html = render_repositories(&self.config, repos, username, count, Utc::now())?;
        target.replace(&html)?;

        info!("Rendered repositories for {} ({} fetched)", username, total);
        Ok(ListerState::Rendered)
    }

    async fn fetch(&self, username: &str) -> Result<Vec<Repository>> {
        let request = self.source.list_user_repositories(username);

        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => request.await,
        }
    }
}
