//! HTML markup for the repository list

use crate::error::{Error, Result};
use crate::humanize;
use crate::types::Repository;
use chrono::{DateTime, Utc};
use reqwest::Url;
use std::fmt::Write;

/// Builds outbound github.com links for one account
#[derive(Debug, Clone)]
pub struct Links {
    base: Url,
    owner: String,
}

impl Links {
    /// Create links rooted at `web_url` for repositories owned by `owner`
    pub fn new(web_url: &str, owner: &str) -> Result<Self> {
        let base = Url::parse(web_url)
            .map_err(|e| Error::Config(format!("Invalid web URL {}: {}", web_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("Web URL cannot be a base: {}", web_url)));
        }

        Ok(Self {
            base,
            owner: owner.to_string(),
        })
    }

    /// `{web}/{owner}/{repo}`
    pub fn repository(&self, repo: &str) -> String {
        self.build(&[repo])
    }

    /// `{web}/{owner}/{repo}/stargazers`
    pub fn stargazers(&self, repo: &str) -> String {
        self.build(&[repo, "stargazers"])
    }

    /// `{web}/{owner}/{repo}/network`
    pub fn network(&self, repo: &str) -> String {
        self.build(&[repo, "network"])
    }

    fn build(&self, tail: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.owner).extend(tail);
        }
        url.into()
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Placeholder shown while the fetch is in flight
pub fn loading_html(username: &str) -> String {
    format!(
        r#"<span class="repolist">Querying GitHub for {}'s repositories...</span>"#,
        escape(username)
    )
}

/// Message shown in place of the list when the fetch fails
pub fn error_html(username: &str, message: &str) -> String {
    format!(
        r#"<span class="repolist repolist-error">Could not load {}'s repositories: {}</span>"#,
        escape(username),
        escape(message)
    )
}

/// Render the selected repositories as a `ul.repolist`
pub fn list_html(repos: &[&Repository], links: &Links, now: DateTime<Utc>) -> String {
    let mut html = String::from(r#"<ul class="repolist">"#);
    for repo in repos {
        write_item(&mut html, repo, links, now);
    }
    html.push_str("</ul>");
    html
}

fn write_item(html: &mut String, repo: &Repository, links: &Links, now: DateTime<Utc>) {
    let name = escape(&repo.name);

    // Writing into a String cannot fail
    let _ = write!(
        html,
        concat!(
            "<li>",
            r#"<ul class="repo-stats">"#,
            r#"<li class="language">{language}</li>"#,
            r#"<li class="stargazers"><a href="{stargazers_url}"><span></span>{stars}</a></li>"#,
            r#"<li class="forks"><a href="{network_url}"><span></span>{forks}</a></li>"#,
            "</ul>",
            r#"<span class="repolist-icon"></span>"#,
            r#"<h3 class="repolist-name"><a href="{repo_url}">{name}</a></h3>"#,
            r#"<div class="body"><p>{description}</p>"#,
            r#"<p class="updated-at">Last updated {updated}</p></div>"#,
            "</li>",
        ),
        language = escape(repo.language()),
        stargazers_url = escape(&links.stargazers(&repo.name)),
        stars = repo.stargazers_count,
        network_url = escape(&links.network(&repo.name)),
        forks = repo.forks_count,
        repo_url = escape(&links.repository(&repo.name)),
        name = name,
        description = escape(repo.description()),
        updated = humanize::from_now(repo.updated_at, now),
    );
}
