//! Repository ordering and selection

use crate::types::{Repository, SortOrder};

/// Order repositories in place
pub fn sort_repositories(repos: &mut [Repository], order: SortOrder) {
    match order {
        SortOrder::Name => repos.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortOrder::Api => {}
    }
}

/// Name of the GitHub Pages repository that is never listed
pub fn pages_repo_name(username: &str) -> String {
    format!("{}.github.com", username.to_lowercase())
}

/// Number of leading records considered for rendering.
///
/// A count of `N` considers `N + 1` records. `None` and `Some(0)` both mean
/// all of them.
pub fn selection_len(count: Option<usize>, len: usize) -> usize {
    match count {
        Some(n) if n > 0 => n.saturating_add(1).min(len),
        _ => len,
    }
}

/// Pick the records to render from an already sorted list
pub fn select_for_render<'a>(
    repos: &'a [Repository],
    username: &str,
    count: Option<usize>,
) -> Vec<&'a Repository> {
    let pages = pages_repo_name(username);

    repos[..selection_len(count, repos.len())]
        .iter()
        .filter(|r| r.name != pages)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            language: Some("Rust".to_string()),
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Utc::now(),
        }
    }

    fn names(repos: &[&Repository]) -> Vec<String> {
        repos.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_name() {
        let mut repos = vec![
            create_test_repo("zeta"),
            create_test_repo("Alpha"),
            create_test_repo("beta"),
        ];

        sort_repositories(&mut repos, SortOrder::Name);

        let sorted: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(sorted, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_sort_api_keeps_order() {
        let mut repos = vec![create_test_repo("zeta"), create_test_repo("alpha")];

        sort_repositories(&mut repos, SortOrder::Api);

        assert_eq!(repos[0].name, "zeta");
        assert_eq!(repos[1].name, "alpha");
    }

    #[test]
    fn test_pages_repo_name_lowercases() {
        assert_eq!(pages_repo_name("Alice"), "alice.github.com");
    }

    #[test]
    fn test_selection_len() {
        assert_eq!(selection_len(None, 10), 10);
        assert_eq!(selection_len(Some(0), 10), 10);
        assert_eq!(selection_len(Some(3), 10), 4);
        assert_eq!(selection_len(Some(9), 10), 10);
        assert_eq!(selection_len(Some(50), 10), 10);
        assert_eq!(selection_len(Some(usize::MAX), 2), 2);
    }

    #[test]
    fn test_select_count_considers_one_extra() {
        let repos: Vec<_> = (0..6).map(|i| create_test_repo(&format!("repo{}", i))).collect();

        let selected = select_for_render(&repos, "bob", Some(2));

        assert_eq!(names(&selected), vec!["repo0", "repo1", "repo2"]);
    }

    #[test]
    fn test_select_excludes_pages_repo() {
        let repos = vec![
            create_test_repo("alice.github.com"),
            create_test_repo("blog"),
            create_test_repo("dotfiles"),
        ];

        let selected = select_for_render(&repos, "Alice", None);

        assert_eq!(names(&selected), vec!["blog", "dotfiles"]);
    }

    #[test]
    fn test_select_pages_repo_uses_window_slot() {
        let repos = vec![
            create_test_repo("a"),
            create_test_repo("alice.github.com"),
            create_test_repo("b"),
            create_test_repo("c"),
        ];

        let selected = select_for_render(&repos, "alice", Some(2));

        assert_eq!(names(&selected), vec!["a", "b"]);
    }

    #[test]
    fn test_select_exclusion_is_case_sensitive_on_name() {
        let repos = vec![create_test_repo("Alice.github.com")];

        let selected = select_for_render(&repos, "alice", None);

        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_select_empty() {
        let selected = select_for_render(&[], "octocat", Some(5));
        assert!(selected.is_empty());
    }
}
