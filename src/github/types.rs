use crate::error::{HublookError, Result};
use crate::form::QueryMode;
use serde::Deserialize;
use serde_json::Value;

/// Shape of a successful `/users/{login}` lookup. Only the fields the result
/// panel renders are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    pub login: String,
    pub public_repos: u64,
}

/// Shape of a successful `/repos/{owner}/{repo}` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoData {
    pub full_name: String,
    pub stargazers_count: u64,
}

#[derive(Debug, Clone)]
pub enum LookupResult {
    User(UserData),
    Repo(RepoData),
}

impl LookupResult {
    /// Discriminates the untyped response on the presence of `public_repos`,
    /// the way the rendering contract defines it. A body missing the fields
    /// we consume counts as the generic network failure.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("public_repos").is_some() {
            serde_json::from_value::<UserData>(value)
                .map(LookupResult::User)
                .map_err(|_| HublookError::Network)
        } else {
            serde_json::from_value::<RepoData>(value)
                .map(LookupResult::Repo)
                .map_err(|_| HublookError::Network)
        }
    }
}

pub fn lookup_url(api_base: &str, mode: QueryMode, input: &str) -> String {
    let base = api_base.trim_end_matches('/');
    match mode {
        QueryMode::User => format!("{base}/users/{input}"),
        QueryMode::Repo => format!("{base}/repos/{input}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_url() {
        assert_eq!(
            lookup_url("https://api.github.com", QueryMode::User, "abcd"),
            "https://api.github.com/users/abcd"
        );
    }

    #[test]
    fn repo_url_trims_trailing_slash() {
        assert_eq!(
            lookup_url("https://api.github.com/", QueryMode::Repo, "tokio-rs/tokio"),
            "https://api.github.com/repos/tokio-rs/tokio"
        );
    }

    #[test]
    fn public_repos_presence_selects_user() {
        let value = json!({"login": "abcd", "public_repos": 3, "id": 1});
        match LookupResult::from_value(value).unwrap() {
            LookupResult::User(u) => {
                assert_eq!(u.login, "abcd");
                assert_eq!(u.public_repos, 3);
            }
            LookupResult::Repo(_) => panic!("expected user"),
        }
    }

    #[test]
    fn absence_selects_repo() {
        let value = json!({"full_name": "tokio-rs/tokio", "stargazers_count": 28000});
        match LookupResult::from_value(value).unwrap() {
            LookupResult::Repo(r) => {
                assert_eq!(r.full_name, "tokio-rs/tokio");
                assert_eq!(r.stargazers_count, 28000);
            }
            LookupResult::User(_) => panic!("expected repo"),
        }
    }

    #[test]
    fn missing_consumed_fields_is_a_network_error() {
        let value = json!({"message": "Not Found"});
        assert!(matches!(
            LookupResult::from_value(value),
            Err(HublookError::Network)
        ));
    }
}
