//! Input validation for the lookup form. Pure: no side effects, first
//! failing rule wins. Rule order per field is required → pattern → min → max.

use crate::form::QueryMode;

pub const USER_REQUIRED: &str = "Enter a username";
pub const USER_PATTERN: &str = "Only ASCII letters are allowed";
pub const USER_MIN: &str = "Invalid username. Minimum 4 characters";
pub const USER_MAX: &str = "Invalid username. Maximum 7 characters";

pub const REPO_REQUIRED: &str = "Enter a repository in owner/repo format";
pub const REPO_PATTERN: &str =
    "Invalid repository name. Only lowercase letters and \"-\" are allowed";
pub const REPO_MIN: &str = "Invalid repository name. Minimum 11 characters";
pub const REPO_MAX: &str = "Invalid repository name. Maximum 19 characters";

const USER_LEN: (usize, usize) = (4, 7);
const REPO_LEN: (usize, usize) = (11, 19);

/// Checks `input` against the rule chain for `mode`. The mode itself needs no
/// rule — `QueryMode` is a closed enum.
pub fn validate(mode: QueryMode, input: &str) -> Result<(), &'static str> {
    match mode {
        QueryMode::User => validate_user(input),
        QueryMode::Repo => validate_repo(input),
    }
}

fn validate_user(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err(USER_REQUIRED);
    }
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(USER_PATTERN);
    }
    let len = input.chars().count();
    if len < USER_LEN.0 {
        return Err(USER_MIN);
    }
    if len > USER_LEN.1 {
        return Err(USER_MAX);
    }
    Ok(())
}

fn validate_repo(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err(REPO_REQUIRED);
    }
    if !repo_shape_ok(input) {
        return Err(REPO_PATTERN);
    }
    let len = input.chars().count();
    if len < REPO_LEN.0 {
        return Err(REPO_MIN);
    }
    if len > REPO_LEN.1 {
        return Err(REPO_MAX);
    }
    Ok(())
}

// `owner/repo`: both halves non-empty, lowercase ASCII letters and hyphens
// only. The segment check excludes '/', so exactly one separator can match.
fn repo_shape_ok(input: &str) -> bool {
    let Some((owner, repo)) = input.split_once('/') else {
        return false;
    };
    let segment_ok =
        |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c == '-');
    segment_ok(owner) && segment_ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_accepts_letters_within_bounds() {
        for input in ["abcd", "ABCD", "aBcDeF", "abcdefg"] {
            assert_eq!(validate(QueryMode::User, input), Ok(()), "{input}");
        }
    }

    #[test]
    fn user_rule_order_first_failure_wins() {
        assert_eq!(validate(QueryMode::User, ""), Err(USER_REQUIRED));
        // pattern is checked before length: "a1" is too short AND non-alpha
        assert_eq!(validate(QueryMode::User, "a1"), Err(USER_PATTERN));
        assert_eq!(validate(QueryMode::User, "abc"), Err(USER_MIN));
        assert_eq!(validate(QueryMode::User, "abcdefgh"), Err(USER_MAX));
    }

    #[test]
    fn user_rejects_non_letter_characters() {
        for input in ["abc4", "ab-cd", "ab cd", "ab_cd", "абвгд"] {
            assert_eq!(validate(QueryMode::User, input), Err(USER_PATTERN), "{input}");
        }
    }

    #[test]
    fn user_rejects_regex_class_gap_characters() {
        // characters between 'Z' and 'a' in ASCII must not slip through
        for input in ["ab[d", "ab]d", "ab^d", "ab_d", "ab`d"] {
            assert_eq!(validate(QueryMode::User, input), Err(USER_PATTERN), "{input}");
        }
    }

    #[test]
    fn repo_accepts_owner_slash_repo_within_bounds() {
        for input in ["tokio-rs/tokio", "serde-rs/json", "abcde/abcde", "rust-lang/rustlings"] {
            assert_eq!(validate(QueryMode::Repo, input), Ok(()), "{input}");
        }
    }

    #[test]
    fn repo_rejects_bad_shapes() {
        for input in ["noslashatall", "owner/repo/extra", "Upper/casing", "owner/", "/repo", "own3r/reposito"] {
            assert_eq!(validate(QueryMode::Repo, input), Err(REPO_PATTERN), "{input}");
        }
    }

    #[test]
    fn repo_length_bounds() {
        assert_eq!(validate(QueryMode::Repo, ""), Err(REPO_REQUIRED));
        assert_eq!(validate(QueryMode::Repo, "a/b"), Err(REPO_MIN));
        assert_eq!(validate(QueryMode::Repo, "abcd/abcde"), Err(REPO_MIN));
        assert_eq!(
            validate(QueryMode::Repo, "abcdefghij/abcdefghij"),
            Err(REPO_MAX)
        );
        // boundary lengths 11 and 19 are valid
        assert_eq!(validate(QueryMode::Repo, "abcde/abcde"), Ok(()));
        assert_eq!(validate(QueryMode::Repo, "abcdefghi/abcdefghi"), Ok(()));
    }
}
