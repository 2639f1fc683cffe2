//! `${VAR}` and `${VAR:-default}` expansion in config strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// An unset variable without a default is an error naming `field`. Strings
/// with no `${` are returned untouched, so a lone `$` stays literal.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSHELL_TEST_SIMPLE", "hello");
        }
        let result = expand_env("${DOCSHELL_TEST_SIMPLE}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("DOCSHELL_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSHELL_TEST_UNSET");
        }
        let result = expand_env("${DOCSHELL_TEST_UNSET:-main}", "edit.branch").unwrap();
        assert_eq!(result, "main");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSHELL_TEST_MISSING");
        }
        let err = expand_env("${DOCSHELL_TEST_MISSING}", "edit.repo").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCSHELL_TEST_MISSING"));
        assert!(err.to_string().contains("edit.repo"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSHELL_TEST_ORG", "acme");
        }
        let result = expand_env("${DOCSHELL_TEST_ORG}/docs", "edit.repo").unwrap();
        assert_eq!(result, "acme/docs");
        unsafe {
            std::env::remove_var("DOCSHELL_TEST_ORG");
        }
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("org/repo", "edit.repo").unwrap(), "org/repo");
        assert_eq!(expand_env("$VAR", "edit.repo").unwrap(), "$VAR");
    }
}
