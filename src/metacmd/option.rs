//! Execution options resolved by a metacommand.
//!
//! [`ExecOption`] is created zero-valued for each invocation, filled in by
//! the runner and by [`ExecOption::parse_params`], handed to the dispatch
//! loop, and discarded when the command completes.

use std::collections::HashMap;
use std::time::Duration;

use super::error::{MetaError, Result};

/// The type of execution requested for the pending statement buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecType {
    /// No execution requested.
    #[default]
    None,
    /// Run the buffered statement with normal display (`\g`).
    Only,
    /// Run and pipe the output to a destination named in the params
    /// (`\g |file`).
    Pipe,
    /// Run and bind the resulting columns to named variables (`\gset`).
    Set,
    /// Run, then execute each resulting row's value as a new statement
    /// (`\gexec`).
    Exec,
    /// Run and render the results as a pivot table (`\crosstabview`).
    Crosstab,
    /// Run repeatedly at a fixed interval until externally cancelled
    /// (`\watch`).
    Watch,
}

impl std::fmt::Display for ExecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Only => write!(f, "only"),
            Self::Pipe => write!(f, "pipe"),
            Self::Set => write!(f, "set"),
            Self::Exec => write!(f, "exec"),
            Self::Crosstab => write!(f, "crosstab"),
            Self::Watch => write!(f, "watch"),
        }
    }
}

/// Parsed result options of a metacommand.
#[derive(Debug, Clone, Default)]
pub struct ExecOption {
    /// Instructs the dispatch loop to quit after the current command
    /// finishes, independent of error state.
    pub quit: bool,
    /// How the pending statement buffer should be executed.
    pub exec: ExecType,
    /// Accompanying string parameters for execution.
    pub params: HashMap<String, String>,
    /// Crosstab column parameters, in user-specified order.
    pub crosstab: Vec<String>,
    /// Watch interval; meaningful only when `exec` is [`ExecType::Watch`].
    pub watch: Duration,
}

impl ExecOption {
    /// Option requesting execution of the given kind.
    pub fn run(exec: ExecType) -> Self {
        Self {
            exec,
            ..Self::default()
        }
    }

    /// Option signalling loop termination.
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    /// Classify `params` as either one free-form default value or an
    /// explicit `(key=value ...)` option list, merging into `self.params`.
    ///
    /// Outside a list, the first non-empty token that does not start with
    /// `(` switches permanently to free-form mode: that token and every
    /// remaining one are joined with single spaces under `default_key` and
    /// scanning stops. Inside a list, each token is split at its first `=`
    /// (a leading `(` on the key and a trailing `)` on the value are
    /// stripped; duplicate keys keep the last value), and a token ending in
    /// `)` closes the list. A list token without `=` fails with
    /// [`MetaError::InvalidFormatOption`], except a `"()"` opening the
    /// list, which stores the empty-string key. On failure, pairs already
    /// stored remain.
    pub fn parse_params(&mut self, params: &[String], default_key: &str) -> Result<()> {
        let mut format_options = false;
        for (i, param) in params.iter().enumerate() {
            if param.is_empty() {
                continue;
            }
            let mut opens_list = false;
            if !format_options {
                if param.starts_with('(') {
                    format_options = true;
                    opens_list = true;
                } else {
                    self.params
                        .insert(default_key.to_owned(), params[i..].join(" "));
                    return Ok(());
                }
            }
            match param.split_once('=') {
                Some((key, value)) => {
                    self.params.insert(
                        key.trim_start_matches('(').to_owned(),
                        value.trim_end_matches(')').to_owned(),
                    );
                }
                // A "()" opening the list closes it in the same step; it
                // stores the degenerate empty key rather than failing.
                // Mid-list it is malformed like any other token without
                // a "=".
                None if opens_list && param == "()" => {
                    self.params.insert(String::new(), String::new());
                }
                None => return Err(MetaError::InvalidFormatOption),
            }
            if format_options && param.ends_with(')') {
                format_options = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fresh_option_is_zero_valued() {
        let opt = ExecOption::default();
        assert!(!opt.quit);
        assert_eq!(opt.exec, ExecType::None);
        assert!(opt.params.is_empty());
        assert!(opt.crosstab.is_empty());
        assert_eq!(opt.watch, Duration::ZERO);
    }

    #[test]
    fn free_form_joins_remaining_tokens() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["expanded", "auto", "on"]), "pset")
            .unwrap();
        assert_eq!(opt.params["pset"], "expanded auto on");
        assert_eq!(opt.params.len(), 1);
    }

    #[test]
    fn free_form_never_splits_pairs() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["foo=bar"]), "format").unwrap();
        assert_eq!(opt.params["format"], "foo=bar");
        assert!(!opt.params.contains_key("foo"));
    }

    #[test]
    fn list_spanning_tokens() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(a=1", "b=2)"]), "format").unwrap();
        assert_eq!(opt.params["a"], "1");
        assert_eq!(opt.params["b"], "2");
        assert!(!opt.params.contains_key("format"));
    }

    #[test]
    fn single_token_list() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(format=csv)"]), "format").unwrap();
        assert_eq!(opt.params["format"], "csv");
        assert_eq!(opt.params.len(), 1);
    }

    #[test]
    fn list_token_without_equals_fails() {
        let mut opt = ExecOption::default();
        let err = opt.parse_params(&tokens(&["(x)"]), "format").unwrap_err();
        assert!(matches!(err, MetaError::InvalidFormatOption));
    }

    #[test]
    fn failure_keeps_already_scanned_pairs() {
        let mut opt = ExecOption::default();
        let err = opt
            .parse_params(&tokens(&["(a=1", "oops)"]), "format")
            .unwrap_err();
        assert!(matches!(err, MetaError::InvalidFormatOption));
        assert_eq!(opt.params["a"], "1");
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let mut opt = ExecOption::default();
        opt.parse_params(&[], "format").unwrap();
        assert!(opt.params.is_empty());
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["", "(a=1)", ""]), "format").unwrap();
        assert_eq!(opt.params["a"], "1");
        assert_eq!(opt.params.len(), 1);
    }

    #[test]
    fn degenerate_empty_list_stores_empty_key() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["()"]), "format").unwrap();
        assert_eq!(opt.params[""], "");
        assert_eq!(opt.params.len(), 1);
    }

    #[test]
    fn degenerate_empty_list_mid_list_fails() {
        let mut opt = ExecOption::default();
        let err = opt
            .parse_params(&tokens(&["(a=1", "()"]), "format")
            .unwrap_err();
        assert!(matches!(err, MetaError::InvalidFormatOption));
        assert_eq!(opt.params["a"], "1");
        assert!(!opt.params.contains_key(""));
    }

    #[test]
    fn degenerate_empty_list_closes_before_free_form() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["()", "rest"]), "format").unwrap();
        assert_eq!(opt.params[""], "");
        assert_eq!(opt.params["format"], "rest");
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(a=1", "a=2)"]), "format").unwrap();
        assert_eq!(opt.params["a"], "2");
        assert_eq!(opt.params.len(), 1);
    }

    #[test]
    fn value_keeps_equals_past_the_first() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(csv_fieldsep=a=b)"]), "format")
            .unwrap();
        assert_eq!(opt.params["csv_fieldsep"], "a=b");
    }

    #[test]
    fn closed_list_returns_to_free_form_for_the_rest() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(a=1)", "rest", "more"]), "format")
            .unwrap();
        assert_eq!(opt.params["a"], "1");
        assert_eq!(opt.params["format"], "rest more");
    }

    #[test]
    fn back_to_back_lists_accumulate() {
        let mut opt = ExecOption::default();
        opt.parse_params(&tokens(&["(a=1)", "(b=2)"]), "format").unwrap();
        assert_eq!(opt.params["a"], "1");
        assert_eq!(opt.params["b"], "2");
        assert!(!opt.params.contains_key("format"));
    }

    #[test]
    fn parse_params_merges_into_existing_map() {
        let mut opt = ExecOption::default();
        opt.params.insert("pager".to_owned(), "off".to_owned());
        opt.parse_params(&tokens(&["(a=1)"]), "format").unwrap();
        assert_eq!(opt.params["pager"], "off");
        assert_eq!(opt.params["a"], "1");
    }

    #[test]
    fn constructors() {
        assert_eq!(ExecOption::run(ExecType::Pipe).exec, ExecType::Pipe);
        assert!(ExecOption::quit().quit);
        assert_eq!(ExecOption::quit().exec, ExecType::None);
    }
}
