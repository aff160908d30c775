use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{{ scope.NAME }}` with an optional `| default("value")`
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
        .expect("placeholder pattern is valid")
});

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("line {line}: environment variable `{name}` is not set")]
    Missing { line: usize, name: String },
    #[error("line {line}: unsupported placeholder `{key}`, only `env.` is available")]
    Scope { line: usize, key: String },
}

/// Substitute `{{ env.VAR }}` placeholders in raw config text
///
/// A placeholder may carry a fallback, `{{ env.VAR | default("x") }}`, used
/// when the variable is unset. Comment lines are copied through untouched.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(index + 1, line)?);
        }
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line_number: usize, line: &str) -> Result<String, ExpandError> {
    let mut expanded = String::with_capacity(line.len());
    let mut copied_up_to = 0;

    for captures in PLACEHOLDER.captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        expanded.push_str(&line[copied_up_to..whole.start()]);
        expanded.push_str(&resolve(line_number, &captures)?);
        copied_up_to = whole.end();
    }

    expanded.push_str(&line[copied_up_to..]);
    Ok(expanded)
}

fn resolve(line: usize, captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let fallback = captures.get(2).map(|m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|name| !name.is_empty() && !name.contains('.')) else {
        return Err(ExpandError::Scope {
            line,
            key: key.to_owned(),
        });
    };

    match (std::env::var(name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => {
            tracing::debug!(variable = name, "using placeholder default");
            Ok(fallback.to_owned())
        }
        (Err(_), None) => Err(ExpandError::Missing {
            line,
            name: name.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[encoding]\nabsent_fields = \"omit\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn set_variable_is_substituted() {
        temp_env::with_var("WATSON_ABSENT", Some("null"), || {
            let result = expand_env("absent_fields = \"{{ env.WATSON_ABSENT }}\"").unwrap();
            assert_eq!(result, "absent_fields = \"null\"");
        });
    }

    #[test]
    fn several_placeholders_on_one_line() {
        let vars = [("WATSON_A", Some("a")), ("WATSON_B", Some("b"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("log_filter = \"{{ env.WATSON_A }},{{env.WATSON_B}}\"").unwrap();
            assert_eq!(result, "log_filter = \"a,b\"");
        });
    }

    #[test]
    fn missing_variable_reports_line() {
        temp_env::with_var_unset("WATSON_MISSING", || {
            let err = expand_env("[telemetry]\nlog_filter = \"{{ env.WATSON_MISSING }}\"").unwrap_err();
            assert_eq!(
                err,
                ExpandError::Missing {
                    line: 2,
                    name: "WATSON_MISSING".to_owned()
                }
            );
        });
    }

    #[test]
    fn non_env_scope_is_rejected() {
        let err = expand_env("pretty = {{ vars.PRETTY }}").unwrap_err();
        assert!(matches!(err, ExpandError::Scope { line: 1, .. }));
        assert!(err.to_string().contains("vars.PRETTY"));
    }

    #[test]
    fn nested_env_key_is_rejected() {
        let err = expand_env("pretty = {{ env.A.B }}").unwrap_err();
        assert!(matches!(err, ExpandError::Scope { .. }));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("WATSON_MISSING", || {
            let input = "  # log_filter = \"{{ env.WATSON_MISSING }}\"\npretty = false";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("WATSON_FORMAT", || {
            let result = expand_env("format = \"{{ env.WATSON_FORMAT | default(\"text\") }}\"").unwrap();
            assert_eq!(result, "format = \"text\"");
        });

        temp_env::with_var("WATSON_FORMAT", Some("json"), || {
            let result = expand_env("format = \"{{ env.WATSON_FORMAT | default(\"text\") }}\"").unwrap();
            assert_eq!(result, "format = \"json\"");
        });
    }

    #[test]
    fn empty_default_is_allowed() {
        temp_env::with_var_unset("WATSON_FILTER", || {
            let result = expand_env("log_filter = \"{{ env.WATSON_FILTER | default(\"\") }}\"").unwrap();
            assert_eq!(result, "log_filter = \"\"");
        });
    }
}
