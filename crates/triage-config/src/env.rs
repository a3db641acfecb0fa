use std::sync::OnceLock;

use regex::Regex;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` with an optional `| default("fallback")` suffix
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// Runs before deserialization so config structs stay plain
/// String/SecretString. A placeholder without a `default("...")` fails
/// when the variable is unset. TOML comment lines are left untouched.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut failure: Option<String> = None;

    let expanded = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }

            placeholder()
                .replace_all(line, |captures: &regex::Captures<'_>| {
                    let var = &captures[1];
                    match std::env::var(var) {
                        Ok(value) => value,
                        Err(_) => {
                            if let Some(fallback) = captures.get(2) {
                                fallback.as_str().to_string()
                            } else {
                                failure
                                    .get_or_insert_with(|| format!("environment variable not found: `{var}`"));
                                String::new()
                            }
                        }
                    }
                })
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(message) = failure {
        return Err(message);
    }

    // lines() drops a trailing newline
    if input.ends_with('\n') {
        return Ok(expanded + "\n");
    }

    Ok(expanded)
}
