//! Run-scoped configuration built from the user's template.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::domain::{AppError, ConfigOverrides};

/// Materialized configuration and the override keys the template lacked.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedConfig {
    pub path: PathBuf,
    pub missing_keys: Vec<&'static str>,
}

/// Copy `template` to `destination` and apply `overrides` to the copy.
pub fn materialize(
    template: &Path,
    destination: &Path,
    overrides: &ConfigOverrides,
) -> Result<MaterializedConfig, AppError> {
    fs::copy(template, destination)?;
    let content = fs::read_to_string(destination)?;

    let entries = overrides.entries();
    let (rewritten, missing_keys) = apply_overrides(&content, &entries);
    for key in &missing_keys {
        warn!("Key '{}' not present in {}, override ignored", key, template.display());
    }
    fs::write(destination, rewritten)?;

    debug!("Materialized configuration at {}", destination.display());
    Ok(MaterializedConfig { path: destination.to_path_buf(), missing_keys })
}

/// Rewrite the value of the first line carrying each key.
///
/// Returns the new content and the keys that matched no line.
pub fn apply_overrides(
    content: &str,
    entries: &[(&'static str, String)],
) -> (String, Vec<&'static str>) {
    let mut applied = vec![false; entries.len()];
    let mut output = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        let pending = entries
            .iter()
            .enumerate()
            .find(|(i, (key, _))| !applied[*i] && line_has_key(body, key));

        match pending {
            Some((i, (_, value))) => {
                applied[i] = true;
                output.push_str(&replace_value(body, value));
                output.push_str(ending);
            }
            None => output.push_str(line),
        }
    }

    let missing = entries
        .iter()
        .zip(applied)
        .filter(|(_, applied)| !applied)
        .map(|((key, _), _)| *key)
        .collect();
    (output, missing)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn line_has_key(body: &str, key: &str) -> bool {
    body.trim_start()
        .strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Replace the text between `=` and an optional `#` comment.
fn replace_value(body: &str, value: &str) -> String {
    let Some(eq) = body.find('=') else {
        return body.to_string();
    };
    let (head, rest) = body.split_at(eq + 1);
    let (region, comment) = match rest.find('#') {
        Some(hash) => rest.split_at(hash),
        None => (rest, ""),
    };

    let leading = &region[..region.len() - region.trim_start().len()];
    let mut replaced = format!("{}{}{}", head, leading, value);
    if !comment.is_empty() {
        let width = head.len() + region.len();
        if replaced.len() < width {
            replaced.push_str(&" ".repeat(width - replaced.len()));
        } else {
            replaced.push(' ');
        }
        replaced.push_str(comment);
    }
    replaced
}
