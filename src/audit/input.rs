//! Resource list input: one fully-qualified ARM ID per line, blank lines
//! and `#` comments ignored.

use crate::error::{InputError, Result};
use std::fs;
use std::path::Path;

pub fn read_resource_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| InputError::UnreadableList {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(InputError::EmptyList {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(entries)
}
