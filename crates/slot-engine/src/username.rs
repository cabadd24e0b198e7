//! Username normalization for public booking page URLs.

use crate::error::{Result, SlotError};

/// Lowercase `raw` and collapse every run of characters outside `[a-z0-9_-]`
/// into a single `-`, then strip leading and trailing `-`.
pub fn to_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut in_run = false;

    for c in raw.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Normalize a requested username.
///
/// # Errors
/// Returns `SlotError::InvalidUsername` if nothing usable remains.
pub fn validate_username(raw: &str) -> Result<String> {
    let slug = to_slug(raw);
    if slug.is_empty() {
        return Err(SlotError::InvalidUsername(raw.to_string()));
    }
    Ok(slug)
}
