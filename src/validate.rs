//! Argument checks for the admin commands. The store itself accepts any
//! strings; these run before it is called.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GreeterError, GreeterResult};

static CHANNEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[#&+!][^\s,\x07]{1,49}$").unwrap());

// nick and user must be non-empty; `*` and `?` are allowed anywhere
static HOSTMASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s!@]+![^\s@]+@\S+$").unwrap());

pub fn channel(name: &str) -> GreeterResult<&str> {
    if CHANNEL_RE.is_match(name) {
        Ok(name)
    } else {
        Err(GreeterError::Validation(format!("{:?} is not a valid channel", name)))
    }
}

pub fn hostmask(mask: &str) -> GreeterResult<&str> {
    if HOSTMASK_RE.is_match(mask) {
        Ok(mask)
    } else {
        Err(GreeterError::Validation(format!(
            "{:?} is not a valid hostmask (expected nick!user@host)",
            mask
        )))
    }
}

/// Greetings are sent as a single IRC line.
pub fn greeting(text: &str) -> GreeterResult<&str> {
    if text.trim().is_empty() {
        return Err(GreeterError::Validation("greeting is empty".to_string()));
    }
    if text.contains(['\r', '\n', '\0']) {
        return Err(GreeterError::Validation(
            "greeting must not contain line breaks or NUL".to_string(),
        ));
    }
    Ok(text)
}
