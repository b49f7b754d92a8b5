use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned record identifier. Never reused by the same database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRecord {
    pub id: RecordId,
    pub channel: String,
    /// Wildcard hostmask, `nick!user@host`.
    pub pattern: String,
    pub greeting: String,
    pub added_at: DateTime<Utc>,
}

/// Fields supplied by the caller when appending; the database fills in the rest.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub channel: String,
    pub pattern: String,
    pub greeting: String,
}

impl GreetingRecord {
    pub(crate) fn from_new(id: RecordId, new: NewRecord) -> Self {
        Self {
            id,
            channel: new.channel,
            pattern: new.pattern,
            greeting: new.greeting,
            added_at: Utc::now(),
        }
    }
}

// Reply form used by the list and get commands: `pattern: 'greeting'`.
impl fmt::Display for GreetingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pattern, quote(&self.greeting))
    }
}

/// Single-quoted unless the text holds `'` and no `"`.
fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
