//! Minimal IRC line model: enough to read JOINs and write PRIVMSG replies.

pub mod parser;

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tags: HashMap<String, String>,
    pub source: Option<String>,
    pub command: String,
    pub params: Vec<String>,
}

impl Message {
    pub fn new(command: String, params: Vec<String>) -> Self {
        Self {
            tags: HashMap::new(),
            source: None,
            command,
            params,
        }
    }

    /// Line breaks in `text` become spaces so the reply stays one line.
    pub fn privmsg(target: &str, text: &str) -> Self {
        let text = text.replace(['\r', '\n', '\0'], " ");
        Self::new("PRIVMSG".to_string(), vec![target.to_string(), text])
    }

    /// Nick part of a `nick!user@host` source.
    pub fn source_nick(&self) -> Option<&str> {
        let source = self.source.as_deref()?;
        source.split_once('!').map(|(nick, _)| nick)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref source) = self.source {
            write!(f, ":{} ", source)?;
        }
        write!(f, "{}", self.command)?;

        if let Some((last, rest)) = self.params.split_last() {
            for param in rest {
                write!(f, " {}", param)?;
            }
            // Always send the last parameter as trailing
            write!(f, " :{}", last)?;
        }
        Ok(())
    }
}
