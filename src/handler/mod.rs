use tracing::{debug, info};

use crate::config::GreeterConfig;
use crate::database::RecordStore;
use crate::error::StorageResult;
use crate::greeter::GreetingStore;
use crate::irc::parser::parse_message;
use crate::irc::Message;

mod commands;
mod reply;
#[cfg(test)]
mod tests;

pub use reply::comma_andify;

/// Owns the greeting store for the lifetime of the bot and turns join events
/// and admin commands into replies.
pub struct Greeter<S: RecordStore> {
    store: GreetingStore<S>,
    prefix_nick: bool,
}

impl<S: RecordStore> Greeter<S> {
    pub fn new(store: GreetingStore<S>, config: &GreeterConfig) -> Self {
        Self {
            store,
            prefix_nick: config.prefix_nick,
        }
    }

    /// Greeting for `identity` joining `channel`, or `None` to stay silent.
    pub async fn on_join(&self, channel: &str, identity: &str) -> Option<String> {
        match self.store.find_for_identity(channel, identity).await {
            Some(record) => {
                info!("Greeting {} in {} (matched {})", identity, channel, record.pattern);
                Some(record.greeting)
            }
            None => {
                debug!("No greeting for {} in {}", identity, channel);
                None
            }
        }
    }

    /// Reacts to one raw IRC line. Only JOINs with a full hostmask source can
    /// produce a reply.
    pub async fn handle_line(&self, line: &str) -> Option<Message> {
        let message = match parse_message(line) {
            Ok(message) => message,
            Err(e) => {
                debug!("Ignoring unparsable line {:?}: {}", line, e);
                return None;
            }
        };

        if message.command != "JOIN" {
            return None;
        }
        let identity = message.source.as_deref()?;
        let nick = message.source_nick()?;
        let channel = message.params.first()?;

        let greeting = self.on_join(channel, identity).await?;
        let text = if self.prefix_nick {
            format!("{}: {}", nick, greeting)
        } else {
            greeting
        };
        Some(Message::privmsg(channel, &text))
    }

    pub async fn close(&self) -> StorageResult<()> {
        self.store.close().await
    }
}
