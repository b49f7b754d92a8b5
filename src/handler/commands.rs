use tracing::warn;

use super::{comma_andify, Greeter};
use crate::database::RecordStore;
use crate::error::GreeterResult;
use crate::validate;

pub const REPLY_SUCCESS: &str = "The operation succeeded.";
pub const REPLY_NOT_FOUND: &str = "No greeting with that hostmask found";

impl<S: RecordStore> Greeter<S> {
    pub async fn cmd_add(&self, channel: &str, hostmask: &str, greeting: &str) -> GreeterResult<String> {
        let channel = validate::channel(channel)?;
        let hostmask = validate::hostmask(hostmask)?;
        let greeting = validate::greeting(greeting)?;

        self.store.add(channel, hostmask, greeting).await?;
        Ok(REPLY_SUCCESS.to_string())
    }

    pub async fn cmd_remove(&self, channel: &str, hostmask: &str) -> GreeterResult<String> {
        let channel = validate::channel(channel)?;
        let hostmask = validate::hostmask(hostmask)?;

        if self.store.remove(channel, hostmask).await? {
            Ok(REPLY_SUCCESS.to_string())
        } else {
            warn!("Remove of unknown greeting {} in {}", hostmask, channel);
            Ok(REPLY_NOT_FOUND.to_string())
        }
    }

    pub async fn cmd_list(&self, channel: &str) -> GreeterResult<String> {
        let channel = validate::channel(channel)?;

        let entries: Vec<String> = self.store.list(channel).await.iter().map(ToString::to_string).collect();
        Ok(comma_andify(&entries))
    }

    /// Greetings whose stored pattern matches `hostmask`.
    pub async fn cmd_get(&self, channel: &str, hostmask: &str) -> GreeterResult<String> {
        let channel = validate::channel(channel)?;
        let hostmask = validate::hostmask(hostmask)?;

        let entries: Vec<String> = self
            .store
            .lookup(channel, hostmask)
            .await
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(comma_andify(&entries))
    }
}
