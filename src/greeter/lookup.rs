use tracing::debug;

use crate::database::RecordStore;
use crate::greeter::{GreetingRecord, GreetingStore};
use crate::mask::hostmask_match;

impl<S: RecordStore> GreetingStore<S> {
    pub async fn list(&self, channel: &str) -> Vec<GreetingRecord> {
        let db = self.db.read().await;
        db.records()
            .iter()
            .filter(|r| r.channel == channel)
            .cloned()
            .collect()
    }

    /// Every record in `channel` whose pattern matches `query`.
    ///
    /// `query` is tested as an identity; wildcards in it are literal characters.
    pub async fn lookup(&self, channel: &str, query: &str) -> Vec<GreetingRecord> {
        let query = self.casemapping.fold(query);
        let db = self.db.read().await;
        let matches: Vec<_> = db
            .records()
            .iter()
            .filter(|r| r.channel == channel && self.pattern_matches(&r.pattern, &query))
            .cloned()
            .collect();
        debug!("{} greetings in {} match {}", matches.len(), channel, query);
        matches
    }

    /// The oldest record in `channel` whose pattern matches `identity`.
    pub async fn find_for_identity(&self, channel: &str, identity: &str) -> Option<GreetingRecord> {
        let identity = self.casemapping.fold(identity);
        let db = self.db.read().await;
        db.records()
            .iter()
            .find(|r| r.channel == channel && self.pattern_matches(&r.pattern, &identity))
            .cloned()
    }

    // `identity` must already be folded.
    fn pattern_matches(&self, pattern: &str, identity: &str) -> bool {
        hostmask_match(&self.casemapping.fold(pattern), identity)
    }
}
