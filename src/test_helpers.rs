#[cfg(test)]
pub(crate) mod test {
    use crate::config::{CaseMapping, Config, GreeterConfig};
    use crate::database::memory::MemoryStore;
    use crate::greeter::GreetingStore;
    use crate::handler::Greeter;

    pub fn memory_greeter(casemapping: CaseMapping) -> GreetingStore<MemoryStore> {
        GreetingStore::new(MemoryStore::new(), casemapping)
    }

    pub fn test_config(prefix_nick: bool) -> Config {
        Config {
            greeter: GreeterConfig {
                casemapping: CaseMapping::Rfc1459,
                prefix_nick,
            },
            ..Default::default()
        }
    }

    pub fn test_handler(prefix_nick: bool) -> Greeter<MemoryStore> {
        let config = test_config(prefix_nick);
        Greeter::new(
            GreetingStore::new(MemoryStore::new(), config.greeter.casemapping),
            &config.greeter,
        )
    }
}
