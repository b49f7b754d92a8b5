use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GreeterError, GreeterResult};

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub greeter: GreeterConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("greetings.json"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GreeterConfig {
    /// How hostmasks are case folded before matching.
    pub casemapping: CaseMapping,
    /// Address the greeting to the joining nick ("nick: text").
    pub prefix_nick: bool,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            casemapping: CaseMapping::default(),
            prefix_nick: true,
        }
    }
}

/// IRC casemapping applied to both sides of a hostmask comparison.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseMapping {
    /// ASCII letters plus `[]\~` folded to `{}|^`.
    #[default]
    Rfc1459,
    Ascii,
    /// No folding.
    Strict,
}

impl CaseMapping {
    pub fn fold<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            CaseMapping::Strict => Cow::Borrowed(s),
            CaseMapping::Ascii => Cow::Owned(s.to_ascii_lowercase()),
            CaseMapping::Rfc1459 => Cow::Owned(
                s.chars()
                    .map(|c| match c {
                        '[' => '{',
                        ']' => '}',
                        '\\' => '|',
                        '~' => '^',
                        c => c.to_ascii_lowercase(),
                    })
                    .collect(),
            ),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GreeterResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> GreeterResult<Self> {
        toml::from_str(contents).map_err(|e| GreeterError::Config(e.to_string()))
    }
}
