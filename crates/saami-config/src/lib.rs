use std::env;

use serde::{Deserialize, Serialize};

use self::enrich::EnrichConfig;
use self::lule::LuleConfig;
use self::matching::MatchingConfig;
use self::north::NorthConfig;
use self::pite::PiteConfig;

pub mod enrich;
pub mod lule;
pub mod matching;
pub mod north;
pub mod pite;

fn default_output() -> String {
    "output.txt".to_string()
}

fn default_http_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pite: PiteConfig,
    pub lule: LuleConfig,
    pub north: NorthConfig,
    pub matching: MatchingConfig,
    pub enrich: EnrichConfig,

    /// Report file used when none is given or the given one can't be opened
    #[serde(default = "default_output")]
    pub default_output: String,
    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let default_output = env::var("DEFAULT_OUTPUT").unwrap_or_else(|_| default_output());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_http_timeout_seconds);

        Config {
            pite: PiteConfig::new(),
            lule: LuleConfig::new(),
            north: NorthConfig::new(),
            matching: MatchingConfig::new(),
            enrich: EnrichConfig::new(),

            default_output,
            http_timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pite: PiteConfig::default(),
            lule: LuleConfig::default(),
            north: NorthConfig::default(),
            matching: MatchingConfig::default(),
            enrich: EnrichConfig::default(),

            default_output: default_output(),
            http_timeout_seconds: default_http_timeout_seconds(),
        }
    }
}
