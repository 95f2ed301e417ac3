//! Runtime configuration
//!
//! The delimiter and the export's location on the device are configuration
//! values rather than constants baked into the parser, so tests and
//! non-standard device layouts can supply their own.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Location and framing of the clippings export on the device
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Path of the export relative to the device mount root
    pub clippings_path: PathBuf,
    /// Line separating consecutive entries, including its trailing newline
    pub delimiter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub export: ExportConfig,
    /// Empty the export after a successful run so already-processed
    /// highlights are not seen again
    pub truncate_after_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export: ExportConfig {
                clippings_path: PathBuf::from("documents/My Clippings.txt"),
                delimiter: "==========\n".to_string(),
            },
            truncate_after_run: true,
        }
    }
}

impl Config {
    /// Build a config from `KINDLE_TLDR_*` environment variables, falling
    /// back to the stock Kindle layout for anything unset
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            export: ExportConfig {
                clippings_path: env::var("KINDLE_TLDR_CLIPPINGS_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.export.clippings_path),
                delimiter: env::var("KINDLE_TLDR_DELIMITER")
                    .unwrap_or(defaults.export.delimiter),
            },
            truncate_after_run: env::var("KINDLE_TLDR_TRUNCATE_EXPORT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.truncate_after_run),
        }
    }
}
