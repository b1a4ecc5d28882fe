use crate::error::{SfResult, StitchError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub display: DisplayConfig,
    #[command(flatten)]
    pub checklist: ChecklistConfig,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// ASCII borders, no colour. Safe for pipes and old terminals.
    Plain,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    #[arg(long, default_value = "light")]
    pub theme: Theme,

    // Also print the pattern as one comma-separated line
    #[arg(long, default_value_t = false)]
    pub show_inline: bool,

    #[arg(long, default_value_t = false)]
    pub hide_verification: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_inline: false,
            hide_verification: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    #[arg(long, default_value = "[x]")]
    pub done_marker: String,
    #[arg(long, default_value = "[ ]")]
    pub pending_marker: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            done_marker: "[x]".to_string(),
            pending_marker: "[ ]".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StitchError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SfResult<()> {
        if self.checklist.done_marker.trim().is_empty()
            || self.checklist.pending_marker.trim().is_empty()
        {
            return Err(StitchError::Config(
                "checklist markers must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies over only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(display.theme);
        update_if_present!(display.show_inline);
        update_if_present!(display.hide_verification);

        update_if_present!(checklist.done_marker);
        update_if_present!(checklist.pending_marker);
    }

    /// Defaults, then the optional JSON file, then explicit flags.
    pub fn resolve(cli: &Config, file: Option<&Path>, matches: &ArgMatches) -> SfResult<Self> {
        let Some(path) = file else {
            cli.validate()?;
            return Ok(cli.clone());
        };
        let mut config = Self::load_from_file(path)?;
        config.merge_from_cli(cli, matches);
        config.validate()?;
        Ok(config)
    }
}
