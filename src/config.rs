use crate::warn;
use confique::Config as _;
use std::{convert::Infallible, sync::OnceLock};

#[derive(confique::Config)]
pub struct Config {
    /// Reject `Cursor::set_position` targets past the end of the source.
    #[config(
        env = "STRCURSOR_STRICT_POSITIONS",
        parse_env = parse_strict,
        default = true
    )]
    pub strict_positions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_positions: true,
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| match Config::builder().env().load() {
        Ok(config) => config,
        Err(err) => {
            warn!("Falling back to default configuration: {err}");
            Config::default()
        }
    })
}

/// Lenient flag parsing; unrecognised values keep strict mode on.
fn parse_strict(value: &str) -> Result<bool, Infallible> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => {
            warn!("Unrecognised value {other:?} for STRCURSOR_STRICT_POSITIONS, staying strict");
            Ok(true)
        }
    }
}
