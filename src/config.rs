use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer};

use crate::coins;
use crate::error::{JerryError, Result};

/// Leading bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Chat line announcing a Jerry Talisman/Artifact purchase.
///
/// Captures: 1 = rarity colour code in front of the colour word, 2 = colour
/// word, 3 = item kind, 4 = amount (including the stray colour-code digit
/// that precedes it in real logs).
pub const PURCHASE_PATTERN: &str =
    r"You purchased .+(.)(Green|Blue|Purple|PurPle|Golden) Jerry (Talisman|Artifact) .+for .+?([0-9,]+) coins";

/// File-name endings picked up when a directory is scanned for logs.
pub const LOG_SUFFIXES: [&str; 2] = [".log", ".log.gz"];

pub const CONFIG_FILE: &str = "config.json";

pub fn default_config_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("jerry-parser")
    } else {
        PathBuf::from(".jerry-parser")
    }
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Settings — optional user defaults
// ---------------------------------------------------------------------------

/// User defaults read from `config.json`.
///
/// ```json
/// { "recombobulatorPrice": "6,500,000", "logDir": "/home/me/.minecraft/logs" }
/// ```
///
/// The price may be written as a number or as a string with thousands
/// separators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "price_from_json")]
    pub recombobulator_price: Option<i64>,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// Read and parse a settings file, propagating any failure.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Read a settings file, falling back to defaults.
    ///
    /// A missing file is not worth mentioning; an unreadable or corrupt one is
    /// logged and ignored so a bad config never blocks a report.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Recombobulator price
// ---------------------------------------------------------------------------

/// Parse a typed price, falling back to 0 with a warning when it is not an
/// integer.
pub fn price_or_zero(text: &str) -> i64 {
    match coins::parse_price(text) {
        Some(price) => price,
        None => {
            warn!("Invalid Input! autoset Recombobulator3000 price to 0");
            0
        }
    }
}

/// Price from the non-interactive sources: the `--price` flag first, then
/// `recombobulatorPrice` from the settings file.
///
/// `None` means neither was given and the caller may ask the user.
pub fn resolve_price(flag: Option<&str>, settings: &Settings) -> Option<i64> {
    let price = match flag {
        Some(text) => price_or_zero(text),
        None => settings.recombobulator_price?,
    };
    info!("Set Recombobulator3000 price -> {}", price);
    Some(price)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(i64),
    Text(String),
}

fn price_from_json<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(n)) => Ok(Some(n)),
        Some(RawPrice::Text(text)) => coins::parse_price(&text)
            .map(Some)
            .ok_or_else(|| {
                serde::de::Error::custom(JerryError::InvalidArgument(format!(
                    "recombobulatorPrice '{}' is not an integer",
                    text
                )))
            }),
    }
}
