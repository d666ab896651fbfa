//! Pulls Jerry Talisman purchases out of chat log text.
//!
//! A purchase line in a client log looks like
//!
//! ```text
//! [12:01:44] [Client thread/INFO]: [CHAT] §aYou purchased §9Green Jerry Talisman §afor §61,000 coins§a!
//! ```
//!
//! The character right before the colour word is the item's rarity colour
//! code, which tells a recombobulated item apart from a plain one.

use log::warn;
use regex::Regex;

use crate::config::PURCHASE_PATTERN;
use crate::error::Result;
use crate::models::{PurchaseRecord, Variant};

/// Compiled purchase-line matcher.
pub struct PurchaseExtractor {
    pattern: Regex,
}

impl PurchaseExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(PURCHASE_PATTERN)?,
        })
    }

    /// Every purchase in `text`, in order of appearance.
    ///
    /// Lines that do not match the full purchase pattern are skipped.
    pub fn extract(&self, text: &str) -> Vec<PurchaseRecord> {
        self.pattern
            .captures_iter(text)
            .map(|caps| {
                let marker = caps[1].chars().next();
                let variant = Variant::from_color(&caps[2]);
                let recombobulated = marker.is_some_and(|m| variant.is_upgraded_marker(m));
                PurchaseRecord::new(variant, recombobulated, parse_cost(&caps[4]))
            })
            .collect()
    }
}

/// Turn the captured amount into coins.
///
/// The capture carries the digit of the `§6` colour code in front of the
/// amount, so after dropping thousands separators the first character is
/// discarded. Anything that still fails to parse counts as 0.
pub fn parse_cost(amount: &str) -> i64 {
    let digits: String = amount.chars().filter(|c| *c != ',').skip(1).collect();
    match digits.parse() {
        Ok(cost) => cost,
        Err(e) => {
            warn!("Error processing row {}: {}", digits, e);
            0
        }
    }
}
