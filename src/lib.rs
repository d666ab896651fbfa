//! Jerry Talisman purchase report for Hypixel SkyBlock chat logs.
//!
//! Reads Minecraft client logs (plain `.log` or rolled `.log.gz`), picks out
//! every Jerry Talisman/Artifact bought, and totals counts and cost with all
//! purchases converted to Green Jerry Talismans.
//!
//! # Quick start
//!
//! ```no_run
//! use jerry_parser::JerryParser;
//!
//! let parser = JerryParser::builder().upgrade_price(6_500_000).build().unwrap();
//! let report = parser.run(&["logs/latest.log", "logs/2024-05-01-1.log.gz"]).unwrap();
//! print!("{}", report);
//! ```

pub mod aggregator;
pub mod coins;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod reader;
pub mod render;

pub use aggregator::{aggregate, Aggregator};
pub use error::{JerryError, Result};
pub use extractor::PurchaseExtractor;
pub use models::{AggregateReport, PurchaseRecord, Variant};
pub use render::render;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

// ---------------------------------------------------------------------------
// JerryParserBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`JerryParser`].
#[derive(Default)]
pub struct JerryParserBuilder {
    upgrade_price: i64,
}

impl JerryParserBuilder {
    /// Price of one Recombobulator 3000, taken out of the total for every
    /// recombobulated purchase. Defaults to 0.
    pub fn upgrade_price(mut self, price: i64) -> Self {
        self.upgrade_price = price;
        self
    }

    /// Compile the purchase pattern and build the parser.
    pub fn build(self) -> Result<JerryParser> {
        Ok(JerryParser {
            extractor: PurchaseExtractor::new()?,
            upgrade_price: self.upgrade_price,
        })
    }
}

// ---------------------------------------------------------------------------
// JerryParser
// ---------------------------------------------------------------------------

/// Reads log files one after another and produces a single report.
pub struct JerryParser {
    extractor: PurchaseExtractor,
    upgrade_price: i64,
}

impl JerryParser {
    /// Create a new builder for configuring the parser.
    pub fn builder() -> JerryParserBuilder {
        JerryParserBuilder::default()
    }

    /// Recombobulator price used when aggregating.
    pub fn upgrade_price(&self) -> i64 {
        self.upgrade_price
    }

    /// Purchases found in one file.
    ///
    /// An unreadable file is logged and contributes nothing.
    pub fn extract_file(&self, path: &Path) -> Vec<PurchaseRecord> {
        let content = reader::read_file(path);
        if content.is_empty() {
            return Vec::new();
        }
        let purchases = self.extractor.extract(&content);
        debug!("{}: {} purchases", path.display(), purchases.len());
        purchases
    }

    /// Process `paths` in order and aggregate every purchase found.
    ///
    /// Fails only when `paths` is empty; files that cannot be read are
    /// skipped.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Result<AggregateReport> {
        if paths.is_empty() {
            return Err(JerryError::NoInput);
        }

        let mut purchases = Vec::new();
        for path in paths {
            let path = path.as_ref();
            info!("Processing: {}", path.display());
            purchases.extend(self.extract_file(path));
        }

        Ok(aggregate(&purchases, self.upgrade_price))
    }
}

impl fmt::Display for JerryParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JerryParser(upgrade_price={})", self.upgrade_price)
    }
}

// ---------------------------------------------------------------------------
// Log discovery
// ---------------------------------------------------------------------------

/// Whether the file name looks like a chat log (`.log` or `.log.gz`).
pub fn is_log_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| config::LOG_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Log files directly inside `dir`, sorted by name.
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(JerryError::InvalidArgument(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_log_name(&path) {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}

/// Expand directories to the logs they contain; other paths pass through
/// untouched, in the order given.
pub fn resolve_paths<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            paths.extend(discover_logs(input)?);
        } else {
            paths.push(input.to_path_buf());
        }
    }
    Ok(paths)
}
