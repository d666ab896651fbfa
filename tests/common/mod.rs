//! Shared fixtures for the integration tests.
//!
//! Builds chat log lines the way the Minecraft client writes them (with `§`
//! colour codes) and drops them into temp files, plain or gzip-compressed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

/// A purchase line for a Jerry Talisman.
///
/// `marker` is the rarity colour code in front of the colour word, `amount`
/// is written as it appears in chat (e.g. `"1,000"`).
pub fn purchase_line(marker: char, color: &str, amount: &str) -> String {
    item_line(marker, color, "Talisman", amount)
}

/// Same as [`purchase_line`] for the artifact form of the item.
pub fn artifact_line(marker: char, color: &str, amount: &str) -> String {
    item_line(marker, color, "Artifact", amount)
}

fn item_line(marker: char, color: &str, kind: &str, amount: &str) -> String {
    format!(
        "[12:01:44] [Client thread/INFO]: [CHAT] §aYou purchased §{}{} Jerry {} §afor §6{} coins§a!",
        marker, color, kind, amount
    )
}

/// Chat noise that must never produce a purchase.
pub fn noise() -> String {
    [
        "[12:00:01] [Client thread/INFO]: Setting user: Steve",
        "[12:00:05] [Client thread/INFO]: [CHAT] §aYou purchased §9Enchanted Book §afor §6250 coins§a!",
        "[12:00:09] [Client thread/INFO]: [CHAT] §eYou claimed §9Green Jerry Talisman §efrom an auction!",
        "[12:00:12] [Client thread/INFO]: [CHAT] §6[Bazaar] §7Bought §a64§7x §aEnchanted Carrot §7for §61,920 coins§7!",
    ]
    .join("\n")
}

/// Join lines into a log body with a trailing newline.
pub fn log_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn write_plain(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn write_gzip(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}
