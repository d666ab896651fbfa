//! Plain-text rendering of an [`AggregateReport`].

use std::fmt;

use crate::coins::{format_coins, format_number};
use crate::models::{AggregateReport, Variant};

const TITLE: &str = "=========== Jerry Talisman Parser ===========";
const RULE: &str = "-------------------------------------------";
const FOOTER: &str = "=============================================";

/// Render the report as newline-terminated lines.
pub fn render(report: &AggregateReport) -> String {
    report.to_string()
}

fn coins_line(label: &str, coins: i64) -> String {
    format!(
        "{}: {} ({} coins)",
        label,
        format_coins(coins),
        format_number(coins)
    )
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", coins_line("All", self.total_cost()))?;
        writeln!(f, "{}", RULE)?;

        // Green is always listed; the rarer families only once bought.
        for variant in Variant::KNOWN {
            if variant != Variant::Green && self.variant_total(variant) == 0 {
                continue;
            }
            writeln!(f, "{}: {}", variant, self.count(variant, false))?;
            writeln!(
                f,
                "Recombobulated {}: {}",
                variant,
                self.count(variant, true)
            )?;
        }

        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "Green Jerry Talisman Conversion: {}",
            self.base_unit_equivalent()
        )?;
        writeln!(
            f,
            "{}",
            coins_line("Total Price Without Recombobulator", self.adjusted_cost())
        )?;
        writeln!(
            f,
            "{}",
            coins_line("Per Green Jerry Talisman", self.average_cost_per_base_unit())
        )?;
        writeln!(f, "{}", FOOTER)
    }
}
