use std::collections::BTreeMap;

use super::purchase::Variant;

// ---------------------------------------------------------------------------
// AggregateReport — summary of every purchase across all files of a run
// ---------------------------------------------------------------------------

/// Totals for one run, built by [`Aggregator`](crate::aggregator::Aggregator).
///
/// Read-only once produced. Counts are kept per `(variant, recombobulated)`
/// pair for the four known families; `Unknown` purchases only show up in
/// [`total_cost`](Self::total_cost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub(crate) total_cost: i64,
    pub(crate) counts: BTreeMap<(Variant, bool), u64>,
    pub(crate) base_unit_equivalent: u64,
    pub(crate) adjusted_cost: i64,
    pub(crate) average_cost_per_base_unit: i64,
    pub(crate) upgrade_price: i64,
}

impl AggregateReport {
    /// Sum of every purchase cost, including `Unknown` ones.
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Number of purchases of `variant` in the given recombobulated state.
    pub fn count(&self, variant: Variant, recombobulated: bool) -> u64 {
        self.counts
            .get(&(variant, recombobulated))
            .copied()
            .unwrap_or(0)
    }

    /// Plain plus recombobulated purchases of `variant`.
    pub fn variant_total(&self, variant: Variant) -> u64 {
        self.count(variant, false) + self.count(variant, true)
    }

    /// Recombobulated purchases across the four known families.
    pub fn recombobulated_total(&self) -> u64 {
        Variant::KNOWN.iter().map(|v| self.count(*v, true)).sum()
    }

    /// All purchases expressed as Green talismans.
    pub fn base_unit_equivalent(&self) -> u64 {
        self.base_unit_equivalent
    }

    /// Total cost with the recombobulator price taken back out for every
    /// recombobulated purchase.
    pub fn adjusted_cost(&self) -> i64 {
        self.adjusted_cost
    }

    /// `adjusted_cost / base_unit_equivalent`, truncated; 0 when nothing
    /// known was bought.
    pub fn average_cost_per_base_unit(&self) -> i64 {
        self.average_cost_per_base_unit
    }

    /// Recombobulator price the report was computed with.
    pub fn upgrade_price(&self) -> i64 {
        self.upgrade_price
    }
}
