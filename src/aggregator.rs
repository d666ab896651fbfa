//! Folds purchase records into an [`AggregateReport`].

use std::collections::BTreeMap;

use crate::models::{AggregateReport, PurchaseRecord, Variant};

/// Running tally over purchase records.
///
/// Records can be added in any order; the finished report only depends on
/// which records were added.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_cost: i64,
    counts: BTreeMap<(Variant, bool), u64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &PurchaseRecord) {
        self.total_cost = self.total_cost.saturating_add(record.cost);
        if record.variant != Variant::Unknown {
            *self
                .counts
                .entry((record.variant, record.recombobulated))
                .or_default() += 1;
        }
    }

    pub fn extend<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a PurchaseRecord>,
    {
        for record in records {
            self.add(record);
        }
    }

    /// Close the tally.
    ///
    /// `upgrade_price` is what one Recombobulator 3000 costs; it is taken out
    /// of the total once per recombobulated purchase before averaging over
    /// the Green-equivalent count.
    pub fn finish(self, upgrade_price: i64) -> AggregateReport {
        let base_unit_equivalent: u64 = self
            .counts
            .iter()
            .map(|((variant, _), count)| count * variant.multiplier())
            .sum();
        let recombobulated: u64 = self
            .counts
            .iter()
            .filter(|((_, recombobulated), _)| *recombobulated)
            .map(|(_, count)| count)
            .sum();

        // Totals clamp at the i64 range instead of wrapping.
        let recombobulated = i64::try_from(recombobulated).unwrap_or(i64::MAX);
        let adjusted_cost = self
            .total_cost
            .saturating_sub(recombobulated.saturating_mul(upgrade_price));
        let average_cost_per_base_unit = if base_unit_equivalent > 0 {
            adjusted_cost / i64::try_from(base_unit_equivalent).unwrap_or(i64::MAX)
        } else {
            0
        };

        AggregateReport {
            total_cost: self.total_cost,
            counts: self.counts,
            base_unit_equivalent,
            adjusted_cost,
            average_cost_per_base_unit,
            upgrade_price,
        }
    }
}

/// Aggregate a full set of records in one go.
pub fn aggregate(records: &[PurchaseRecord], upgrade_price: i64) -> AggregateReport {
    let mut aggregator = Aggregator::new();
    aggregator.extend(records);
    aggregator.finish(upgrade_price)
}
