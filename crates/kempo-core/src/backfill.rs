//! Filling pension figures the source leaves blank.
//!
//! Published tables print pension figures only for the ranks inside the
//! pension bracket range; ranks below it share the lowest pension bracket
//! and ranks above it share the highest. Gaps in the upper half of the table
//! take the last observed value, gaps in the lower half take the first.

use tracing::debug;

use kempo_model::RankEntry;

use crate::error::{CoreError, Result};

/// Fills missing `pension_rank`, `pension_total` and `pension_salary`
/// values from the first or last observed value, by table half.
pub fn backfill_pensions(entries: &mut [RankEntry]) -> Result<()> {
    fill(entries, "pension_rank", |entry| &mut entry.pension_rank)?;
    fill(entries, "pension_total", |entry| &mut entry.pension_total)?;
    fill(entries, "pension_salary", |entry| &mut entry.pension_salary)?;
    Ok(())
}

fn fill<T: Clone>(
    entries: &mut [RankEntry],
    field: &'static str,
    slot: impl Fn(&mut RankEntry) -> &mut Option<T>,
) -> Result<()> {
    let observed: Vec<T> = entries
        .iter_mut()
        .filter_map(|entry| slot(entry).clone())
        .collect();
    let count = entries.len();
    let mut filled = 0usize;

    for (index, entry) in entries.iter_mut().enumerate() {
        let value = slot(entry);
        if value.is_some() {
            continue;
        }
        let source = if index * 2 < count {
            observed.first()
        } else {
            observed.last()
        };
        *value = Some(source.ok_or(CoreError::MissingPensionData { field })?.clone());
        filled += 1;
    }

    debug!(field, observed = observed.len(), filled, "backfilled pension field");
    Ok(())
}
