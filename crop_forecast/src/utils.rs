//! Calendar helpers for forecast periods

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spacing between consecutive forecast steps of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// Calendar months covered by one step
    pub fn months_per_step(self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Annual => 12,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Annual => write!(f, "annual"),
        }
    }
}

/// Date of the period reached `steps` steps after `anchor`.
///
/// Returns `None` when the date falls outside the calendar chrono supports.
pub fn period_end(anchor: NaiveDate, steps: usize, frequency: Frequency) -> Option<NaiveDate> {
    let steps = u32::try_from(steps).ok()?;
    let months = steps.checked_mul(frequency.months_per_step())?;
    anchor.checked_add_months(Months::new(months))
}
