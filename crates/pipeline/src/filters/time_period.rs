//! Filter for the requested release era.

use crate::preferences::TimePeriod;
use crate::traits::Filter;
use data_loader::CatalogItem;

/// Keeps items released in the requested period.
///
/// Items with an unknown year are dropped by every period except `Any`.
pub struct TimePeriodFilter {
    period: TimePeriod,
}

impl TimePeriodFilter {
    pub fn new(period: TimePeriod) -> Self {
        Self { period }
    }
}

impl Filter for TimePeriodFilter {
    fn name(&self) -> &str {
        "TimePeriodFilter"
    }

    fn keep(&self, item: &CatalogItem) -> bool {
        self.period.contains(item.year)
    }
}
