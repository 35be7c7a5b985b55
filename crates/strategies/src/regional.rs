//! Regional ranking: one film industry, best rated first.

use crate::error::StrategyError;
use crate::ranking::sort_descending_by;
use data_loader::CatalogItem;
use pipeline::RegionTarget;

pub fn rank<'a>(
    candidates: &[&'a CatalogItem],
    target: &RegionTarget,
    limit: usize,
) -> Result<Vec<&'a CatalogItem>, StrategyError> {
    let region = match target {
        RegionTarget::Known(region) => *region,
        RegionTarget::Unrecognized(_) => return Ok(Vec::new()),
    };

    let mut matching: Vec<&CatalogItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.region == Some(region))
        .collect();
    sort_descending_by(&mut matching, |item| item.rating)?;
    matching.truncate(limit);
    Ok(matching)
}
