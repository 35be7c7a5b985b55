//! Reasons a strategy gives up and hands over to the basic ranking.

use data_loader::MovieId;
use thiserror::Error;

/// Why a strategy could not produce its own ranking.
///
/// None of these reach the caller: the engine logs them and runs the basic
/// strategy over the same candidates instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("no similarity artifact covers the reference movie")]
    NoTextArtifacts,

    #[error("reference movie {0} is not in the catalog")]
    ReferenceNotInCatalog(MovieId),

    #[error("a ranking score is not a number")]
    ScoreNotComparable,
}
