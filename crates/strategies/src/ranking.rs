//! Ordering helpers shared by the strategies.
//!
//! All sorts are stable, highest first, with unknown values after every
//! known one.

use crate::error::StrategyError;
use std::cmp::Ordering;

/// Descending order, `None` last
pub(crate) fn descending(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by `key`, highest first. Fails if any key is NaN.
pub(crate) fn sort_descending_by<T>(
    items: &mut [T],
    key: impl Fn(&T) -> Option<f32>,
) -> Result<(), StrategyError> {
    if items.iter().any(|item| key(item).is_some_and(f32::is_nan)) {
        return Err(StrategyError::ScoreNotComparable);
    }
    items.sort_by(|a, b| descending(key(a), key(b)));
    Ok(())
}

/// Treat NaN as unknown
pub(crate) fn known(value: Option<f32>) -> Option<f32> {
    value.filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sorts_last() {
        let mut values = vec![None, Some(1.0), Some(3.0), None, Some(2.0)];
        sort_descending_by(&mut values, |v| *v).unwrap();
        assert_eq!(values, vec![Some(3.0), Some(2.0), Some(1.0), None, None]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut pairs = vec![(1, Some(5.0)), (2, Some(7.0)), (3, Some(5.0)), (4, Some(7.0))];
        sort_descending_by(&mut pairs, |p| p.1).unwrap();
        let ids: Vec<_> = pairs.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut values = vec![Some(1.0), Some(f32::NAN)];
        assert_eq!(
            sort_descending_by(&mut values, |v| *v),
            Err(StrategyError::ScoreNotComparable)
        );
        assert_eq!(known(Some(f32::NAN)), None);
    }
}
