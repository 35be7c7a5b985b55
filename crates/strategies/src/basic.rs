//! Basic ranking: best rated first, popularity breaks ties.
//!
//! This is the fallback for every other strategy, so it cannot fail. NaN
//! ratings or popularity are ranked as unknown.

use crate::ranking::{descending, known};
use data_loader::CatalogItem;

pub fn rank<'a>(candidates: &[&'a CatalogItem], limit: usize) -> Vec<&'a CatalogItem> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        descending(known(a.rating), known(b.rating))
            .then_with(|| descending(known(a.popularity), known(b.popularity)))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_then_popularity() {
        let items = vec![
            CatalogItem::new(1, "A").with_rating(7.0).with_popularity(10.0),
            CatalogItem::new(2, "B").with_rating(8.0).with_popularity(5.0),
            CatalogItem::new(3, "C").with_rating(7.0).with_popularity(90.0),
            CatalogItem::new(4, "D"),
            CatalogItem::new(5, "E").with_rating(f32::NAN).with_popularity(99.0),
        ];
        let candidates: Vec<_> = items.iter().collect();

        let ids: Vec<_> = rank(&candidates, 10).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 5, 4]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let items: Vec<_> = (0..10)
            .map(|id| CatalogItem::new(id, "x").with_rating(id as f32))
            .collect();
        let candidates: Vec<_> = items.iter().collect();

        let ranked = rank(&candidates, 3);
        assert_eq!(ranked.iter().map(|i| i.id).collect::<Vec<_>>(), vec![9, 8, 7]);
        assert!(rank(&candidates, 0).is_empty());
    }
}
