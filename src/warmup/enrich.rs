//! Page enrichment: genre ids to genre names.

use crate::cache::Cache;
use crate::tmdb::{Genre, MovieListItem};
use crate::warmup::genres::genre_name;

/// Resolves every item's `genre_ids` into `genres`.
///
/// One cache read per id, no writes. Order and duplicates follow
/// `genre_ids`; uncached ids resolve to an empty name. Existing `genres`
/// are replaced.
pub async fn enrich_items(cache: &dyn Cache, items: Vec<MovieListItem>) -> Vec<MovieListItem> {
    let mut enriched = Vec::with_capacity(items.len());

    for mut item in items {
        let mut genres = Vec::with_capacity(item.genre_ids.len());
        for &id in &item.genre_ids {
            genres.push(Genre {
                id,
                name: genre_name(cache, id).await,
            });
        }
        item.genres = genres;
        enriched.push(item);
    }

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::cache::MemoryCache;

    fn item(id: i64, genre_ids: Vec<i64>) -> MovieListItem {
        MovieListItem {
            id,
            title: format!("Movie {}", id),
            genre_ids,
            ..Default::default()
        }
    }

    async fn seeded_cache() -> MemoryCache {
        let cache = MemoryCache::new();
        cache.set("genres/3", "Drama".to_string()).await.unwrap();
        cache.set("genres/1", "Action".to_string()).await.unwrap();
        cache
    }

    #[tokio::test]
    async fn test_enrich_preserves_order_and_duplicates() {
        let cache = seeded_cache().await;

        let items = enrich_items(&cache, vec![item(10, vec![3, 7, 3])]).await;

        let names: Vec<(i64, &str)> = items[0]
            .genres
            .iter()
            .map(|g| (g.id, g.name.as_str()))
            .collect();
        assert_eq!(names, vec![(3, "Drama"), (7, ""), (3, "Drama")]);
    }

    #[tokio::test]
    async fn test_enrich_reads_once_per_id_and_never_writes() {
        let cache = seeded_cache().await;
        let before = cache.stats().await;

        enrich_items(&cache, vec![item(1, vec![1, 3]), item(2, vec![3, 3, 9])]).await;

        let after = cache.stats().await;
        assert_eq!(after.reads() - before.reads(), 5);
        assert_eq!(after.writes, before.writes);
    }

    #[tokio::test]
    async fn test_enrich_keeps_items_in_order() {
        let cache = seeded_cache().await;

        let items = enrich_items(&cache, vec![item(5, vec![]), item(6, vec![1])]).await;

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![5, 6]);
        assert!(items[0].genres.is_empty());
        assert_eq!(items[1].genres[0].name, "Action");
    }

    #[tokio::test]
    async fn test_enrich_twice_gives_same_result() {
        let cache = seeded_cache().await;

        let once = enrich_items(&cache, vec![item(1, vec![1, 3])]).await;
        let twice = enrich_items(&cache, once.clone()).await;

        assert_eq!(once, twice);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Enriched genres mirror genre_ids one-to-one, in order.
        #[test]
        fn prop_enrich_mirrors_genre_ids(ids in prop::collection::vec(0i64..6, 0..12)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let items = rt.block_on(async {
                let cache = seeded_cache().await;
                enrich_items(&cache, vec![item(1, ids.clone())]).await
            });

            let resolved: Vec<i64> = items[0].genres.iter().map(|g| g.id).collect();
            prop_assert_eq!(resolved, ids);
            for genre in &items[0].genres {
                let expected = match genre.id {
                    1 => "Action",
                    3 => "Drama",
                    _ => "",
                };
                prop_assert_eq!(genre.name.as_str(), expected);
            }
        }
    }
}
