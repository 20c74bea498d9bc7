//! Pure review-state transitions.
//!
//! `ReviewMap` is a plain value: every operation either returns derived data
//! or mutates the map in place, with no storage or reactivity involved. The
//! reactive store in `ratings::mod` wraps it in a signal and persists after
//! each mutation, so everything here stays testable without a browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::review::{Review, ReviewId};
use crate::ratings::seed::seed_reviews;

/// Aggregate numbers for the admin overview, recomputed whenever the map
/// changes. `avg_rating` is `None` until the first user review exists.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobalStats {
    pub total_user_reviews: usize,
    pub avg_rating: Option<f64>,
}

/// User-submitted reviews keyed by resource id, newest first per resource.
/// Seed reviews are not part of the map; they are appended at read time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewMap(BTreeMap<u32, Vec<Review>>);

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl ReviewMap {
    /// Prepend a review to a resource's list, creating the list if needed.
    /// The store trusts its caller: the review is assumed fully formed and
    /// the resource id is not checked against the catalog.
    pub fn add(&mut self, resource_id: u32, review: Review) {
        self.0.entry(resource_id).or_default().insert(0, review);
    }

    /// Remove a review by id. Unknown resource or review ids are a no-op;
    /// in particular this never materializes an empty entry.
    pub fn remove(&mut self, resource_id: u32, review_id: &ReviewId) {
        if let Some(list) = self.0.get_mut(&resource_id) {
            list.retain(|review| review.id != *review_id);
        }
    }

    /// User-submitted reviews for one resource, newest first.
    pub fn user_reviews(&self, resource_id: u32) -> &[Review] {
        self.0.get(&resource_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn user_count(&self, resource_id: u32) -> usize {
        self.user_reviews(resource_id).len()
    }

    /// Everything a detail view shows: user reviews newest-first, then the
    /// three seed reviews in their fixed order.
    pub fn reviews_with_seed(&self, resource_id: u32) -> Vec<Review> {
        let mut reviews = self.user_reviews(resource_id).to_vec();
        reviews.extend(seed_reviews());
        reviews
    }

    /// Blended average for a resource. With no user reviews the catalog's
    /// base rating passes through untouched (seed reviews are not counted in
    /// that case); otherwise every user rating, every seed rating and the
    /// base rating carry equal weight, rounded half-up to one decimal.
    pub fn avg_rating(&self, resource_id: u32, base_rating: f64) -> f64 {
        let user = self.user_reviews(resource_id);
        if user.is_empty() {
            return base_rating;
        }
        let mut sum = base_rating;
        let mut count = 1usize;
        for review in user {
            sum += f64::from(review.rating);
            count += 1;
        }
        for review in seed_reviews() {
            sum += f64::from(review.rating);
            count += 1;
        }
        round_to_tenth(sum / count as f64)
    }

    /// Flat moderation list across all resources. Each entry's
    /// `resource_id` is rewritten from the key it was stored under, and the
    /// result is sorted strictly descending by the numeric id, so the most
    /// recently submitted review comes first.
    pub fn all_user_reviews(&self) -> Vec<Review> {
        let mut all: Vec<Review> = self
            .0
            .iter()
            .flat_map(|(&resource_id, list)| {
                list.iter().cloned().map(move |mut review| {
                    review.resource_id = resource_id;
                    review
                })
            })
            .collect();
        all.sort_by_key(|review| std::cmp::Reverse(review.id.recency()));
        all
    }

    pub fn global_stats(&self) -> GlobalStats {
        let mut total = 0usize;
        let mut sum = 0u64;
        for list in self.0.values() {
            total += list.len();
            sum += list.iter().map(|r| u64::from(r.rating)).sum::<u64>();
        }
        let avg_rating = if total > 0 {
            Some(round_to_tenth(sum as f64 / total as f64))
        } else {
            None
        };
        GlobalStats {
            total_user_reviews: total,
            avg_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_review(id: i64, rating: u8) -> Review {
        Review {
            id: ReviewId::Submitted(id),
            resource_id: 0,
            name: "Test Reader".into(),
            initials: "TR".into(),
            color: "#3b82f6".into(),
            rating,
            text: "Long enough to pass the form's length check.".into(),
            date: "Mar 2026".into(),
            is_new: false,
        }
    }

    #[test]
    fn avg_rating_passes_base_through_without_user_reviews() {
        let map = ReviewMap::default();
        assert_eq!(map.avg_rating(7, 4.2), 4.2);
        assert_eq!(map.avg_rating(7, 1.0), 1.0);
    }

    #[test]
    fn avg_rating_blends_user_seed_and_base() {
        // One 5-star review, seed ratings 5/4/4, base 4.2:
        // mean(5, 5, 4, 4, 4.2) = 22.2 / 5 = 4.44 -> 4.4
        let mut map = ReviewMap::default();
        map.add(1, user_review(100, 5));
        let avg = map.avg_rating(1, 4.2);
        assert!((1.0..=5.0).contains(&avg));
        assert_eq!(avg, 4.4);
    }

    #[test]
    fn avg_rating_rounds_half_up() {
        // mean(5, 5, 4, 4, 3.25) = 21.25 / 5 = 4.25 -> 4.3
        let mut map = ReviewMap::default();
        map.add(1, user_review(100, 5));
        assert_eq!(map.avg_rating(1, 3.25), 4.3);
    }

    #[test]
    fn avg_rating_stays_in_range() {
        let mut map = ReviewMap::default();
        map.add(1, user_review(1, 1));
        map.add(1, user_review(2, 1));
        let avg = map.avg_rating(1, 1.0);
        assert!((1.0..=5.0).contains(&avg));

        let mut high = ReviewMap::default();
        high.add(1, user_review(1, 5));
        let avg = high.avg_rating(1, 5.0);
        assert!((1.0..=5.0).contains(&avg));
    }

    #[test]
    fn reviews_with_seed_always_ends_with_the_three_seeds() {
        let mut map = ReviewMap::default();
        assert_eq!(map.reviews_with_seed(9).len(), 3);

        map.add(9, user_review(1, 4));
        map.add(9, user_review(2, 5));
        let reviews = map.reviews_with_seed(9);
        assert_eq!(reviews.len(), 5);

        let tail: Vec<_> = reviews[reviews.len() - 3..]
            .iter()
            .map(|r| (r.id.clone(), r.rating))
            .collect();
        assert_eq!(
            tail,
            vec![
                (ReviewId::Seed("seed-1".into()), 5),
                (ReviewId::Seed("seed-2".into()), 4),
                (ReviewId::Seed("seed-3".into()), 4),
            ]
        );
    }

    #[test]
    fn add_prepends_and_bumps_count() {
        let mut map = ReviewMap::default();
        map.add(4, user_review(1, 3));
        assert_eq!(map.user_count(4), 1);

        map.add(4, user_review(2, 5));
        assert_eq!(map.user_count(4), 2);
        assert_eq!(map.reviews_with_seed(4)[0].id, ReviewId::Submitted(2));
    }

    #[test]
    fn remove_restores_prior_state() {
        let mut map = ReviewMap::default();
        map.add(4, user_review(1, 3));
        map.add(4, user_review(2, 5));

        map.remove(4, &ReviewId::Submitted(2));
        assert_eq!(map.user_count(4), 1);
        assert!(map
            .reviews_with_seed(4)
            .iter()
            .all(|r| r.id != ReviewId::Submitted(2)));
    }

    #[test]
    fn remove_unknown_ids_is_a_noop() {
        let mut map = ReviewMap::default();
        map.add(4, user_review(1, 3));

        map.remove(4, &ReviewId::Submitted(99));
        assert_eq!(map.user_count(4), 1);

        // Unknown resource must not materialize an entry.
        map.remove(123, &ReviewId::Submitted(1));
        assert_eq!(map.user_count(123), 0);
        assert_eq!(map.all_user_reviews().len(), 1);
    }

    #[test]
    fn all_user_reviews_sorted_descending_and_tagged() {
        let mut map = ReviewMap::default();
        map.add(1, user_review(10, 4));
        map.add(2, user_review(30, 5));
        map.add(1, user_review(20, 2));

        let all = map.all_user_reviews();
        let ids: Vec<i64> = all.iter().map(|r| r.id.recency()).collect();
        assert_eq!(ids, vec![30, 20, 10]);

        for review in &all {
            match review.id.recency() {
                30 => assert_eq!(review.resource_id, 2),
                _ => assert_eq!(review.resource_id, 1),
            }
        }
        // Seeds are synthesized at read time only and never show up here.
        assert!(all
            .iter()
            .all(|r| matches!(r.id, ReviewId::Submitted(_))));
    }

    #[test]
    fn all_user_reviews_spans_resources() {
        let mut map = ReviewMap::default();
        map.add(1, user_review(1, 4));
        map.add(2, user_review(2, 5));
        let all = map.all_user_reviews();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|r| r.resource_id == 1));
        assert!(all.iter().any(|r| r.resource_id == 2));
    }

    #[test]
    fn global_stats_sentinel_and_mean() {
        let map = ReviewMap::default();
        assert_eq!(map.global_stats(), GlobalStats::default());

        let mut map = ReviewMap::default();
        map.add(1, user_review(1, 5));
        map.add(2, user_review(2, 4));
        map.add(2, user_review(3, 4));
        let stats = map.global_stats();
        assert_eq!(stats.total_user_reviews, 3);
        // mean(5, 4, 4) = 4.333... -> 4.3
        assert_eq!(stats.avg_rating, Some(4.3));
    }
}
