//! Dominant profile classification by quadrant products.
//!
//! A profile needs strength on both of its axes at once, so each quadrant
//! is scored as a product rather than a sum. A sum would let one strong
//! axis carry a profile on its own.

use super::{ColorProfile, Scores};

/// Products for each quadrant in `[Red, Blue, Yellow, Green]` order.
pub fn quadrant_products(scores: &Scores) -> [(ColorProfile, u64); 4] {
    ColorProfile::ALL.map(|profile| {
        let (first, second) = profile.axes();
        (profile, scores[first] as u64 * scores[second] as u64)
    })
}

/// Picks the profile with the strictly greatest quadrant product.
///
/// Ties keep the first maximum in `ColorProfile::ALL` order.
pub fn classify_dominant(scores: &Scores) -> ColorProfile {
    let products = quadrant_products(scores);
    let mut best = products[0];
    for candidate in &products[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product_of(scores: &Scores, profile: ColorProfile) -> u64 {
        quadrant_products(scores)
            .iter()
            .find(|(p, _)| *p == profile)
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn products_follow_axis_pairs() {
        let scores = Scores::new(2, 3, 5, 7);
        assert_eq!(
            quadrant_products(&scores),
            [
                (ColorProfile::Red, 10),
                (ColorProfile::Blue, 15),
                (ColorProfile::Yellow, 14),
                (ColorProfile::Green, 21),
            ]
        );
    }

    #[test]
    fn default_profile_is_green() {
        assert_eq!(classify_dominant(&Scores::new(30, 45, 30, 45)), ColorProfile::Green);
    }

    #[test]
    fn extremes_classify_as_expected() {
        assert_eq!(classify_dominant(&Scores::new(75, 0, 75, 0)), ColorProfile::Red);
        assert_eq!(classify_dominant(&Scores::new(0, 75, 0, 75)), ColorProfile::Green);
        assert_eq!(classify_dominant(&Scores::new(0, 75, 75, 0)), ColorProfile::Blue);
        assert_eq!(classify_dominant(&Scores::new(75, 0, 0, 75)), ColorProfile::Yellow);
    }

    #[test]
    fn one_sided_strength_does_not_win() {
        // A is maxed but C is zero, so Red gets nothing.
        let scores = Scores::new(75, 0, 0, 75);
        assert_eq!(product_of(&scores, ColorProfile::Red), 0);
        assert_eq!(classify_dominant(&scores), ColorProfile::Yellow);
    }

    #[test]
    fn all_equal_scores_pick_red_every_time() {
        let scores = Scores::new(10, 10, 10, 10);
        for _ in 0..10 {
            assert_eq!(classify_dominant(&scores), ColorProfile::Red);
        }
    }

    #[test]
    fn tie_between_later_quadrants_keeps_first_listed() {
        // Yellow and Green tie at 30; Red and Blue are lower.
        let scores = Scores::new(5, 5, 1, 6);
        assert_eq!(classify_dominant(&scores), ColorProfile::Yellow);
    }

    #[test]
    fn all_zero_scores_pick_red() {
        assert_eq!(classify_dominant(&Scores::default()), ColorProfile::Red);
    }

    proptest! {
        #[test]
        fn increasing_a_is_monotone(
            a in 0u32..=75, b in 0u32..=75, c in 0u32..=75, d in 0u32..=75, bump in 0u32..=75
        ) {
            let before = Scores::new(a, b, c, d);
            let after = Scores::new(a + bump, b, c, d);

            prop_assert!(product_of(&after, ColorProfile::Red) >= product_of(&before, ColorProfile::Red));
            prop_assert!(product_of(&after, ColorProfile::Yellow) >= product_of(&before, ColorProfile::Yellow));
            prop_assert_eq!(product_of(&after, ColorProfile::Blue), product_of(&before, ColorProfile::Blue));
            prop_assert_eq!(product_of(&after, ColorProfile::Green), product_of(&before, ColorProfile::Green));
        }

        #[test]
        fn equal_scores_always_pick_red(v in 0u32..=75) {
            prop_assert_eq!(classify_dominant(&Scores::new(v, v, v, v)), ColorProfile::Red);
        }

        #[test]
        fn dominant_has_maximal_product(
            a in 0u32..=75, b in 0u32..=75, c in 0u32..=75, d in 0u32..=75
        ) {
            let scores = Scores::new(a, b, c, d);
            let dominant = classify_dominant(&scores);
            let best = quadrant_products(&scores).iter().map(|(_, v)| *v).max().unwrap();
            prop_assert_eq!(product_of(&scores, dominant), best);

            let first_max = quadrant_products(&scores)
                .iter()
                .find(|(_, v)| *v == best)
                .map(|(p, _)| *p)
                .unwrap();
            prop_assert_eq!(dominant, first_max);
        }
    }
}
