//! Four-axis score totals and the scoring engine.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::domain::questionnaire::{AnswerMap, Axis, AxisGroup, QuestionCatalog};

/// Totals for each axis, fully derived from an answer map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Scores {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::A => self.a,
            Axis::B => self.b,
            Axis::C => self.c,
            Axis::D => self.d,
        }
    }

    fn add(&mut self, axis: Axis, points: u32) {
        let slot = match axis {
            Axis::A => &mut self.a,
            Axis::B => &mut self.b,
            Axis::C => &mut self.c,
            Axis::D => &mut self.d,
        };
        *slot += points;
    }

    /// Sum of both axes in a group.
    pub fn total_for(&self, group: AxisGroup) -> u32 {
        let (first, second) = group.axes();
        self.get(first) + self.get(second)
    }

    /// Checks that each group totals 5 points per question in that group.
    pub fn is_conserved(&self, catalog: &QuestionCatalog) -> bool {
        AxisGroup::ALL
            .iter()
            .all(|&g| self.total_for(g) as usize == 5 * catalog.count_in(g))
    }
}

impl Index<Axis> for Scores {
    type Output = u32;

    fn index(&self, axis: Axis) -> &u32 {
        match axis {
            Axis::A => &self.a,
            Axis::B => &self.b,
            Axis::C => &self.c,
            Axis::D => &self.d,
        }
    }
}

/// Computes axis totals from answers.
///
/// Each question gives `6 - v` to its first axis and `v - 1` to its
/// second, with unanswered questions read as 4. The fold is order
/// independent.
pub fn compute_scores(catalog: &QuestionCatalog, answers: &AnswerMap) -> Scores {
    catalog.iter().fold(Scores::default(), |mut scores, question| {
        let value = answers.get(&question.id);
        scores.add(question.axes.first(), value.first_axis_points());
        scores.add(question.axes.second(), value.second_axis_points());
        scores
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AxisPair, QuestionId, QuestionPair, SliderValue};
    use proptest::prelude::*;

    fn all_answers(catalog: &QuestionCatalog, v: u8) -> AnswerMap {
        catalog
            .iter()
            .map(|q| (q.id.clone(), SliderValue::new(v).unwrap()))
            .collect()
    }

    #[test]
    fn default_answers_score_30_45_30_45() {
        let catalog = QuestionCatalog::bundled();
        let scores = compute_scores(catalog, &AnswerMap::new());
        assert_eq!(scores, Scores::new(30, 45, 30, 45));

        let explicit = compute_scores(catalog, &AnswerMap::defaulted(catalog));
        assert_eq!(explicit, scores);
    }

    #[test]
    fn all_ones_favor_first_axes() {
        let catalog = QuestionCatalog::bundled();
        let scores = compute_scores(catalog, &all_answers(catalog, 1));
        assert_eq!(scores, Scores::new(75, 0, 75, 0));
    }

    #[test]
    fn all_sixes_favor_second_axes() {
        let catalog = QuestionCatalog::bundled();
        let scores = compute_scores(catalog, &all_answers(catalog, 6));
        assert_eq!(scores, Scores::new(0, 75, 0, 75));
    }

    #[test]
    fn reversed_axis_pair_swaps_points() {
        let catalog = QuestionCatalog::new(vec![QuestionPair::new(
            QuestionId::new("r1").unwrap(),
            "Quiet",
            "Talkative",
            AxisPair::new(Axis::B, Axis::A).unwrap(),
        )])
        .unwrap();
        let answers: AnswerMap = [(QuestionId::new("r1").unwrap(), SliderValue::new(1).unwrap())]
            .into_iter()
            .collect();

        let scores = compute_scores(&catalog, &answers);
        assert_eq!(scores.b, 5);
        assert_eq!(scores.a, 0);
    }

    #[test]
    fn answers_for_unknown_ids_are_ignored() {
        let catalog = QuestionCatalog::bundled();
        let mut answers = AnswerMap::new();
        answers.set(QuestionId::new("stray").unwrap(), SliderValue::new(1).unwrap());
        assert_eq!(compute_scores(catalog, &answers), Scores::new(30, 45, 30, 45));
    }

    #[test]
    fn index_matches_get() {
        let scores = Scores::new(1, 2, 3, 4);
        for axis in Axis::ALL {
            assert_eq!(scores[axis], scores.get(axis));
        }
        assert_eq!(scores.total_for(AxisGroup::AB), 3);
        assert_eq!(scores.total_for(AxisGroup::CD), 7);
    }

    fn arb_answers() -> impl Strategy<Value = AnswerMap> {
        let n = QuestionCatalog::bundled().len();
        proptest::collection::vec(proptest::option::of(1u8..=6), n).prop_map(|values| {
            QuestionCatalog::bundled()
                .iter()
                .zip(values)
                .filter_map(|(q, v)| v.map(|v| (q.id.clone(), SliderValue::new(v).unwrap())))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn scores_are_conserved(answers in arb_answers()) {
            let catalog = QuestionCatalog::bundled();
            let scores = compute_scores(catalog, &answers);
            prop_assert_eq!(scores.a + scores.b, 5 * 15);
            prop_assert_eq!(scores.c + scores.d, 5 * 15);
            prop_assert!(scores.is_conserved(catalog));
        }

        #[test]
        fn scores_stay_within_bounds(answers in arb_answers()) {
            let scores = compute_scores(QuestionCatalog::bundled(), &answers);
            for axis in Axis::ALL {
                prop_assert!(scores[axis] <= 75);
            }
        }
    }
}
