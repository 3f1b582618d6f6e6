//! Reduce raw responses to competency averages and an overall average.
//!
//! Both functions are total: missing entries are skipped, never an error.

use crate::catalog::COMPETENCY_MAP;
use crate::competency::Competency;
use crate::responses::Responses;
use indexmap::IndexMap;

/// Competency → mean score, ordered by the competency map.
pub type CompetencyScores = IndexMap<Competency, f64>;

/// Average the present responses of each competency.
///
/// Competencies with no answered question are omitted, not zero-filled.
pub fn competency_scores(responses: &Responses) -> CompetencyScores {
    let mut scores = CompetencyScores::new();
    for (competency, ids) in COMPETENCY_MAP {
        let present: Vec<f64> = ids
            .iter()
            .filter_map(|id| responses.get(*id))
            .map(|v| f64::from(*v))
            .collect();
        if let Some(avg) = mean(&present) {
            scores.insert(*competency, avg);
        }
    }
    scores
}

/// Mean of every response value in the set; `0.0` when the set is empty.
pub fn overall_score(responses: &Responses) -> f64 {
    let values: Vec<f64> = responses.values().map(|v| f64::from(*v)).collect();
    mean(&values).unwrap_or(0.0)
}

/// Render a score or delta with two decimals, rounding ties away from zero.
pub fn format_score(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Left-to-right sum divided by count, matching a naive accumulator exactly.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::parse_responses;
    use proptest::prelude::*;

    #[test]
    fn test_overall_empty_is_zero() {
        assert_eq!(overall_score(&Responses::new()), 0.0);
    }

    #[test]
    fn test_competency_omitted_when_unanswered() {
        let responses = parse_responses("Q1=4,Q2=2,Q6=3").unwrap();
        let scores = competency_scores(&responses);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(&Competency::AgileMindset), Some(&4.0));
        assert_eq!(scores.get(&Competency::ProductManagement), Some(&2.5));
        assert!(!scores.contains_key(&Competency::RiskCompliance));
    }

    #[test]
    fn test_scores_follow_map_order() {
        let responses = parse_responses("Q12=2,Q1=3,Q3=4").unwrap();
        let keys: Vec<_> = competency_scores(&responses).keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Competency::AgileMindset,
                Competency::Requirements,
                Competency::RiskCompliance
            ]
        );
    }

    #[test]
    fn test_baseline_sample_scores() {
        let responses = parse_responses(
            "Q1=3,Q2=2,Q3=3,Q4=2,Q5=3,Q6=2,Q7=3,Q8=2,Q9=3,Q10=4,Q11=3,Q12=2,Q13=4,Q14=2,Q15=3",
        )
        .unwrap();
        let overall = overall_score(&responses);
        assert!((overall - 41.0 / 15.0).abs() < 1e-12);
        let scores = competency_scores(&responses);
        assert_eq!(scores[&Competency::RiskCompliance], 2.0);
        assert!((scores[&Competency::ProductManagement] - 2.2).abs() < 1e-12);
        assert_eq!(scores[&Competency::BusinessAnalysis], 2.5);
    }

    #[test]
    fn test_format_score_rounds_ties_up() {
        assert_eq!(format_score(2.125), "2.13");
        assert_eq!(format_score(41.0 / 15.0), "2.73");
        assert_eq!(format_score(-0.3), "-0.30");
        assert_eq!(format_score(3.0), "3.00");
    }

    fn arb_responses() -> impl Strategy<Value = Responses> {
        proptest::collection::vec(proptest::option::of(1u8..=5), 15).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .filter_map(|(i, v)| v.map(|v| (format!("Q{}", i + 1), v)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_overall_within_bounds(responses in arb_responses()) {
            let overall = overall_score(&responses);
            if responses.is_empty() {
                prop_assert_eq!(overall, 0.0);
            } else {
                prop_assert!((1.0..=5.0).contains(&overall));
            }
        }

        #[test]
        fn prop_competency_is_mean_of_present_values(responses in arb_responses()) {
            let scores = competency_scores(&responses);
            for (competency, ids) in COMPETENCY_MAP {
                let present: Vec<f64> = ids
                    .iter()
                    .filter_map(|id| responses.get(*id))
                    .map(|v| f64::from(*v))
                    .collect();
                match scores.get(competency) {
                    Some(score) => {
                        let expected = present.iter().sum::<f64>() / present.len() as f64;
                        prop_assert_eq!(*score, expected);
                    }
                    None => prop_assert!(present.is_empty()),
                }
            }
        }
    }
}
