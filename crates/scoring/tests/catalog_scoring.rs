//! End-to-end scoring of the sample response sets through the public API.

use teamassess_scoring::{
    create_assessment, format_score, parse_responses, questions_for, sample_assessments,
    validate_catalog, AssessmentMeta, Competency, ScoreBand, QUESTIONS,
};

#[test]
fn given_static_tables_when_validated_then_every_question_is_mapped_once() {
    assert!(validate_catalog().is_ok());
    let mapped: usize = Competency::ALL
        .iter()
        .map(|c| questions_for(*c).len())
        .sum();
    assert_eq!(mapped, QUESTIONS.len());
}

#[test]
fn given_baseline_sample_when_scored_then_figures_match_the_worked_example() {
    let samples = sample_assessments();
    let baseline = &samples[0];

    assert_eq!(baseline.overall_score, 41.0 / 15.0);
    assert_eq!(format_score(baseline.overall_score), "2.73");
    assert_eq!(baseline.overall_band(), ScoreBand::Developing);
    assert_eq!(
        baseline.competency_score(Competency::RiskCompliance),
        Some(2.0)
    );
}

#[test]
fn given_week6_sample_when_compared_then_every_competency_improved() {
    let samples = sample_assessments();
    let (baseline, week6) = (&samples[0], &samples[1]);

    for competency in Competency::ALL {
        let before = baseline.competency_score(competency).unwrap();
        let after = week6.competency_score(competency).unwrap();
        let expected = match competency {
            Competency::Stakeholdering | Competency::ChangeInnovation => 0.5,
            _ => 1.0,
        };
        assert!(
            (after - before - expected).abs() < 1e-9,
            "{competency}: {before} -> {after}"
        );
    }
}

#[test]
fn given_partial_responses_when_created_then_only_answered_competencies_score() {
    let meta = AssessmentMeta {
        assessee_name: "Ana".into(),
        ..Default::default()
    };
    let a = create_assessment(meta, parse_responses("Q12=1,Q5=5").unwrap());
    assert_eq!(a.competency_scores.len(), 2);
    assert_eq!(a.overall_score, 3.0);
    assert_eq!(a.competency_score(Competency::RiskCompliance), Some(1.0));
    assert_eq!(a.competency_score(Competency::AgileMindset), None);
}
