use teamassess_intelligence::{
    generate_recommendations, select_comparison, ChangeDirection, DevelopmentLevel, GapReason,
    RecommendationPolicy, SequenceWindow,
};
use teamassess_scoring::{sample_assessments, Competency, ScoreBand};

#[test]
fn given_baseline_only_when_recommending_then_priority_gaps_fill_quick_wins() {
    let samples = sample_assessments();
    let baseline = &samples[0];

    let report = generate_recommendations(Some(baseline), None).expect("report");

    assert_eq!(report.overall.band, ScoreBand::Developing);
    let gaps: Vec<Competency> = report
        .overall
        .top_gaps
        .iter()
        .map(|g| g.competency)
        .collect();
    assert_eq!(
        gaps,
        vec![
            Competency::RiskCompliance,
            Competency::ProductManagement,
            Competency::BusinessAnalysis
        ]
    );
    assert!(report
        .overall
        .top_gaps
        .iter()
        .all(|g| g.reason == GapReason::BelowTarget && g.delta.is_none()));

    let quick = &report.overall.sequence.weeks_0_to_2;
    assert_eq!(quick.len(), 4);
    assert_eq!(
        quick[0].intervention,
        "Create risk/regulatory acceptance criteria template"
    );
    assert_eq!(quick[2].competency, Competency::ProductManagement);

    let strategic = &report.overall.sequence.weeks_2_to_6;
    assert_eq!(strategic.len(), 8);
    assert_eq!(strategic[6].intervention, "Advanced analytics training");
    assert_eq!(strategic[7].intervention, "Process mapping workshops");
    assert!(strategic
        .iter()
        .all(|i| i.timeframe == SequenceWindow::Weeks2To6));

    assert_eq!(
        report.overall.narrative,
        "Based on the assessment results, Jane Doe demonstrates developing performance with an overall score of 2.73/5.0. Priority development areas include Risk & Compliance, Product Management, Business Analysis & Decisioning. Immediate focus should be on 4 quick-win interventions over the next 2 weeks, followed by 8 strategic initiatives over the following 4 weeks."
    );
}

#[test]
fn given_week6_when_compared_with_baseline_then_everything_improved() {
    let samples = sample_assessments();
    let week6 = &samples[1];
    let baseline = select_comparison(week6, &samples).expect("baseline selected");
    assert_eq!(baseline.id.as_str(), "sample-baseline");

    let report = generate_recommendations(Some(week6), Some(baseline)).expect("report");

    for (competency, rec) in &report.competencies {
        let delta = rec.delta.expect("delta present");
        let expected = match competency {
            Competency::Stakeholdering | Competency::ChangeInnovation => 0.5,
            _ => 1.0,
        };
        assert!((delta - expected).abs() < 1e-9, "{competency}: {delta}");
        assert_eq!(
            teamassess_intelligence::change_direction(delta, &RecommendationPolicy::default()),
            ChangeDirection::SignificantImprovement
        );
    }
    assert!(report
        .overall
        .top_gaps
        .iter()
        .all(|g| g.reason == GapReason::BelowTarget));
    assert_eq!(
        report.competencies[&Competency::RiskCompliance].level,
        DevelopmentLevel::Developing
    );
    assert!(report.overall.sequence.weeks_0_to_2.is_empty());
    assert_eq!(report.overall.sequence.weeks_2_to_6.len(), 6);
    assert!(report.overall.narrative.contains(
        "demonstrates competent performance with an overall score of 3.60/5.0. This represents a significant improvement of +0.87 points from the previous assessment. "
    ));
}

#[test]
fn given_same_inputs_when_generating_twice_then_output_is_identical() {
    let samples = sample_assessments();
    let first = generate_recommendations(Some(&samples[1]), Some(&samples[0]));
    let second = generate_recommendations(Some(&samples[1]), Some(&samples[0]));
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn given_report_when_serialized_then_uses_stable_field_names() {
    let samples = sample_assessments();
    let report = generate_recommendations(Some(&samples[0]), None).expect("report");
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["overall"]["band"], "Developing");
    assert_eq!(
        json["overall"]["topGaps"][0]["reason"],
        "Below target performance"
    );
    assert_eq!(
        json["overall"]["sequence"]["weeks0to2"][0]["timeframe"],
        "0-2 weeks"
    );
    let govn = &json["competencies"]["Risk & Compliance (GOVN)"];
    assert_eq!(govn["level"], "priority");
    assert_eq!(govn["timeframe"], "immediate");
    assert_eq!(govn["priority"], "high");
    assert!(govn["delta"].is_null());
}
