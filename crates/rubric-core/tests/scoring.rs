//! Totals, source handling and time policy across rubrics

use rubric_core::config::TimeConfig;
use rubric_core::model::{GradeUnits, LatePolicy, Rubric, Section, Student, Subsection, TimeStatus};
use rubric_core::policy::{assess, deduction, shared_sources, Adjustment, HandinStatus, TimeInformation};

fn student() -> Student {
    Student::new("Ada Lovelace", "alovelac")
}

fn part(name: &str, subsections: Vec<Subsection>) -> Rubric {
    let section = subsections
        .into_iter()
        .fold(Section::new("Grading"), Section::with_subsection);
    Rubric::new(name, 3, student()).with_section(section)
}

#[test]
fn test_section_totals_follow_subsections() {
    let mut rubric = part(
        "Lab3",
        vec![
            Subsection::new("a", 3.5, 5.0),
            Subsection::new("b", 4.0, 5.0),
        ],
    );
    assert_eq!(rubric.sections[0].score(), 7.5);
    assert_eq!(rubric.sections[0].out_of(), 10.0);

    rubric.sections[0].subsections[1].score = 5.0;
    assert_eq!(rubric.sections[0].score(), 8.5);
    assert_eq!(rubric.total_rubric_points(), 8.5);
}

#[test]
fn test_totals_round_decimal_halves_up() {
    let rubric = part("Lab3", vec![Subsection::new("a", 1.005, 2.0)]);
    assert_eq!(rubric.total_rubric_points(), 1.01);

    let rubric = part("Lab3", vec![Subsection::new("a", 2.675, 3.0)]);
    assert_eq!(rubric.total_rubric_points(), 2.68);
}

#[test]
fn test_handin_totals_exclude_sources() {
    let rubric = part(
        "Lab3",
        vec![
            Subsection::new("Design check", 10.0, 20.0).with_source("design-check"),
            Subsection::new("Code", 5.0, 5.0),
        ],
    );

    assert_eq!(rubric.total_handin_points(), 5.0);
    assert_eq!(rubric.total_handin_out_of(), 5.0);
    assert_eq!(rubric.total_rubric_points(), 15.0);
    assert_eq!(rubric.total_rubric_out_of(), 25.0);
}

#[test]
fn test_shared_source_counted_once() {
    let design = || Subsection::new("Design check", 8.0, 10.0).with_source("design-check");
    let parts = [
        part("Code", vec![design(), Subsection::new("Tests", 9.0, 10.0)]),
        part("Writeup", vec![design(), Subsection::new("Prose", 4.0, 5.0)]),
    ];

    let shared = shared_sources(&parts);
    assert_eq!(shared.len(), 1);

    let affects_all = TimeConfig {
        affects_all: true,
        ..TimeConfig::default()
    };
    let assessment = assess(&parts, &affects_all, HandinStatus::default());
    assert_eq!(assessment.points, 21.0);
    assert_eq!(assessment.out_of, 25.0);

    let local_only = assess(&parts, &TimeConfig::default(), HandinStatus::default());
    assert_eq!(local_only.points, 13.0);
    assert_eq!(local_only.out_of, 15.0);
}

#[test]
fn test_policy_values() {
    let info = |early, ontime, late| TimeInformation {
        early_value: early,
        ontime_value: ontime,
        late_value: late,
    };

    assert_eq!(
        deduction(
            TimeStatus::Late,
            LatePolicy::DailyDeduction,
            GradeUnits::Points,
            &info(0.0, 2.0, 0.0),
            3,
            100.0
        ),
        Adjustment::Additive(-6.0)
    );
    assert_eq!(
        deduction(
            TimeStatus::Early,
            LatePolicy::MultipleDeadlines,
            GradeUnits::Percentage,
            &info(5.0, 0.0, 0.0),
            0,
            100.0
        ),
        Adjustment::Additive(5.0)
    );
    assert!(deduction(
        TimeStatus::NcLate,
        LatePolicy::NoLate,
        GradeUnits::Points,
        &info(0.0, 0.0, 0.0),
        0,
        100.0
    )
    .is_forfeit());
}

#[test]
fn test_forfeit_across_parts_is_not_double_counted() {
    let parts = [
        part("Code", vec![Subsection::new("Tests", 9.0, 10.0)]),
        part("Writeup", vec![Subsection::new("Prose", 4.0, 5.0)]),
    ];
    let assessment = assess(
        &parts,
        &TimeConfig::default(),
        HandinStatus::new(TimeStatus::NcLate, 0),
    );
    assert!(assessment.adjustment.is_forfeit());
    assert_eq!(assessment.score, 0.0);
}

#[test]
fn test_rubric_score_uses_its_own_status() {
    let time = TimeConfig {
        policy: LatePolicy::DailyDeduction,
        units: GradeUnits::Percentage,
        ..TimeConfig::default()
    }
    .with_values(0.0, 10.0, 0.0);
    let rubric = part("Lab3", vec![Subsection::new("Tests", 18.0, 20.0)])
        .with_status(TimeStatus::Late, 2);

    assert_eq!(rubric.rubric_adjustment(&time), Adjustment::Additive(-4.0));
    assert_eq!(rubric.total_rubric_score(&time), 14.0);

    let template = rubric.instantiate(Student::new("Grace Hopper", "ghopper"));
    assert_eq!(template.status, TimeStatus::OnTime);
    assert_eq!(template.total_rubric_score(&time), 18.0);
}

#[test]
fn test_resolve_sources_fills_scores() {
    let mut rubric = part(
        "Lab3",
        vec![
            Subsection::new("Design check", 0.0, 10.0).with_source("design-check"),
            Subsection::new("Peer review", 0.0, 5.0).with_source("peer-review"),
        ],
    );
    let resolved = rubric.resolve_sources(|source| (source == "design-check").then_some(9.0));
    assert_eq!(resolved, 1);
    assert_eq!(rubric.sections[0].subsections[0].score, 9.0);
    assert_eq!(rubric.sections[0].subsections[1].score, 0.0);
}
