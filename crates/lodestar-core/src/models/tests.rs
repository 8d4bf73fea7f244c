//! Tests for model serialization and the tolerant answer parsing.

use std::str::FromStr;

use super::*;

#[test]
fn course_deserializes_with_minimal_fields() {
    let course: Course = serde_json::from_str(
        r#"{"id": "x", "title": "X", "difficulty": "beginner"}"#,
    )
    .expect("minimal course must parse");
    assert_eq!(course.course_type, CourseType::Course);
    assert_eq!(course.estimated_hours, None);
    assert!(course.categories.is_empty());
    assert_eq!(course.hours(), 3.0);
}

#[test]
fn certificate_hours_default_to_forty() {
    let course: Course = serde_json::from_str(
        r#"{"id": "x", "title": "X", "type": "certificate", "difficulty": "advanced"}"#,
    )
    .expect("certificate must parse");
    assert_eq!(course.hours(), 40.0);
}

#[test]
fn explicit_hours_override_the_type_default() {
    let course: Course = serde_json::from_str(
        r#"{"id": "x", "title": "X", "type": "certificate",
            "difficulty": "advanced", "estimated_hours": 55.5}"#,
    )
    .expect("course must parse");
    assert_eq!(course.hours(), 55.5);
}

#[test]
fn enums_round_trip_through_from_str() {
    for raw in ["beginner", "intermediate", "advanced"] {
        let difficulty = Difficulty::from_str(raw).expect("valid difficulty");
        assert_eq!(difficulty.as_str(), raw);
    }
    for raw in ["certificate", "course", "short"] {
        let course_type = CourseType::from_str(raw).expect("valid type");
        assert_eq!(course_type.as_str(), raw);
    }
    assert!(Difficulty::from_str("impossible").is_err());
    assert!(CourseType::from_str("webinar").is_err());
}

#[test]
fn answer_set_tolerates_empty_and_unknown_fields() {
    let answers = AnswerSet::from_json("{}").expect("empty object must parse");
    assert_eq!(answers, AnswerSet::default());

    let answers = AnswerSet::from_json(
        r#"{"experience": "none", "favoriteColor": "mauve",
            "interests": ["rag"], "priorCourses": ["x"]}"#,
    )
    .expect("unknown fields are ignored");
    assert_eq!(answers.experience(), Experience::None);
    assert!(answers.interests.contains("rag"));
    assert!(answers.prior_courses.contains("x"));
}

#[test]
fn answer_set_rejects_non_objects() {
    assert!(AnswerSet::from_json("[]").is_err());
    assert!(AnswerSet::from_json("not json").is_err());
}

#[test]
fn typed_answer_views_fall_back_conservatively() {
    let answers = AnswerSet {
        experience: "phd".to_string(),
        target_role: "wizard".to_string(),
        math_background: "imaginary".to_string(),
        ..AnswerSet::default()
    };
    assert_eq!(answers.experience(), Experience::None);
    assert_eq!(answers.target_role(), TargetRole::Undecided);
    assert_eq!(answers.target_role().pathway(), Pathway::Builder);
    assert_eq!(answers.math_background(), MathBackground::Minimal);
    assert_eq!(answers.goal(), Goal::Upskill);
    assert_eq!(answers.time_commitment(), TimeCommitment::FiveToTen);
    assert_eq!(answers.timeline(), Timeline::SixMonths);
}

#[test]
fn timelined_course_serializes_flat_and_camel_case() {
    let course: Course = serde_json::from_str(
        r#"{"id": "x", "title": "X", "difficulty": "beginner", "estimated_hours": 6}"#,
    )
    .expect("course must parse");
    let timelined = TimelinedCourse {
        course,
        start_week: 2,
        end_week: 4,
        estimated_weeks: 2,
    };

    let json = serde_json::to_value(&timelined).expect("serializes");
    assert_eq!(json["id"], "x");
    assert_eq!(json["estimated_hours"], 6.0);
    assert_eq!(json["startWeek"], 2);
    assert_eq!(json["endWeek"], 4);
    assert_eq!(json["estimatedWeeks"], 2);
}

#[test]
fn optional_phase_fields_are_omitted_when_absent() {
    let phase = Phase {
        phase: "Phase 2".to_string(),
        phase_name: "Build with LLMs".to_string(),
        milestone: "Build with LLMs Complete".to_string(),
        courses: vec![],
        start_week: 0,
        end_week: 0,
        is_optional: false,
        math_warning: None,
    };
    let json = serde_json::to_value(&phase).expect("serializes");
    assert!(json.get("isOptional").is_none());
    assert!(json.get("mathWarning").is_none());
    assert_eq!(json["phaseName"], "Build with LLMs");
}

#[test]
fn phase_template_milestone_defaults_from_name() {
    let template: PhaseTemplate =
        serde_json::from_str(r#"{"name": "Agents", "courses": []}"#).expect("template parses");
    assert_eq!(template.milestone_text(), "Agents Complete");

    let template: PhaseTemplate = serde_json::from_str(
        r#"{"name": "Agents", "courses": [], "milestone": "Agents Shipped"}"#,
    )
    .expect("template parses");
    assert_eq!(template.milestone_text(), "Agents Shipped");
}

#[test]
fn category_labels_cover_known_tags_and_title_case_the_rest() {
    assert_eq!(category_label("rag"), "RAG & Knowledge Systems");
    assert_eq!(category_label("agents"), "AI Agents & Automation");
    assert_eq!(category_label("robotics"), "Robotics");
    assert_eq!(category_label(""), "");
}

#[test]
fn pathway_metadata_is_consistent() {
    for pathway in Pathway::ALL {
        assert!(!pathway.title().is_empty());
        assert!(!pathway.tagline().is_empty());
        assert!(!pathway.description().is_empty());
        assert_eq!(Pathway::from_str(pathway.as_str()), Ok(pathway));
    }
}
