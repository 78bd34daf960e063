//! End-to-end pipeline tests: questions -> quiz -> marking -> assessment -> trainee.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use traintrack_core::parser;
use traintrack_core::statistics::TraineeSummary;
use traintrack_core::{
    Assessment, AssessmentError, AssessmentKind, Marking, Question, Quiz, Trainee, MAX_QUESTIONS,
};

fn trainee() -> Trainee {
    Trainee::new(
        "Fraser",
        "f@sigma",
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
    )
}

fn quizzes() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../quizzes")
}

#[test]
fn sample_quizzes_flow_into_trainee_record() {
    let mut fraser = trainee();

    for quiz in parser::load_quiz_directory(&quizzes()).unwrap() {
        let assessment = Marking::new(&quiz).generate_assessment().unwrap();
        fraser.add_assessment(assessment);
    }

    let maths = fraser.get_assessment("Maths Quiz").unwrap();
    assert_eq!(maths.kind(), AssessmentKind::MultipleChoice);
    assert!((maths.score() - 60.0).abs() < 1e-9);
    assert!((maths.calculate_score() - 42.0).abs() < 1e-9);

    let rust = fraser.get_assessment("Rust Ownership").unwrap();
    assert_eq!(rust.kind(), AssessmentKind::Technical);
    assert!((rust.calculate_score() - 75.0).abs() < 1e-9);

    let technical = fraser.get_assessment_of_type("technical").unwrap();
    assert_eq!(technical.len(), 1);

    let summary = TraineeSummary::compute(&fraser);
    assert_eq!(summary.count, 2);
    assert!((summary.mean_weighted_score.unwrap() - 58.5).abs() < 1e-9);
}

#[test]
fn quiz_built_question_by_question() {
    let mut quiz = Quiz::new(Vec::new(), "Capitals", "presentation");
    for (q, chosen, correct) in [
        ("France", "Paris", "Paris"),
        ("Spain", "Madrid", "Madrid"),
        ("Italy", "rome", "Rome"),
    ] {
        quiz.add_question(Question::new(q, chosen, correct)).unwrap();
    }

    assert_eq!(Marking::new(&quiz).mark(), 67);

    quiz.questions_mut()[2].update_answer("Rome");
    let assessment = Marking::new(&quiz).generate_assessment().unwrap();
    assert!((assessment.score() - 100.0).abs() < 1e-9);
    assert!((assessment.calculate_score() - 60.0).abs() < 1e-9);

    let mut fraser = trainee();
    fraser.add_assessment(assessment);
    assert_eq!(fraser.assessments_of_kind(AssessmentKind::Presentation).len(), 1);
}

#[test]
fn full_quiz_refuses_more_questions() {
    let mut quiz = Quiz::new(Vec::new(), "Long", "technical");
    for i in 0..MAX_QUESTIONS {
        quiz.add_question(Question::new(format!("Q{i}"), "x", "x"))
            .unwrap();
    }
    let err = quiz.add_question(Question::new("Q100", "x", "x")).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(quiz.len(), MAX_QUESTIONS);
    assert_eq!(Marking::new(&quiz).mark(), 100);
}

#[test]
fn invalid_quiz_type_fails_only_when_generating() {
    let quiz = Quiz::new(vec![Question::new("Q", "a", "a")], "Viva", "viva");
    let marking = Marking::new(&quiz);
    assert_eq!(marking.mark(), 100);
    assert!(matches!(
        marking.generate_assessment(),
        Err(AssessmentError::InvalidType(tag)) if tag == "viva"
    ));
}

#[test]
fn base_and_weighted_assessments_side_by_side() {
    let mut fraser = trainee();
    fraser.add_assessment(Assessment::new("Base MC", "multiple-choice", 80.0).unwrap());
    fraser.add_assessment(Assessment::multiple_choice("Weighted MC", 80.0).unwrap());

    let mc = fraser.get_assessment_of_type("multiple-choice").unwrap();
    assert_eq!(mc.len(), 2);
    assert!((mc[0].calculate_score() - 80.0).abs() < 1e-9);
    assert!((mc[1].calculate_score() - 56.0).abs() < 1e-9);
}
