//! The `traintrack demo` command.

use anyhow::Result;
use chrono::NaiveDate;

use traintrack_core::{Assessment, Marking, Question, Quiz, Trainee};

pub fn execute() -> Result<()> {
    let questions = vec![
        Question::new("What is 1 + 1? A:2 B:4 C:5 D:8", "A", "A"),
        Question::new("What is 2 + 2? A:2 B:4 C:5 D:8", "B", "B"),
        Question::new("What is 3 + 3? A:2 B:4 C:6 D:8", "C", "C"),
        Question::new("What is 4 + 4? A:2 B:4 C:5 D:8", "D", "D"),
        Question::new("What is 5 + 5? A:10 B:4 C:5 D:8", "A", "A"),
    ];
    let quiz = Quiz::new(questions, "Maths Quiz", "multiple-choice");
    let marker = Marking::new(&quiz);

    println!("Percentage: {}%", marker.mark());

    let final_assessment = marker.generate_assessment()?;
    println!("Generated type: {}", final_assessment.kind());
    println!("Weighted score: {}", final_assessment.calculate_score());

    let dob = NaiveDate::from_ymd_opt(1990, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid demo date of birth"))?;
    let mut trainee = Trainee::new("Sigma", "trainee@sigmalabs.co.uk", dob);
    trainee.add_assessment(Assessment::multiple_choice("Python Basics", 90.1)?);
    trainee.add_assessment(Assessment::technical("Python Data Structures", 67.4)?);
    trainee.add_assessment(Assessment::multiple_choice("Python OOP", 34.3)?);
    trainee.add_assessment(final_assessment);

    println!();
    super::print_trainee(&trainee);

    Ok(())
}
