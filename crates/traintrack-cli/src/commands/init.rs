//! The `traintrack init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("traintrack.toml").exists() {
        println!("traintrack.toml already exists, skipping.");
    } else {
        std::fs::write("traintrack.toml", SAMPLE_CONFIG)?;
        println!("Created traintrack.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit traintrack.toml with the trainee's details");
    println!("  2. Run: traintrack validate --quiz quizzes/example.toml");
    println!("  3. Run: traintrack mark --quiz quizzes/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# traintrack configuration

default_format = "text"
quiz_dir = "./quizzes"

[trainee]
name = "Sigma"
email = "trainee@sigmalabs.co.uk"
date_of_birth = "1990-01-01"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
name = "Example Quiz"
type = "multiple-choice"

[[questions]]
question = "What is 1 + 1? A:2 B:4 C:5 D:8"
chosen_answer = "A"
correct_answer = "A"

[[questions]]
question = "What is 2 + 2? A:2 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "B"

[[questions]]
question = "What is 3 + 3? A:2 B:4 C:6 D:8"
chosen_answer = "A"
correct_answer = "C"
"#;
