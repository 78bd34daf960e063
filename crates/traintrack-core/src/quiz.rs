//! Questions and the quizzes that hold them.

use serde::Serialize;

use crate::error::AssessmentError;

/// Maximum number of questions a quiz may grow to through [`Quiz::add_question`].
pub const MAX_QUESTIONS: usize = 100;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// The answer the trainee gave.
    pub chosen_answer: String,
    /// The expected answer.
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        chosen_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            chosen_answer: chosen_answer.into(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Exact comparison of chosen and correct answers. `"a"` does not match `"A"`.
    pub fn is_correct(&self) -> bool {
        self.chosen_answer == self.correct_answer
    }

    pub fn update_answer(&mut self, new_answer: impl Into<String>) {
        self.chosen_answer = new_answer.into();
    }
}

/// A named, typed, ordered collection of questions.
///
/// The type tag is free text. It is only checked against the known
/// assessment kinds when the quiz is turned into an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quiz {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Takes ownership of `questions` as given. The size limit is not checked
    /// here, see [`Quiz::validate_length`].
    pub fn new(questions: Vec<Question>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Mutable access to existing questions, e.g. to update answers.
    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append a question.
    ///
    /// The limit is checked before the push, so a rejected question never
    /// lands in the quiz and the length stays where it was.
    pub fn add_question(&mut self, question: Question) -> Result<(), AssessmentError> {
        let attempted = self.questions.len() + 1;
        if attempted > MAX_QUESTIONS {
            return Err(AssessmentError::QuizTooLong {
                max: MAX_QUESTIONS,
                attempted,
            });
        }
        self.questions.push(question);
        Ok(())
    }

    /// Check the current question count against [`MAX_QUESTIONS`].
    pub fn validate_length(&self) -> Result<(), AssessmentError> {
        if self.questions.len() > MAX_QUESTIONS {
            return Err(AssessmentError::QuizTooLong {
                max: MAX_QUESTIONS,
                attempted: self.questions.len(),
            });
        }
        Ok(())
    }
}
