//! Clarifying question data model

use serde::{Deserialize, Serialize};

/// A single clarifying question produced by the clarify-phase prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifyingQuestion {
    /// Short token like "Q1".
    pub id: String,
    pub question: String,
    pub why_it_matters: String,
}

/// Wire shape of the clarify-phase model reply.
#[derive(Debug, Deserialize)]
pub struct ClarifyingQuestions {
    pub clarifying_questions: Vec<ClarifyingQuestion>,
}

/// A clarifying question together with the user's answer.
/// An empty answer means the question was left unanswered.
#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuestion {
    pub question: ClarifyingQuestion,
    pub answer: String,
}
