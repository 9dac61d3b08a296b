//! Quiz schema queries.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::QuizQuestion;
use crate::domain::skin::SkinTypeInfo;
use crate::ports::QuestionBank;

/// Returns the ordered quiz questions.
pub struct GetQuizQuestionsHandler {
    question_bank: Arc<dyn QuestionBank>,
}

impl GetQuizQuestionsHandler {
    pub fn new(question_bank: Arc<dyn QuestionBank>) -> Self {
        Self { question_bank }
    }

    pub async fn handle(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        Ok(self.question_bank.questions().await?)
    }
}

/// Returns the skin-type reference table.
pub struct GetSkinTypesHandler {
    question_bank: Arc<dyn QuestionBank>,
}

impl GetSkinTypesHandler {
    pub fn new(question_bank: Arc<dyn QuestionBank>) -> Self {
        Self { question_bank }
    }

    pub async fn handle(&self) -> Result<Vec<SkinTypeInfo>, DomainError> {
        Ok(self.question_bank.skin_types().await?)
    }
}
