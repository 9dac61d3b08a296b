//! Quiz answers, checked against the question schema at the boundary.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{QuestionKind, QuizQuestion};
use crate::domain::foundation::{QuestionId, ValidationError};

/// Answer to one question, shaped by the question's declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl Answer {
    /// Builds a multi-choice answer from any list of values.
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// All selected values, in a deterministic order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(v) => vec![v.as_str()],
            Answer::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    fn kind(&self) -> QuestionKind {
        match self {
            Answer::Single(_) => QuestionKind::Single,
            Answer::Multiple(_) => QuestionKind::Multiple,
        }
    }
}

/// Mapping from question id to answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizResponseSet(BTreeMap<QuestionId, Answer>);

impl QuizResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an answer without schema checks. Use
    /// [`QuizResponseSet::validate_against`] at trust boundaries.
    pub fn with_answer(mut self, question_id: QuestionId, answer: Answer) -> Self {
        self.0.insert(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&Answer> {
        self.0.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks every answer against the question schema.
    ///
    /// Every key must name an existing question, the answer shape must match
    /// the question kind and multi-choice answers must be non-empty. Every
    /// value must be one of the question's options, except in the answer to
    /// `free_question`.
    pub fn validate_against(
        &self,
        questions: &[QuizQuestion],
        free_question: Option<&QuestionId>,
    ) -> Result<(), ValidationError> {
        for (id, answer) in &self.0 {
            let question = questions
                .iter()
                .find(|q| &q.id == id)
                .ok_or_else(|| ValidationError::unknown_question(id.as_str()))?;
            check_answer(question, answer, free_question != Some(id))?;
        }
        Ok(())
    }
}

fn check_answer(
    question: &QuizQuestion,
    answer: &Answer,
    restrict_to_options: bool,
) -> Result<(), ValidationError> {
    let id = question.id.as_str();
    if answer.kind() != question.kind {
        return Err(ValidationError::invalid_answer(
            id,
            format!("expected a {:?} answer", question.kind).to_lowercase(),
        ));
    }
    if let Answer::Multiple(values) = answer {
        if values.is_empty() {
            return Err(ValidationError::invalid_answer(id, "select at least one option"));
        }
    }
    if !restrict_to_options {
        return Ok(());
    }
    if let Some(unknown) = answer.values().into_iter().find(|v| !question.has_option(v)) {
        return Err(ValidationError::invalid_answer(
            id,
            format!("'{}' is not an option", unknown),
        ));
    }
    Ok(())
}
