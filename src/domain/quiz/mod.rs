//! Quiz module - question schema and the answers collected against it.

mod question;
mod responses;

pub use question::{QuestionKind, QuizOption, QuizQuestion};
pub use responses::{Answer, QuizResponseSet};
