use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// One multiple-choice question as returned by the generator.
///
/// `answer` is expected to equal one of `options`; the generator output is not
/// re-validated beyond its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizItem {
    #[must_use]
    pub fn is_answer(&self, option: &str) -> bool {
        self.answer == option
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("quiz already finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Presenting(usize),
    Answered(usize),
    Finished,
}

/// Result of `QuizSession::select_option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Correct,
    Incorrect,
    /// The question was already answered (or the quiz is over); nothing changed.
    Ignored,
}

/// How an option should be highlighted once the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    /// Question not answered yet.
    Pending,
    Correct,
    /// The option the user picked, which was wrong.
    Incorrect,
    Neutral,
}

/// Final score of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    /// `round(score / total * 100)`, rounding halves up.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.score * 200 + self.total) / (self.total * 2)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a generated question list.
///
/// Walks the questions in order. The first selection on a question is final and
/// scores at most one point; `advance` moves on only after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    current: usize,
    selected: Option<String>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if there are no questions.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, QuizError> {
        if items.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            selected: None,
            score: 0,
            finished: false,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished
        } else if self.selected.is_some() {
            QuizPhase::Answered(self.current)
        } else {
            QuizPhase::Presenting(self.current)
        }
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question on screen, or `None` once finished.
    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        if self.finished {
            None
        } else {
            self.items.get(self.current)
        }
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True while the current question is the last one.
    #[must_use]
    pub fn is_last_item(&self) -> bool {
        self.current + 1 >= self.items.len()
    }

    /// Whether the current selection was right; `None` before answering.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        let item = self.current_item()?;
        self.selected.as_deref().map(|opt| item.is_answer(opt))
    }

    pub fn select_option(&mut self, option: &str) -> SelectOutcome {
        if self.finished || self.selected.is_some() {
            return SelectOutcome::Ignored;
        }
        let Some(item) = self.items.get(self.current) else {
            return SelectOutcome::Ignored;
        };
        let correct = item.is_answer(option);
        self.selected = Some(option.to_string());
        if correct {
            self.score += 1;
            SelectOutcome::Correct
        } else {
            SelectOutcome::Incorrect
        }
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` while presenting, `QuizError::Finished` once over.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        if self.selected.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.selected = None;
        if self.current + 1 < self.items.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
        Ok(self.phase())
    }

    /// Available only once the quiz is finished.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.finished.then_some(QuizResult {
            score: self.score,
            total: self.items.len(),
        })
    }

    #[must_use]
    pub fn option_feedback(&self, option: &str) -> OptionFeedback {
        let (Some(item), Some(selected)) = (self.current_item(), self.selected.as_deref()) else {
            return OptionFeedback::Pending;
        };
        if item.is_answer(option) {
            OptionFeedback::Correct
        } else if selected == option {
            OptionFeedback::Incorrect
        } else {
            OptionFeedback::Neutral
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
