use study_core::model::{GeneratedContent, OptionFeedback, QuizSession, SelectOutcome};
use tracing::debug;

use crate::context::StudyMaterial;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub progress_label: String,
    pub question: String,
    pub options: Vec<QuizOptionVm>,
    pub answered: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub percentage_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuizQuestionVm),
    Complete(QuizResultVm),
}

/// A running quiz plus the topic it was generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    topic: String,
    session: QuizSession,
}

impl QuizVm {
    /// `None` unless the material is a non-empty quiz.
    #[must_use]
    pub fn from_material(material: StudyMaterial) -> Option<Self> {
        let GeneratedContent::Quiz { questions } = material.content else {
            return None;
        };
        let session = QuizSession::new(questions).ok()?;
        Some(Self {
            topic: material.topic,
            session,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn select(&mut self, option: &str) -> SelectOutcome {
        self.session.select_option(option)
    }

    pub fn advance(&mut self) {
        if let Err(err) = self.session.advance() {
            debug!(error = %err, "advance ignored");
        }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        if let Some(result) = self.session.result() {
            return QuizScreen::Complete(QuizResultVm {
                score_label: format!("{} / {}", result.score, result.total),
                percentage_label: format!("({}%)", result.percentage()),
            });
        }

        let answered = self.session.is_answered();
        let (question, options) = match self.session.current_item() {
            Some(item) => (
                item.question.clone(),
                item.options
                    .iter()
                    .map(|option| QuizOptionVm {
                        label: option.clone(),
                        class: option_class(self.session.option_feedback(option)),
                        disabled: answered,
                    })
                    .collect(),
            ),
            None => (String::new(), Vec::new()),
        };

        QuizScreen::Question(QuizQuestionVm {
            progress_label: format!(
                "Question {} of {}",
                self.session.current_index() + 1,
                self.session.total()
            ),
            question,
            options,
            answered,
            next_label: if self.session.is_last_item() {
                "Finish Quiz"
            } else {
                "Next Question"
            },
        })
    }
}

fn option_class(feedback: OptionFeedback) -> &'static str {
    match feedback {
        OptionFeedback::Pending => "quiz-option",
        OptionFeedback::Correct => "quiz-option quiz-option--correct",
        OptionFeedback::Incorrect => "quiz-option quiz-option--incorrect",
        OptionFeedback::Neutral => "quiz-option quiz-option--muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{FlashcardItem, QuizItem};

    fn material(questions: Vec<QuizItem>) -> StudyMaterial {
        StudyMaterial {
            topic: "Biology".into(),
            content: GeneratedContent::Quiz { questions },
        }
    }

    fn question(answer: &str) -> QuizItem {
        QuizItem {
            question: format!("Pick {answer}"),
            options: vec!["A".into(), "B".into(), "C".into()],
            answer: answer.into(),
        }
    }

    #[test]
    fn rejects_flashcards_and_empty_quizzes() {
        let deck = StudyMaterial {
            topic: "Biology".into(),
            content: GeneratedContent::Flashcards {
                flashcards: vec![FlashcardItem {
                    front: "f".into(),
                    back: "b".into(),
                }],
            },
        };
        assert!(QuizVm::from_material(deck).is_none());
        assert!(QuizVm::from_material(material(Vec::new())).is_none());
    }

    #[test]
    fn wrong_pick_marks_choice_and_answer() {
        let mut vm = QuizVm::from_material(material(vec![question("B"), question("A")])).unwrap();
        vm.select("C");

        let QuizScreen::Question(screen) = vm.screen() else {
            panic!("expected question screen");
        };
        let classes: Vec<_> = screen.options.iter().map(|o| o.class).collect();
        assert_eq!(
            classes,
            vec![
                "quiz-option quiz-option--muted",
                "quiz-option quiz-option--correct",
                "quiz-option quiz-option--incorrect",
            ]
        );
        assert!(screen.options.iter().all(|o| o.disabled));
        assert_eq!(screen.next_label, "Next Question");
    }

    #[test]
    fn last_question_offers_finish_then_shows_score() {
        let mut vm = QuizVm::from_material(material(vec![question("A")])).unwrap();
        vm.select("A");
        let QuizScreen::Question(screen) = vm.screen() else {
            panic!("expected question screen");
        };
        assert_eq!(screen.progress_label, "Question 1 of 1");
        assert_eq!(screen.next_label, "Finish Quiz");

        vm.advance();
        assert_eq!(
            vm.screen(),
            QuizScreen::Complete(QuizResultVm {
                score_label: "1 / 1".into(),
                percentage_label: "(100%)".into(),
            })
        );
    }

    #[test]
    fn advance_before_answer_is_ignored() {
        let mut vm = QuizVm::from_material(material(vec![question("A"), question("B")])).unwrap();
        vm.advance();
        assert_eq!(vm.session().current_index(), 0);
    }
}
