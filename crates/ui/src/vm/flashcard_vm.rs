use study_core::model::{FlashcardSession, GeneratedContent};

use crate::context::StudyMaterial;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardFaceVm {
    pub counter_label: String,
    pub text: String,
    pub face_class: &'static str,
    pub hint: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    topic: String,
    session: FlashcardSession,
}

impl FlashcardVm {
    /// `None` unless the material is a non-empty flashcard deck.
    #[must_use]
    pub fn from_material(material: StudyMaterial) -> Option<Self> {
        let GeneratedContent::Flashcards { flashcards } = material.content else {
            return None;
        };
        let session = FlashcardSession::new(flashcards).ok()?;
        Some(Self {
            topic: material.topic,
            session,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn flip(&mut self) {
        self.session.toggle_reveal();
    }

    pub fn next(&mut self) {
        self.session.next();
    }

    pub fn prev(&mut self) {
        self.session.prev();
    }

    #[must_use]
    pub fn face(&self) -> FlashcardFaceVm {
        let revealed = self.session.is_revealed();
        FlashcardFaceVm {
            counter_label: format!(
                "Card {} of {}",
                self.session.current_index() + 1,
                self.session.len()
            ),
            text: self.session.visible_text().to_string(),
            face_class: if revealed {
                "flashcard flashcard--back"
            } else {
                "flashcard flashcard--front"
            },
            hint: if revealed {
                "Click to see the question"
            } else {
                "Click to reveal the answer"
            },
        }
    }
}
