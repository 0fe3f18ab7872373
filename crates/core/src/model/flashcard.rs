use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardItem {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("no flashcards to study")]
    Empty,
}

/// Cyclic browser over a generated deck. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSession {
    items: Vec<FlashcardItem>,
    current: usize,
    revealed: bool,
}

impl FlashcardSession {
    /// # Errors
    ///
    /// Returns `FlashcardError::Empty` if the deck has no cards.
    pub fn new(items: Vec<FlashcardItem>) -> Result<Self, FlashcardError> {
        if items.is_empty() {
            return Err(FlashcardError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            revealed: false,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_item(&self) -> &FlashcardItem {
        &self.items[self.current]
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Text on the visible side of the current card.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        let card = self.current_item();
        if self.revealed { &card.back } else { &card.front }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.items.len();
        self.revealed = false;
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        self.revealed = false;
    }
}
