//! Quiz session over a selected set of rows.
//!
//! Items are shuffled once when the session starts. Every time the cursor
//! wraps past the last item the sequence is stably reordered so that the
//! most-missed items come first, and the per-pass tallies reset.

use crate::error::{QuizError, Result};
use crate::types::{QuizItem, Row};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Practice state for one selected table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    cursor: usize,
    correct: u32,
    incorrect: u32,
    revealed: bool,
}

impl QuizSession {
    /// Start a session over `rows`, shuffled with the thread-local RNG.
    pub fn start(rows: &[Row]) -> Result<Self> {
        Self::start_with_rng(rows, &mut rand::rng())
    }

    /// Start a session over `rows`, shuffled with the given RNG.
    ///
    /// Returns `QuizError::EmptyTable` when there is nothing to practice.
    pub fn start_with_rng<R: Rng + ?Sized>(rows: &[Row], rng: &mut R) -> Result<Self> {
        if rows.is_empty() {
            return Err(QuizError::EmptyTable);
        }

        let mut items: Vec<QuizItem> = rows.iter().cloned().map(QuizItem::new).collect();
        items.shuffle(rng);

        Ok(Self {
            items,
            ..Self::default()
        })
    }

    /// Replace this session with a fresh one over `rows`.
    ///
    /// On an empty selection the current state is left untouched.
    pub fn restart(&mut self, rows: &[Row]) -> Result<()> {
        *self = Self::start(rows)?;
        Ok(())
    }

    /// Row under the cursor.
    pub fn current_item(&self) -> Option<&Row> {
        self.items.get(self.cursor).map(|item| &item.row)
    }

    /// Value of `column` in the current row, empty when the column is absent.
    pub fn current_value(&self, column: &str) -> Option<&str> {
        self.current_item()
            .map(|row| row.get(column).map_or("", String::as_str))
    }

    /// Check a typed answer against `answer_column` of the current row.
    ///
    /// The typed text is trimmed and compared case-sensitively. A miss bumps
    /// the item's miss-count. Submitting again re-counts.
    pub fn submit_answer(&mut self, answer_column: &str, typed: &str) -> Result<bool> {
        let item = self
            .items
            .get_mut(self.cursor)
            .ok_or(QuizError::NoActiveItem)?;

        let expected = item.row.get(answer_column).map_or("", String::as_str);
        let is_correct = typed.trim() == expected;

        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
            item.miss_count += 1;
        }
        self.revealed = true;

        Ok(is_correct)
    }

    /// Move to the next item, reordering by miss-count after a full pass.
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let next = (self.cursor + 1) % self.items.len();
        if next == 0 {
            // sort_by is stable: ties keep their relative order
            self.items.sort_by(|a, b| b.miss_count.cmp(&a.miss_count));
            self.correct = 0;
            self.incorrect = 0;
        }
        self.cursor = next;
        self.revealed = false;
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    /// Whether the answer for the current item has been shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Every item of the current pass was answered correctly.
    pub fn is_perfect(&self) -> bool {
        !self.items.is_empty() && self.correct as usize == self.items.len()
    }

    /// Miss-counts in current item order.
    pub fn miss_counts(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.miss_count).collect()
    }
}
