use std::sync::Arc;

use crate::content::{Catalog, QuestionRecord};
use crate::mvi::UiState;
use crate::session::answer::{Answer, AnswerLog};

/// Where the player is in a playthrough.
///
/// Phases that need data to render carry it, so "feedback without an
/// answer" cannot be represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Welcome,
    Tutorial,
    Instructions,
    /// Answering `order[index]`.
    Playing,
    /// Showing the graded answer for `order[index]`.
    ///
    /// `revisit` is set when the answer was reached by going back; only
    /// then may it be answered again.
    Feedback { answer: Answer, revisit: bool },
    Results,
    /// Stepping through mistakes; `cursor` indexes the mistake list.
    Review { cursor: usize },
}

/// Payload-free phase tag for display and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Welcome,
    Tutorial,
    Instructions,
    Playing,
    Feedback,
    Results,
    Review,
}

impl PhaseKind {
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Welcome => "welcome",
            PhaseKind::Tutorial => "tutorial",
            PhaseKind::Instructions => "instructions",
            PhaseKind::Playing => "playing",
            PhaseKind::Feedback => "feedback",
            PhaseKind::Results => "results",
            PhaseKind::Review => "review",
        }
    }
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Welcome => PhaseKind::Welcome,
            Phase::Tutorial => PhaseKind::Tutorial,
            Phase::Instructions => PhaseKind::Instructions,
            Phase::Playing => PhaseKind::Playing,
            Phase::Feedback { .. } => PhaseKind::Feedback,
            Phase::Results => PhaseKind::Results,
            Phase::Review { .. } => PhaseKind::Review,
        }
    }
}

/// Complete state of one playthrough.
///
/// Invariants kept by [`QuizReducer`](super::QuizReducer):
/// - `order` is a permutation of the catalog positions
/// - `Playing`: `answers.len() == index`
/// - `Feedback`: `answers.len() == index + 1` and the payload is the last answer.
///   The log never runs ahead of `index` by more than the shown question's
///   own answer, which is already recorded while its feedback is up.
/// - `Results` / `Review`: one answer per question
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) order: Vec<usize>,
    pub(crate) index: usize,
    pub(crate) answers: AnswerLog,
    pub(crate) phase: Phase,
}

impl UiState for QuizState {}

impl QuizState {
    /// Fresh playthrough on the welcome screen.
    ///
    /// An `order` that is not a permutation of the catalog falls back to
    /// catalog order.
    pub fn new(catalog: Arc<Catalog>, order: Vec<usize>) -> Self {
        let order = if is_permutation(&order, catalog.len()) {
            order
        } else {
            tracing::warn!(
                catalog = catalog.len(),
                order = order.len(),
                "Question order is not a permutation; using catalog order"
            );
            (0..catalog.len()).collect()
        };
        Self {
            catalog,
            order,
            index: 0,
            answers: AnswerLog::default(),
            phase: Phase::Welcome,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog positions in play order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Zero-based position in `order` of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn answers(&self) -> &[Answer] {
        self.answers.as_slice()
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.total()
    }

    /// Question at a play-order position.
    pub fn question_at(&self, index: usize) -> Option<&QuestionRecord> {
        self.order
            .get(index)
            .and_then(|position| self.catalog.get(*position))
    }

    /// The question being answered or shown, in `Playing`/`Feedback` only.
    pub fn active_question(&self) -> Option<&QuestionRecord> {
        match self.phase {
            Phase::Playing | Phase::Feedback { .. } => self.question_at(self.index),
            _ => None,
        }
    }

    /// Incorrect answers in the order they were made.
    pub fn mistakes(&self) -> Vec<&Answer> {
        crate::session::summary::mistakes(self.answers())
    }

    /// Feedback reached by back-navigation, where the answer may be replaced.
    pub fn can_revise(&self) -> bool {
        matches!(self.phase, Phase::Feedback { revisit: true, .. })
    }

    pub fn review_cursor(&self) -> Option<usize> {
        match self.phase {
            Phase::Review { cursor } => Some(cursor),
            _ => None,
        }
    }

    /// Mistake under the review cursor.
    pub fn review_answer(&self) -> Option<&Answer> {
        let cursor = self.review_cursor()?;
        self.mistakes().get(cursor).copied()
    }

    /// Catalog record for the mistake under the review cursor, resolved by id.
    pub fn review_question(&self) -> Option<&QuestionRecord> {
        let answer = self.review_answer()?;
        self.catalog.find(answer.question_id)
    }
}

pub(crate) fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &position in order {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
