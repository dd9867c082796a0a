//! Read-only views the presentation layer renders from.

use crate::content::{EmotionTag, QuestionRecord, Verdict};
use crate::session::answer::Answer;
use crate::session::state::{Phase, QuizState};

/// Position within the playthrough, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        ((self.current.min(self.total) * 100) / self.total) as u16
    }
}

/// One ground-truth emotion as shown on the feedback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionMark {
    pub tag: EmotionTag,
    /// First listed tag of the question.
    pub primary: bool,
    /// The user picked this tag too.
    pub picked: bool,
}

/// A graded answer next to its question.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView<'a> {
    pub question: &'a QuestionRecord,
    pub answer: &'a Answer,
    pub marks: Vec<EmotionMark>,
    /// At least one picked tag is a ground-truth tag. Display only.
    pub emotion_matched: bool,
    /// Nothing follows this entry ("See Results" instead of "Next").
    pub is_last: bool,
}

impl<'a> FeedbackView<'a> {
    pub fn new(question: &'a QuestionRecord, answer: &'a Answer, is_last: bool) -> Self {
        let marks = question
            .emotions
            .iter()
            .enumerate()
            .map(|(rank, tag)| EmotionMark {
                tag: *tag,
                primary: rank == 0,
                picked: answer.emotions.contains(*tag),
            })
            .collect();
        Self {
            question,
            answer,
            marks,
            emotion_matched: answer.emotions.matches_any(&question.emotions),
            is_last,
        }
    }

    pub fn correct(&self) -> bool {
        self.answer.correct
    }

    pub fn explanation_title(&self) -> &'static str {
        match self.question.verdict {
            Verdict::Trust => "Why this message looks trustworthy",
            Verdict::Trap => "Why this is a TRAP",
        }
    }
}

/// The mistake under the review cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView<'a> {
    /// 1-based position among the mistakes.
    pub position: usize,
    pub count: usize,
    pub feedback: FeedbackView<'a>,
}

impl QuizState {
    pub fn progress(&self) -> Progress {
        Progress {
            current: (self.index + 1).min(self.total()),
            total: self.total(),
        }
    }

    pub fn feedback_view(&self) -> Option<FeedbackView<'_>> {
        let Phase::Feedback { answer, .. } = &self.phase else {
            return None;
        };
        let question = self.question_at(self.index)?;
        Some(FeedbackView::new(question, answer, self.is_last_question()))
    }

    pub fn review_view(&self) -> Option<ReviewView<'_>> {
        let cursor = self.review_cursor()?;
        let mistakes = self.mistakes();
        let answer = *mistakes.get(cursor)?;
        let question = self.catalog.find(answer.question_id)?;
        Some(ReviewView {
            position: cursor + 1,
            count: mistakes.len(),
            feedback: FeedbackView::new(question, answer, cursor + 1 == mistakes.len()),
        })
    }
}
