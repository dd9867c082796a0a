use crate::content::{EmotionSelection, QuestionRecord, Verdict};

/// A graded response to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: u32,
    pub emotions: EmotionSelection,
    pub verdict: Verdict,
    /// Chosen verdict equals ground truth. Emotions never affect this.
    pub correct: bool,
    /// Ground-truth verdict, copied so results need no catalog lookup.
    pub correct_verdict: Verdict,
}

impl Answer {
    pub fn grade(question: &QuestionRecord, emotions: EmotionSelection, verdict: Verdict) -> Self {
        Self {
            question_id: question.id,
            emotions,
            verdict,
            correct: verdict == question.verdict,
            correct_verdict: question.verdict,
        }
    }
}

/// Answers in play order, one per attempted question.
///
/// Grows by [`push`](Self::push) during forward play and shrinks only from
/// the end via [`truncate`](Self::truncate) when the user backs up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerLog {
    entries: Vec<Answer>,
}

impl AnswerLog {
    pub fn push(&mut self, answer: Answer) {
        self.entries.push(answer);
    }

    /// Keeps the first `len` answers. No-op if the log is already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Answer> {
        self.entries.get(position)
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, EmotionTag};

    #[test]
    fn grading_ignores_emotions() {
        let catalog = Catalog::builtin();
        let question = catalog.find(1).unwrap();
        let answer = Answer::grade(
            question,
            EmotionSelection::single(EmotionTag::Safe),
            Verdict::Trap,
        );
        assert!(answer.correct);
        assert_eq!(answer.correct_verdict, Verdict::Trap);

        let answer = Answer::grade(
            question,
            EmotionSelection::pair(EmotionTag::Fear, EmotionTag::Authority).unwrap(),
            Verdict::Trust,
        );
        assert!(!answer.correct);
    }

    #[test]
    fn truncate_only_shrinks() {
        let catalog = Catalog::builtin();
        let mut log = AnswerLog::default();
        for id in 1..=3 {
            let question = catalog.find(id).unwrap();
            log.push(Answer::grade(
                question,
                EmotionSelection::single(EmotionTag::Fear),
                Verdict::Trap,
            ));
        }
        log.truncate(5);
        assert_eq!(log.len(), 3);
        log.truncate(1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(0).map(|a| a.question_id), Some(1));
    }
}
