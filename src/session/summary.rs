//! Score and summary derivation.
//!
//! Everything here is a pure function of the answer log (and the question
//! count), so results can be recomputed at any time.

use crate::content::Verdict;
use crate::session::answer::Answer;

pub fn correct_count(answers: &[Answer]) -> usize {
    answers.iter().filter(|answer| answer.correct).count()
}

/// `correct / total` as a percentage rounded to the nearest integer
/// (halves round up). Zero when there are no questions.
pub fn accuracy_percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct * 200 + total) / (2 * total)) as u8
}

/// Incorrect answers, in the order they were made.
pub fn mistakes(answers: &[Answer]) -> Vec<&Answer> {
    answers.iter().filter(|answer| !answer.correct).collect()
}

/// Correct/total for the answers whose ground truth is one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerdictBreakdown {
    pub correct: usize,
    pub total: usize,
}

pub fn breakdown(answers: &[Answer], verdict: Verdict) -> VerdictBreakdown {
    answers
        .iter()
        .filter(|answer| answer.correct_verdict == verdict)
        .fold(VerdictBreakdown::default(), |acc, answer| VerdictBreakdown {
            correct: acc.correct + usize::from(answer.correct),
            total: acc.total + 1,
        })
}

/// Badge awarded on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    /// 100%
    Perfect,
    /// 80–99%
    ScamDetector,
    /// 60–79%
    AlertLearner,
    /// 40–59%
    GettingThere,
    /// Below 40%
    KeepPracticing,
}

impl Achievement {
    /// Bands are checked highest first; every value 0–100 lands in one.
    pub fn from_accuracy(percent: u8) -> Self {
        match percent {
            100..=u8::MAX => Achievement::Perfect,
            80..=99 => Achievement::ScamDetector,
            60..=79 => Achievement::AlertLearner,
            40..=59 => Achievement::GettingThere,
            _ => Achievement::KeepPracticing,
        }
    }

    /// Band for a raw score. Perfect needs every answer right: with 200 or
    /// more questions a single miss still rounds to 100%, which lands in
    /// the 80–99 band here instead.
    pub fn from_score(correct: usize, total: usize) -> Self {
        let percent = accuracy_percent(correct, total);
        if total > 0 && correct >= total {
            Achievement::Perfect
        } else {
            Achievement::from_accuracy(percent.min(99))
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::Perfect => "Perfect Score!",
            Achievement::ScamDetector => "Scam Detector",
            Achievement::AlertLearner => "Alert Learner",
            Achievement::GettingThere => "Getting There",
            Achievement::KeepPracticing => "Keep Practicing",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Achievement::Perfect => "🏆",
            Achievement::ScamDetector => "🛡️",
            Achievement::AlertLearner => "📚",
            Achievement::GettingThere => "💪",
            Achievement::KeepPracticing => "🎯",
        }
    }
}

/// Everything the results screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy_percent: u8,
    pub trap: VerdictBreakdown,
    pub trust: VerdictBreakdown,
    pub mistakes: usize,
    pub achievement: Achievement,
}

impl ScoreSummary {
    /// `total` is the number of questions in the playthrough, not the
    /// number of answers given so far.
    pub fn from_answers(answers: &[Answer], total: usize) -> Self {
        let correct = correct_count(answers);
        let accuracy_percent = accuracy_percent(correct, total);
        Self {
            correct,
            total,
            accuracy_percent,
            trap: breakdown(answers, Verdict::Trap),
            trust: breakdown(answers, Verdict::Trust),
            mistakes: answers.len() - correct,
            achievement: Achievement::from_score(correct, total),
        }
    }

    pub fn has_mistakes(&self) -> bool {
        self.mistakes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_to_nearest() {
        assert_eq!(accuracy_percent(0, 15), 0);
        assert_eq!(accuracy_percent(15, 15), 100);
        // 2/3 = 66.67
        assert_eq!(accuracy_percent(2, 3), 67);
        // 1/3 = 33.33
        assert_eq!(accuracy_percent(1, 3), 33);
        // 1/8 = 12.5 rounds up
        assert_eq!(accuracy_percent(1, 8), 13);
        assert_eq!(accuracy_percent(0, 0), 0);
    }

    #[test]
    fn achievement_bands_cover_every_percent() {
        let mut previous = Achievement::KeepPracticing;
        for percent in 0..=100u8 {
            let band = Achievement::from_accuracy(percent);
            if percent == 40 || percent == 60 || percent == 80 || percent == 100 {
                assert_ne!(band, previous, "band should change at {}", percent);
            } else if percent > 0 {
                assert_eq!(band, previous, "band should not change at {}", percent);
            }
            previous = band;
        }
    }

    #[test]
    fn near_perfect_large_round_is_not_perfect() {
        assert_eq!(accuracy_percent(199, 200), 100);
        assert_eq!(Achievement::from_score(199, 200), Achievement::ScamDetector);
        assert_eq!(Achievement::from_score(200, 200), Achievement::Perfect);
        assert_eq!(Achievement::from_score(12, 15), Achievement::ScamDetector);
        assert_eq!(Achievement::from_score(0, 0), Achievement::KeepPracticing);
    }

    #[test]
    fn achievement_band_edges() {
        assert_eq!(Achievement::from_accuracy(79), Achievement::AlertLearner);
        assert_eq!(Achievement::from_accuracy(80), Achievement::ScamDetector);
        assert_eq!(Achievement::from_accuracy(99), Achievement::ScamDetector);
        assert_eq!(Achievement::from_accuracy(100), Achievement::Perfect);
        assert_eq!(Achievement::from_accuracy(39), Achievement::KeepPracticing);
        assert_eq!(Achievement::from_accuracy(40), Achievement::GettingThere);
        assert_eq!(Achievement::from_accuracy(0).title(), "Keep Practicing");
    }
}
