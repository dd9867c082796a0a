use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::content::{Catalog, EmotionSelection, QuestionRecord, Verdict};
use crate::mvi::Reducer;
use crate::session::answer::Answer;
use crate::session::intent::QuizIntent;
use crate::session::reducer::QuizReducer;
use crate::session::state::{Phase, PhaseKind, QuizState};
use crate::session::summary::ScoreSummary;
use crate::session::view::{FeedbackView, Progress, ReviewView};

/// Catalog positions `0..len` in random order.
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// A playthrough: the quiz state plus the random source for its shuffles.
///
/// This is the only handle the presentation layer holds. Each method is
/// one user action; every view is derived from the current state.
pub struct QuizSession {
    state: QuizState,
    rng: StdRng,
}

impl QuizSession {
    /// New session on the welcome screen, shuffled from OS entropy.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// New session whose shuffles are reproducible from `seed`.
    pub fn with_seed(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Arc<Catalog>, mut rng: StdRng) -> Self {
        let order = shuffled_order(catalog.len(), &mut rng);
        tracing::info!(questions = order.len(), "New quiz session");
        Self {
            state: QuizState::new(catalog, order),
            rng,
        }
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        self.state = QuizReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn start(&mut self) {
        self.dispatch(QuizIntent::Start);
    }

    pub fn continue_to_instructions(&mut self) {
        self.dispatch(QuizIntent::ContinueToInstructions);
    }

    pub fn begin_playing(&mut self) {
        self.dispatch(QuizIntent::BeginPlaying);
    }

    pub fn submit_answer(&mut self, emotions: EmotionSelection, verdict: Verdict) {
        self.dispatch(QuizIntent::SubmitAnswer { emotions, verdict });
    }

    pub fn go_back_from_playing(&mut self) {
        self.dispatch(QuizIntent::GoBackFromPlaying);
    }

    pub fn go_back_from_feedback(&mut self) {
        self.dispatch(QuizIntent::GoBackFromFeedback);
    }

    pub fn advance_or_finish(&mut self) {
        self.dispatch(QuizIntent::AdvanceOrFinish);
    }

    /// Back to welcome with a new shuffle. Only valid on the results screen.
    pub fn play_again(&mut self) {
        if self.state.kind() != PhaseKind::Results {
            self.dispatch(QuizIntent::PlayAgain { order: Vec::new() });
            return;
        }
        let order = shuffled_order(self.state.catalog().len(), &mut self.rng);
        self.dispatch(QuizIntent::PlayAgain { order });
    }

    pub fn review_mistakes(&mut self) {
        self.dispatch(QuizIntent::ReviewMistakes);
    }

    pub fn next_review(&mut self) {
        self.dispatch(QuizIntent::NextReview);
    }

    pub fn back_review(&mut self) {
        self.dispatch(QuizIntent::BackReview);
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        self.state.phase()
    }

    pub fn kind(&self) -> PhaseKind {
        self.state.kind()
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn active_question(&self) -> Option<&QuestionRecord> {
        self.state.active_question()
    }

    pub fn answers(&self) -> &[Answer] {
        self.state.answers()
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_answers(self.state.answers(), self.state.total())
    }

    pub fn mistakes(&self) -> Vec<&Answer> {
        self.state.mistakes()
    }

    pub fn review_cursor(&self) -> Option<usize> {
        self.state.review_cursor()
    }

    pub fn can_revise(&self) -> bool {
        self.state.can_revise()
    }

    pub fn feedback_view(&self) -> Option<FeedbackView<'_>> {
        self.state.feedback_view()
    }

    pub fn review_view(&self) -> Option<ReviewView<'_>> {
        self.state.review_view()
    }
}
