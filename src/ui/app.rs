use crate::mvi::Reducer;
use crate::session::{Phase, PhaseKind, QuizSession};
use crate::ui::answer_form::{AnswerFormIntent, AnswerFormReducer, AnswerFormState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Presentation-side state around a [`QuizSession`].
///
/// The session is only changed through its operations; the answer form
/// holds picks that have not been submitted yet.
pub struct App {
    should_quit: bool,
    session: QuizSession,
    form: AnswerFormState,
    /// Answer form is open on top of the feedback screen.
    editing: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            should_quit: false,
            session,
            form: AnswerFormState::default(),
            editing: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn form(&self) -> &AnswerFormState {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The answer form takes input: on the question screen, or while
    /// editing an answer from feedback.
    pub fn form_active(&self) -> bool {
        match self.session.kind() {
            PhaseKind::Playing => true,
            PhaseKind::Feedback => self.editing,
            _ => false,
        }
    }

    pub fn dispatch_form(&mut self, intent: AnswerFormIntent) {
        dispatch_mvi!(self, form, AnswerFormReducer, intent);
    }

    /// Submits the form if it is complete. Returns whether it was sent.
    pub fn submit_form(&mut self) -> bool {
        let Some((emotions, verdict)) = self.form.submission() else {
            return false;
        };
        self.session.submit_answer(emotions, verdict);
        self.editing = false;
        self.dispatch_form(AnswerFormIntent::Reset);
        true
    }

    /// Opens the form on a revisited feedback screen, prefilled with the
    /// shown answer. Fresh feedback cannot be edited.
    pub fn begin_edit(&mut self) {
        let Phase::Feedback {
            answer,
            revisit: true,
        } = self.session.phase()
        else {
            return;
        };
        let intent = AnswerFormIntent::Prefill {
            emotions: answer.emotions,
            verdict: answer.verdict,
        };
        self.dispatch_form(intent);
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.dispatch_form(AnswerFormIntent::Reset);
    }

    /// Runs a session operation and drops any half-filled picks, since
    /// every navigation lands on a different question or screen.
    pub fn navigate(&mut self, operation: impl FnOnce(&mut QuizSession)) {
        operation(&mut self.session);
        self.editing = false;
        self.dispatch_form(AnswerFormIntent::Reset);
    }
}
