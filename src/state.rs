use crate::types::{ExampleSet, HistoryItem, QueryResponse};

/// Upper bound on a question, matching the service-side validation.
pub const MAX_QUESTION_CHARS: usize = 500;

/// Fallback shown when a failed submission carries no usable message.
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to get response";

// ============================================
// State container
// ============================================

/// Everything the UI renders, owned in one place.
///
/// Components never mutate this directly; they dispatch an [`Action`] (or call
/// [`AppState::begin_submission`]) and re-render from the result. The
/// container has no I/O or rendering dependencies so the whole transition
/// table is testable on its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Draft question being composed; cleared on successful submission.
    pub question: String,
    /// Most recent successful answer; at most one retained.
    pub response: Option<QueryResponse>,
    /// Submission in flight.
    pub loading: bool,
    /// Message of the last failed submission.
    pub error: Option<String>,
    pub examples: Vec<String>,
    pub usage_tip: Option<String>,
    pub show_examples: bool,
    pub history: Vec<HistoryItem>,
    pub show_history: bool,
    /// Transient confirmation (history cleared); auto-dismissed by the UI.
    pub notice: Option<String>,
    /// Sequence number of the latest issued submission. Outcomes carrying an
    /// older number are ignored wholesale, so a slow response can never
    /// clobber the result of a newer submission.
    seq: u64,
}

/// Ticket for one in-flight submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub seq: u64,
    pub question: String,
}

/// Named state transitions.
///
/// Submission outcomes carry the sequence number of the submission they
/// settle; the secondary flows (examples, history) have no failure actions —
/// a failed load dispatches nothing and leaves the state untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    EditQuestion(String),
    SubmitOk { seq: u64, response: QueryResponse },
    SubmitErr { seq: u64, message: String },
    LoadExamplesOk(ExampleSet),
    HideExamples,
    SelectExample(String),
    LoadHistoryOk(Vec<HistoryItem>),
    HideHistory,
    ClearHistoryOk { message: String },
    DismissNotice,
}

impl AppState {
    /// Validate and open a new submission.
    ///
    /// Trims the draft; an empty result is a silent no-op returning `None`
    /// with no state change and no request issued. Otherwise enters loading,
    /// clears any previous error and response, and returns the ticket whose
    /// sequence number the eventual outcome must echo.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        let trimmed = self.question.trim();
        if trimmed.is_empty() {
            return None;
        }
        let question = trimmed.to_string();
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.response = None;
        Some(Submission {
            seq: self.seq,
            question,
        })
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::EditQuestion(text) => {
                self.question = truncate_chars(text, MAX_QUESTION_CHARS);
            }
            Action::SubmitOk { seq, response } => {
                if seq != self.seq {
                    return;
                }
                self.loading = false;
                self.response = Some(response);
                self.question.clear();
            }
            Action::SubmitErr { seq, message } => {
                if seq != self.seq {
                    return;
                }
                self.loading = false;
                self.error = Some(if message.is_empty() {
                    GENERIC_SUBMIT_ERROR.to_string()
                } else {
                    message
                });
            }
            Action::LoadExamplesOk(set) => {
                self.examples = set.examples;
                self.usage_tip = set.usage_tip;
                self.show_examples = true;
            }
            Action::HideExamples => {
                self.show_examples = false;
            }
            Action::SelectExample(example) => {
                self.question = truncate_chars(example, MAX_QUESTION_CHARS);
                self.show_examples = false;
            }
            Action::LoadHistoryOk(items) => {
                self.history = items;
                self.show_history = true;
            }
            Action::HideHistory => {
                self.show_history = false;
            }
            Action::ClearHistoryOk { message } => {
                self.history.clear();
                self.show_history = false;
                self.notice = Some(message);
            }
            Action::DismissNotice => {
                self.notice = None;
            }
        }
    }

    /// Character count of the draft, for the form's live counter.
    pub fn question_chars(&self) -> usize {
        self.question.chars().count()
    }

    /// True when the submit control should be inert.
    pub fn submit_disabled(&self) -> bool {
        self.loading || self.question.trim().is_empty()
    }
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text,
    }
}
