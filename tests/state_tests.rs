//! Integration tests for the state container
//!
//! Exercises the full transition table with no rendering or network layer
//! attached.

use viongozi::state::{Action, AppState, GENERIC_SUBMIT_ERROR};
use viongozi::types::{ExampleSet, HistoryItem, QueryResponse};

fn answered(question: &str) -> QueryResponse {
    QueryResponse {
        question: question.to_string(),
        answer: format!("An answer about {question}"),
        timestamp: "2025-08-31T13:16:36.227707".to_string(),
        ai_model_used: "gemini-2.0-flash".to_string(),
        response_time_ms: 1205,
    }
}

fn history_items(count: usize) -> Vec<HistoryItem> {
    (0..count)
        .map(|i| HistoryItem {
            id: format!("id-{i}"),
            question: format!("question {i}"),
            answer: format!("answer {i}"),
            timestamp: "2025-08-31T13:16:36".to_string(),
            ai_model_used: "gemini-2.0-flash".to_string(),
            response_time_ms: 900,
        })
        .collect()
}

mod submission_tests {
    use super::*;

    #[test]
    fn test_whitespace_question_is_silent_noop() {
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("   \n\t ".to_string()));
        let before = state.clone();

        assert!(state.begin_submission().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_successful_submission_settles_cleanly() {
        let mut state = AppState::default();
        state.apply(Action::LoadHistoryOk(history_items(2)));
        state.apply(Action::EditQuestion(
            "  Who is the governor of Meru County? ".to_string(),
        ));

        let ticket = state.begin_submission().unwrap();
        assert_eq!(ticket.question, "Who is the governor of Meru County?");
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.response.is_none());

        let response = answered("Who is the governor of Meru County?");
        state.apply(Action::SubmitOk {
            seq: ticket.seq,
            response: response.clone(),
        });

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.response, Some(response));
        assert!(state.question.is_empty());
        // No other panel is touched by a submission
        assert!(state.show_history);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_structured_failure_surfaces_detail() {
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("Who leads the senate?".to_string()));

        let ticket = state.begin_submission().unwrap();
        state.apply(Action::SubmitErr {
            seq: ticket.seq,
            message: "model unavailable".to_string(),
        });

        assert!(!state.loading);
        assert!(state.response.is_none());
        assert_eq!(state.error.as_deref(), Some("model unavailable"));
        // The draft survives a failure so the user can retry
        assert_eq!(state.question, "Who leads the senate?");
    }

    #[test]
    fn test_empty_failure_message_gets_fallback() {
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("anything".to_string()));
        let ticket = state.begin_submission().unwrap();

        state.apply(Action::SubmitErr {
            seq: ticket.seq,
            message: String::new(),
        });
        assert_eq!(state.error.as_deref(), Some(GENERIC_SUBMIT_ERROR));
    }

    #[test]
    fn test_new_submission_clears_previous_outcome() {
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("first".to_string()));
        let first = state.begin_submission().unwrap();
        state.apply(Action::SubmitErr {
            seq: first.seq,
            message: "model unavailable".to_string(),
        });

        state.apply(Action::EditQuestion("second".to_string()));
        let second = state.begin_submission().unwrap();
        assert!(state.error.is_none());
        assert!(state.response.is_none());
        assert!(state.loading);

        state.apply(Action::SubmitOk {
            seq: second.seq,
            response: answered("second"),
        });
        assert!(state.error.is_none());
        assert_eq!(state.response, Some(answered("second")));
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("slow question".to_string()));
        let slow = state.begin_submission().unwrap();

        state.apply(Action::EditQuestion("fast question".to_string()));
        let fast = state.begin_submission().unwrap();

        // The newer submission settles first
        state.apply(Action::SubmitOk {
            seq: fast.seq,
            response: answered("fast question"),
        });
        assert!(!state.loading);

        // The older one resolves late; neither its payload nor an error may
        // clobber the newer result
        state.apply(Action::SubmitOk {
            seq: slow.seq,
            response: answered("slow question"),
        });
        assert_eq!(state.response, Some(answered("fast question")));

        state.apply(Action::SubmitErr {
            seq: slow.seq,
            message: "timeout".to_string(),
        });
        assert!(state.error.is_none());
        assert!(!state.loading);
    }
}

mod secondary_flow_tests {
    use super::*;

    fn example_set() -> ExampleSet {
        ExampleSet {
            examples: vec![
                "Who is the governor of Meru County?".to_string(),
                "What are the 47 counties in Kenya?".to_string(),
            ],
            usage_tip: Some("Be specific about counties or positions.".to_string()),
        }
    }

    #[test]
    fn test_examples_load_shows_panel() {
        let mut state = AppState::default();
        state.apply(Action::LoadExamplesOk(example_set()));

        assert!(state.show_examples);
        assert_eq!(state.examples.len(), 2);
        assert!(state.usage_tip.is_some());
    }

    #[test]
    fn test_examples_failure_leaves_everything_untouched() {
        // A failed fetch dispatches no action at all; the panel stays hidden
        // and submission state is unaffected.
        let mut state = AppState::default();
        state.apply(Action::EditQuestion("draft in progress".to_string()));
        let before = state.clone();

        assert_eq!(state, before);
        assert!(!state.show_examples);
        assert!(state.examples.is_empty());
    }

    #[test]
    fn test_selecting_example_fills_draft_and_hides_panel() {
        let mut state = AppState::default();
        state.apply(Action::LoadExamplesOk(example_set()));

        let example = "Who is the governor of Meru County?".to_string();
        state.apply(Action::SelectExample(example.clone()));

        assert_eq!(state.question, example);
        assert!(!state.show_examples);

        // Submitting the selected example follows the standard contract
        let ticket = state.begin_submission().unwrap();
        assert_eq!(ticket.question, example);
    }

    #[test]
    fn test_panels_are_independent() {
        let mut state = AppState::default();
        state.apply(Action::LoadExamplesOk(example_set()));
        state.apply(Action::LoadHistoryOk(history_items(1)));

        assert!(state.show_examples);
        assert!(state.show_history);

        state.apply(Action::HideExamples);
        assert!(!state.show_examples);
        assert!(state.show_history);

        state.apply(Action::HideHistory);
        assert!(!state.show_history);
    }

    #[test]
    fn test_clear_history_empties_and_hides() {
        let mut state = AppState::default();
        state.apply(Action::LoadHistoryOk(history_items(3)));

        state.apply(Action::ClearHistoryOk {
            message: "Successfully cleared query history".to_string(),
        });

        assert!(state.history.is_empty());
        assert!(!state.show_history);
        assert_eq!(
            state.notice.as_deref(),
            Some("Successfully cleared query history")
        );

        state.apply(Action::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_clear_history_failure_leaves_collection_intact() {
        // A DELETE that throws dispatches nothing; no optimistic clearing.
        let mut state = AppState::default();
        state.apply(Action::LoadHistoryOk(history_items(3)));
        let before = state.clone();

        assert_eq!(state, before);
        assert_eq!(state.history.len(), 3);
        assert!(state.show_history);
    }
}
