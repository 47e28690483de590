use std::sync::Once;

use keyrank_core::{update, AnalysisOutcome, AppState, Msg, PhraseRow, PriorityLabel};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(keyrank_logging::initialize_for_tests);
}

fn phrases(count: usize) -> Vec<PhraseRow> {
    (0..count)
        .map(|index| PhraseRow {
            phrase: format!("phrase {index}"),
            priority: PriorityLabel::Medium,
            keywords: Vec::new(),
        })
        .collect()
}

fn state_with_results(count: usize) -> AppState {
    let state = AppState::new();
    let (state, _) = update(state, Msg::TitleChanged("Backend Engineer".to_string()));
    let (state, _) = update(
        state,
        Msg::DescriptionChanged("Builds and operates backend services.".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: AnalysisOutcome::Success {
                phrases: phrases(count),
            },
        },
    );
    state
}

fn expansion(state: &AppState) -> Vec<bool> {
    state.view().panels.iter().map(|p| p.expanded).collect()
}

#[test]
fn toggle_flips_only_the_target_panel() {
    init_logging();
    let state = state_with_results(3);

    let (next, effects) = update(state, Msg::PanelToggled { index: 1 });

    assert!(effects.is_empty());
    assert_eq!(expansion(&next), vec![false, true, false]);
}

#[test]
fn toggle_twice_restores_the_original_value() {
    init_logging();
    let state = state_with_results(3);

    let (state, _) = update(state, Msg::PanelToggled { index: 2 });
    let (state, _) = update(state, Msg::PanelToggled { index: 2 });

    assert_eq!(expansion(&state), vec![false, false, false]);
}

#[test]
fn toggle_out_of_range_is_ignored() {
    init_logging();
    let mut state = state_with_results(2);
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state, Msg::PanelToggled { index: 5 });

    assert!(effects.is_empty());
    assert_eq!(expansion(&next), vec![false, false]);
    assert!(!next.consume_dirty());
}

#[test]
fn new_results_reset_panels_to_collapsed() {
    init_logging();
    let state = state_with_results(2);
    let (state, _) = update(state, Msg::PanelToggled { index: 0 });
    assert_eq!(expansion(&state), vec![true, false]);

    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 2,
            outcome: AnalysisOutcome::Success {
                phrases: phrases(2),
            },
        },
    );

    assert_eq!(expansion(&state), vec![false, false]);
}

#[test]
fn toggling_does_not_disturb_an_inflight_submission() {
    init_logging();
    let state = state_with_results(2);
    // Previous results stay on screen while the next request runs.
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(state, Msg::PanelToggled { index: 0 });

    assert!(effects.is_empty());
    assert_eq!(expansion(&state), vec![true, false]);
    assert_eq!(state.view().phase, keyrank_core::Phase::Loading);
}
