use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TitleChanged(text) => {
            state.set_title(text);
            Vec::new()
        }
        Msg::DescriptionChanged(text) => {
            state.set_description(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The control is disabled while Loading; blank fields fail the
            // required-field constraint. Either way: no request.
            if !state.can_submit() || !state.has_required_inputs() {
                return (state, Vec::new());
            }
            let request_id = state.begin_submission();
            vec![Effect::Analyze {
                request_id,
                title: state.title().to_owned(),
                description: state.description().to_owned(),
            }]
        }
        Msg::AnalysisCompleted {
            request_id,
            outcome,
        } => {
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::PanelToggled { index } => {
            state.toggle_panel(index);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
