use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use keyrank_core::{
    update, AnalysisOutcome, AppState, Effect, KeywordRow, Msg, PhraseRow, PriorityLabel,
};
use keyrank_engine::{EngineEvent, EngineHandle, KeyPhrase, Priority};

use crate::input;
use crate::ui;

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Focus {
    #[default]
    Title,
    Description,
    Results,
}

pub(crate) struct App {
    pub(crate) state: AppState,
    pub(crate) focus: Focus,
    /// Selected row in the results list; UI-local, unlike the expansion
    /// map, which belongs to the state machine.
    pub(crate) cursor: usize,
}

enum KeyAction {
    Quit,
    Dispatch(Msg),
    Redraw,
    Ignored,
}

pub(crate) fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &EngineHandle,
) -> anyhow::Result<()> {
    let mut app = App {
        state: AppState::new(),
        focus: Focus::default(),
        cursor: 0,
    };
    let tick_rate = Duration::from_millis(75);

    let mut should_render = true;
    loop {
        while let Some(engine_event) = engine.try_recv() {
            should_render |= dispatch(&mut app, engine, engine_event_to_msg(engine_event));
        }

        if should_render {
            let view = app.state.view();
            terminal.draw(|frame| ui::draw(frame, &view, app.focus, app.cursor))?;
            should_render = false;
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key_action(&mut app, key) {
                        KeyAction::Quit => break,
                        KeyAction::Dispatch(msg) => {
                            should_render |= dispatch(&mut app, engine, msg);
                        }
                        KeyAction::Redraw => should_render = true,
                        KeyAction::Ignored => {}
                    }
                }
            }
        } else {
            should_render |= dispatch(&mut app, engine, Msg::Tick);
        }
    }

    Ok(())
}

/// Runs one message through the pure update function, forwards any
/// effects to the engine, and reports whether a re-render is due.
fn dispatch(app: &mut App, engine: &EngineHandle, msg: Msg) -> bool {
    let state = std::mem::take(&mut app.state);
    let (mut state, effects) = update(state, msg);
    let was_dirty = state.consume_dirty();
    app.state = state;

    for effect in effects {
        match effect {
            Effect::Analyze {
                request_id,
                title,
                description,
            } => engine.analyze(request_id, title, description),
        }
    }

    // Keep the results cursor inside the (possibly replaced) list.
    app.cursor = app.cursor.min(app.state.panel_count().saturating_sub(1));

    was_dirty
}

fn key_action(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('s') => KeyAction::Dispatch(Msg::SubmitClicked),
            _ => KeyAction::Ignored,
        };
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => {
            app.focus = next_focus(app.focus);
            KeyAction::Redraw
        }
        KeyCode::BackTab => {
            app.focus = prev_focus(app.focus);
            KeyAction::Redraw
        }
        _ => match app.focus {
            Focus::Title => title_key(app, key.code),
            Focus::Description => description_key(app, key.code),
            Focus::Results => results_key(app, key.code),
        },
    }
}

fn title_key(app: &mut App, code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Char(ch) => {
            KeyAction::Dispatch(Msg::TitleChanged(input::push_char(app.state.title(), ch)))
        }
        KeyCode::Backspace => {
            KeyAction::Dispatch(Msg::TitleChanged(input::pop_char(app.state.title())))
        }
        KeyCode::Enter => {
            app.focus = Focus::Description;
            KeyAction::Redraw
        }
        _ => KeyAction::Ignored,
    }
}

fn description_key(app: &mut App, code: KeyCode) -> KeyAction {
    let current = app.state.description();
    match code {
        KeyCode::Char(ch) => {
            KeyAction::Dispatch(Msg::DescriptionChanged(input::push_char(current, ch)))
        }
        KeyCode::Enter => {
            KeyAction::Dispatch(Msg::DescriptionChanged(input::push_char(current, '\n')))
        }
        KeyCode::Backspace => KeyAction::Dispatch(Msg::DescriptionChanged(input::pop_char(current))),
        _ => KeyAction::Ignored,
    }
}

fn results_key(app: &mut App, code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
            KeyAction::Redraw
        }
        KeyCode::Down => {
            let last = app.state.panel_count().saturating_sub(1);
            app.cursor = (app.cursor + 1).min(last);
            KeyAction::Redraw
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Dispatch(Msg::PanelToggled { index: app.cursor })
        }
        _ => KeyAction::Ignored,
    }
}

fn next_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Title => Focus::Description,
        Focus::Description => Focus::Results,
        Focus::Results => Focus::Title,
    }
}

fn prev_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Title => Focus::Results,
        Focus::Description => Focus::Title,
        Focus::Results => Focus::Description,
    }
}

/// Translates an engine event into a state-machine message, logging the
/// diagnostic detail that the UI deliberately never shows.
fn engine_event_to_msg(engine_event: EngineEvent) -> Msg {
    match engine_event {
        EngineEvent::AnalysisCompleted { request_id, result } => match result {
            Ok(analysis) => {
                log::debug!(
                    "request {request_id}: analysis returned {} key phrases",
                    analysis.key_phrases.len()
                );
                Msg::AnalysisCompleted {
                    request_id,
                    outcome: AnalysisOutcome::Success {
                        phrases: analysis.key_phrases.into_iter().map(phrase_row).collect(),
                    },
                }
            }
            Err(failure) => {
                log::error!("request {request_id}: analysis failed: {failure}");
                Msg::AnalysisCompleted {
                    request_id,
                    outcome: AnalysisOutcome::Failed,
                }
            }
        },
    }
}

fn phrase_row(phrase: KeyPhrase) -> PhraseRow {
    PhraseRow {
        phrase: phrase.phrase,
        priority: priority_label(phrase.priority),
        keywords: phrase
            .keywords
            .into_iter()
            .map(|keyword| KeywordRow {
                word: keyword.word,
                score: keyword.score.to_string(),
            })
            .collect(),
    }
}

fn priority_label(priority: Priority) -> PriorityLabel {
    match priority {
        Priority::High => PriorityLabel::High,
        Priority::Medium => PriorityLabel::Medium,
        Priority::Low => PriorityLabel::Low,
    }
}
