//! Reducer: routes input events to state mutations.
//!
//! All state changes happen here; the runtime feeds events in and the
//! renderer only reads. Nothing in this module may panic on any input —
//! invalid navigation is a no-op, evaluation failures are in-band results.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kalq_core::modes::{self, Action, Evaluated};
use kalq_core::result::EvalResult;
use tracing::debug;

use crate::state::{AppState, PlotState};

/// Applies one terminal event to the state.
pub fn update(state: &mut AppState, event: &Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, *key),
        // Resize is handled implicitly by the next full redraw.
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // An open overlay swallows the key whole: the first event after help
    // (or a plot) is shown only dismisses it.
    if state.show_help {
        state.show_help = false;
        return;
    }
    if state.plot.is_some() {
        state.plot = None;
        return;
    }

    let grid = state.engine.mode.grid();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q' | 'Q') if !ctrl && !alt => {
            state.should_quit = true;
        }
        KeyCode::Char('c') if ctrl => {
            state.should_quit = true;
        }

        // Grid navigation (arrows) and text-cursor navigation (Ctrl+arrows,
        // Home/End). Both clamp; Left/Right wrap across grid rows.
        KeyCode::Left if ctrl => state.expr.move_left(),
        KeyCode::Right if ctrl => state.expr.move_right(),
        KeyCode::Up => state.selection.move_up(grid),
        KeyCode::Down => state.selection.move_down(grid),
        KeyCode::Left => state.selection.move_left(grid),
        KeyCode::Right => state.selection.move_right(grid),
        KeyCode::Home => state.expr.move_home(),
        KeyCode::End => state.expr.move_end(),

        KeyCode::Backspace | KeyCode::Delete => state.expr.delete_prev_char(),

        KeyCode::Enter | KeyCode::Char(' ') => activate_selected(state),

        KeyCode::Char('j' | 'J') if !ctrl && !alt => {
            state.engine.cycle_mode();
            state.selection.clamp(state.engine.mode.grid());
        }
        KeyCode::Char('h' | 'H') if !ctrl && !alt => {
            state.show_help = true;
        }
        KeyCode::Char('c' | 'C') if !ctrl && !alt => clear_all(state),
        KeyCode::Esc => clear_all(state),

        KeyCode::Char(ch) if ch.is_ascii_graphic() && !ctrl && !alt => {
            state.expr.insert_char(ch);
        }
        _ => {}
    }
}

fn activate_selected(state: &mut AppState) {
    let grid = state.engine.mode.grid();
    let label = state.selection.label(grid);
    debug!(label, mode = state.engine.mode.display_name(), "button activated");
    let action = modes::activate(state.engine.mode, label, state.expr.text());
    apply_action(state, action);
}

fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::InsertText { text, cursor_back } => {
            state.expr.insert_str(&text);
            state.expr.move_back_by(cursor_back);
        }
        Action::SetExpression(text) => state.expr.set_text(&text),
        Action::Evaluate => evaluate(state),
        Action::ClearAll => clear_all(state),
        Action::DeleteBeforeCursor => state.expr.delete_prev_char(),
        Action::InsertAnswer => {
            // Only a tagged Number is reusable as an operand.
            if let Some(EvalResult::Number(v)) = &state.result {
                state.expr.insert_str(&v.to_string());
            }
        }
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::Quit => state.should_quit = true,
    }
}

fn evaluate(state: &mut AppState) {
    let expression = state.expr.text().to_string();
    if expression.trim().is_empty() {
        return;
    }
    match state.engine.evaluate(&expression, state.ans_value()) {
        Evaluated::Result(result) => state.result = Some(result),
        Evaluated::Plot(source) => state.plot = Some(PlotState { source }),
    }
}

fn clear_all(state: &mut AppState) {
    state.expr.clear();
    state.result = None;
}
