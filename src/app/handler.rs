use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Reading {
            presence,
            obstruction,
            door_open,
        } => {
            tracing::debug!(presence, obstruction, door_open, "reading received");
            state.record_reading(presence, obstruction, door_open);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Animations derive their phase from tick_count, so every tick redraws.
    state.dirty = true;
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('p') => vec![toggle_action(state, SensorKind::Presence)],
        KeyCode::Char('o') => vec![toggle_action(state, SensorKind::Obstruction)],
        KeyCode::Char('c') => {
            state.feed.clear();
            vec![]
        }
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.focus {
            FocusPanel::PresenceCard => vec![toggle_action(state, SensorKind::Presence)],
            FocusPanel::ObstructionCard => vec![toggle_action(state, SensorKind::Obstruction)],
            FocusPanel::EventLog => vec![],
        },
        KeyCode::Up if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_up(1);
            vec![]
        }
        KeyCode::Down if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_down(1);
            vec![]
        }
        KeyCode::PageUp if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_up(10);
            vec![]
        }
        KeyCode::PageDown if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_down(10);
            vec![]
        }
        KeyCode::Home if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_to_top();
            vec![]
        }
        KeyCode::End if state.focus == FocusPanel::EventLog => {
            state.feed.scroll_to_bottom();
            vec![]
        }
        _ => vec![],
    }
}

/// One key interaction yields exactly one toggle request. The sensor value in
/// the state is left untouched; the simulator echoes the new value back as a
/// reading, which is what updates the cards.
fn toggle_action(state: &AppState, kind: SensorKind) -> Action {
    let current = state.sensor_value(kind);
    Action::SetSensor {
        kind,
        value: if current == 1 { 0 } else { 1 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn presence_key_emits_exactly_one_toggle() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(&mut state, press(KeyCode::Char('p')));
        assert_eq!(
            actions,
            vec![Action::SetSensor {
                kind: SensorKind::Presence,
                value: 1
            }]
        );
    }

    #[test]
    fn toggle_does_not_mutate_sensor_state() {
        let mut state = AppState::new(AppConfig::default());
        let _ = handle_event(&mut state, press(KeyCode::Char('p')));
        let _ = handle_event(&mut state, press(KeyCode::Char('o')));

        // Until the simulator echoes a reading back, the values are unchanged.
        assert_eq!(state.reading, SensorReading::default());
        assert!(state.feed.entries.is_empty());
    }

    #[test]
    fn toggle_flips_from_current_value() {
        let mut state = AppState::new(AppConfig::default());
        state.reading.presence = 1;
        let actions = handle_event(&mut state, press(KeyCode::Char('p')));
        assert_eq!(
            actions,
            vec![Action::SetSensor {
                kind: SensorKind::Presence,
                value: 0
            }]
        );
    }

    #[test]
    fn obstruction_key_targets_obstruction_sensor() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(&mut state, press(KeyCode::Char('o')));
        assert_eq!(
            actions,
            vec![Action::SetSensor {
                kind: SensorKind::Obstruction,
                value: 1
            }]
        );
    }

    #[test]
    fn enter_toggles_the_focused_card_only() {
        let mut state = AppState::new(AppConfig::default());
        state.focus = FocusPanel::ObstructionCard;
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::SetSensor {
                kind: SensorKind::Obstruction,
                value: 1
            }]
        );

        state.focus = FocusPanel::EventLog;
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert!(actions.is_empty());
    }

    #[test]
    fn quit_keys_emit_quit() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('q'))),
            vec![Action::Quit]
        );

        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn reading_event_updates_state_without_actions() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(
            &mut state,
            AppEvent::Reading {
                presence: 1,
                obstruction: 0,
                door_open: true,
            },
        );
        assert!(actions.is_empty());
        assert_eq!(state.feed.entries.len(), 1);
        assert!(state.door.is_open);
    }

    #[test]
    fn scroll_keys_only_apply_when_log_focused() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..5 {
            state.record_reading(0, 0, false);
        }

        let _ = handle_event(&mut state, press(KeyCode::Up));
        assert_eq!(state.feed.scroll_offset, 0);

        state.focus = FocusPanel::EventLog;
        let _ = handle_event(&mut state, press(KeyCode::Up));
        assert_eq!(state.feed.scroll_offset, 1);
        let _ = handle_event(&mut state, press(KeyCode::End));
        assert_eq!(state.feed.scroll_offset, 0);
    }

    #[test]
    fn clear_key_empties_the_feed() {
        let mut state = AppState::new(AppConfig::default());
        state.record_reading(1, 0, true);
        let _ = handle_event(&mut state, press(KeyCode::Char('c')));
        assert!(state.feed.entries.is_empty());
    }

    #[test]
    fn tick_advances_animation_counter() {
        let mut state = AppState::new(AppConfig::default());
        state.dirty = false;
        let actions = handle_event(&mut state, AppEvent::Tick);
        assert!(actions.is_empty());
        assert_eq!(state.tick_count, 1);
        assert!(state.dirty);
    }
}
