mod anim;
mod door_panel;
mod event_log;
mod layout;
mod sensor_card;
mod status_bar;
mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::app::state::{AppState, FocusPanel, SensorKind};
use crate::ui::sensor_card::SensorCard;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let presence = SensorCard {
        title: "Sensor de Presença",
        icon: "◉",
        kind: SensorKind::Presence,
        value: state.reading.presence,
        is_active: state.reading.presence == 1,
        hotkey: 'p',
        focused: state.focus == FocusPanel::PresenceCard,
    };
    sensor_card::render(frame, app_layout.presence_card, &presence);

    let obstruction = SensorCard {
        title: "Sensor de Obstrução",
        icon: "▲",
        kind: SensorKind::Obstruction,
        value: state.reading.obstruction,
        is_active: state.reading.obstruction == 1,
        hotkey: 'o',
        focused: state.focus == FocusPanel::ObstructionCard,
    };
    sensor_card::render(frame, app_layout.obstruction_card, &obstruction);

    door_panel::render(
        frame,
        app_layout.door_panel,
        state.door.is_open,
        state.tick_count,
    );
    event_log::render(
        frame,
        app_layout.event_log,
        &state.feed,
        state.focus == FocusPanel::EventLog,
    );
    status_bar::render(frame, app_layout.status_bar, state);
}
