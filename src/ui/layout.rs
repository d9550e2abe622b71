use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub presence_card: Rect,
    pub obstruction_card: Rect,
    pub door_panel: Rect,
    pub event_log: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: panels | event log | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Sensor cards + door panel
            Constraint::Length(8), // Event log
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let top = main_chunks[0];
    let event_log = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: sensor column | door panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(28), // Sensor cards
            Constraint::Min(30),    // Door panel
        ])
        .split(top);

    let sensor_column = h_chunks[0];
    let door_panel = h_chunks[1];

    // Sensor column: presence over obstruction
    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(sensor_column);

    AppLayout {
        presence_card: card_chunks[0],
        obstruction_card: card_chunks[1],
        door_panel,
        event_log,
        status_bar,
    }
}
