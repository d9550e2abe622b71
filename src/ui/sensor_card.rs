use crate::app::state::SensorKind;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Inputs for one sensor card. The card is a pure function of these values
/// and keeps no state of its own between renders; toggling is the host's job.
pub struct SensorCard<'a> {
    pub title: &'a str,
    pub icon: &'a str,
    pub kind: SensorKind,
    pub value: u8,
    pub is_active: bool,
    pub hotkey: char,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, card: &SensorCard) {
    let accent = Theme::sensor_style(card.kind, card.is_active);

    let (border_style, border_type) = if card.focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else if card.is_active {
        (
            Style::default().fg(Theme::sensor_color(card.kind, true)),
            Theme::border_type(),
        )
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", card.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let checked = card.value == 1;
    let toggle = Line::from(vec![
        Span::styled(
            "OFF ",
            if checked {
                Theme::hint()
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            },
        ),
        Span::styled(if checked { "────●" } else { "●────" }, accent),
        Span::styled(
            " ON",
            if checked {
                Style::default().fg(Theme::TEXT_PRIMARY)
            } else {
                Theme::hint()
            },
        ),
    ]);

    let lines = vec![
        Line::from(Span::styled(card.icon, accent)),
        toggle,
        Line::from(Span::styled(
            format!(" Valor: {} ", card.value),
            Theme::value_chip(),
        )),
        Line::from(Span::styled(
            format!("[{}] alternar", card.hotkey),
            Theme::hint(),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
