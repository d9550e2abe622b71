use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " ◆ portadash ",
        Style::default()
            .fg(Theme::ACCENT_GREEN)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::PresenceCard => "PRESENÇA",
        FocusPanel::ObstructionCard => "OBSTRUÇÃO",
        FocusPanel::EventLog => "LOG",
    };
    let hints = " p/o alternar │ q sair ";

    // Pad to push focus + hints to the right edge
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let right_w = focus_name.width() + hints.width() + 3;
    let remaining = (area.width as usize).saturating_sub(used + right_w);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    parts.push(Span::styled(hints, Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
