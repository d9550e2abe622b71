use crate::app::state::{EventFeed, LogEntry};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, area: Rect, feed: &EventFeed, focused: bool) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Log de Eventos ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if feed.entries.is_empty() {
        let placeholder = Paragraph::new("Aguardando eventos...").style(Theme::placeholder());
        frame.render_widget(placeholder, inner);
        return;
    }

    // Window over the feed: offset 0 keeps the view pinned to the newest
    // entry. The sequence itself is rendered exactly as given.
    let available_height = inner.height as usize;
    let total = feed.entries.len();
    let end = total.saturating_sub(feed.scroll_offset);
    let start = end.saturating_sub(available_height);

    let lines: Vec<Line> = feed.entries[start..end].iter().map(format_line).collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn format_line(entry: &LogEntry) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("[{}] ", entry.timestamp), Theme::timestamp()),
        Span::styled(
            format!(
                "Presença={} | Obstrução={} | Porta {}",
                entry.presence, entry.obstruction, entry.door_status
            ),
            Theme::log_text(),
        ),
    ])
}
