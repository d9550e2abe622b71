//! Helpers for rendering assertions against a `TestBackend` buffer.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub fn draw<F>(width: u16, height: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame<'_>),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(f).expect("draw");
    terminal.backend().buffer().clone()
}

/// Flatten the buffer into one string per row, joined by newlines.
pub fn buffer_text(buf: &Buffer) -> String {
    buf.content
        .chunks(buf.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
