use crate::app::state::SensorKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BORDER_DIM: Color = Color::DarkGray;

    pub const ACCENT_GREEN: Color = Color::Green;
    pub const ACCENT_AMBER: Color = Color::Yellow;
    pub const ACCENT_BLUE: Color = Color::Blue;
    pub const ACCENT_ROSE: Color = Color::Red;
    pub const NEUTRAL: Color = Color::Gray;

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Accent color for a sensor card. Inactive cards are neutral gray no
    /// matter the kind; unknown kinds fall back to blue.
    pub fn sensor_color(kind: SensorKind, is_active: bool) -> Color {
        if !is_active {
            return Self::NEUTRAL;
        }
        match kind {
            SensorKind::Presence => Self::ACCENT_GREEN,
            SensorKind::Obstruction => Self::ACCENT_AMBER,
            SensorKind::Other => Self::ACCENT_BLUE,
        }
    }

    pub fn sensor_style(kind: SensorKind, is_active: bool) -> Style {
        let style = Style::default().fg(Self::sensor_color(kind, is_active));
        if is_active {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn door_color(is_open: bool) -> Color {
        if is_open {
            Self::ACCENT_GREEN
        } else {
            Self::ACCENT_ROSE
        }
    }

    pub fn door_style(is_open: bool) -> Style {
        Style::default().fg(Self::door_color(is_open))
    }

    /// Filled badge behind the door label, like a status pill.
    pub fn door_badge(is_open: bool) -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::door_color(is_open))
            .add_modifier(Modifier::BOLD)
    }

    pub fn sweep() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn spinner() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn value_chip() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn log_text() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
