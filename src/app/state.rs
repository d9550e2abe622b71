use crate::config::AppConfig;
use chrono::Local;

/// Which sensor a card represents. Theme selection is keyed on this tag
/// rather than on matching keywords in the card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Presence,
    Obstruction,
    Other,
}

/// Last values reported by the simulator. Values are 0 or 1; anything else
/// degrades to the neutral presentation instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReading {
    pub presence: u8,
    pub obstruction: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorState {
    pub is_open: bool,
}

impl DoorState {
    /// Status text as it appears in log lines.
    pub fn status_label(&self) -> &'static str {
        if self.is_open {
            "Aberta"
        } else {
            "Fechada"
        }
    }
}

/// One observed system snapshot, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub presence: u8,
    pub obstruction: u8,
    pub door_status: String,
}

/// Ordered history of readings, oldest to newest. The feed owns bounding and
/// the scroll position; the event log component only renders what it is given.
#[derive(Debug, Default)]
pub struct EventFeed {
    pub entries: Vec<LogEntry>,
    pub scroll_offset: usize,
}

impl EventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry, max_entries: usize) {
        self.entries.push(entry);
        if self.entries.len() > max_entries {
            self.entries.remove(0);
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self, n: usize) {
        let max = self.entries.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + n).min(max);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = self.entries.len().saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    PresenceCard,
    ObstructionCard,
    EventLog,
}

pub struct AppState {
    pub config: AppConfig,
    pub reading: SensorReading,
    pub door: DoorState,
    pub feed: EventFeed,
    pub focus: FocusPanel,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            reading: SensorReading::default(),
            door: DoorState::default(),
            feed: EventFeed::new(),
            focus: FocusPanel::PresenceCard,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            timestamp_format,
        }
    }

    pub fn sensor_value(&self, kind: SensorKind) -> u8 {
        match kind {
            SensorKind::Presence => self.reading.presence,
            SensorKind::Obstruction => self.reading.obstruction,
            SensorKind::Other => 0,
        }
    }

    /// Ingest one simulator reading: update the sensors and the door, and
    /// append exactly one log entry.
    pub fn record_reading(&mut self, presence: u8, obstruction: u8, door_open: bool) {
        self.reading = SensorReading {
            presence,
            obstruction,
        };
        self.door.is_open = door_open;

        let entry = LogEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            presence,
            obstruction,
            door_status: self.door.status_label().to_string(),
        };
        self.feed.push(entry, self.config.ui.max_log_entries);
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::PresenceCard => FocusPanel::ObstructionCard,
            FocusPanel::ObstructionCard => FocusPanel::EventLog,
            FocusPanel::EventLog => FocusPanel::PresenceCard,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::PresenceCard => FocusPanel::EventLog,
            FocusPanel::ObstructionCard => FocusPanel::PresenceCard,
            FocusPanel::EventLog => FocusPanel::ObstructionCard,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "Presença={} | Obstrução={} | Porta {}",
            self.reading.presence,
            self.reading.obstruction,
            self.door.status_label(),
        )
    }
}
