use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A reading emitted by the sensor simulator. The door state is computed
    /// by the simulator, which owns the access rule.
    Reading {
        presence: u8,
        obstruction: u8,
        door_open: bool,
    },

    /// Tick for UI refresh and animation phase
    Tick,
}
