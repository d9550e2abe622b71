use crate::app::state::SensorKind;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Ask the simulator to set a sensor to the given value. The state is
    /// not touched here; the new value arrives with the next reading.
    SetSensor { kind: SensorKind, value: u8 },
    Quit,
}
