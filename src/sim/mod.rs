//! Sensor simulator.
//!
//! Plays the role of the hardware behind the dashboard: it owns the
//! authoritative sensor values, applies toggle commands, and re-emits the
//! current reading on a fixed interval. The UI never mutates sensor values
//! directly; it asks the simulator and waits for the reading to come back.

use crate::app::event::AppEvent;
use crate::app::state::SensorKind;
use crate::config::model::SimConfig;
use rand::RngExt;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulator is not running")]
    ChannelClosed,
}

#[derive(Debug)]
pub enum SimCommand {
    SetSensor { kind: SensorKind, value: u8 },
}

/// Handle to the simulator task.
pub struct SimManager {
    cmd_tx: mpsc::UnboundedSender<SimCommand>,
}

impl SimManager {
    pub fn spawn(config: SimConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_simulator(config, cmd_rx, event_tx));
        Self { cmd_tx }
    }

    pub fn set_sensor(&self, kind: SensorKind, value: u8) -> Result<(), SimError> {
        self.cmd_tx
            .send(SimCommand::SetSensor { kind, value })
            .map_err(|_| SimError::ChannelClosed)
    }
}

/// Access rule: the door opens only with presence detected and no obstruction.
pub fn door_open(presence: u8, obstruction: u8) -> bool {
    presence == 1 && obstruction == 0
}

async fn run_simulator(
    config: SimConfig,
    mut cmd_rx: mpsc::UnboundedReceiver<SimCommand>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut presence = config.start_presence as u8;
    let mut obstruction = config.start_obstruction as u8;

    let secs = config.poll_interval_secs.max(1);
    let mut interval = tokio::time::interval(Duration::from_secs(secs));
    info!(poll_interval_secs = secs, noise = config.noise, "simulator started");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if config.noise && rand::rng().random_range(0..8) == 0 {
                    presence ^= 1;
                    debug!(presence, "noise flipped presence");
                }
                if !emit(&event_tx, presence, obstruction) {
                    break;
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SimCommand::SetSensor { kind, value }) => {
                        let value = value.min(1);
                        match kind {
                            SensorKind::Presence => presence = value,
                            SensorKind::Obstruction => obstruction = value,
                            SensorKind::Other => {
                                debug!(?kind, value, "ignoring command for unknown sensor");
                                continue;
                            }
                        }
                        info!(?kind, value, "sensor set");
                        if !emit(&event_tx, presence, obstruction) {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    info!("simulator stopped");
}

fn emit(event_tx: &mpsc::UnboundedSender<AppEvent>, presence: u8, obstruction: u8) -> bool {
    let door = door_open(presence, obstruction);
    debug!(presence, obstruction, door, "emitting reading");
    event_tx
        .send(AppEvent::Reading {
            presence,
            obstruction,
            door_open: door,
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn door_opens_only_without_obstruction() {
        assert!(!door_open(0, 0));
        assert!(!door_open(0, 1));
        assert!(door_open(1, 0));
        assert!(!door_open(1, 1));
    }

    #[tokio::test]
    async fn commands_round_trip_as_readings() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let sim = SimManager::spawn(SimConfig::default(), event_tx);

        // First interval tick fires immediately with the start values.
        let first = event_rx.recv().await.expect("initial reading");
        match first {
            AppEvent::Reading {
                presence,
                obstruction,
                door_open,
            } => {
                assert_eq!(presence, 0);
                assert_eq!(obstruction, 0);
                assert!(!door_open);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        sim.set_sensor(SensorKind::Presence, 1).expect("send");
        let next = loop {
            match event_rx.recv().await.expect("reading after command") {
                AppEvent::Reading {
                    presence: 1,
                    obstruction,
                    door_open,
                } => break (obstruction, door_open),
                AppEvent::Reading { .. } => continue,
                other => panic!("unexpected event: {:?}", other),
            }
        };
        assert_eq!(next.0, 0);
        assert!(next.1);
    }

    #[tokio::test]
    async fn out_of_range_values_are_clamped() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let sim = SimManager::spawn(SimConfig::default(), event_tx);
        let _ = event_rx.recv().await.expect("initial reading");

        sim.set_sensor(SensorKind::Obstruction, 7).expect("send");
        loop {
            match event_rx.recv().await.expect("reading") {
                AppEvent::Reading { obstruction: 1, .. } => break,
                AppEvent::Reading { obstruction: 0, .. } => continue,
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }
}
