//! Declarative looping animations.
//!
//! Effects are plain data (period, easing, repeat mode) sampled against the
//! application tick counter; nothing here owns a timer or a thread. The tick
//! task runs at 20 Hz, so a 1.5 s period is 30 ticks.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
}

#[derive(Debug, Clone, Copy)]
pub struct Effect {
    pub period_ticks: u64,
    pub easing: Easing,
    pub repeat: Repeat,
}

/// Obstruction-check sweep next to the closed door: 1.5 s back and forth.
pub const SWEEP: Effect = Effect {
    period_ticks: 30,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
};

/// Refresh spinner: one rotation every 2 s.
pub const SPIN: Effect = Effect {
    period_ticks: 40,
    easing: Easing::Linear,
    repeat: Repeat::Forever,
};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl Effect {
    /// Eased phase in `[0, 1)` for the given tick.
    pub fn phase(&self, tick: u64) -> f64 {
        let period = self.period_ticks.max(1);
        let t = match self.repeat {
            Repeat::Forever => (tick % period) as f64 / period as f64,
        };
        self.easing.apply(t)
    }

    /// Piecewise-linear sample of keyframes spread evenly over one period.
    pub fn sample(&self, tick: u64, keyframes: &[f64]) -> f64 {
        match keyframes {
            [] => 0.0,
            [only] => *only,
            _ => {
                let segments = (keyframes.len() - 1) as f64;
                let pos = self.phase(tick) * segments;
                let idx = (pos.floor() as usize).min(keyframes.len() - 2);
                let frac = pos - idx as f64;
                keyframes[idx] + (keyframes[idx + 1] - keyframes[idx]) * frac
            }
        }
    }

    /// Index into an `n`-frame cycle for the given tick.
    pub fn frame(&self, tick: u64, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.phase(tick) * n as f64) as usize).min(n - 1)
    }
}

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[SPIN.frame(tick, SPINNER_FRAMES.len())]
}
