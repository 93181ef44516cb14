//! Demo Mode - Simulated head motion for testing
//!
//! Generates a plausible head-orientation stream for exercising the recorder
//! without a headset. Simulates a viewer holding a centered gaze with small
//! involuntary jitter, occasionally glancing toward a random direction,
//! holding it, and returning to center.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::orientation::Orientation;

/// Maximum yaw magnitude of a glance (radians, ~60 degrees).
const MAX_GLANCE_YAW: f32 = 1.05;
/// Maximum pitch magnitude of a glance (radians, ~25 degrees).
const MAX_GLANCE_PITCH: f32 = 0.44;
/// Angular tracking rate toward the gesture target (rad/s).
const TRACK_RATE: f32 = 2.4;

/// Simulated head-motion source.
pub struct DemoHeadMotion {
    /// Time when the simulation started (ms).
    start_time_ms: u64,
    /// Last update time (ms).
    last_update_ms: u64,
    /// Time of the next glance (ms from start).
    next_glance_at_ms: u64,
    /// Current gesture state.
    gesture: GestureState,
    /// Current smoothed yaw (rad).
    yaw: f32,
    /// Current smoothed pitch (rad).
    pitch: f32,
    /// Glance target yaw (rad).
    target_yaw: f32,
    /// Glance target pitch (rad).
    target_pitch: f32,
    /// Random number generator.
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    /// Gaze centered, only micro-jitter.
    Centered,
    /// Turning toward the glance target.
    TurnOut,
    /// Holding the glance target.
    Hold { start_ms: u64 },
    /// Returning to center.
    Return,
}

impl Default for DemoHeadMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoHeadMotion {
    /// Create a new motion source.
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let first_glance = rng.gen_range(2000..5000);

        Self {
            start_time_ms: 0,
            last_update_ms: 0,
            next_glance_at_ms: first_glance,
            gesture: GestureState::Centered,
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            rng,
        }
    }

    /// Advance the simulation and return the current head orientation.
    ///
    /// `elapsed_ms` is milliseconds since the caller's capture started; the
    /// first call anchors the simulation clock.
    pub fn update(&mut self, elapsed_ms: u64) -> Orientation {
        if self.start_time_ms == 0 {
            self.start_time_ms = elapsed_ms;
        }

        let sim_time = elapsed_ms - self.start_time_ms;
        let delta_ms = if self.last_update_ms > 0 {
            elapsed_ms.saturating_sub(self.last_update_ms)
        } else {
            0
        };
        self.last_update_ms = elapsed_ms;

        self.update_gesture(sim_time);

        // Track the gesture target at a bounded angular rate.
        let max_step = TRACK_RATE * (delta_ms as f32 / 1000.0);
        self.yaw += (self.target_yaw - self.yaw).clamp(-max_step, max_step);
        self.pitch += (self.target_pitch - self.pitch).clamp(-max_step, max_step);

        // Micro-jitter: small multi-frequency sway, strongest when centered.
        let t = sim_time as f32 / 1000.0;
        let jitter_scale = if self.gesture == GestureState::Centered {
            1.0
        } else {
            0.3
        };
        let jitter_yaw = jitter_scale * (0.004 * (t * 1.7).sin() + 0.002 * (t * 5.3).sin());
        let jitter_pitch = jitter_scale * (0.003 * (t * 2.1).sin() + 0.002 * (t * 6.1).sin());
        let roll = 0.002 * (t * 0.9).sin();

        Orientation::from_yaw_pitch_roll(self.yaw + jitter_yaw, self.pitch + jitter_pitch, roll)
    }

    /// Advance the gesture state machine.
    fn update_gesture(&mut self, sim_time: u64) {
        const HOLD_MS: u64 = 900;
        const SETTLE: f32 = 0.02;

        match self.gesture {
            GestureState::Centered => {
                if sim_time >= self.next_glance_at_ms {
                    self.target_yaw = self.rng.gen_range(-MAX_GLANCE_YAW..MAX_GLANCE_YAW);
                    self.target_pitch = self.rng.gen_range(-MAX_GLANCE_PITCH..MAX_GLANCE_PITCH);
                    self.gesture = GestureState::TurnOut;
                }
            }
            GestureState::TurnOut => {
                if (self.yaw - self.target_yaw).abs() < SETTLE
                    && (self.pitch - self.target_pitch).abs() < SETTLE
                {
                    self.gesture = GestureState::Hold { start_ms: sim_time };
                }
            }
            GestureState::Hold { start_ms } => {
                if sim_time >= start_ms + HOLD_MS {
                    self.target_yaw = 0.0;
                    self.target_pitch = 0.0;
                    self.gesture = GestureState::Return;
                }
            }
            GestureState::Return => {
                if self.yaw.abs() < SETTLE && self.pitch.abs() < SETTLE {
                    self.gesture = GestureState::Centered;
                    let next_interval = self.rng.gen_range(3000..8000);
                    self.next_glance_at_ms = sim_time + next_interval;
                }
            }
        }
    }
}
