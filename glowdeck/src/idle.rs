//! Idle state machine: fade the display out after a period of inactivity,
//! then "snore", periodically breathing one randomly chosen bound button up
//! and back down until the next press.

use embassy_time::Duration;
use rand_core::RngCore;

use crate::event::KeyCoord;
use crate::keymap::Keymap;
use crate::light::{LightService, PixelDriver};

/// Idle timing configuration.
///
/// After `timeout` of no presses the whole display ramps to black over
/// `fade`. From then on, time divides into snore cycles of
/// `snore_pause + snore_rise + snore_fall`: dark for the pause, then one
/// button breathes up over the rise and back down over the fall.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleTimings {
    pub timeout: Duration,
    pub fade: Duration,
    pub snore_pause: Duration,
    pub snore_rise: Duration,
    pub snore_fall: Duration,
}

impl Default for IdleTimings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
            fade: Duration::from_secs(1),
            snore_pause: Duration::from_millis(500),
            snore_rise: Duration::from_secs(2),
            snore_fall: Duration::from_secs(1),
        }
    }
}

impl IdleTimings {
    pub fn total_snore(&self) -> Duration {
        self.snore_pause + self.snore_rise + self.snore_fall
    }

    /// Derive the phase for an elapsed idle duration. Pure; the machine
    /// stores no phase between ticks.
    pub fn phase(&self, idle: Duration) -> IdlePhase {
        if idle < self.timeout {
            return IdlePhase::Active;
        }
        let past = idle - self.timeout;
        if past < self.fade {
            let level = 1.0 - past.as_micros() as f32 / self.fade.as_micros() as f32;
            return IdlePhase::Fading { level };
        }
        let total = self.total_snore().as_micros();
        if total == 0 {
            return IdlePhase::Snoring {
                cycle: 0,
                level: 0.0,
            };
        }
        let snored = (past - self.fade).as_micros();
        let cycle = (snored / total) as u32;
        let phase = snored % total;
        let pause = self.snore_pause.as_micros();
        let rise = self.snore_rise.as_micros();
        let level = if phase < pause {
            0.0
        } else if phase < pause + rise {
            (phase - pause) as f32 / rise as f32
        } else {
            1.0 - (phase - pause - rise) as f32 / self.snore_fall.as_micros() as f32
        };
        IdlePhase::Snoring { cycle, level }
    }
}

/// Phase derived each tick from the elapsed idle time.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdlePhase {
    Active,
    /// Whole display ramping linearly to black; `level` is the remaining
    /// brightness factor.
    Fading { level: f32 },
    /// `cycle` counts snore cycles since falling asleep; `level` is the
    /// breathing brightness factor within the current cycle.
    Snoring { cycle: u32, level: f32 },
}

/// Renders the idle phases, keeping only the snore bookkeeping: which cycle
/// was last started and which button it lit.
pub struct IdleAnimator {
    snore_cycle: Option<u32>,
    snore_target: Option<KeyCoord>,
}

impl Default for IdleAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdleAnimator {
    pub fn new() -> Self {
        Self {
            snore_cycle: None,
            snore_target: None,
        }
    }

    /// The button highlighted by the current snore cycle, if snoring.
    pub fn snore_target(&self) -> Option<KeyCoord> {
        self.snore_target
    }

    /// Render one tick of the given phase. While active this only clears
    /// the snore bookkeeping; the dispatcher owns active-phase rendering,
    /// so press-highlight dimming is never overwritten here.
    pub fn tick<P: PixelDriver, R: RngCore>(
        &mut self,
        phase: IdlePhase,
        keymap: &Keymap,
        light: &mut LightService<P>,
        rng: &mut R,
    ) {
        match phase {
            IdlePhase::Active => {
                self.snore_cycle = None;
                self.snore_target = None;
            }
            IdlePhase::Fading { level } => {
                light.set_level(level);
            }
            IdlePhase::Snoring { cycle, level } => {
                if self.snore_cycle.map_or(true, |seen| cycle > seen) {
                    // New cycle: blank everything and light one randomly
                    // chosen bound button at its resting color.
                    light.blank();
                    self.snore_target = None;
                    if !keymap.is_empty() {
                        let keys = keymap.keys();
                        let pick = rng.next_u32() as usize % keys.len();
                        let (key, binding) = keys[pick];
                        light.set_key(key, binding.color);
                        self.snore_target = Some(key);
                        debug!("snore cycle {}, target {:?}", cycle, key);
                    }
                    self.snore_cycle = Some(cycle);
                }
                light.set_level(level);
            }
        }
    }
}
