//! Load-time configuration. Nothing here is runtime-mutable; the deck is
//! built from these values once, before the loop starts.

use embassy_time::Duration;

use crate::idle::IdleTimings;
use crate::matrix::Rotation;

/// Physical matrix dimensions and how the device is mounted.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridConfig {
    /// Native matrix columns.
    pub cols: u8,
    /// Native matrix rows.
    pub rows: u8,
    pub rotation: Rotation,
}

impl Default for GridConfig {
    /// The stock deck: a landscape 8x4 matrix used in portrait.
    fn default() -> Self {
        Self {
            cols: 8,
            rows: 4,
            rotation: Rotation::Deg90,
        }
    }
}

impl GridConfig {
    /// Logical `(cols, rows)` after rotation; keymaps are validated against
    /// these.
    pub fn logical_dims(&self) -> (u8, u8) {
        self.rotation.logical_dims(self.cols, self.rows)
    }
}

/// Everything the deck is configured with at startup.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeckConfig {
    pub grid: GridConfig,
    /// Maximum brightness multiplier in `[0, 1]`; every rendered level is
    /// scaled by it.
    pub brightness: f32,
    /// Poll cadence of the run loop. Sub-50ms keeps edges from being missed
    /// and fades visibly smooth.
    pub tick_interval: Duration,
    pub idle: IdleTimings,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            brightness: 0.1,
            tick_interval: Duration::from_millis(20),
            idle: IdleTimings::default(),
        }
    }
}
