//! Illumination: the pixel-driver boundary and the service that renders
//! keymap colors and brightness levels through it.

use smart_leds::RGB8;

use crate::event::KeyCoord;
use crate::keymap::Keymap;

/// Build a color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> RGB8 {
    RGB8 {
        r: ((hex >> 16) & 0xFF) as u8,
        g: ((hex >> 8) & 0xFF) as u8,
        b: (hex & 0xFF) as u8,
    }
}

pub const OFF: RGB8 = rgb(0x000000);

/// Brightness factor used while a pressed button's color fills the whole
/// grid, limiting current draw with every LED lit.
pub const PRESS_LEVEL: f32 = 0.2;

/// RGB pixel driver boundary.
///
/// Writes are not atomic across pixels; callers sequence fill-then-paint
/// when both are needed in one visual update. `set_brightness` takes an
/// absolute scalar in `[0, 1]`.
pub trait PixelDriver {
    fn set_pixel(&mut self, key: KeyCoord, color: RGB8);
    fn fill(&mut self, color: RGB8);
    fn set_brightness(&mut self, brightness: f32);
}

/// Rendering sink for the deck: paints keymaps and applies brightness
/// levels scaled by the configured maximum. Purely a sink; no timing logic.
pub struct LightService<P: PixelDriver> {
    driver: P,
    scale: f32,
}

impl<P: PixelDriver> LightService<P> {
    pub fn new(driver: P, scale: f32) -> Self {
        Self {
            driver,
            scale: scale.clamp(0.0, 1.0),
        }
    }

    /// Apply `level` (a factor in `[0, 1]`) of the configured brightness
    /// scale.
    pub fn set_level(&mut self, level: f32) {
        self.driver
            .set_brightness(level.clamp(0.0, 1.0) * self.scale);
    }

    /// Overwrite each bound coordinate with its color. Unbound coordinates
    /// keep whatever they last held; fill first for a clean slate.
    pub fn paint(&mut self, keymap: &Keymap) {
        for (key, binding) in keymap.keys() {
            self.driver.set_pixel(*key, binding.color);
        }
    }

    pub fn set_key(&mut self, key: KeyCoord, color: RGB8) {
        self.driver.set_pixel(key, color);
    }

    pub fn fill(&mut self, color: RGB8) {
        self.driver.fill(color);
    }

    pub fn blank(&mut self) {
        self.driver.fill(OFF);
    }

    /// Press feedback: flood the grid with the pressed binding's color at
    /// reduced brightness.
    pub fn highlight(&mut self, color: RGB8) {
        self.set_level(PRESS_LEVEL);
        self.driver.fill(color);
    }
}
