//! Static keymaps: per-mode tables binding grid coordinates to colors and
//! actions, plus the mode cycling on top of them.

use smart_leds::RGB8;

use crate::action::PadAction;
use crate::event::KeyCoord;

/// Color and action assigned to one coordinate within one mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Binding {
    pub color: RGB8,
    pub action: PadAction,
}

impl Binding {
    pub const fn new(color: RGB8, action: PadAction) -> Self {
        Self { color, action }
    }
}

/// One mode's bindings. Coordinates absent from the table are inert: no
/// color, no action.
#[derive(Debug, Copy, Clone)]
pub struct Keymap {
    keys: &'static [(KeyCoord, Binding)],
}

impl Keymap {
    pub const fn new(keys: &'static [(KeyCoord, Binding)]) -> Self {
        Self { keys }
    }

    pub fn get(&self, key: KeyCoord) -> Option<&Binding> {
        self.keys
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, binding)| binding)
    }

    pub fn keys(&self) -> &'static [(KeyCoord, Binding)] {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Configuration faults that are rejected before the loop can start.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The mode list has no keymaps; the deck has no operating state.
    EmptyModeList,
    /// A binding references a coordinate outside the logical grid.
    KeyOutOfGrid { mode: usize, key: KeyCoord },
    /// Two bindings in one mode claim the same coordinate; lookup would
    /// silently shadow one of them.
    DuplicateKey { mode: usize, key: KeyCoord },
}

/// The ordered, startup-fixed list of keymaps and the active index into it.
#[derive(Debug)]
pub struct ModeMap {
    modes: &'static [Keymap],
    active: usize,
}

impl ModeMap {
    /// Validate the mode list against the logical grid dimensions.
    pub fn new(modes: &'static [Keymap], cols: u8, rows: u8) -> Result<Self, ConfigError> {
        if modes.is_empty() {
            return Err(ConfigError::EmptyModeList);
        }
        for (mode, keymap) in modes.iter().enumerate() {
            let keys = keymap.keys();
            for (i, (key, _)) in keys.iter().enumerate() {
                if key.col >= cols || key.row >= rows {
                    return Err(ConfigError::KeyOutOfGrid { mode, key: *key });
                }
                if keys[..i].iter().any(|(earlier, _)| earlier == key) {
                    return Err(ConfigError::DuplicateKey { mode, key: *key });
                }
            }
        }
        Ok(Self { modes, active: 0 })
    }

    pub fn active(&self) -> &Keymap {
        &self.modes[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Cycle to the next mode, returning the new index.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.modes.len();
        self.active
    }
}
