//! The action half of a button binding.

use crate::keycode::{KeyCode, MediaCode};

/// What a bound button does when pressed.
///
/// A `PadAction` is the action at a deck position, stored in the keymap and
/// matched exhaustively by the dispatcher, so adding a kind is a
/// compile-time-checked change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadAction {
    /// Keyboard codes. A single code is sent as a discrete pulse; two or
    /// more codes are pressed as a chord and held until the same button's
    /// release edge.
    Key(&'static [KeyCode]),
    /// Consumer-control usage, pulse only.
    Media(MediaCode),
    /// Cycle to the next keymap mode and repaint.
    ModeNext,
    /// Gamepad button ids (1-based), clicked as a pulse.
    Gamepad(&'static [u8]),
    /// Bound but inert: the button keeps its color and performs nothing.
    /// Misconfigured bindings map here instead of crashing the deck.
    None,
}
