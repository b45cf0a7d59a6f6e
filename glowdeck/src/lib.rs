//! # glowdeck
//!
//! Firmware core for an illuminated button-grid "launch deck": a USB HID
//! macropad whose buttons send keyboard pulses and chords, consumer-control
//! and gamepad events, cycle between keymap modes, and glow per-button RGB
//! colors, fading out after a period of inactivity into a slow "snoring"
//! animation until the next press wakes the deck.
//!
//! The crate is hardware-agnostic: boards implement [`matrix::KeyScan`],
//! [`light::PixelDriver`] and [`hid::HidWriter`] for their drivers and hand
//! them to [`Deck`], which owns all runtime state and runs the poll loop.
//!
//! ```ignore
//! let mut deck = Deck::new(
//!     DeckConfig::default(),
//!     layout::LAUNCH_MODES,
//!     matrix_driver,
//!     pixel_driver,
//!     usb_hid,
//!     hw_rng,
//!     Instant::now(),
//! )?;
//! deck.run().await;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod fmt;

pub mod action;
pub mod config;
pub mod deck;
pub mod event;
pub mod hid;
pub mod idle;
pub mod keycode;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod light;
pub mod matrix;

pub use config::DeckConfig;
pub use deck::Deck;
