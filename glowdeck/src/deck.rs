//! The deck processor: one poll-driven tick wires scanning, edge detection,
//! action dispatch, mode switching, the idle machine and rendering together.

use embassy_time::{Duration, Instant, Timer};
use heapless::FnvIndexMap;
use rand_core::RngCore;
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport};

use crate::action::PadAction;
use crate::config::DeckConfig;
use crate::event::{KeyCoord, PressedKeys, detect_edges};
use crate::hid::{GamepadReport, HidWriter, Report};
use crate::idle::{IdleAnimator, IdlePhase, IdleTimings};
use crate::keycode::KeyCode;
use crate::keymap::{Binding, ConfigError, Keymap, ModeMap};
use crate::light::{LightService, PixelDriver};
use crate::matrix::{KeyScan, RotatedScan};

/// Most chords that can be held at once; must be a power of two.
const HELD_CHORD_CAPACITY: usize = 8;

/// The whole runtime state of the device, owned by the loop thread and
/// threaded explicitly through [`Deck::tick`]. No ambient globals, so the
/// machine runs under a mock clock and mock drivers in tests.
pub struct Deck<S: KeyScan, P: PixelDriver, W: HidWriter, R: RngCore> {
    scanner: RotatedScan<S>,
    light: LightService<P>,
    hid: W,
    rng: R,
    modes: ModeMap,
    timings: IdleTimings,
    tick_interval: Duration,
    idle: IdleAnimator,
    /// Previous tick's sample.
    pressed: PressedKeys,
    /// Most recent press edge of any kind.
    last_activity: Instant,
    /// Codes held for each chorded coordinate, released on that same
    /// coordinate's up edge.
    held_chords: FnvIndexMap<KeyCoord, &'static [KeyCode], HELD_CHORD_CAPACITY>,
    held_modifiers: u8,
    held_keycodes: [KeyCode; 6],
}

impl<S: KeyScan, P: PixelDriver, W: HidWriter, R: RngCore> Deck<S, P, W, R> {
    /// Validate the configuration and build the deck, painting the initial
    /// keymap. `now` seeds the activity clock.
    pub fn new(
        config: DeckConfig,
        modes: &'static [Keymap],
        scanner: S,
        pixels: P,
        hid: W,
        rng: R,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        let (cols, rows) = config.grid.logical_dims();
        let modes = ModeMap::new(modes, cols, rows)?;
        let mut light = LightService::new(pixels, config.brightness);
        light.set_level(1.0);
        light.paint(modes.active());
        Ok(Self {
            scanner: RotatedScan::new(
                scanner,
                config.grid.rotation,
                config.grid.cols,
                config.grid.rows,
            ),
            light,
            hid,
            rng,
            modes,
            timings: config.idle,
            tick_interval: config.tick_interval,
            idle: IdleAnimator::new(),
            pressed: PressedKeys::new(),
            last_activity: now,
            held_chords: FnvIndexMap::new(),
            held_modifiers: 0,
            held_keycodes: [KeyCode::No; 6],
        })
    }

    pub fn active_mode(&self) -> usize {
        self.modes.active_index()
    }

    /// Run the poll loop until power-off.
    pub async fn run(&mut self) {
        info!("deck running, mode {}", self.active_mode());
        loop {
            self.tick(Instant::now());
            Timer::after(self.tick_interval).await;
        }
    }

    /// One tick: sample, diff, dispatch, animate, render.
    ///
    /// Every tick completes regardless of sink errors; failures are logged
    /// and control returns to the loop.
    pub fn tick(&mut self, now: Instant) {
        let current = self.scanner.scan();
        let edges = detect_edges(&self.pressed, &current);
        // Sleep gating is decided by the phase at the top of the tick, so
        // the wake press itself never fires.
        let asleep = matches!(
            self.timings.phase(now - self.last_activity),
            IdlePhase::Snoring { .. }
        );

        for key in edges.pressed.iter() {
            if !asleep {
                if let Some(binding) = self.modes.active().get(*key).copied() {
                    debug!("down {:?}", key);
                    self.light.highlight(binding.color);
                    self.dispatch(*key, binding);
                }
            }
            // Any press counts as activity; while snoring it wakes the
            // deck without firing.
            self.last_activity = now;
        }

        for key in edges.released.iter() {
            if let Some(codes) = self.held_chords.remove(key) {
                debug!("up {:?}", key);
                self.unregister_codes(codes);
                self.send_keyboard_report();
            }
        }

        // Everything released: back from the press highlight to the
        // resting keymap colors.
        if current.is_empty() && !self.pressed.is_empty() {
            self.light.set_level(1.0);
            self.light.blank();
            self.light.paint(self.modes.active());
        }

        let phase = self.timings.phase(now - self.last_activity);
        self.idle
            .tick(phase, self.modes.active(), &mut self.light, &mut self.rng);

        self.pressed = current;
    }

    fn dispatch(&mut self, key: KeyCoord, binding: Binding) {
        match binding.action {
            PadAction::Key(codes) => match codes {
                [] => {}
                [code] => {
                    self.register_codes(&[*code]);
                    self.send_keyboard_report();
                    self.unregister_codes(&[*code]);
                    self.send_keyboard_report();
                }
                chord => {
                    self.register_codes(chord);
                    self.send_keyboard_report();
                    if self.held_chords.insert(key, chord).is_err() {
                        // Table full: release immediately rather than leak
                        // codes no release edge will ever match.
                        warn!("held chord table full, pulsing {:?}", key);
                        self.unregister_codes(chord);
                        self.send_keyboard_report();
                    }
                }
            },
            PadAction::Media(code) => {
                self.write(Report::Media(MediaKeyboardReport {
                    usage_id: code.usage(),
                }));
                self.write(Report::Media(MediaKeyboardReport { usage_id: 0 }));
            }
            PadAction::ModeNext => {
                let mode = self.modes.advance();
                info!("mode -> {}", mode);
                let keymap = *self.modes.active();
                self.light.paint(&keymap);
            }
            PadAction::Gamepad(ids) => {
                let buttons = gamepad_mask(ids);
                self.write(Report::Gamepad(GamepadReport { buttons }));
                self.write(Report::Gamepad(GamepadReport { buttons: 0 }));
            }
            PadAction::None => {}
        }
    }

    fn register_codes(&mut self, codes: &[KeyCode]) {
        for &code in codes {
            if code.is_modifier() {
                self.held_modifiers |= code.to_modifier_bit();
            } else if code != KeyCode::No && !self.held_keycodes.contains(&code) {
                match self
                    .held_keycodes
                    .iter_mut()
                    .find(|slot| **slot == KeyCode::No)
                {
                    Some(slot) => *slot = code,
                    None => warn!("keycode slots full, dropping {:?}", code),
                }
            }
        }
    }

    fn unregister_codes(&mut self, codes: &[KeyCode]) {
        for &code in codes {
            if code.is_modifier() {
                self.held_modifiers &= !code.to_modifier_bit();
            } else {
                for slot in self.held_keycodes.iter_mut() {
                    if *slot == code {
                        *slot = KeyCode::No;
                    }
                }
            }
        }
    }

    fn send_keyboard_report(&mut self) {
        let report = KeyboardReport {
            modifier: self.held_modifiers,
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|code| code as u8),
        };
        self.write(Report::Keyboard(report));
    }

    fn write(&mut self, report: Report) {
        if let Err(e) = self.hid.write_report(report) {
            error!("hid write failed: {:?}", e);
        }
    }
}

/// Bitmask for 1-based gamepad button ids; out-of-range ids are dropped.
fn gamepad_mask(ids: &[u8]) -> u16 {
    let mut mask = 0;
    for &id in ids {
        if (1..=16).contains(&id) {
            mask |= 1 << (id - 1);
        } else {
            warn!("gamepad button id {} out of range", id);
        }
    }
    mask
}
