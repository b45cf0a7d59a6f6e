//! The stock two-mode launcher layout for the portrait 4x8 deck.
//!
//! Mode 0 drives an app launcher and debugger (function keys and a few
//! chords) plus a small numeric cluster; mode 1 is a hex/alphanumeric entry
//! pad. The white button on row 1 cycles modes in both.

use crate::keymap::Keymap;
use crate::{chord, key, keys, mode};

pub static LAUNCH_MODES: &[Keymap] = &[
    Keymap::new(keys![
        (0, 0) => key!(0x00FF00, F5),
        (1, 0) => key!(0xFFFF00, F9),
        (2, 0) => key!(0xFF00FF, F11),
        (3, 0) => key!(0x00FFFF, F10),

        (0, 1) => chord!(0xFF0000, [LShift, F5]),
        (2, 1) => chord!(0x0000FF, [LShift, F11]),
        (3, 1) => mode!(0xFFFFFF),

        (0, 2) => key!(0xFF0055, F2),
        (1, 2) => key!(0x5500FF, F12),

        (0, 3) => chord!(0xFFFF00, [LGui, K]),
        (1, 3) => chord!(0x00FF00, [LGui, LAlt, S]),
        (2, 3) => chord!(0xFF0000, [LGui, R]),

        (0, 5) => key!(0x22FF22, Kp8),
        (1, 5) => key!(0xFF2222, Kp9),
        (0, 6) => key!(0x00FF00, Kp4),
        (1, 6) => key!(0xFF0000, Kp5),
        (2, 6) => key!(0xFFFF00, Kp6),
        (3, 6) => key!(0xFF6666, Kp7),
        (0, 7) => key!(0x666666, Kp0),
        (1, 7) => key!(0x0000FF, Kp1),
        (2, 7) => key!(0x00FF00, Kp2),
        (3, 7) => key!(0xFF0000, Kp3),
    ]),
    Keymap::new(keys![
        (3, 1) => mode!(0xFFFFFF),

        (3, 3) => key!(0xFFFFFF, Backspace),
        (3, 4) => key!(0xFF00AA, F),
        (2, 4) => key!(0xFF00FF, E),
        (1, 4) => key!(0xAA00FF, D),
        (0, 4) => key!(0x5500FF, C),
        (3, 5) => key!(0x0000FF, B),
        (2, 5) => key!(0x0055FF, A),
        (1, 5) => key!(0x00AAFF, Kc9),
        (0, 5) => key!(0x00FFFF, Kc8),
        (3, 6) => key!(0x00FFAA, Kc7),
        (2, 6) => key!(0x00FF55, Kc6),
        (1, 6) => key!(0x55FF00, Kc5),
        (0, 6) => key!(0xAAFF00, Kc4),
        (3, 7) => key!(0xFFFF00, Kc3),
        (2, 7) => key!(0xFFAA00, Kc2),
        (1, 7) => key!(0xFF5500, Kc1),
        (0, 7) => key!(0xFF0000, Kc0),
    ]),
];
