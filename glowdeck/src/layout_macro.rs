/// Create a single-key binding, sent as a pulse. `key!(0x00FF00, F5)`.
#[macro_export]
macro_rules! key {
    ($color:literal, $code:ident) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::Key(&[$crate::keycode::KeyCode::$code]),
        )
    };
}

/// Create a chorded binding, held until the button's release edge.
/// `chord!(0xFF0000, [LShift, F5])`.
#[macro_export]
macro_rules! chord {
    ($color:literal, [$($code:ident),+ $(,)?]) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::Key(&[$($crate::keycode::KeyCode::$code),+]),
        )
    };
}

/// Create a consumer-control binding. `media!(0x00FFFF, PlayPause)`.
#[macro_export]
macro_rules! media {
    ($color:literal, $code:ident) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::Media($crate::keycode::MediaCode::$code),
        )
    };
}

/// Create the mode-cycling binding. `mode!(0xFFFFFF)`.
#[macro_export]
macro_rules! mode {
    ($color:literal) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::ModeNext,
        )
    };
}

/// Create a gamepad binding from 1-based button ids. `gpad!(0xFF00FF, [1, 3])`.
#[macro_export]
macro_rules! gpad {
    ($color:literal, [$($id:expr),+ $(,)?]) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::Gamepad(&[$($id),+]),
        )
    };
}

/// Create a lit but inert binding. `inert!(0x333333)`.
#[macro_export]
macro_rules! inert {
    ($color:literal) => {
        $crate::keymap::Binding::new(
            $crate::light::rgb($color),
            $crate::action::PadAction::None,
        )
    };
}

/// Build a keymap table from `(col, row) => binding` entries.
#[macro_export]
macro_rules! keys {
    ($( ($col:expr, $row:expr) => $binding:expr ),* $(,)?) => {
        &[
            $( ($crate::event::KeyCoord::new($col, $row), $binding) ),*
        ]
    };
}
