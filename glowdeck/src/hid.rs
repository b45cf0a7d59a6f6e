//! HID report types and the transport-facing writer boundary.
//!
//! The deck emits three report kinds: boot keyboard, consumer control and
//! gamepad. Keyboard and consumer reports come from `usbd-hid`; the gamepad
//! report carries 16 buttons and is described here. Transports (USB, BLE,
//! test doubles) implement [`HidWriter`].

use serde::Serialize;
use usbd_hid::descriptor::generator_prelude::*;
use usbd_hid::descriptor::{AsInputReport, KeyboardReport, MediaKeyboardReport};

/// 16-button gamepad report.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = 0x05) = {
        (usage_page = BUTTON, usage_min = BUTTON_1, usage_max = 0x10) = {
            #[packed_bits 16] #[item_settings data,variable,absolute] buttons=input;
        };
    }
)]
#[derive(Default, Serialize)]
pub struct GamepadReport {
    pub buttons: u16,
}

/// One HID report, tagged by kind.
#[derive(Serialize)]
pub enum Report {
    Keyboard(KeyboardReport),
    Media(MediaKeyboardReport),
    Gamepad(GamepadReport),
}

impl AsInputReport for Report {}

/// Errors a transport may surface when relaying a report.
///
/// A failed write is logged and the tick continues; a dropped key event is
/// preferable to a stalled input device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    Disconnected,
    Disabled,
    BufferOverflow,
    ReportSerializeError,
}

/// Fire-and-forget report sink. Implementations must return in bounded,
/// small time; idle-timing accuracy depends on tick cadence.
pub trait HidWriter {
    fn write_report(&mut self, report: Report) -> Result<(), HidError>;
}
