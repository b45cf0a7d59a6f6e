//! The matrix-driver boundary and the rotation adapter on top of it.

use crate::event::{KeyCoord, PressedKeys};

/// Matrix input driver: the current set of pressed coordinates, polled once
/// per tick.
///
/// No debouncing is required of the driver; edge detection collapses
/// repeated identical samples, which is all the core relies on.
pub trait KeyScan {
    fn scan(&mut self) -> PressedKeys;
}

/// Mounting orientation of the grid relative to the matrix wiring.
///
/// Rotations are clockwise. A 90/270 rotation swaps the logical column and
/// row counts, so a landscape 8x4 matrix is addressed as a portrait 4x8
/// grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a native matrix coordinate into the logical grid. `cols`/`rows`
    /// are the native dimensions.
    pub const fn apply(self, native: KeyCoord, cols: u8, rows: u8) -> KeyCoord {
        let (x, y) = (native.col, native.row);
        match self {
            Rotation::Deg0 => KeyCoord::new(x, y),
            Rotation::Deg90 => KeyCoord::new(rows - 1 - y, x),
            Rotation::Deg180 => KeyCoord::new(cols - 1 - x, rows - 1 - y),
            Rotation::Deg270 => KeyCoord::new(y, cols - 1 - x),
        }
    }

    /// Logical `(cols, rows)` for a native `cols` x `rows` matrix.
    pub const fn logical_dims(self, cols: u8, rows: u8) -> (u8, u8) {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => (cols, rows),
            Rotation::Deg90 | Rotation::Deg270 => (rows, cols),
        }
    }
}

/// Wraps the hardware scanner and rewrites its coordinates into the logical
/// orientation, so keymaps are written the way the device is used.
pub struct RotatedScan<S: KeyScan> {
    inner: S,
    rotation: Rotation,
    cols: u8,
    rows: u8,
}

impl<S: KeyScan> RotatedScan<S> {
    /// `cols`/`rows` are the native matrix dimensions.
    pub fn new(inner: S, rotation: Rotation, cols: u8, rows: u8) -> Self {
        Self {
            inner,
            rotation,
            cols,
            rows,
        }
    }
}

impl<S: KeyScan> KeyScan for RotatedScan<S> {
    fn scan(&mut self) -> PressedKeys {
        let native = self.inner.scan();
        let mut logical = PressedKeys::new();
        for key in native.iter() {
            logical
                .insert(self.rotation.apply(*key, self.cols, self.rows))
                .ok();
        }
        logical
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Native 8x4 landscape matrix, the stock deck hardware.
    const COLS: u8 = 8;
    const ROWS: u8 = 4;

    #[test]
    fn deg0_is_identity() {
        let key = KeyCoord::new(5, 2);
        assert_eq!(Rotation::Deg0.apply(key, COLS, ROWS), key);
        assert_eq!(Rotation::Deg0.logical_dims(COLS, ROWS), (8, 4));
    }

    #[test]
    fn deg90_maps_corners_clockwise() {
        assert_eq!(Rotation::Deg90.logical_dims(COLS, ROWS), (4, 8));
        // Native top-left lands top-right of the portrait grid.
        assert_eq!(
            Rotation::Deg90.apply(KeyCoord::new(0, 0), COLS, ROWS),
            KeyCoord::new(3, 0)
        );
        assert_eq!(
            Rotation::Deg90.apply(KeyCoord::new(7, 0), COLS, ROWS),
            KeyCoord::new(3, 7)
        );
        assert_eq!(
            Rotation::Deg90.apply(KeyCoord::new(0, 3), COLS, ROWS),
            KeyCoord::new(0, 0)
        );
    }

    #[test]
    fn deg180_maps_to_opposite_corner() {
        assert_eq!(
            Rotation::Deg180.apply(KeyCoord::new(0, 0), COLS, ROWS),
            KeyCoord::new(7, 3)
        );
        assert_eq!(
            Rotation::Deg180.apply(KeyCoord::new(7, 3), COLS, ROWS),
            KeyCoord::new(0, 0)
        );
    }

    #[test]
    fn deg270_maps_corners_counterclockwise() {
        assert_eq!(Rotation::Deg270.logical_dims(COLS, ROWS), (4, 8));
        assert_eq!(
            Rotation::Deg270.apply(KeyCoord::new(0, 0), COLS, ROWS),
            KeyCoord::new(0, 7)
        );
        assert_eq!(
            Rotation::Deg270.apply(KeyCoord::new(7, 3), COLS, ROWS),
            KeyCoord::new(3, 0)
        );
    }

    struct FixedScan(PressedKeys);
    impl KeyScan for FixedScan {
        fn scan(&mut self) -> PressedKeys {
            self.0.clone()
        }
    }

    #[test]
    fn rotated_scan_rewrites_every_key() {
        let mut native = PressedKeys::new();
        native.insert(KeyCoord::new(0, 0)).unwrap();
        native.insert(KeyCoord::new(7, 3)).unwrap();
        let mut scan = RotatedScan::new(FixedScan(native), Rotation::Deg90, COLS, ROWS);
        let logical = scan.scan();
        assert_eq!(logical.len(), 2);
        assert!(logical.contains(&KeyCoord::new(3, 0)));
        assert!(logical.contains(&KeyCoord::new(0, 7)));
    }
}
