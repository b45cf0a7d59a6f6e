//! Key coordinates and per-tick edge detection.

use heapless::{FnvIndexSet, Vec};

/// Upper bound on simultaneously tracked keys; covers the largest supported
/// grid. `FnvIndexSet` requires a power of two.
pub const KEY_CAPACITY: usize = 64;

/// Set of coordinates sampled from the matrix in one tick.
pub type PressedKeys = FnvIndexSet<KeyCoord, KEY_CAPACITY>;

/// Logical position of one button on the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCoord {
    pub col: u8,
    pub row: u8,
}

impl KeyCoord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Press and release edges between two consecutive matrix samples.
///
/// The two sets are disjoint by construction. No ordering is guaranteed
/// within a set; each edge is handled independently.
#[derive(Debug, Default)]
pub struct Edges {
    pub pressed: Vec<KeyCoord, KEY_CAPACITY>,
    pub released: Vec<KeyCoord, KEY_CAPACITY>,
}

/// Diff two samples: `pressed = current − previous`, `released = previous −
/// current`. Pure function; repeated identical reads collapse to no edges.
pub fn detect_edges(previous: &PressedKeys, current: &PressedKeys) -> Edges {
    let mut edges = Edges::default();
    for key in current.iter() {
        if !previous.contains(key) {
            edges.pressed.push(*key).ok();
        }
    }
    for key in previous.iter() {
        if !current.contains(key) {
            edges.released.push(*key).ok();
        }
    }
    edges
}

#[cfg(test)]
mod test {
    use super::*;

    fn keys(coords: &[(u8, u8)]) -> PressedKeys {
        let mut set = PressedKeys::new();
        for &(col, row) in coords {
            set.insert(KeyCoord::new(col, row)).unwrap();
        }
        set
    }

    #[test]
    fn edges_are_disjoint_set_differences() {
        let previous = keys(&[(0, 0), (1, 2)]);
        let current = keys(&[(1, 2), (3, 3)]);
        let edges = detect_edges(&previous, &current);
        assert_eq!(edges.pressed.as_slice(), &[KeyCoord::new(3, 3)]);
        assert_eq!(edges.released.as_slice(), &[KeyCoord::new(0, 0)]);
    }

    #[test]
    fn identical_samples_produce_no_edges() {
        let sample = keys(&[(2, 5), (0, 7)]);
        let edges = detect_edges(&sample, &sample.clone());
        assert!(edges.pressed.is_empty());
        assert!(edges.released.is_empty());
    }
}
