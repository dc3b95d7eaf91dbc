//! The slide-and-merge transformation applied to a single line.
//!
//! Every direction reduces to collapsing lines toward index 0:
//!
//! 1. Compact: drop empty cells, keeping order.
//! 2. Merge: scan left to right; an adjacent equal pair becomes one tile of
//!    double value followed by an empty cell. A tile takes part in at most
//!    one merge, so `[2, 2, 2]` gives `[4, 2]`, not `[8]`.
//! 3. Compact again.
//! 4. Pad with empty cells back to the original length.
//!
//! ```
//! use tile_merge::rules::collapse_line;
//!
//! let collapse = collapse_line(&[2, 2, 2, 0]);
//! assert_eq!(collapse.line.as_slice(), &[4, 2, 0, 0]);
//! assert_eq!(collapse.gained, 4);
//! ```

use crate::core::Line;

/// Result of collapsing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collapse {
    /// The collapsed line, same length as the input.
    pub line: Line,
    /// Sum of the values created by merges.
    pub gained: u64,
}

impl Collapse {
    /// True if the collapse changed any cell of `input`.
    #[must_use]
    pub fn changed(&self, input: &[u32]) -> bool {
        self.line.as_slice() != input
    }
}

/// Collapse a line toward index 0.
#[must_use]
pub fn collapse_line(line: &[u32]) -> Collapse {
    let mut packed: Line = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;

    let mut i = 0;
    while i + 1 < packed.len() {
        // The largest u32 tile has no double and never merges
        let doubled = (packed[i] == packed[i + 1])
            .then(|| packed[i].checked_mul(2))
            .flatten();
        if let Some(doubled) = doubled {
            packed[i] = doubled;
            packed[i + 1] = 0;
            gained += u64::from(doubled);
            // The zeroed cell cannot start another pair
            i += 2;
        } else {
            i += 1;
        }
    }

    packed.retain(|v| *v != 0);
    packed.resize(line.len(), 0);

    Collapse {
        line: packed,
        gained,
    }
}

/// Collapse a line toward its last index.
///
/// Equivalent to reversing, collapsing, and reversing back.
#[must_use]
pub fn collapse_line_reversed(line: &[u32]) -> Collapse {
    let reversed: Line = line.iter().rev().copied().collect();
    let mut collapse = collapse_line(&reversed);
    collapse.line.reverse();
    collapse
}
