//! Property tests for the collapse and session invariants.
//!
//! - Every cell is empty or a power of two after any command sequence
//! - Score never decreases, and grows by exactly the merged values
//! - An unmoved command leaves the grid untouched and spawns nothing
//! - Collapse keeps line length and the sum of tile values
//! - Right equals reverse, Left collapse, reverse

use proptest::prelude::*;
use tile_merge::{collapse_line, collapse_line_reversed, is_tile_value, Direction, Grid, Session};

fn tile() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![0u32, 0, 2, 4, 8, 16, 32])
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn collapse_preserves_length_and_sum(line in prop::collection::vec(tile(), 0..9)) {
        let c = collapse_line(&line);
        prop_assert_eq!(c.line.len(), line.len());

        let before: u64 = line.iter().map(|&v| u64::from(v)).sum();
        let after: u64 = c.line.iter().map(|&v| u64::from(v)).sum();
        prop_assert_eq!(before, after);

        // Non-empty tiles are packed at the front
        let filled = c.line.iter().take_while(|&&v| v != 0).count();
        prop_assert!(c.line[filled..].iter().all(|&v| v == 0));
    }

    #[test]
    fn collapse_without_pairs_only_compacts(line in prop::collection::vec(tile(), 0..9)) {
        let packed: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
        prop_assume!(packed.windows(2).all(|w| w[0] != w[1]));

        let c = collapse_line(&line);
        prop_assert_eq!(c.gained, 0);
        prop_assert_eq!(&c.line[..packed.len()], packed.as_slice());
    }

    #[test]
    fn right_mirrors_left(line in prop::collection::vec(tile(), 4..5)) {
        let mut reversed = line.clone();
        reversed.reverse();
        let mut expected = collapse_line(&reversed).line.to_vec();
        expected.reverse();

        prop_assert_eq!(collapse_line_reversed(&line).line.to_vec(), expected.clone());

        // And the session agrees for a whole row
        let mut rows = vec![[0u32; 4]; 4];
        rows[1].copy_from_slice(&line);
        let mut session = Session::with_seed(0);
        session.load_grid(Grid::from_rows(rows.as_slice()));
        let outcome = session.apply_move(Direction::Right);

        let mut row = session.grid().row(1).to_vec();
        if let Some((r, c)) = outcome.spawned {
            if r == 1 {
                row[c] = 0;
            }
        }
        prop_assert_eq!(row, expected);
    }

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..200),
    ) {
        let mut session = Session::with_seed(seed);

        for dir in moves {
            let grid_before = session.grid().clone();
            let score_before = session.score();

            let outcome = session.apply_move(dir);

            prop_assert!(session.grid().cells().all(|(_, _, v)| is_tile_value(v)));
            prop_assert!(session.score() >= score_before);
            prop_assert_eq!(session.score(), score_before + outcome.gained);

            if outcome.moved {
                prop_assert_ne!(session.grid(), &grid_before);
                if let Some((r, c)) = outcome.spawned {
                    prop_assert_eq!(session.grid().get(r, c), 2);
                }
            } else {
                prop_assert_eq!(session.grid(), &grid_before);
                prop_assert!(outcome.spawned.is_none());
                prop_assert_eq!(outcome.gained, 0);
            }

            prop_assert_eq!(outcome.game_over, session.is_game_over());
            prop_assert_eq!(session.is_game_over(), !session.grid().can_move());
        }
    }
}
