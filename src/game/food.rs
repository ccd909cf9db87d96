use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{CELL_COUNT, GRID_SIZE};
use super::state::Position;

/// Random draws tried before falling back to enumerating the free cells
const SAMPLE_ATTEMPTS: usize = 64;

/// The single active food cell. Replaced, never moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn at(position: Position) -> Self {
        assert!(position.is_on_board(), "food placed off the board at {position:?}");
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Pick a uniformly random cell not in `occupied`.
    ///
    /// Returns `None` when every cell is occupied.
    pub fn respawn<R: Rng + ?Sized>(occupied: &[Position], rng: &mut R) -> Option<Food> {
        if occupied.len() < CELL_COUNT {
            for _ in 0..SAMPLE_ATTEMPTS {
                let pos = Position::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
                if !occupied.contains(&pos) {
                    return Some(Food { position: pos });
                }
            }
        }

        // Crowded board: choose among what is left
        let free: Vec<Position> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
            .filter(|pos| !occupied.contains(pos))
            .collect();

        free.choose(rng).map(|&position| Food { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_cells() -> Vec<Position> {
        (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_respawn_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied = vec![Position::new(7, 7), Position::new(6, 7), Position::new(5, 7)];

        for _ in 0..500 {
            let food = Food::respawn(&occupied, &mut rng).unwrap();
            assert!(food.position().is_on_board());
            assert!(!occupied.contains(&food.position()));
        }
    }

    #[test]
    fn test_respawn_finds_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let last = Position::new(3, 11);
        let occupied: Vec<Position> = all_cells().into_iter().filter(|&p| p != last).collect();

        let food = Food::respawn(&occupied, &mut rng).unwrap();
        assert_eq!(food.position(), last);
    }

    #[test]
    fn test_respawn_on_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Food::respawn(&all_cells(), &mut rng), None);
    }

    #[test]
    #[should_panic]
    fn test_food_off_board_panics() {
        Food::at(Position::new(-1, 0));
    }
}
