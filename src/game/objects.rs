use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::config::GameConfig;
use super::food::Food;
use super::score::Score;
use super::state::{CollisionType, Position, RoundEnd, Snake};

/// What one simulation tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Points credited this tick
    pub points: u32,
    /// Set when the tick ended the round
    pub end: Option<RoundEnd>,
}

impl TickResult {
    fn moved(points: u32) -> Self {
        Self {
            ate_food: points > 0,
            points,
            end: None,
        }
    }

    fn collided(collision: CollisionType) -> Self {
        Self {
            ate_food: false,
            points: 0,
            end: Some(RoundEnd::Collision(collision)),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.end.is_some()
    }

    pub fn collision(&self) -> Option<CollisionType> {
        match self.end {
            Some(RoundEnd::Collision(collision)) => Some(collision),
            _ => None,
        }
    }
}

/// Owns the food, the snake and the score for one round and resolves
/// collisions between them
pub struct ObjectManager {
    player: Snake,
    food: Option<Food>,
    score: Score,
    food_reward: u32,
    rng: StdRng,
}

impl ObjectManager {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut objects = Self {
            player: Snake::new(config.start, config.initial_direction, 1),
            food: None,
            score: Score::new(),
            food_reward: config.food_reward,
            rng,
        };
        objects.reset(config);
        objects
    }

    /// Discard the round's entities and create fresh ones.
    ///
    /// The random source carries over so consecutive rounds differ.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player = Snake::new(
            config.start,
            config.initial_direction,
            config.initial_snake_length,
        );
        self.food = Food::respawn(self.player.body(), &mut self.rng);
        self.score = Score::new();
        self.food_reward = config.food_reward;

        debug!(
            head = ?self.player.head(),
            food = ?self.food.map(|f| f.position()),
            "round entities created"
        );
    }

    /// Advance the simulation by one tick.
    ///
    /// Checks run in a fixed order: walls, then food, then the body. A
    /// collision leaves every entity untouched.
    pub fn tick(&mut self) -> TickResult {
        let next_head = self.player.next_head();

        if !next_head.is_on_board() {
            return TickResult::collided(CollisionType::Wall);
        }

        let grow = self.food.is_some_and(|food| food.position() == next_head);

        if self.player.blocks_next_step(next_head, grow) {
            return TickResult::collided(CollisionType::SelfCollision);
        }

        self.player.step(grow);

        if !grow {
            return TickResult::moved(0);
        }

        self.score.add(self.food_reward);
        self.food = Food::respawn(self.player.body(), &mut self.rng);

        match self.food {
            Some(food) => {
                debug!(
                    length = self.player.len(),
                    score = self.score.points(),
                    food = ?food.position(),
                    "food eaten"
                );
                TickResult::moved(self.food_reward)
            }
            None => {
                info!(length = self.player.len(), "no free cell left for food");
                TickResult {
                    end: Some(RoundEnd::BoardCleared),
                    ..TickResult::moved(self.food_reward)
                }
            }
        }
    }

    pub fn player(&self) -> &Snake {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Snake {
        &mut self.player
    }

    pub fn food(&self) -> Option<Position> {
        self.food.map(|food| food.position())
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    /// Swap in a hand-built snake. Food that would overlap it is moved.
    pub fn replace_snake(&mut self, snake: Snake) {
        self.player = snake;
        if self.food.is_some_and(|food| self.player.contains(food.position())) {
            self.food = Food::respawn(self.player.body(), &mut self.rng);
        }
    }

    /// Put the food on a specific free cell
    pub fn place_food(&mut self, position: Position) {
        assert!(
            !self.player.contains(position),
            "food placed on the snake at {position:?}"
        );
        self.food = Some(Food::at(position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GRID_SIZE};
    use std::collections::HashSet;

    fn manager() -> ObjectManager {
        ObjectManager::new(&GameConfig::seeded(3))
    }

    fn far_food(objects: &mut ObjectManager) {
        objects.place_food(Position::new(0, 14));
    }

    #[test]
    fn test_reset() {
        let objects = manager();

        assert_eq!(objects.player().len(), 3);
        assert_eq!(objects.player().head(), Position::new(7, 7));
        assert_eq!(objects.score().points(), 0);
        let food = objects.food().unwrap();
        assert!(!objects.player().contains(food));
    }

    #[test]
    fn test_basic_movement() {
        let mut objects = manager();
        far_food(&mut objects);

        let result = objects.tick();

        assert!(!result.is_terminal());
        assert!(!result.ate_food);
        assert_eq!(objects.player().head(), Position::new(8, 7));
        assert_eq!(objects.player().len(), 3);
    }

    #[test]
    fn test_food_consumption() {
        let mut objects = manager();
        objects.place_food(Position::new(8, 7));

        let result = objects.tick();

        assert!(result.ate_food);
        assert_eq!(result.points, 1);
        assert_eq!(objects.score().points(), 1);
        assert_eq!(objects.player().len(), 4);
        assert_eq!(objects.player().head(), Position::new(8, 7));
        let food = objects.food().unwrap();
        assert!(!objects.player().contains(food));
    }

    #[test]
    fn test_wall_collision_leaves_state_untouched() {
        let mut objects = manager();
        objects.replace_snake(Snake::new(Position::new(0, 5), Direction::Left, 1));
        far_food(&mut objects);
        let before = objects.player().clone();

        let result = objects.tick();

        assert_eq!(result.collision(), Some(CollisionType::Wall));
        assert_eq!(objects.player(), &before);
        assert_eq!(objects.score().points(), 0);
    }

    #[test]
    fn test_every_wall_is_solid() {
        let cases = [
            (Position::new(0, 7), Direction::Left),
            (Position::new(GRID_SIZE - 1, 7), Direction::Right),
            (Position::new(7, 0), Direction::Up),
            (Position::new(7, GRID_SIZE - 1), Direction::Down),
        ];

        for (head, direction) in cases {
            let mut objects = manager();
            objects.replace_snake(Snake::new(head, direction, 1));
            let result = objects.tick();
            assert_eq!(result.collision(), Some(CollisionType::Wall), "{direction:?}");
        }
    }

    #[test]
    fn test_self_collision() {
        let mut objects = manager();
        // Snake at (5, 5) going Right with length 5
        objects.replace_snake(Snake::new(Position::new(5, 5), Direction::Right, 5));
        far_food(&mut objects);

        // Right: (6,5) .. (2,5)
        objects.tick();
        // Down: (6,6), (6,5), (5,5), (4,5), (3,5)
        objects.player_mut().set_pending_direction(Direction::Down);
        objects.tick();
        // Left: (5,6), (6,6), (6,5), (5,5), (4,5)
        objects.player_mut().set_pending_direction(Direction::Left);
        objects.tick();
        // Up: (5,5) is still body
        objects.player_mut().set_pending_direction(Direction::Up);
        let result = objects.tick();

        assert_eq!(result.collision(), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_head_may_enter_vacated_tail() {
        let mut objects = manager();
        // A 2x2 loop: head (5,5) moving Down into the tail cell (5,6)
        objects.replace_snake(Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ],
            Direction::Left,
        ));
        far_food(&mut objects);
        objects.player_mut().set_pending_direction(Direction::Down);

        let result = objects.tick();

        assert!(!result.is_terminal());
        assert_eq!(objects.player().head(), Position::new(5, 6));
        assert_eq!(objects.player().len(), 4);
    }

    #[test]
    fn test_growing_snake_keeps_its_tail() {
        let mut objects = manager();
        let segments = vec![
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ];
        objects.replace_snake(Snake::from_segments(segments, Direction::Left));
        objects.place_food(Position::new(4, 5));

        // Eat first; the tail stays put this tick
        assert!(objects.tick().ate_food);
        assert_eq!(objects.player().tail(), Position::new(5, 6));
    }

    #[test]
    fn test_body_stays_distinct_and_food_off_body() {
        let mut objects = manager();
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for i in 0..400 {
            let player = objects.player();
            // Steer towards the food, one axis at a time
            let head = player.head();
            let food = objects.food().unwrap();
            let want = if food.x > head.x {
                Direction::Right
            } else if food.x < head.x {
                Direction::Left
            } else if food.y > head.y {
                Direction::Down
            } else {
                Direction::Up
            };
            let direction = if i % 17 == 0 { turns[i % 4] } else { want };
            objects.player_mut().set_pending_direction(direction);

            let result = objects.tick();
            if result.is_terminal() {
                break;
            }

            let body = objects.player().body();
            let distinct: HashSet<_> = body.iter().collect();
            assert_eq!(distinct.len(), body.len());
            if let Some(food) = objects.food() {
                assert!(!objects.player().contains(food));
            }
        }
    }

    #[test]
    fn test_filling_the_board_clears_it() {
        let mut objects = manager();

        // Serpentine covering every cell but (0, 0), head at (1, 0) moving Left
        let mut segments: Vec<Position> = (1..GRID_SIZE).map(|x| Position::new(x, 0)).collect();
        for y in 1..GRID_SIZE {
            if y % 2 == 1 {
                segments.extend((0..GRID_SIZE).rev().map(|x| Position::new(x, y)));
            } else {
                segments.extend((0..GRID_SIZE).map(|x| Position::new(x, y)));
            }
        }
        let empty = Position::new(0, 0);

        objects.replace_snake(Snake::from_segments(segments, Direction::Left));
        objects.place_food(empty);

        let result = objects.tick();

        assert!(result.ate_food);
        assert_eq!(result.end, Some(RoundEnd::BoardCleared));
        assert_eq!(objects.food(), None);
        assert_eq!(objects.player().len(), (GRID_SIZE * GRID_SIZE) as usize);
    }
}
