use std::collections::VecDeque;

use tracing::debug;

use super::{
    action::{Action, Direction},
    coord::{Bounds, Coordinate},
};

/// Type of collision that killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Coordinate,
    /// Body segments, oldest first (tail at the front)
    pub body: VecDeque<Coordinate>,
    pub direction: Direction,
    pub alive: bool,
    bounds: Bounds,
    tile_size: i32,
}

impl Snake {
    /// Create a snake in its canonical start state
    pub fn new(bounds: Bounds, tile_size: i32) -> Self {
        Self {
            head: bounds.center(tile_size),
            body: VecDeque::new(),
            direction: Direction::Left,
            alive: true,
            bounds,
            tile_size,
        }
    }

    /// Create a snake with an explicit layout
    pub fn with_layout(
        head: Coordinate,
        body: impl IntoIterator<Item = Coordinate>,
        direction: Direction,
        bounds: Bounds,
        tile_size: i32,
    ) -> Self {
        Self {
            head,
            body: body.into_iter().collect(),
            direction,
            alive: true,
            bounds,
            tile_size,
        }
    }

    /// Reset to the center of the grid, empty body, heading left
    pub fn respawn(&mut self) {
        self.head = self.bounds.center(self.tile_size);
        self.body.clear();
        self.direction = Direction::Left;
        self.alive = true;
    }

    /// Get the length of the snake, head included
    pub fn length(&self) -> usize {
        self.body.len() + 1
    }

    /// Check why moving to `pos` would kill the snake, if it would
    pub fn collision_at(&self, pos: Coordinate) -> Option<CollisionType> {
        if !self.bounds.contains(pos) {
            return Some(CollisionType::Wall);
        }

        if self.body.contains(&pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Apply one tick of movement
    ///
    /// A move opposite to the current direction is ignored. On a collision the
    /// snake is marked dead and its head and body are left untouched. A dead
    /// snake ignores every action until it respawns.
    pub fn take_action(&mut self, action: Action, ate_food: bool) -> Option<CollisionType> {
        if !self.alive {
            return None;
        }

        if let Action::Move(new_direction) = action {
            if !self.direction.is_opposite(new_direction) {
                self.direction = new_direction;
            }
        }

        let new_head = self.head.offset(self.direction, self.tile_size);

        if let Some(collision) = self.collision_at(new_head) {
            debug!(?collision, x = new_head.x, y = new_head.y, "snake died");
            self.alive = false;
            return Some(collision);
        }

        self.body.push_back(self.head);
        self.head = new_head;

        if !ate_food {
            self.body.pop_front();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bounds() -> Bounds {
        Bounds::new(50, 50)
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Bounds::new(500, 500), 10);
        assert_eq!(snake.head, Coordinate::new(250, 250));
        assert!(snake.body.is_empty());
        assert_eq!(snake.direction, Direction::Left);
        assert!(snake.alive);
        assert_eq!(snake.length(), 1);
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Bounds::new(500, 500), 10);

        snake.take_action(Action::Continue, false);
        assert_eq!(snake.head, Coordinate::new(240, 250));
        assert_eq!(snake.length(), 1);

        snake.take_action(Action::Move(Direction::Up), true);
        assert_eq!(snake.head, Coordinate::new(240, 240));
        assert_eq!(snake.body, VecDeque::from(vec![Coordinate::new(240, 250)]));
        assert_eq!(snake.length(), 2);

        snake.take_action(Action::Move(Direction::Up), false);
        assert_eq!(snake.head, Coordinate::new(240, 230));
        assert_eq!(snake.body, VecDeque::from(vec![Coordinate::new(240, 240)]));
    }

    #[test]
    fn test_body_is_oldest_first() {
        let mut snake = Snake::new(Bounds::new(500, 500), 10);

        snake.take_action(Action::Continue, true);
        snake.take_action(Action::Continue, true);

        assert_eq!(snake.head, Coordinate::new(230, 250));
        assert_eq!(
            snake.body,
            VecDeque::from(vec![Coordinate::new(250, 250), Coordinate::new(240, 250)])
        );
    }

    #[test]
    fn test_prevent_180_degree_turn_with_empty_body() {
        let mut snake = Snake::new(Bounds::new(500, 500), 10);
        snake.direction = Direction::Right;

        snake.take_action(Action::Move(Direction::Left), false);

        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.head, Coordinate::new(260, 250));
    }

    #[test]
    fn test_prevent_180_degree_turn_with_body() {
        let mut snake = Snake::with_layout(
            Coordinate::new(250, 250),
            vec![Coordinate::new(230, 250), Coordinate::new(240, 250)],
            Direction::Right,
            Bounds::new(500, 500),
            10,
        );

        let collision = snake.take_action(Action::Move(Direction::Left), false);

        assert_eq!(collision, None);
        assert_eq!(snake.direction, Direction::Right);
        assert!(snake.alive);
    }

    #[test]
    fn test_continue_keeps_direction() {
        let mut snake = Snake::new(Bounds::new(500, 500), 10);
        snake.direction = Direction::Down;

        snake.take_action(Action::from_index(42), false);

        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head, Coordinate::new(250, 260));
    }

    #[test]
    fn test_wall_collision_leaves_head_unchanged() {
        let mut snake = Snake::with_layout(
            Coordinate::new(0, 0),
            Vec::new(),
            Direction::Left,
            small_bounds(),
            10,
        );

        let collision = snake.take_action(Action::Move(Direction::Left), false);

        assert_eq!(collision, Some(CollisionType::Wall));
        assert!(!snake.alive);
        assert_eq!(snake.head, Coordinate::new(0, 0));
    }

    #[test]
    fn test_wall_collision_on_far_edge() {
        let mut snake = Snake::with_layout(
            Coordinate::new(40, 20),
            Vec::new(),
            Direction::Right,
            small_bounds(),
            10,
        );

        let collision = snake.take_action(Action::Continue, false);

        assert_eq!(collision, Some(CollisionType::Wall));
        assert!(!snake.alive);
    }

    #[test]
    fn test_self_collision() {
        let mut snake = Snake::with_layout(
            Coordinate::new(20, 10),
            vec![Coordinate::new(10, 10)],
            Direction::Left,
            small_bounds(),
            10,
        );
        let body_before = snake.body.clone();

        let collision = snake.take_action(Action::Move(Direction::Left), false);

        assert_eq!(collision, Some(CollisionType::SelfCollision));
        assert!(!snake.alive);
        assert_eq!(snake.head, Coordinate::new(20, 10));
        assert_eq!(snake.body, body_before);
    }

    #[test]
    fn test_dead_snake_ignores_actions() {
        let mut snake = Snake::with_layout(
            Coordinate::new(0, 0),
            vec![Coordinate::new(10, 0)],
            Direction::Left,
            small_bounds(),
            10,
        );
        snake.take_action(Action::Continue, false);
        assert!(!snake.alive);

        let collision = snake.take_action(Action::Move(Direction::Down), true);

        assert_eq!(collision, None);
        assert!(!snake.alive);
        assert_eq!(snake.head, Coordinate::new(0, 0));
        assert_eq!(snake.body, VecDeque::from(vec![Coordinate::new(10, 0)]));
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn test_start_is_tile_aligned_on_odd_grid() {
        let snake = Snake::new(Bounds::new(50, 70), 10);
        assert_eq!(snake.head, Coordinate::new(20, 30));
    }

    #[test]
    fn test_respawn_restores_canonical_state() {
        let mut snake = Snake::with_layout(
            Coordinate::new(0, 0),
            vec![Coordinate::new(10, 0)],
            Direction::Up,
            Bounds::new(500, 500),
            10,
        );
        snake.alive = false;

        snake.respawn();

        assert_eq!(snake, Snake::new(Bounds::new(500, 500), 10));
    }
}
