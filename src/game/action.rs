use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Returns the direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Action that can be taken in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Request a move in a specific direction
    Move(Direction),
    /// Keep the current direction
    Continue,
}

impl Action {
    /// Number of discrete actions an agent can choose from
    pub const COUNT: usize = 4;

    /// Convert a discrete action index to an action
    ///
    /// - 0 → Left
    /// - 1 → Up
    /// - 2 → Right
    /// - 3 → Down
    /// - other → Continue
    pub fn from_index(idx: usize) -> Action {
        match idx {
            0 => Action::Move(Direction::Left),
            1 => Action::Move(Direction::Up),
            2 => Action::Move(Direction::Right),
            3 => Action::Move(Direction::Down),
            _ => Action::Continue,
        }
    }

    /// Discrete index of this action, `None` for `Continue`
    pub fn index(&self) -> Option<usize> {
        match self {
            Action::Move(Direction::Left) => Some(0),
            Action::Move(Direction::Up) => Some(1),
            Action::Move(Direction::Right) => Some(2),
            Action::Move(Direction::Down) => Some(3),
            Action::Continue => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<usize> for Action {
    fn from(idx: usize) -> Self {
        Action::from_index(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Left.is_opposite(Direction::Left));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(Action::from_index(0), Action::Move(Direction::Left));
        assert_eq!(Action::from_index(1), Action::Move(Direction::Up));
        assert_eq!(Action::from_index(2), Action::Move(Direction::Right));
        assert_eq!(Action::from_index(3), Action::Move(Direction::Down));
        assert_eq!(Action::from_index(4), Action::Continue);
        assert_eq!(Action::from_index(999), Action::Continue);
    }

    #[test]
    fn test_action_index_inverts_mapping() {
        for idx in 0..Action::COUNT {
            assert_eq!(Action::from_index(idx).index(), Some(idx));
        }
        assert_eq!(Action::Continue.index(), None);
    }
}
