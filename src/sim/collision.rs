//! Collision detection between the ball, paddle, walls and bricks
//!
//! Every test is a plain AABB overlap on boxes rebuilt from the current
//! positions. Bricks are scanned linearly; there is no broad phase since the
//! grid never holds more than `ROWS * COLUMNS` bricks.

use super::state::{GameState, WallSide};

/// Everything the ball and paddle are touching this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// Ball overlaps the paddle
    pub paddle: bool,
    /// Walls the ball overlaps, in `WallSide::ALL` order
    pub walls: Vec<WallSide>,
    /// Overlapping brick ids, in grid iteration order
    pub bricks: Vec<u32>,
    /// Paddle overlaps the left wall
    pub paddle_left: bool,
    /// Paddle overlaps the right wall
    pub paddle_right: bool,
}

impl Contacts {
    pub fn hit_wall(&self, side: WallSide) -> bool {
        self.walls.contains(&side)
    }
}

/// Run every pairwise test for the current state
pub fn detect(state: &GameState) -> Contacts {
    let ball = state.ball.bounds();
    let paddle = state.paddle.bounds();

    let walls = WallSide::ALL
        .into_iter()
        .filter(|&side| ball.intersects(&state.walls.get(side).bounds()))
        .collect();

    let bricks = state
        .bricks
        .iter()
        .filter(|brick| ball.intersects(&brick.bounds()))
        .map(|brick| brick.id)
        .collect();

    Contacts {
        paddle: ball.intersects(&paddle),
        walls,
        bricks,
        paddle_left: paddle.intersects(&state.walls.left.bounds()),
        paddle_right: paddle.intersects(&state.walls.right.bounds()),
    }
}

/// Whether the paddle may move with velocity `vx` given its wall contacts
pub fn paddle_can_move(contacts: &Contacts, vx: f32) -> bool {
    !((vx < 0.0 && contacts.paddle_left) || (vx > 0.0 && contacts.paddle_right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec3;

    #[test]
    fn test_no_contacts_at_serve() {
        let state = GameState::new();
        let contacts = detect(&state);
        assert_eq!(contacts, Contacts::default());
    }

    #[test]
    fn test_ball_on_paddle() {
        let mut state = GameState::new();
        state.ball.position = PADDLE_START + Vec3::new(0.5, PADDLE_EXTENTS.y, 0.0);
        let contacts = detect(&state);
        assert!(contacts.paddle);
        assert!(contacts.walls.is_empty());
    }

    #[test]
    fn test_ball_in_corner_touches_two_walls() {
        let mut state = GameState::new();
        state.ball.position = Vec3::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT, 0.0);
        let contacts = detect(&state);
        assert_eq!(contacts.walls, vec![WallSide::Right, WallSide::Up]);
        assert!(contacts.hit_wall(WallSide::Up));
        assert!(!contacts.hit_wall(WallSide::Down));
    }

    #[test]
    fn test_ball_between_bricks_reports_both_in_order() {
        let mut state = GameState::new();
        let a = crate::brick_center(0, 0);
        let b = crate::brick_center(1, 0);
        // Row gap is narrower than the ball, so it reaches both rows
        assert!(BRICK_SPACING_Y - 2.0 * BRICK_EXTENTS.y < 2.0 * BALL_EXTENTS.y);
        state.ball.position = (a + b) * 0.5;
        let ids: Vec<u32> = state
            .bricks
            .iter()
            .enumerate()
            .filter(|(i, _)| *i == 0 || *i == COLUMNS)
            .map(|(_, b)| b.id)
            .collect();
        let contacts = detect(&state);
        assert_eq!(contacts.bricks, ids);
    }

    #[test]
    fn test_paddle_against_left_wall() {
        let mut state = GameState::new();
        state.paddle.position.x = -ARENA_HALF_WIDTH + PADDLE_EXTENTS.x - 0.1;
        let contacts = detect(&state);
        assert!(contacts.paddle_left);
        assert!(!contacts.paddle_right);
        assert!(!paddle_can_move(&contacts, -PADDLE_SPEED));
        assert!(paddle_can_move(&contacts, PADDLE_SPEED));
        assert!(paddle_can_move(&contacts, 0.0));
    }
}
