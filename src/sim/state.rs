//! Game state and core simulation types
//!
//! One `GameState` owns everything the periodic tasks touch. It is passed by
//! reference to each task; nothing here is global.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Side of the arena. The human plays left, the computer plays right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const HUMAN: Side = Side::Left;
    pub const COMPUTER: Side = Side::Right;

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side of the arena containing column `x`
    pub fn of_column(x: i32) -> Side {
        if x < DISPLAY_CENTER_X {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Diagonal travel direction of the ball.
///
/// Packs into two bits: bit 0 is the vertical sign (set = down), bit 1 the
/// horizontal sign (set = right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    UpLeft = 0,
    DownLeft = 1,
    UpRight = 2,
    DownRight = 3,
}

impl Direction {
    const VERTICAL: u8 = 0b01;
    const HORIZONTAL: u8 = 0b10;

    /// Decode a two-bit direction; higher bits are ignored
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Direction::UpLeft,
            1 => Direction::DownLeft,
            2 => Direction::UpRight,
            _ => Direction::DownRight,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    /// One-pixel step on each axis
    pub fn step(self) -> IVec2 {
        let dx = if self.bits() & Self::HORIZONTAL != 0 { 1 } else { -1 };
        let dy = if self.bits() & Self::VERTICAL != 0 { 1 } else { -1 };
        IVec2::new(dx, dy)
    }

    pub fn flip_vertical(self) -> Self {
        Self::from_bits(self.bits() ^ Self::VERTICAL)
    }

    pub fn flip_horizontal(self) -> Self {
        Self::from_bits(self.bits() ^ Self::HORIZONTAL)
    }

    pub fn is_leftward(self) -> bool {
        self.bits() & Self::HORIZONTAL == 0
    }

    pub fn is_upward(self) -> bool {
        self.bits() & Self::VERTICAL == 0
    }
}

/// The ball. Coordinates are signed so a single step may leave the display
/// band before the bounce logic turns it around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub direction: Direction,
}

impl Ball {
    pub fn new(pos: IVec2, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

impl Default for Ball {
    /// Centered, heading down-left toward the human
    fn default() -> Self {
        Self::new(
            IVec2::new(DISPLAY_CENTER_X, ARENA_CENTER_Y),
            Direction::DownLeft,
        )
    }
}

/// A paddle's vertical displacement from the arena center.
///
/// The offset can only be changed through methods that keep it within
/// `±PADDLE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paddle {
    offset: i32,
}

impl Paddle {
    /// Paddle at `offset`. Panics when the offset is out of range.
    pub fn at(offset: i32) -> Self {
        assert!(
            offset.abs() <= PADDLE_LIMIT,
            "paddle offset {offset} outside ±{PADDLE_LIMIT}"
        );
        Self { offset }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Move by `delta`, stopping at the limit
    pub fn shift_clamped(&mut self, delta: i32) {
        self.offset = (self.offset + delta).clamp(-PADDLE_LIMIT, PADDLE_LIMIT);
    }

    /// Vertical extent `(top, bottom)`. A ball is blocked only strictly
    /// between the two.
    pub fn span(&self) -> (i32, i32) {
        let center = ARENA_CENTER_Y + self.offset;
        (center - PADDLE_SIZE / 2, center + PADDLE_SIZE / 2)
    }

    /// First column in front of the paddle on `side`. A ball past this
    /// column is in the paddle zone.
    pub fn face_x(side: Side) -> i32 {
        match side {
            Side::Left => LEFT_PADDLE_X + PADDLE_THICK,
            Side::Right => RIGHT_PADDLE_X - PADDLE_THICK,
        }
    }
}

/// Points won. Never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn new(points: u32) -> Self {
        Self(points)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball turned at the top or bottom of the arena
    WallBounce,
    /// Ball was returned by the paddle on this side
    PaddleHit(Side),
    /// Ball got past a paddle; `scorer` gets the point
    Point { scorer: Side },
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub left_score: Score,
    pub right_score: Score,
    pub paused: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: ball centered, paddles at rest, no points
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            left: Paddle::default(),
            right: Paddle::default(),
            left_score: Score::default(),
            right_score: Score::default(),
            paused: false,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self, side: Side) -> Score {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub(crate) fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score.increment(),
            Side::Right => self.right_score.increment(),
        }
    }

    /// Points the human has won; drives the AI difficulty ramp
    pub fn human_score(&self) -> u32 {
        self.score(Side::HUMAN).get()
    }

    /// Panics if a paddle offset escaped its range
    pub fn assert_invariants(&self) {
        for side in [Side::Left, Side::Right] {
            let offset = self.paddle(side).offset();
            assert!(
                offset.abs() <= PADDLE_LIMIT,
                "{side:?} paddle offset {offset} outside ±{PADDLE_LIMIT}"
            );
        }
    }
}
