//! Frame rendering
//!
//! Paints a read-only view of the game state into any [`Framebuffer`]: the
//! inverted scoreboard strip, both paddles, and the ball.

pub mod font;
pub mod framebuffer;

pub use framebuffer::{Framebuffer, Ink, Vram};

use glam::IVec2;

use crate::consts::*;
use crate::sim::{GameState, Score, Side};

/// Top row of the score digits
pub const SCORE_Y: i32 = 2;
/// Gap between the divider and each score
const SCORE_GAP: i32 = 4;

/// Draw one complete frame and present it
pub fn render(state: &GameState, fb: &mut impl Framebuffer) {
    fb.clear();
    draw_scoreboard(state, fb);
    draw_paddles(state, fb);
    draw_ball(state.ball.pos, fb);
    fb.present();
}

/// Zero-padded score as shown on screen; wraps past 999
pub fn score_text(score: Score) -> String {
    let modulus = 10u32.pow(SCORE_DIGITS as u32);
    format!("{:0width$}", score.get() % modulus, width = SCORE_DIGITS)
}

/// Left edge of the score text for `side`
pub fn score_x(side: Side) -> i32 {
    match side {
        Side::Left => DISPLAY_CENTER_X - font::text_width(SCORE_DIGITS) - SCORE_GAP,
        Side::Right => DISPLAY_CENTER_X + SCORE_GAP,
    }
}

// ============================================================================
// SCOREBOARD
// ============================================================================

fn draw_scoreboard(state: &GameState, fb: &mut impl Framebuffer) {
    for y in 0..SCOREBOARD_HEIGHT {
        fb.draw_line(IVec2::new(0, y), IVec2::new(DISPLAY_WIDTH - 1, y), Ink::On);
    }

    // Divider is a gap in the strip
    fb.draw_line(
        IVec2::new(DISPLAY_CENTER_X, 0),
        IVec2::new(DISPLAY_CENTER_X, SCOREBOARD_HEIGHT),
        Ink::Off,
    );

    for side in [Side::Left, Side::Right] {
        let text = score_text(state.score(side));
        font::draw_text(fb, IVec2::new(score_x(side), SCORE_Y), &text, Ink::Off);
    }
}

// ============================================================================
// PLAYFIELD
// ============================================================================

fn draw_paddles(state: &GameState, fb: &mut impl Framebuffer) {
    for side in [Side::Left, Side::Right] {
        let (top, bottom) = state.paddle(side).span();
        for i in 0..PADDLE_THICK {
            let x = match side {
                Side::Left => LEFT_PADDLE_X + i,
                Side::Right => RIGHT_PADDLE_X - i,
            };
            fb.draw_line(IVec2::new(x, top), IVec2::new(x, bottom), Ink::On);
        }
    }
}

/// Five-pixel plus centered on the ball
fn draw_ball(pos: IVec2, fb: &mut impl Framebuffer) {
    for delta in [IVec2::ZERO, IVec2::NEG_X, IVec2::X, IVec2::Y, IVec2::NEG_Y] {
        fb.set_pixel(pos + delta, Ink::On);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Paddle;

    fn rendered(state: &GameState) -> Vram {
        let mut vram = Vram::new();
        render(state, &mut vram);
        vram
    }

    #[test]
    fn test_score_text_pads_and_wraps() {
        assert_eq!(score_text(Score::new(0)), "000");
        assert_eq!(score_text(Score::new(7)), "007");
        assert_eq!(score_text(Score::new(42)), "042");
        assert_eq!(score_text(Score::new(1234)), "234");
    }

    #[test]
    fn test_score_positions() {
        assert_eq!(score_x(Side::Left), 42);
        assert_eq!(score_x(Side::Right), 68);
    }

    #[test]
    fn test_scoreboard_strip_with_divider() {
        let vram = rendered(&GameState::new());
        for y in 0..SCOREBOARD_HEIGHT {
            assert!(vram.presented(0, y));
            assert!(vram.presented(127, y));
            assert!(!vram.presented(64, y));
        }
        // Arena starts blank below the strip
        assert!(!vram.presented(0, SCOREBOARD_HEIGHT));
    }

    #[test]
    fn test_scores_are_knocked_out_of_strip() {
        let vram = rendered(&GameState::new());
        // Left edge of each "0" glyph, second row
        assert!(!vram.presented(42, 3));
        assert!(!vram.presented(68, 3));
        // Spacing column between glyphs stays lit
        assert!(vram.presented(42 + font::GLYPH_WIDTH, 3));
    }

    #[test]
    fn test_paddles_at_rest() {
        let vram = rendered(&GameState::new());
        for y in 30..=44 {
            assert!(vram.presented(6, y) && vram.presented(7, y));
            assert!(vram.presented(121, y) && vram.presented(120, y));
        }
        assert!(!vram.presented(6, 29) && !vram.presented(6, 45));
        assert!(!vram.presented(8, 37) && !vram.presented(119, 37));
    }

    #[test]
    fn test_offset_paddle_moves() {
        let mut state = GameState::new();
        state.left = Paddle::at(-24);
        let vram = rendered(&state);
        assert!(vram.presented(6, 6));
        assert!(vram.presented(6, 20));
        assert!(!vram.presented(6, 21));
    }

    #[test]
    fn test_ball_is_a_plus() {
        let vram = rendered(&GameState::new());
        for (x, y) in [(64, 37), (63, 37), (65, 37), (64, 36), (64, 38)] {
            assert!(vram.presented(x, y));
        }
        for (x, y) in [(63, 36), (65, 38), (66, 37)] {
            assert!(!vram.presented(x, y));
        }
    }

    #[test]
    fn test_frame_is_presented_once() {
        let vram = rendered(&GameState::new());
        assert_eq!(vram.frames(), 1);
    }
}
