//! Framebuffer capability and the in-memory 128x64 VRAM
//!
//! The renderer only ever writes; nothing reads pixels back except the
//! backend that presents them and the tests.

use glam::IVec2;

use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Pixel colour on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Dark pixel
    On,
    /// Background
    Off,
}

/// Drawing surface the renderer paints into
pub trait Framebuffer {
    /// Every pixel to `Ink::Off`
    fn clear(&mut self);

    /// Inclusive line between two points
    fn draw_line(&mut self, from: IVec2, to: IVec2, ink: Ink);

    /// Single pixel; points off the display are ignored
    fn set_pixel(&mut self, at: IVec2, ink: Ink);

    /// Show the finished frame
    fn present(&mut self);
}

/// Off-screen monochrome buffer, one `u128` per row.
///
/// Drawing goes to the back buffer; [`Framebuffer::present`] copies it to the
/// front buffer, which is what a display backend shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vram {
    back: [u128; DISPLAY_HEIGHT as usize],
    front: [u128; DISPLAY_HEIGHT as usize],
    frames: u64,
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}

impl Vram {
    pub fn new() -> Self {
        Self {
            back: [0; DISPLAY_HEIGHT as usize],
            front: [0; DISPLAY_HEIGHT as usize],
            frames: 0,
        }
    }

    fn in_bounds(at: IVec2) -> bool {
        (0..DISPLAY_WIDTH).contains(&at.x) && (0..DISPLAY_HEIGHT).contains(&at.y)
    }

    fn bit(x: i32) -> u128 {
        1u128 << (DISPLAY_WIDTH - 1 - x)
    }

    /// Pixel in the frame being drawn
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::in_bounds(IVec2::new(x, y)) && self.back[y as usize] & Self::bit(x) != 0
    }

    /// Pixel in the last presented frame
    pub fn presented(&self, x: i32, y: i32) -> bool {
        Self::in_bounds(IVec2::new(x, y)) && self.front[y as usize] & Self::bit(x) != 0
    }

    /// Last presented frame as rows, leftmost pixel in the high bit
    pub fn presented_rows(&self) -> &[u128] {
        &self.front
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Count of lit pixels in the back buffer
    pub fn lit(&self) -> u32 {
        self.back.iter().map(|row| row.count_ones()).sum()
    }
}

impl Framebuffer for Vram {
    fn clear(&mut self) {
        self.back = [0; DISPLAY_HEIGHT as usize];
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2, ink: Ink) {
        // Integer Bresenham, all octants
        let delta = (to - from).abs();
        let step = IVec2::new((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut err = delta.x - delta.y;
        let mut at = from;
        loop {
            self.set_pixel(at, ink);
            if at == to {
                break;
            }
            let e2 = 2 * err;
            if e2 > -delta.y {
                err -= delta.y;
                at.x += step.x;
            }
            if e2 < delta.x {
                err += delta.x;
                at.y += step.y;
            }
        }
    }

    fn set_pixel(&mut self, at: IVec2, ink: Ink) {
        if !Self::in_bounds(at) {
            return;
        }
        let row = &mut self.back[at.y as usize];
        match ink {
            Ink::On => *row |= Self::bit(at.x),
            Ink::Off => *row &= !Self::bit(at.x),
        }
    }

    fn present(&mut self) {
        self.front = self.back;
        self.frames += 1;
    }
}
