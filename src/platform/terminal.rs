//! Terminal backend built on crossterm
//!
//! The 128x64 panel is drawn with half-block characters, two pixel rows per
//! text line, so the whole display fits in 128x32 cells.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::IVec2;

use super::keys::{Key, KeySource};
use crate::consts::DISPLAY_WIDTH;
use crate::renderer::{Framebuffer, Ink, Vram};

/// Raw mode + alternate screen for as long as the guard lives
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide, MoveTo(0, 0)) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Character for a vertical pair of pixels
fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

/// Presented frame as text lines, two pixel rows per line
pub fn frame_lines(vram: &Vram) -> Vec<String> {
    vram.presented_rows()
        .chunks(2)
        .map(|pair| {
            let top = pair[0];
            let bottom = pair.get(1).copied().unwrap_or(0);
            (0..DISPLAY_WIDTH)
                .map(|x| {
                    let mask = 1u128 << (DISPLAY_WIDTH - 1 - x);
                    half_block(top & mask != 0, bottom & mask != 0)
                })
                .collect()
        })
        .collect()
}

/// Framebuffer that shows each presented frame on a terminal
pub struct TerminalScreen<W: Write> {
    vram: Vram,
    out: W,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            vram: Vram::new(),
            out,
        }
    }

    pub fn vram(&self) -> &Vram {
        &self.vram
    }

    fn blit(&mut self) -> io::Result<()> {
        for (row, line) in frame_lines(&self.vram).into_iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Framebuffer for TerminalScreen<W> {
    fn clear(&mut self) {
        self.vram.clear();
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2, ink: Ink) {
        self.vram.draw_line(from, to, ink);
    }

    fn set_pixel(&mut self, at: IVec2, ink: Ink) {
        self.vram.set_pixel(at, ink);
    }

    fn present(&mut self) {
        self.vram.present();
        if let Err(err) = self.blit() {
            log::warn!("Present failed: {err}");
        }
    }
}

/// Keyboard input from the terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

/// Bindings: arrows or `w`/`s` move, `p`/space pause, `q`/Esc/Ctrl-C quit
pub fn map_key(event: KeyEvent) -> Key {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Key::Menu;
    }
    match event.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Key::Down,
        KeyCode::Char('p') | KeyCode::Char(' ') => Key::Pause,
        KeyCode::Esc | KeyCode::Char('q') => Key::Menu,
        _ => Key::Other,
    }
}

impl KeySource for TerminalKeys {
    fn wait_for_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(None);
            }
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(map_key(key))),
            _ => Ok(None),
        }
    }
}
