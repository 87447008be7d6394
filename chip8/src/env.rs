//! Host collaborators the VM talks to while executing a cycle.

use rand::RngCore;

use crate::display::{Color, Rect};
use crate::Result;

/// Rendering surface the display buffer is presented on.
pub trait Screen {
    /// Physical surface size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, color: Color) -> Result<()>;
    fn fill_rects(&mut self, rects: &[Rect], color: Color) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Current state of the 16-key hex keypad.
pub trait Keypad {
    /// `key` is a logical key code in `0x0..=0xF`.
    fn is_pressed(&self, key: u8) -> bool;
}

/// Sink for the one-shot sound signal.
pub trait Beeper {
    fn beep(&mut self);
}

pub struct Env<'a> {
    pub screen: &'a mut dyn Screen,
    pub keypad: &'a dyn Keypad,
    pub beeper: &'a mut dyn Beeper,
    pub rng: &'a mut dyn RngCore,
}

impl Keypad for [bool; 16] {
    fn is_pressed(&self, key: u8) -> bool {
        self.get(key as usize).cloned().unwrap_or(false)
    }
}
