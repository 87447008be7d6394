#![allow(dead_code)]

use chip8::display::{Color, Rect};
use chip8::{Beeper, Chip8, Env, Screen};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Screen that remembers what was last presented.
pub struct RecordingScreen {
    pub width: u32,
    pub height: u32,
    pub rects: Vec<Rect>,
    pub frames: usize,
    pending: Vec<Rect>,
}

impl RecordingScreen {
    pub fn new(width: u32, height: u32) -> RecordingScreen {
        RecordingScreen {
            width,
            height,
            rects: Vec::new(),
            frames: 0,
            pending: Vec::new(),
        }
    }
}

impl Screen for RecordingScreen {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, _color: Color) -> chip8::Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn fill_rects(&mut self, rects: &[Rect], _color: Color) -> chip8::Result<()> {
        self.pending.extend_from_slice(rects);
        Ok(())
    }

    fn present(&mut self) -> chip8::Result<()> {
        self.rects = self.pending.clone();
        self.frames += 1;
        Ok(())
    }
}

pub struct SilentBeeper;

impl Beeper for SilentBeeper {
    fn beep(&mut self) {}
}

pub struct Harness {
    pub screen: RecordingScreen,
    pub keys: [bool; 16],
    pub rng: StdRng,
}

impl Harness {
    pub fn new() -> Harness {
        Harness {
            screen: RecordingScreen::new(640, 320),
            keys: [false; 16],
            rng: StdRng::seed_from_u64(0x2281),
        }
    }

    pub fn cycle(&mut self, chip8: &mut Chip8) -> chip8::Result<()> {
        chip8.cycle(&mut Env {
            screen: &mut self.screen,
            keypad: &self.keys,
            beeper: &mut SilentBeeper,
            rng: &mut self.rng,
        })
    }

    pub fn run(&mut self, chip8: &mut Chip8, cycles: usize) {
        for _ in 0..cycles {
            self.cycle(chip8).expect("cycle should succeed");
        }
    }
}

pub fn rom(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes().to_vec()).collect()
}
