use sdl2::keyboard::{KeyboardState, Scancode};

use chip8::Keypad;

/// Physical key for each logical key 0x0..=0xF, taken from the left four
/// columns of the keyboard, row by row:
///
/// ```text
/// |0|1|2|3|      |1|2|3|4|
/// |4|5|6|7|  ->  |Q|W|E|R|
/// |8|9|A|B|  ->  |A|S|D|F|
/// |C|D|E|F|      |Z|X|C|V|
/// ```
pub const KEY_MAPPING: [Scancode; 16] = [
    Scancode::Num1,
    Scancode::Num2,
    Scancode::Num3,
    Scancode::Num4,
    //
    Scancode::Q,
    Scancode::W,
    Scancode::E,
    Scancode::R,
    //
    Scancode::A,
    Scancode::S,
    Scancode::D,
    Scancode::F,
    //
    Scancode::Z,
    Scancode::X,
    Scancode::C,
    Scancode::V,
];

pub fn scancode(key: u8) -> Option<Scancode> {
    KEY_MAPPING.get(key as usize).cloned()
}

/// Keypad backed by the SDL keyboard state snapshot.
pub struct SdlKeypad<'a> {
    state: KeyboardState<'a>,
}

impl<'a> SdlKeypad<'a> {
    pub fn new(state: KeyboardState<'a>) -> SdlKeypad<'a> {
        SdlKeypad { state }
    }
}

impl<'a> Keypad for SdlKeypad<'a> {
    fn is_pressed(&self, key: u8) -> bool {
        scancode(key).map_or(false, |sc| self.state.is_scancode_pressed(sc))
    }
}
