use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::{ErrorKind, Result};

pub const MEMORY_SIZE: usize = 4096;

/// Programs are loaded here; many programs rely on it.
pub const PROGRAM_START: u16 = 0x200;

/// Base address of the built-in hex digit glyphs.
pub const FONT_ADDRESS: u16 = 0x050;

/// Height in bytes of a single font glyph.
pub const GLYPH_HEIGHT: u16 = 5;

pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Memory {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };

        {
            let font_start = FONT_ADDRESS as usize;
            let font_memory = &mut memory.bytes[font_start..font_start + FONT_SPRITES.len()];
            font_memory.copy_from_slice(&FONT_SPRITES);
        }

        memory
    }

    /// Copies `data` into the arena starting at `PROGRAM_START`, dropping
    /// whatever does not fit. Returns the number of bytes copied.
    pub fn load_program(&mut self, data: &[u8]) -> usize {
        let program_memory = &mut self.bytes[PROGRAM_START as usize..];
        let len = data.len().min(program_memory.len());
        program_memory[..len].copy_from_slice(&data[..len]);
        len
    }

    pub fn read(&self, addr: usize) -> Result<u8> {
        self.bytes
            .get(addr)
            .cloned()
            .ok_or_else(|| ErrorKind::AddressOutOfRange(addr).into())
    }

    pub fn write(&mut self, addr: usize, value: u8) -> Result<()> {
        match self.bytes.get_mut(addr) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(ErrorKind::AddressOutOfRange(addr).into()),
        }
    }

    /// Reads a big-endian instruction word.
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        match self.bytes.get(addr..addr + 2) {
            Some(word) => Ok(BigEndian::read_u16(word)),
            None => Err(ErrorKind::AddressOutOfRange(addr + 1).into()),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[rustfmt::skip]
const FONT_SPRITES: [u8; 80] = [
	0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
	0x20, 0x60, 0x20, 0x20, 0x70, // 1
	0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
	0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
	0x90, 0x90, 0xF0, 0x10, 0x10, // 4
	0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
	0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
	0xF0, 0x10, 0x20, 0x40, 0x40, // 7
	0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
	0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
	0xF0, 0x90, 0xF0, 0x90, 0x90, // A
	0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
	0xF0, 0x80, 0x80, 0x80, 0xF0, // C
	0xE0, 0x90, 0x90, 0x90, 0xE0, // D
	0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
	0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
