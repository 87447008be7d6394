use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;

use crate::display::FrameBuffer;
use crate::env::{Env, Keypad};
use crate::instruction::*;
use crate::memory::{Memory, FONT_ADDRESS, GLYPH_HEIGHT, MEMORY_SIZE, PROGRAM_START};
use crate::regfile::RegFile;
use crate::stack::Stack;
use crate::timer::Timer;
use crate::{ErrorKind, Result, ResultExt};

/// Deviations from the reference behavior. Everything is off by default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quirks {
    /// `8XY6`/`8XYE` put the shifted-out bit into VF.
    pub shift_sets_flag: bool,
    /// `FX0A` waits for any key and stores it in VX, instead of waiting
    /// for key 0 and storing 0.
    pub wait_for_any_key: bool,
}

pub struct Chip8 {
    memory: Memory,
    gpr: RegFile,
    stack: Stack,
    pc: u16,
    i: u16,
    dt: Timer,
    quirks: Quirks,
    pub display: FrameBuffer,
}

impl Chip8 {
    pub fn new() -> Chip8 {
        Chip8::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Chip8 {
        Chip8 {
            memory: Memory::new(),
            gpr: RegFile::new(),
            stack: Stack::new(),
            pc: PROGRAM_START,
            i: 0,
            dt: Timer::new(),
            quirks,
            display: FrameBuffer::new(),
        }
    }

    pub fn with_rom(rom_data: &[u8]) -> Chip8 {
        let mut chip8 = Chip8::new();
        chip8.load_bytes(rom_data);
        chip8
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Chip8> {
        let path = path.as_ref();
        let load_error = || ErrorKind::Load(path.display().to_string());

        let mut rom_file = File::open(path).chain_err(load_error)?;
        let mut chip8 = Chip8::new();
        chip8.load(&mut rom_file).chain_err(load_error)?;
        Ok(chip8)
    }

    /// Reads the stream into memory at 0x200 until it ends or the arena is
    /// full. Whatever doesn't fit is left unread.
    pub fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        let mut rom_data = Vec::with_capacity(capacity + 1);
        reader.take(capacity as u64 + 1).read_to_end(&mut rom_data)?;

        if rom_data.len() > capacity {
            warn!(
                "program doesn't fit into memory, only the first {} bytes are loaded",
                capacity
            );
            rom_data.truncate(capacity);
        }
        self.load_bytes(&rom_data);
        Ok(())
    }

    fn load_bytes(&mut self, rom_data: &[u8]) {
        let copied = self.memory.load_program(rom_data);
        if copied < rom_data.len() {
            warn!(
                "program is {} bytes, dropped {} that don't fit into memory",
                rom_data.len(),
                rom_data.len() - copied
            );
        }
        debug!("loaded {} bytes at {:#05x}", copied, PROGRAM_START);
    }

    /// Runs one permitted cycle: steps the delay timer, then fetches and
    /// executes a single instruction.
    pub fn cycle(&mut self, env: &mut Env) -> Result<()> {
        self.dt.step();

        let instruction_word = InstructionWord(self.memory.read_word(self.pc as usize)?);
        let instruction = Instruction::decode(instruction_word);
        trace!("{:04x}: {:?} {:?}", self.pc, instruction_word, instruction);

        self.pc = self.pc.wrapping_add(2);
        self.execute(instruction, env)
    }

    fn skip_if(&mut self, cond: bool) {
        if cond {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    fn execute(&mut self, instruction: Instruction, env: &mut Env) -> Result<()> {
        use crate::instruction::Instruction::*;

        match instruction {
            ClearScreen => self.display.clear(),
            Ret => {
                self.pc = self.stack.pop()?;
            }
            Jump(addr) => {
                self.pc = addr.0;
            }
            Call(addr) => {
                self.stack.push(self.pc);
                self.pc = addr.0;
            }
            SkipEqImm { vx, imm, inv } => {
                let eq = self.gpr[vx] == imm.0;
                self.skip_if(eq != inv);
            }
            SkipEqReg { vx, vy, inv } => {
                let eq = self.gpr[vx] == self.gpr[vy];
                self.skip_if(eq != inv);
            }
            PutImm { vx, imm } => {
                self.gpr[vx] = imm.0;
            }
            AddImm { vx, imm } => {
                let x = self.gpr[vx];
                self.gpr[vx] = x.wrapping_add(imm.0);
            }
            Apply { vx, vy, f } => self.apply(vx, vy, f),
            SetI(addr) => {
                self.i = addr.0;
            }
            JumpPlusV0(addr) => {
                self.pc = addr.0 + self.gpr[Reg::V0] as u16;
            }
            Randomize { vx, imm } => {
                let random_byte = env.rng.gen::<u8>();
                self.gpr[vx] = random_byte & imm.0;
            }
            Draw { vx, vy, n } => {
                self.draw(vx, vy, n)?;
                self.display.present(&mut *env.screen)?;
            }
            SkipPressed { vx, inv } => {
                let key = self.gpr[vx];
                self.skip_if(env.keypad.is_pressed(key) != inv);
            }
            GetDT(vx) => {
                self.gpr[vx] = self.dt.get();
            }
            WaitKey(vx) => self.wait_key(vx, env.keypad),
            SetDT(vx) => {
                let x = self.gpr[vx];
                self.dt.set(x);
            }
            Beep => env.beeper.beep(),
            AddI(vx) => {
                let x = self.gpr[vx] as u16;
                self.i = self.i.wrapping_add(x);
            }
            LoadGlyph(vx) => {
                let digit = (self.gpr[vx] & 0xF) as u16;
                self.i = FONT_ADDRESS + digit * GLYPH_HEIGHT;
            }
            StoreBCD(vx) => {
                let v = self.gpr[vx];
                let i = self.i as usize;

                self.memory.write(i, v / 100)?;
                self.memory.write(i + 1, (v / 10) % 10)?;
                self.memory.write(i + 2, v % 10)?;
            }
            StoreRegs(vx) => {
                let i = self.i as usize;
                for offset in 0..=vx.index() {
                    self.memory.write(i + offset, self.gpr.read_at_index(offset))?;
                }
            }
            LoadRegs(vx) => {
                let i = self.i as usize;
                for offset in 0..=vx.index() {
                    let value = self.memory.read(i + offset)?;
                    self.gpr.write_at_index(offset, value);
                }
            }
            Unknown(word) => {
                warn!(
                    "unknown instruction {:?} at {:04x}",
                    word,
                    self.pc.wrapping_sub(2)
                );
            }
        }

        Ok(())
    }

    fn apply(&mut self, vx: Reg, vy: Reg, f: Fun) {
        let x = self.gpr[vx];
        let y = self.gpr[vy];

        match f {
            Fun::Id => {
                self.gpr[vx] = y;
            }
            Fun::Or => {
                self.gpr[vx] = x | y;
            }
            Fun::And => {
                self.gpr[vx] = x & y;
            }
            Fun::Xor => {
                self.gpr[vx] = x ^ y;
            }
            Fun::Add => {
                self.gpr[vx] = self.gpr.add(x, y);
            }
            Fun::Subtract => {
                self.gpr[vx] = self.gpr.subtract(x, y);
            }
            Fun::ShiftRight => {
                if self.quirks.shift_sets_flag {
                    self.gpr[Reg::Vf] = x & 0x01;
                }
                self.gpr[vx] = x >> 1;
            }
            Fun::SubtractInv => {
                self.gpr[vx] = self.gpr.subtract(y, x);
            }
            Fun::ShiftLeft => {
                if self.quirks.shift_sets_flag {
                    self.gpr[Reg::Vf] = x >> 7;
                }
                self.gpr[vx] = x << 1;
            }
        }
    }

    /// XORs an `n`-row sprite from memory at I onto the display. Rows and
    /// columns that fall off the bottom/right edge are dropped, not wrapped.
    fn draw(&mut self, vx: Reg, vy: Reg, n: Nibble) -> Result<()> {
        use crate::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

        let x = self.gpr[vx] as usize % DISPLAY_WIDTH;
        let y = self.gpr[vy] as usize % DISPLAY_HEIGHT;
        self.gpr[Reg::Vf] = 0;

        let sprite_start = self.i as usize;
        for sy in 0..n.0 as usize {
            let row = y + sy;
            if row >= DISPLAY_HEIGHT {
                break;
            }

            let sprite_row = self.memory.read(sprite_start + sy)?;
            if self.display.xor_row(x, row, sprite_row) {
                self.gpr[Reg::Vf] = 1;
            }
        }

        Ok(())
    }

    /// Blocks by re-executing itself: until the awaited key is down, PC is
    /// rewound so the next permitted cycle lands on this instruction again.
    fn wait_key(&mut self, vx: Reg, keypad: &dyn Keypad) {
        let pressed = if self.quirks.wait_for_any_key {
            (0..16).find(|&key| keypad.is_pressed(key))
        } else if keypad.is_pressed(0) {
            Some(0)
        } else {
            None
        };

        match pressed {
            Some(key) => self.gpr[vx] = key,
            None => self.pc = self.pc.wrapping_sub(2),
        }
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    pub fn delay_timer(&self) -> u8 {
        self.dt.get()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn reg(&self, reg: Reg) -> u8 {
        self.gpr[reg]
    }

    pub fn set_reg(&mut self, reg: Reg, value: u8) {
        self.gpr[reg] = value;
    }

    pub fn memory(&self) -> &[u8] {
        self.memory.as_slice()
    }
}

impl fmt::Debug for Chip8 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Chip8")
            .field("gpr", &self.gpr)
            .field("pc", &format!("{:04x}", self.pc))
            .field("i", &format!("{:04x}", self.i))
            .field("dt", &format!("{:02x}", self.dt.get()))
            .field("stack", &self.stack)
            .field("quirks", &self.quirks)
            .finish()
    }
}
