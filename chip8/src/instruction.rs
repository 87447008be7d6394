//! Instruction decoding.
//!
//! CHIP-8 instructions are two bytes wide and come in one of these shapes:
//!
//! - `TNNN`: `T` selects the instruction class, `NNN` is an address.
//! - `TXKK`: `X` is a register index, `KK` an 8-bit immediate.
//! - `TXYN`: `X` and `Y` are register indices, `N` a 4-bit constant which
//!   also disambiguates the classes 0x0, 0x8, 0xE and 0xF.

use std::fmt;

use enum_primitive::FromPrimitive;

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct InstructionWord(pub u16);

impl InstructionWord {
    /// High nibble, selects the dispatch branch.
    pub fn class(self) -> u8 {
        (self.0 >> 12) as u8
    }

    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    pub fn kk(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }

    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    pub fn vx(self) -> Reg {
        Reg::from_nibble(self.x())
    }

    pub fn vy(self) -> Reg {
        Reg::from_nibble(self.y())
    }
}

impl fmt::Debug for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reg {
    V0,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    Va,
    Vb,
    Vc,
    Vd,
    Ve,
    Vf,
}

const REGS: [Reg; 16] = [
    Reg::V0,
    Reg::V1,
    Reg::V2,
    Reg::V3,
    Reg::V4,
    Reg::V5,
    Reg::V6,
    Reg::V7,
    Reg::V8,
    Reg::V9,
    Reg::Va,
    Reg::Vb,
    Reg::Vc,
    Reg::Vd,
    Reg::Ve,
    Reg::Vf,
];

impl Reg {
    /// Only the low four bits of `nibble` are used.
    pub fn from_nibble(nibble: u8) -> Reg {
        REGS[(nibble & 0xF) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Addr(pub u16);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Imm(pub u8);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Nibble(pub u8);

enum_from_primitive! {
/// Two-register ALU operation, selected by the low nibble of `8XYN`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fun {
    Id = 0x0,
    Or = 0x1,
    And = 0x2,
    Xor = 0x3,
    Add = 0x4,
    Subtract = 0x5,
    ShiftRight = 0x6,
    SubtractInv = 0x7,
    ShiftLeft = 0xE,
}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    ClearScreen,
    /// 00EE
    Ret,
    /// 1NNN
    Jump(Addr),
    /// 2NNN
    Call(Addr),
    /// 3XKK, or 4XKK when `inv`
    SkipEqImm { vx: Reg, imm: Imm, inv: bool },
    /// 5XY0, or 9XY0 when `inv`
    SkipEqReg { vx: Reg, vy: Reg, inv: bool },
    /// 6XKK
    PutImm { vx: Reg, imm: Imm },
    /// 7XKK
    AddImm { vx: Reg, imm: Imm },
    /// 8XYN
    Apply { vx: Reg, vy: Reg, f: Fun },
    /// ANNN
    SetI(Addr),
    /// BNNN
    JumpPlusV0(Addr),
    /// CXKK
    Randomize { vx: Reg, imm: Imm },
    /// DXYN
    Draw { vx: Reg, vy: Reg, n: Nibble },
    /// EX9E, or EXA1 when `inv`
    SkipPressed { vx: Reg, inv: bool },
    /// FX07
    GetDT(Reg),
    /// FX0A
    WaitKey(Reg),
    /// FX15
    SetDT(Reg),
    /// FX18
    Beep,
    /// FX1E
    AddI(Reg),
    /// FX29
    LoadGlyph(Reg),
    /// FX33
    StoreBCD(Reg),
    /// FX55
    StoreRegs(Reg),
    /// FX65
    LoadRegs(Reg),
    /// Anything the dispatch table doesn't define.
    Unknown(InstructionWord),
}

impl Instruction {
    pub fn decode(word: InstructionWord) -> Instruction {
        use self::Instruction::*;

        let vx = word.vx();
        let vy = word.vy();
        let imm = Imm(word.kk());
        let addr = Addr(word.nnn());

        match word.class() {
            0x0 => match word.n() {
                0x0 => ClearScreen,
                0xE => Ret,
                _ => Unknown(word),
            },
            0x1 => Jump(addr),
            0x2 => Call(addr),
            0x3 => SkipEqImm { vx, imm, inv: false },
            0x4 => SkipEqImm { vx, imm, inv: true },
            0x5 => SkipEqReg { vx, vy, inv: false },
            0x6 => PutImm { vx, imm },
            0x7 => AddImm { vx, imm },
            0x8 => match Fun::from_u8(word.n()) {
                Some(f) => Apply { vx, vy, f },
                None => Unknown(word),
            },
            0x9 => SkipEqReg { vx, vy, inv: true },
            0xA => SetI(addr),
            0xB => JumpPlusV0(addr),
            0xC => Randomize { vx, imm },
            0xD => Draw {
                vx,
                vy,
                n: Nibble(word.n()),
            },
            // Everything except 9E skips when the key is up.
            0xE => SkipPressed {
                vx,
                inv: word.kk() != 0x9E,
            },
            0xF => match word.kk() {
                0x07 => GetDT(vx),
                0x0A => WaitKey(vx),
                0x15 => SetDT(vx),
                0x18 => Beep,
                0x1E => AddI(vx),
                0x29 => LoadGlyph(vx),
                0x33 => StoreBCD(vx),
                0x55 => StoreRegs(vx),
                0x65 => LoadRegs(vx),
                _ => Unknown(word),
            },
            _ => Unknown(word),
        }
    }
}
