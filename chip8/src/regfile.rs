use std::fmt;
use std::ops::{Index, IndexMut};

use crate::instruction::Reg;

pub struct RegFile {
    gpr: [u8; 16],
}

impl RegFile {
    pub fn new() -> RegFile {
        RegFile { gpr: [0; 16] }
    }

    pub fn read_at_index(&self, index: usize) -> u8 {
        self.gpr[index]
    }

    pub fn write_at_index(&mut self, index: usize, value: u8) {
        self.gpr[index] = value;
    }

    /// Wrapping add. VF is set to 1 if the unsigned sum exceeds 255.
    pub fn add(&mut self, a: u8, b: u8) -> u8 {
        let (v, overflow) = a.overflowing_add(b);
        self[Reg::Vf] = if overflow { 1 } else { 0 };
        v
    }

    /// Wrapping subtract. VF is set to 1 if no borrow occurred, i.e. `a >= b`.
    pub fn subtract(&mut self, a: u8, b: u8) -> u8 {
        let (v, borrow) = a.overflowing_sub(b);
        self[Reg::Vf] = if borrow { 0 } else { 1 };
        v
    }
}

impl Index<Reg> for RegFile {
    type Output = u8;

    fn index(&self, index: Reg) -> &u8 {
        &self.gpr[index.index()]
    }
}

impl IndexMut<Reg> for RegFile {
    fn index_mut(&mut self, index: Reg) -> &mut u8 {
        &mut self.gpr[index.index()]
    }
}

impl fmt::Debug for RegFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut dbg = f.debug_struct("RegFile");
        for i in 0..16 {
            let reg_name = format!("V{:0X}", i);
            let reg_value = format!("{:02x}", self.read_at_index(i));
            dbg.field(&reg_name, &reg_value);
        }
        dbg.finish()
    }
}
