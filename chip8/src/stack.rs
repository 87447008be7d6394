use std::fmt;

use crate::{ErrorKind, Result};

/// Return addresses of pending subroutine calls.
pub struct Stack {
    frames: Vec<u16>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack { frames: Vec::new() }
    }

    pub fn pop(&mut self) -> Result<u16> {
        match self.frames.pop() {
            Some(value) => Ok(value),
            None => Err(ErrorKind::StackUnderflow.into()),
        }
    }

    pub fn push(&mut self, value: u16) {
        self.frames.push(value);
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.frames.iter().map(|frame| format!("{:04x}", frame)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_from_empty() {
        let mut stack = Stack::new();
        match *stack.pop().unwrap_err().kind() {
            ErrorKind::StackUnderflow => {}
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn simple_push_pop() {
        let mut stack = Stack::new();
        stack.push(128);
        assert_eq!(1, stack.depth());
        assert_eq!(128, stack.pop().unwrap());
        assert_eq!(0, stack.depth());
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut stack = Stack::new();
        for addr in 0..32 {
            stack.push(0x200 + addr * 2);
        }
        for addr in (0..32).rev() {
            assert_eq!(0x200 + addr * 2, stack.pop().unwrap());
        }
    }
}
