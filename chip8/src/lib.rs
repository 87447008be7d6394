// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate byteorder;
#[macro_use]
extern crate enum_primitive;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate rand;

mod memory;
mod regfile;
mod stack;
mod timer;
mod vm;

pub mod clock;
pub mod display;
pub mod env;
pub mod instruction;

pub use self::clock::{ClockRegulator, CYCLE_INTERVAL};
pub use self::env::{Beeper, Env, Keypad, Screen};
pub use self::memory::{FONT_ADDRESS, MEMORY_SIZE, PROGRAM_START};
pub use self::vm::{Chip8, Quirks};

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        Load(path: String) {
            description("program image could not be loaded")
            display("can't load program image '{}'", path)
        }
        StackUnderflow {
            description("return with an empty call stack")
            display("return with an empty call stack")
        }
        AddressOutOfRange(addr: usize) {
            description("memory access outside of the arena")
            display("memory access outside of the arena: {:#06x}", addr)
        }
        Screen(msg: String) {
            description("screen error")
            display("screen error: {}", msg)
        }
    }
}
