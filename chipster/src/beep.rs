use std::io::Write;

use chip8::Beeper;

const BEL: &[u8] = b"\x07\n";

/// Rings the terminal bell, one line per beep.
pub struct TerminalBeeper<W: Write> {
    out: W,
}

impl<W: Write> TerminalBeeper<W> {
    pub fn new(out: W) -> TerminalBeeper<W> {
        TerminalBeeper { out }
    }
}

impl<W: Write> Beeper for TerminalBeeper<W> {
    fn beep(&mut self) {
        if let Err(e) = self.out.write_all(BEL).and_then(|_| self.out.flush()) {
            warn!("can't ring the bell: {}", e);
        }
    }
}
