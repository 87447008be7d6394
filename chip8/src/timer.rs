
pub struct Timer {
    left: u8,
}

impl Timer {
    pub fn new() -> Timer {
        Timer { left: 0 }
    }

    /// Counts down one tick, stopping at zero.
    pub fn step(&mut self) {
        self.left = self.left.saturating_sub(1);
    }

    pub fn get(&self) -> u8 {
        self.left
    }

    pub fn set(&mut self, ticks: u8) {
        self.left = ticks
    }
}
