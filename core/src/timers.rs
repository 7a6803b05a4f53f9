/// # Timers
/// Two 8-bit countdowns that are decremented at 60Hz by whoever drives the interpreter.
/// - the delay timer is read and written by programs for pacing
/// - while the sound timer is nonzero a tone should be playing
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    /// Decrements each nonzero timer by one
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}
