use crate::constants::FONT_ADDRESS;

/// Knobs that change how a `Chip8` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Where the sprite sheet is loaded and where Fx29 points I
    pub font_address: u16,
    /// Raise `Error::IllegalOpcode` for unrecognized instructions instead of skipping them
    pub strict: bool,
    /// Seed for Cxkk; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            font_address: FONT_ADDRESS,
            strict: false,
            seed: None,
        }
    }
}
