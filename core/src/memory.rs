use crate::constants::{MEMORY_SIZE, SPRITE_SHEET};
use crate::error::{Error, Result};

// NB. addresses are usize so offsets from I (u16) never wrap silently

/// # Memory
/// 4096 bytes of addressable memory.
///
/// Conventional layout:
/// ```text
/// 0x000-0x1FF  interpreter; the sprite sheet lives here (at 0x050 by default)
/// 0x200-0xFFF  program
/// ```
/// Every access is bounds checked; nothing wraps or spills into neighbouring state.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet copied in at `font_address`
    pub fn new(font_address: u16) -> Result<Self> {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.load(usize::from(font_address), &SPRITE_SHEET)?;
        Ok(memory)
    }

    /// Copies `data` into memory starting at `base`
    pub fn load(&mut self, base: usize, data: &[u8]) -> Result<()> {
        let end = base
            .checked_add(data.len())
            .filter(|end| *end <= MEMORY_SIZE)
            .ok_or(Error::OutOfBounds {
                address: base.saturating_add(data.len()),
            })?;
        self.bytes[base..end].copy_from_slice(data);
        Ok(())
    }

    pub fn read(&self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Error::OutOfBounds { address })
    }

    pub fn write(&mut self, address: usize, byte: u8) -> Result<()> {
        let cell = self
            .bytes
            .get_mut(address)
            .ok_or(Error::OutOfBounds { address })?;
        *cell = byte;
        Ok(())
    }

    /// Borrows `len` bytes starting at `base`
    pub fn slice(&self, base: usize, len: usize) -> Result<&[u8]> {
        base.checked_add(len)
            .and_then(|end| self.bytes.get(base..end))
            .ok_or(Error::OutOfBounds {
                address: base.saturating_add(len),
            })
    }

}
