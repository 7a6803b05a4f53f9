use crate::config::Config;
use crate::constants::{PROGRAM_START, STACK_SIZE};
use crate::error::{Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::memory::Memory;
use crate::timers::Timers;

/// Whether the interpreter is executing instructions or waiting on Fx0A
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExecutionState {
    Running,
    /// Halted until a key is freshly pressed; its index goes to V`register`
    AwaitingKey { register: u8 },
}

/// The Chip-8 machine state
///
/// ## Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - 16 return addresses and a pointer to the next free slot
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///
/// ## Memory
/// - 4096 bytes of addressable memory
/// - 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
/// - emulation may halt until a key's value is written to some register
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub stack: [u16; STACK_SIZE],
    pub timers: Timers,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [bool; 16],
    pub execution: ExecutionState,
    pub font_address: u16,
}

impl State {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            timers: Timers::default(),
            memory: Memory::new(config.font_address)?,
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            keys: [false; 16],
            execution: ExecutionState::Running,
            font_address: config.font_address,
        })
    }

    /// Pushes the current PC as a return address
    pub fn push(&mut self) -> Result<()> {
        let slot = self
            .stack
            .get_mut(self.sp)
            .ok_or(Error::StackOverflow { pc: self.pc })?;
        *slot = self.pc;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address
    pub fn pop(&mut self) -> Result<u16> {
        self.sp = self
            .sp
            .checked_sub(1)
            .ok_or(Error::StackUnderflow { pc: self.pc })?;
        Ok(self.stack[self.sp])
    }

    /// Skips the next instruction when `condition` holds
    pub fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    /// Whether the key named by the low nibble of Vx is pressed
    pub fn key_in(&self, x: u8) -> bool {
        self.keys[usize::from(self.v[usize::from(x)] & 0xF)]
    }
}
