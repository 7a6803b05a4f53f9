use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{MAX_ROM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::operations::execute;
use crate::state::{ExecutionState, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random number generator used by Cxkk
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU by one instruction
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Pacing is left to the caller: `step` runs exactly one instruction and
/// `tick_timers` should be called at 60Hz.
pub struct Chip8 {
    state: State,
    rng: StdRng,
    strict: bool,
}

impl Chip8 {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Chip8 {
            state: State::new(&config)?,
            rng,
            strict: config.strict,
        })
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        // read one byte past capacity so oversized ROMs can be reported
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load_rom_bytes(&rom)
    }

    /// Copy a ROM into memory at 0x200
    pub fn load_rom_bytes(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                capacity: MAX_ROM_SIZE,
            });
        }
        self.state.memory.load(usize::from(PROGRAM_START), rom)?;
        debug!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - does nothing while awaiting a keypress
    /// - fetches the opcode at the pc and moves the pc past it
    /// - decodes and executes it
    pub fn step(&mut self) -> Result<()> {
        if let ExecutionState::AwaitingKey { .. } = self.state.execution {
            return Ok(());
        }

        let pc = usize::from(self.state.pc);
        let memory = &self.state.memory;
        let op = Opcode::from_bytes(memory.read(pc)?, memory.read(pc + 1)?);
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op.0,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state.pc = self.state.pc.wrapping_add(2);
        execute(
            Instruction::decode(op),
            &mut self.state,
            &mut self.rng,
            self.strict,
        )
    }

    /// Decrements the delay and sound timers
    pub fn tick_timers(&mut self) {
        self.state.timers.tick();
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index (0x0..=0xF) of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        let key = key & 0xF;
        let fresh = !self.state.keys[usize::from(key)];
        self.state.keys[usize::from(key)] = true;

        if let (true, ExecutionState::AwaitingKey { register }) = (fresh, self.state.execution) {
            debug!("key {:X} resumes execution into V{:X}", key, register);
            self.state.v[usize::from(register)] = key;
            self.state.execution = ExecutionState::Running;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index (0x0..=0xF) of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keys[usize::from(key & 0xF)] = false;
    }

    /// Replace the pressed status of every key at once.
    /// Keys going from released to pressed count as presses, lowest index first.
    pub fn set_keys(&mut self, keys: [bool; 16]) {
        for (key, pressed) in (0..).zip(keys.iter()) {
            if *pressed {
                self.key_press(key);
            } else {
                self.key_release(key);
            }
        }
    }

    /// Returns the FrameBuffer if it changed since the last call
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if std::mem::take(&mut self.state.draw_flag) {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound > 0
    }

    pub fn execution_state(&self) -> ExecutionState {
        self.state.execution
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn stack_depth(&self) -> usize {
        self.state.sp
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }
}
