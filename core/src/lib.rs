pub use chip8::Chip8;
pub use config::Config;
pub use error::{Error, Result};
pub use frame_buffer::FrameBuffer;
pub use instruction::Instruction;
pub use memory::Memory;
pub use opcode::Opcode;
pub use state::ExecutionState;

mod chip8;
mod config;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod memory;
mod opcode;
mod operations;
mod state;
mod timers;
