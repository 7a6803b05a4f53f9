use log::{debug, warn};
use rand::Rng;

use crate::constants::FONT_GLYPH_SIZE;
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::state::{ExecutionState, State};

/// Executes a single decoded instruction against `state`.
///
/// The PC must already point past the instruction, so jumps and calls simply
/// overwrite it and skips add another 2.
///
/// Anything that sets VF as a flag does so last, after reading its operands,
/// so the flag wins when VF is also the destination.
pub fn execute<R: Rng>(
    instruction: Instruction,
    state: &mut State,
    rng: &mut R,
    strict: bool,
) -> Result<()> {
    use Instruction::*;

    match instruction {
        Cls => {
            state.frame_buffer.clear();
            state.draw_flag = true;
        }
        Ret => state.pc = state.pop()?,
        Sys { .. } => {}
        Jump { addr } => state.pc = addr,
        Call { addr } => {
            state.push()?;
            state.pc = addr;
        }
        SkipEqByte { x, kk } => state.skip_if(state.v[usize::from(x)] == kk),
        SkipNeByte { x, kk } => state.skip_if(state.v[usize::from(x)] != kk),
        SkipEqReg { x, y } => state.skip_if(state.v[usize::from(x)] == state.v[usize::from(y)]),
        LoadByte { x, kk } => state.v[usize::from(x)] = kk,
        AddByte { x, kk } => {
            let vx = &mut state.v[usize::from(x)];
            *vx = vx.wrapping_add(kk);
        }
        Move { x, y } => state.v[usize::from(x)] = state.v[usize::from(y)],
        Or { x, y } => state.v[usize::from(x)] |= state.v[usize::from(y)],
        And { x, y } => state.v[usize::from(x)] &= state.v[usize::from(y)],
        Xor { x, y } => state.v[usize::from(x)] ^= state.v[usize::from(y)],
        AddReg { x, y } => {
            let (res, carry) = state.v[usize::from(x)].overflowing_add(state.v[usize::from(y)]);
            set_with_flag(state, x, res, carry);
        }
        Sub { x, y } => {
            let (vx, vy) = (state.v[usize::from(x)], state.v[usize::from(y)]);
            set_with_flag(state, x, vx.wrapping_sub(vy), vx > vy);
        }
        Shr { x, y } => {
            let vy = state.v[usize::from(y)];
            set_with_flag(state, x, vy >> 1, vy & 0x1 == 1);
        }
        Subn { x, y } => {
            let (vx, vy) = (state.v[usize::from(x)], state.v[usize::from(y)]);
            set_with_flag(state, x, vy.wrapping_sub(vx), vy > vx);
        }
        Shl { x, y } => {
            let vy = state.v[usize::from(y)];
            set_with_flag(state, x, vy << 1, vy & 0x80 != 0);
        }
        SkipNeReg { x, y } => state.skip_if(state.v[usize::from(x)] != state.v[usize::from(y)]),
        LoadIndex { addr } => state.i = addr,
        JumpOffset { addr } => state.pc = addr + u16::from(state.v[0x0]),
        Random { x, kk } => state.v[usize::from(x)] = rng.gen::<u8>() & kk,
        Draw { x, y, n } => draw(state, x, y, n)?,
        SkipPressed { x } => state.skip_if(state.key_in(x)),
        SkipNotPressed { x } => state.skip_if(!state.key_in(x)),
        LoadDelay { x } => state.v[usize::from(x)] = state.timers.delay,
        AwaitKey { x } => {
            debug!("awaiting key for V{:X}", x);
            state.execution = ExecutionState::AwaitingKey { register: x };
        }
        SetDelay { x } => state.timers.delay = state.v[usize::from(x)],
        SetSound { x } => state.timers.sound = state.v[usize::from(x)],
        AddIndex { x } => state.i = state.i.wrapping_add(u16::from(state.v[usize::from(x)])),
        LoadGlyph { x } => {
            state.i = state.font_address + u16::from(state.v[usize::from(x)]) * FONT_GLYPH_SIZE
        }
        Bcd { x } => {
            let vx = state.v[usize::from(x)];
            let digits = [vx / 100, vx / 10 % 10, vx % 10];
            state.memory.load(usize::from(state.i), &digits)?;
        }
        Store { x } => {
            state
                .memory
                .load(usize::from(state.i), &state.v[..=usize::from(x)])?;
        }
        Restore { x } => {
            let len = usize::from(x) + 1;
            let bytes = state.memory.slice(usize::from(state.i), len)?;
            state.v[..len].copy_from_slice(bytes);
        }
        Unknown(op) => {
            let pc = state.pc.wrapping_sub(2);
            if strict {
                return Err(Error::IllegalOpcode { op: op.0, pc });
            }
            warn!("ignoring unknown opcode {:04X} at {:#06X}", op.0, pc);
        }
    }

    Ok(())
}

/// Vx = value; VF = flag
fn set_with_flag(state: &mut State, x: u8, value: u8, flag: bool) {
    state.v[usize::from(x)] = value;
    state.v[0xF] = u8::from(flag);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at mem[I..I+n] onto the FrameBuffer at (Vx, Vy), clipping at the edges.
/// VF is cleared and then set if any pixels were erased.
fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let (vx, vy) = (state.v[usize::from(x)], state.v[usize::from(y)]);
    let sprite = state.memory.slice(usize::from(state.i), usize::from(n))?;

    state.v[0xF] = 0x0;
    let collision = state.frame_buffer.draw_sprite(vx, vy, sprite);
    state.v[0xF] = u8::from(collision);
    state.draw_flag = true;
    Ok(())
}
