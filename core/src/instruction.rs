use crate::opcode::Opcode;

/// A decoded Chip-8 instruction with its operands already pulled out of the opcode.
///
/// `x` and `y` name registers, `kk` is an immediate byte, `addr` a 12-bit address
/// and `n` a sprite height.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instruction {
    /// 00E0: clear the display
    Cls,
    /// 00EE: PC = STACK.pop()
    Ret,
    /// 0nnn: machine code routine; ignored
    Sys { addr: u16 },
    /// 1nnn: PC = addr
    Jump { addr: u16 },
    /// 2nnn: STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// 3xkk: if Vx == kk then skip
    SkipEqByte { x: u8, kk: u8 },
    /// 4xkk: if Vx != kk then skip
    SkipNeByte { x: u8, kk: u8 },
    /// 5xy0: if Vx == Vy then skip
    SkipEqReg { x: u8, y: u8 },
    /// 6xkk: Vx = kk
    LoadByte { x: u8, kk: u8 },
    /// 7xkk: Vx += kk
    AddByte { x: u8, kk: u8 },
    /// 8xy0: Vx = Vy
    Move { x: u8, y: u8 },
    /// 8xy1: Vx |= Vy
    Or { x: u8, y: u8 },
    /// 8xy2: Vx &= Vy
    And { x: u8, y: u8 },
    /// 8xy3: Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// 8xy4: Vx += Vy; VF = carry
    AddReg { x: u8, y: u8 },
    /// 8xy5: Vx -= Vy; VF = Vx > Vy
    Sub { x: u8, y: u8 },
    /// 8xy6: Vx = Vy >> 1; VF = lsb(Vy)
    Shr { x: u8, y: u8 },
    /// 8xy7: Vx = Vy - Vx; VF = Vy > Vx
    Subn { x: u8, y: u8 },
    /// 8xyE: Vx = Vy << 1; VF = msb(Vy)
    Shl { x: u8, y: u8 },
    /// 9xy0: if Vx != Vy then skip
    SkipNeReg { x: u8, y: u8 },
    /// Annn: I = addr
    LoadIndex { addr: u16 },
    /// Bnnn: PC = V0 + addr
    JumpOffset { addr: u16 },
    /// Cxkk: Vx = random & kk
    Random { x: u8, kk: u8 },
    /// Dxyn: draw the n byte sprite at I to (Vx, Vy); VF = collision
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E: if key Vx is pressed then skip
    SkipPressed { x: u8 },
    /// ExA1: if key Vx is not pressed then skip
    SkipNotPressed { x: u8 },
    /// Fx07: Vx = DT
    LoadDelay { x: u8 },
    /// Fx0A: Vx = next key press
    AwaitKey { x: u8 },
    /// Fx15: DT = Vx
    SetDelay { x: u8 },
    /// Fx18: ST = Vx
    SetSound { x: u8 },
    /// Fx1E: I += Vx
    AddIndex { x: u8 },
    /// Fx29: I = address of the glyph for Vx
    LoadGlyph { x: u8 },
    /// Fx33: mem[I..I+3] = bcd(Vx)
    Bcd { x: u8 },
    /// Fx55: mem[I..=I+x] = V0..=Vx
    Store { x: u8 },
    /// Fx65: V0..=Vx = mem[I..=I+x]
    Restore { x: u8 },
    /// Anything else
    Unknown(Opcode),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    /// Never fails; unrecognized opcodes become `Instruction::Unknown`.
    pub fn decode(op: Opcode) -> Self {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x0, ..) => Sys { addr },
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => SkipEqByte { x, kk },
            (0x4, ..) => SkipNeByte { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk },
            (0x7, ..) => AddByte { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => Shr { x, y },
            (0x8, .., 0x7) => Subn { x, y },
            (0x8, .., 0xE) => Shl { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex { addr },
            (0xB, ..) => JumpOffset { addr },
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, .., 0x9, 0xE) => SkipPressed { x },
            (0xE, .., 0xA, 0x1) => SkipNotPressed { x },
            (0xF, .., 0x0, 0x7) => LoadDelay { x },
            (0xF, .., 0x0, 0xA) => AwaitKey { x },
            (0xF, .., 0x1, 0x5) => SetDelay { x },
            (0xF, .., 0x1, 0x8) => SetSound { x },
            (0xF, .., 0x1, 0xE) => AddIndex { x },
            (0xF, .., 0x2, 0x9) => LoadGlyph { x },
            (0xF, .., 0x3, 0x3) => Bcd { x },
            (0xF, .., 0x5, 0x5) => Store { x },
            (0xF, .., 0x6, 0x5) => Restore { x },
            _ => Unknown(op),
        }
    }
}

impl From<u16> for Instruction {
    fn from(op: u16) -> Self {
        Instruction::decode(Opcode(op))
    }
}
