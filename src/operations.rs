use ::rand::Rng;
use log::debug;

use crate::chip8::Status;
use crate::constants::SPRITE_HEIGHT;
use crate::error::Result;
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs after the program counter has already been moved past the
// opcode, so jumps overwrite it outright and skips add another 2.

fn skip_if(state: &mut State, condition: bool) -> Result<Status> {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
    Ok(Status::Executed)
}

/// Writes the flag before the result, so an operation targeting VF keeps its result.
fn set_with_flag(state: &mut State, x: usize, value: u8, flag: bool) -> Result<Status> {
    state.v[0xF] = u8::from(flag);
    state.v[x] = value;
    Ok(Status::Executed)
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Result<Status> {
    state.frame_buffer.clear();
    Ok(Status::Executed)
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) -> Result<Status> {
    state.pc = state.stack.pop()?;
    Ok(Status::Executed)
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Result<Status> {
    state.pc = op.nnn();
    Ok(Status::Executed)
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Result<Status> {
    state.stack.push(state.pc)?;
    state.pc = op.nnn();
    Ok(Status::Executed)
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State) -> Result<Status> {
    let condition = state.v[op.x()] == op.kk();
    skip_if(state, condition)
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State) -> Result<Status> {
    let condition = state.v[op.x()] != op.kk();
    skip_if(state, condition)
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Result<Status> {
    let condition = state.v[op.x()] == state.v[op.y()];
    skip_if(state, condition)
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] = op.kk();
    Ok(Status::Executed)
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    Ok(Status::Executed)
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] = state.v[op.y()];
    Ok(Status::Executed)
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] |= state.v[op.y()];
    Ok(Status::Executed)
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] &= state.v[op.y()];
    Ok(Status::Executed)
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(Status::Executed)
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Result<Status> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    set_with_flag(state, op.x(), res, over)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut State) -> Result<Status> {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    set_with_flag(state, op.x(), res, !under)
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: u16, state: &mut State) -> Result<Status> {
    let vx = state.v[op.x()];
    set_with_flag(state, op.x(), vx >> 1, vx & 0x1 == 0x1)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: u16, state: &mut State) -> Result<Status> {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    set_with_flag(state, op.x(), res, !under)
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(op: u16, state: &mut State) -> Result<Status> {
    let vx = state.v[op.x()];
    set_with_flag(state, op.x(), vx << 1, vx >> 7 == 0x1)
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Result<Status> {
    let condition = state.v[op.x()] != state.v[op.y()];
    skip_if(state, condition)
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Result<Status> {
    state.i = op.nnn();
    Ok(Status::Executed)
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) -> Result<Status> {
    state.pc = op.nnn() + u16::from(state.v[0x0]);
    Ok(Status::Executed)
}

/// Vx = rand_byte & kk
pub fn rand(op: u16, state: &mut State) -> Result<Status> {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.kk();
    Ok(Status::Executed)
}

/// draw_sprite(x=Vx y=Vy rows=mem[I..I+n])
/// XORs the sprite onto the FrameBuffer with wrapping.
/// VF = whether any pixels were erased
pub fn draw(op: u16, state: &mut State) -> Result<Status> {
    let x = usize::from(state.v[op.x()]);
    let y = usize::from(state.v[op.y()]);
    let rows = state.memory.slice(state.i, usize::from(op.n()))?;
    let collision = state.frame_buffer.draw_sprite(x, y, rows);
    state.v[0xF] = u8::from(collision);
    Ok(Status::Executed)
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Result<Status> {
    let condition = state.keypad.is_held(state.v[op.x()]);
    skip_if(state, condition)
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Result<Status> {
    let condition = !state.keypad.is_held(state.v[op.x()]);
    skip_if(state, condition)
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Result<Status> {
    state.v[op.x()] = state.delay_timer;
    Ok(Status::Executed)
}

/// await keypress for Vx
/// With no key held the pc is wound back onto this opcode so the next step retries it.
/// With several held the lowest numbered key wins.
pub fn keyd(op: u16, state: &mut State) -> Result<Status> {
    match state.keypad.first_held() {
        Some(key) => {
            state.v[op.x()] = key;
            Ok(Status::Executed)
        }
        None => {
            state.pc = state.pc.wrapping_sub(0x2);
            debug!("waiting on a key for v{:X} at pc{:04X}", op.x(), state.pc);
            Ok(Status::AwaitingKey)
        }
    }
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Result<Status> {
    state.delay_timer = state.v[op.x()];
    Ok(Status::Executed)
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Result<Status> {
    state.sound_timer = state.v[op.x()];
    Ok(Status::Executed)
}

/// I += Vx
pub fn addi(op: u16, state: &mut State) -> Result<Status> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(Status::Executed)
}

/// I = Vx * 5
/// Points I at the sprite sheet glyph for Vx. Only values 0x0 to 0xF land on a
/// glyph; anything larger points past the sprite sheet.
pub fn ldspr(op: u16, state: &mut State) -> Result<Status> {
    state.i = u16::from(state.v[op.x()]) * SPRITE_HEIGHT;
    Ok(Status::Executed)
}

/// mem[I..I+3] = bcd(Vx)
/// Hundreds, tens and units of Vx
pub fn bcd(op: u16, state: &mut State) -> Result<Status> {
    let vx = state.v[op.x()];
    state.memory.load(state.i, &[vx / 100, vx / 10 % 10, vx % 10])?;
    Ok(Status::Executed)
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left unchanged
pub fn stor(op: u16, state: &mut State) -> Result<Status> {
    state.memory.load(state.i, &state.v[..=op.x()])?;
    Ok(Status::Executed)
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left unchanged
pub fn read(op: u16, state: &mut State) -> Result<Status> {
    let bytes = state.memory.slice(state.i, op.x() + 1)?;
    state.v[..=op.x()].copy_from_slice(bytes);
    Ok(Status::Executed)
}

/// Encodings outside the instruction set (including 0nnn machine calls) are a no-op
pub fn unknown(op: u16, _state: &mut State) -> Result<Status> {
    debug!("ignoring unrecognized opcode {:04X}", op);
    Ok(Status::Executed)
}
