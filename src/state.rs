use rand::rngs::StdRng;

use crate::constants::PROGRAM_START;
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::stack::Stack;

/// Everything a running Chip-8 program can observe or change
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register; carry, borrow and sprite collision land here
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Timers
/// - 2 8-bit timers (delay & sound), counted down from outside at 60Hz
///
/// ## Memory
/// - 4096 bytes of addressable memory with the sprite sheet at 0x000
/// - a 16 entry stack of return addresses
/// - a 64x32 frame buffer
///
/// ## Input
/// - the keypad holding which of the 16 keys are down
///
/// ## Randomness
/// - a generator seeded once when the state is created
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: Stack,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub rng: StdRng,
}

impl State {
    pub fn new(rng: StdRng) -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            delay_timer: 0,
            sound_timer: 0,
            stack: Stack::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            rng,
        }
    }
}
