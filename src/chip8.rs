use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_ROM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::from_op;
use crate::state::State;

/// What a call to `step` achieved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// One instruction ran to completion
    Executed,
    /// The program is blocked on Fx0A until a key is held. The pc still points at
    /// that instruction, so stepping again after `key_press` completes it.
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `rom` it was loaded with so it can be reset
///  - whether a fatal error has `halted` it
///
/// Supplies interfaces for:
/// - loading roms and resetting
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rom: Vec<u8>,
    seed: Option<u64>,
    halted: bool,
}

impl Chip8 {
    /// A Chip-8 whose random numbers are seeded from the OS
    pub fn new() -> Self {
        Self::seeded(None)
    }

    /// A Chip-8 whose random numbers repeat from one session to the next
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(Some(seed))
    }

    fn seeded(seed: Option<u64>) -> Self {
        Chip8 {
            state: State::new(rng(seed)),
            rom: Vec::new(),
            seed,
            halted: false,
        }
    }

    /// Starts a fresh session running `rom`
    ///
    /// A rom that doesn't fit between 0x200 and the end of memory is rejected and the
    /// current session carries on untouched.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        self.rom = rom.to_vec();
        self.reset()?;
        info!("Loaded ROM [size: {}]", rom.len());
        Ok(())
    }

    /// Throws away all state and starts the loaded rom again from 0x200
    pub fn reset(&mut self) -> Result<()> {
        let mut state = State::new(rng(self.seed));
        state.memory.load(PROGRAM_START, &self.rom)?;
        self.state = state;
        self.halted = false;
        info!("Reset [rom size: {}] [seeded: {}]", self.rom.len(), self.seed.is_some());
        Ok(())
    }

    /// Executes exactly one instruction
    /// - fetches the opcode at the pc
    /// - moves the pc on to the next opcode
    /// - executes the opcode, which may move the pc again
    ///
    /// Any error is fatal; the session refuses to step again until it is reset.
    pub fn step(&mut self) -> Result<Status> {
        if self.halted {
            return Err(Error::Halted);
        }
        let at = self.state.pc;
        let result = self.execute();
        if let Err(e) = result {
            warn!("halting at pc{:04X}: {}", at, e);
            self.halted = true;
        }
        result
    }

    fn execute(&mut self) -> Result<Status> {
        let op = self.state.memory.read_word(self.state.pc)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state.pc = self.state.pc.wrapping_add(0x2);
        from_op(op)(op, &mut self.state)
    }

    /// Counts both timers down by one, stopping at 0.
    /// Should be called at 60Hz no matter how fast instructions are stepped.
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Whether a beep should be sounding
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.state.keypad.hold(key)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.state.keypad.release(key)
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.state.frame_buffer.is_set(x, y)
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The register V`index`; panics if `index` is not in 0x0..=0xF
    pub fn v(&self, index: usize) -> u8 {
        self.state.v[index]
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Return addresses currently on the stack
    pub fn stack_depth(&self) -> usize {
        self.state.stack.len()
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip8_with(rom: &[u8]) -> Chip8 {
        let mut chip8 = Chip8::with_seed(0x8);
        chip8.load_rom(rom).unwrap();
        chip8
    }

    #[test]
    fn test_chip8_gets_op() {
        let chip8 = chip8_with(&[0xAA, 0xBB]);
        assert_eq!(chip8.state.memory.read_word(chip8.pc()), Ok(0xAABB));
    }

    #[test]
    fn test_step_advances_pc() {
        let mut chip8 = chip8_with(&[0x00, 0xE0]);
        let starting_pc = chip8.pc();
        assert_eq!(chip8.step(), Ok(Status::Executed));
        assert_eq!(chip8.pc(), starting_pc + 0x2);
    }

    #[test]
    fn test_single_load_program() {
        let mut chip8 = chip8_with(&[0x60, 0x12]);
        chip8.step().unwrap();
        assert_eq!(chip8.v(0x0), 0x12);
        assert_eq!(chip8.pc(), 0x202);
    }

    #[test]
    fn test_doesnt_advance_while_awaiting_key() {
        let mut chip8 = chip8_with(&[0xF3, 0x0A]);
        for _ in 0..4 {
            assert_eq!(chip8.step(), Ok(Status::AwaitingKey));
            assert_eq!(chip8.pc(), 0x200);
        }
    }

    #[test]
    fn test_captures_key_presses() {
        let mut chip8 = chip8_with(&[0xF3, 0x0A]);
        assert_eq!(chip8.step(), Ok(Status::AwaitingKey));
        chip8.key_press(0xE).unwrap();
        assert_eq!(chip8.step(), Ok(Status::Executed));
        assert_eq!(chip8.v(0x3), 0xE);
        assert_eq!(chip8.pc(), 0x202);
    }

    #[test]
    fn test_released_key_no_longer_held() {
        let mut chip8 = chip8_with(&[0xF3, 0x0A]);
        chip8.key_press(0x4).unwrap();
        chip8.key_release(0x4).unwrap();
        assert_eq!(chip8.step(), Ok(Status::AwaitingKey));
    }

    #[test]
    fn test_key_off_the_keypad() {
        let mut chip8 = Chip8::with_seed(0);
        assert_eq!(chip8.key_press(0x10), Err(Error::InvalidKey { key: 0x10 }));
        assert!(!chip8.is_halted());
    }

    #[test]
    fn test_largest_rom_fits() {
        let mut chip8 = Chip8::with_seed(0);
        let rom = vec![0xAB; 4096 - 0x200];
        assert_eq!(chip8.load_rom(&rom), Ok(()));
        assert_eq!(chip8.state.memory.read_byte(0xFFF), Ok(0xAB));
    }

    #[test]
    fn test_oversized_rom_rejected() {
        let mut chip8 = chip8_with(&[0x61, 0x01]);
        let rom = vec![0x0; 4096 - 0x200 + 1];
        assert_eq!(
            chip8.load_rom(&rom),
            Err(Error::ProgramTooLarge {
                size: 3585,
                max_size: 3584
            })
        );
        // the previous session is untouched
        chip8.step().unwrap();
        assert_eq!(chip8.v(0x1), 0x01);
    }

    #[test]
    fn test_timers_count_down_to_zero() {
        // V0 = 2; DT = V0; ST = V0
        let mut chip8 = chip8_with(&[0x60, 0x02, 0xF0, 0x15, 0xF0, 0x18]);
        for _ in 0..3 {
            chip8.step().unwrap();
        }
        assert!(chip8.sound_active());
        chip8.advance_timers();
        assert_eq!((chip8.delay_timer(), chip8.sound_timer()), (1, 1));
        chip8.advance_timers();
        chip8.advance_timers();
        assert_eq!((chip8.delay_timer(), chip8.sound_timer()), (0, 0));
        assert!(!chip8.sound_active());
    }

    #[test]
    fn test_step_doesnt_touch_timers() {
        // V0 = 9; DT = V0; jump to self
        let mut chip8 = chip8_with(&[0x60, 0x09, 0xF0, 0x15, 0x12, 0x04]);
        for _ in 0..20 {
            chip8.step().unwrap();
        }
        assert_eq!(chip8.delay_timer(), 9);
    }

    #[test]
    fn test_fatal_error_halts_until_reset() {
        // return with nothing on the stack
        let mut chip8 = chip8_with(&[0x61, 0x05, 0x00, 0xEE]);
        chip8.step().unwrap();
        assert_eq!(chip8.step(), Err(Error::StackUnderflow));
        assert!(chip8.is_halted());
        assert_eq!(chip8.step(), Err(Error::Halted));

        chip8.reset().unwrap();
        assert!(!chip8.is_halted());
        assert_eq!(chip8.v(0x1), 0x0);
        assert_eq!(chip8.pc(), 0x200);
        assert_eq!(chip8.step(), Ok(Status::Executed));
        assert_eq!(chip8.v(0x1), 0x5);
    }

    #[test]
    fn test_reset_clears_everything() {
        // V0 = 1; I = 0x0; draw the 0 glyph; call 0x208
        let mut chip8 = chip8_with(&[0x60, 0x01, 0xA0, 0x00, 0xD0, 0x05, 0x22, 0x08]);
        for _ in 0..4 {
            chip8.step().unwrap();
        }
        chip8.key_press(0x2).unwrap();
        assert!(chip8.is_set(1, 1));
        assert_eq!(chip8.stack_depth(), 1);

        chip8.reset().unwrap();
        assert!(!chip8.is_set(1, 1));
        assert_eq!(chip8.stack_depth(), 0);
        assert_eq!(chip8.v(0x0), 0x0);
        assert_eq!(chip8.i(), 0x0);
        assert!(!chip8.state.keypad.is_held(0x2));
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let rom = [0xC0, 0xFF, 0xC1, 0xFF, 0xC2, 0xFF];
        let mut a = Chip8::with_seed(42);
        let mut b = Chip8::with_seed(42);
        a.load_rom(&rom).unwrap();
        b.load_rom(&rom).unwrap();
        for _ in 0..3 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(
            (a.v(0x0), a.v(0x1), a.v(0x2)),
            (b.v(0x0), b.v(0x1), b.v(0x2))
        );
    }

    #[test]
    fn test_running_off_the_end_of_memory() {
        // V0 = 0xFF; jump to 0xF00 + V0 = 0xFFF, whose word straddles the end
        let mut chip8 = chip8_with(&[0x60, 0xFF, 0xBF, 0x00]);
        chip8.step().unwrap();
        chip8.step().unwrap();
        assert_eq!(chip8.pc(), 0xFFF);
        assert_eq!(
            chip8.step(),
            Err(Error::OutOfBoundsAccess { address: 0x1000 })
        );
    }
}
