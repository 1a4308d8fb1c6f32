//! A Chip-8 interpreter core.
//!
//! [`Chip8`] owns the whole machine and is driven from outside: call
//! [`Chip8::step`] at the CPU rate, [`Chip8::advance_timers`] at 60Hz, feed key
//! events through [`Chip8::key_press`]/[`Chip8::key_release`], and read pixels back
//! with [`Chip8::is_set`]. Nothing here knows about windows, keyboards or clocks.

pub use chip8::{Chip8, Status};
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, TIMER_FREQUENCY};
pub use error::{Error, Result};
pub use frame_buffer::FrameBuffer;
pub use keypad::Keypad;
pub use memory::Memory;
pub use stack::Stack;

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod stack;
mod state;
