/// Width of the reference display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// Height of the reference display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;
/// Address at which ROMs are loaded and execution starts
pub const PROGRAM_START: u16 = 0x200;
/// Largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;
/// Keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Default number of instructions executed per second
pub const CLOCK_SPEED: u32 = 700;
/// Rate at which the delay and sound timers count down
pub const TIMER_FREQUENCY: u32 = 60;

/// Bytes per glyph of the built-in font
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// Sprites for the hexadecimal digits 0..F, 5 bytes each, loaded at 0x000.
///
/// Each byte is a row of the glyph, most significant bit leftmost. The 0 glyph:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
