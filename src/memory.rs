use crate::constants::{MEMORY_SIZE, SPRITE_SHEET};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - 0x000..0x050 holds the sprite sheet for the hexadecimal digits
/// - 0x050..0x200 is otherwise reserved for the interpreter and left zeroed
/// - 0x200.. is where ROMs are loaded
///
/// Every access is bounds checked; anything outside of `0..4096` is an
/// `OutOfBoundsAccess` rather than a panic.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet loaded at 0x000
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Error::OutOfBoundsAccess {
                address: addr as usize,
            })
    }

    pub fn write_byte(&mut self, addr: u16, byte: u8) -> Result<()> {
        let cell = self
            .bytes
            .get_mut(addr as usize)
            .ok_or(Error::OutOfBoundsAccess {
                address: addr as usize,
            })?;
        *cell = byte;
        Ok(())
    }

    /// Reads the big-endian word at `addr..=addr+1`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn read_word(&self, addr: u16) -> Result<u16> {
        let bytes = self.slice(addr, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// A view of `len` bytes starting at `addr`
    pub fn slice(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let start = addr as usize;
        self.bytes
            .get(start..start + len)
            .ok_or_else(|| Error::OutOfBoundsAccess {
                address: (start + len).saturating_sub(1).max(start),
            })
    }

    /// Copies `bytes` into memory starting at `offset`.
    /// Nothing is written unless the whole of `bytes` fits.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<()> {
        let start = offset as usize;
        self.bytes
            .get_mut(start..start + bytes.len())
            .ok_or_else(|| Error::OutOfBoundsAccess {
                address: (start + bytes.len()).saturating_sub(1).max(start),
            })?
            .copy_from_slice(bytes);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
