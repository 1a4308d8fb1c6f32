use crate::constants::KEY_COUNT;
use crate::error::{Error, Result};

/// # Keypad
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// This only tracks which of the logical keys 0x0..=0xF are held; translating
/// physical keys is up to whoever feeds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = true;
        Ok(())
    }

    pub fn release(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = false;
        Ok(())
    }

    /// Keys that aren't on the keypad are never held
    pub fn is_held(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    /// The lowest numbered key currently held
    pub fn first_held(&self) -> Option<u8> {
        self.keys.iter().position(|&held| held).map(|key| key as u8)
    }

    fn key_mut(&mut self, key: u8) -> Result<&mut bool> {
        self.keys
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey { key })
    }
}
