use crate::constants::STACK_DEPTH;
use crate::error::{Error, Result};

/// # Stack
/// Return addresses for subroutine calls.
///
/// `sp` is the number of addresses currently stored and never leaves `0..=16`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stack {
    addresses: [u16; STACK_DEPTH],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        let slot = self
            .addresses
            .get_mut(self.sp)
            .ok_or(Error::StackOverflow)?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        self.sp = self.sp.checked_sub(1).ok_or(Error::StackUnderflow)?;
        Ok(self.addresses[self.sp])
    }

    pub fn len(&self) -> usize {
        self.sp
    }

    pub fn is_empty(&self) -> bool {
        self.sp == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push(0x202).unwrap();
        stack.push(0x304).unwrap();
        assert_eq!(stack.pop(), Ok(0x304));
        assert_eq!(stack.pop(), Ok(0x202));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(Error::StackUnderflow));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_push_full_overflows() {
        let mut stack = Stack::new();
        for addr in 0..STACK_DEPTH as u16 {
            stack.push(addr).unwrap();
        }
        assert_eq!(stack.push(0xABC), Err(Error::StackOverflow));
        assert_eq!(stack.len(), STACK_DEPTH);
        // the failed push didn't clobber the top entry
        assert_eq!(stack.pop(), Ok(0xF));
    }
}
