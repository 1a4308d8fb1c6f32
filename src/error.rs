use thiserror::Error;

/// Everything that can stop a Chip-8 session.
///
/// All of these except `InvalidKey` are fatal: the session is halted and has to be
/// reset or reloaded before it will execute again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBoundsAccess { address: usize },

    #[error("stack overflow: more than 16 nested subroutine calls")]
    StackOverflow,

    #[error("stack underflow: returned from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    ProgramTooLarge { size: usize, max_size: usize },

    #[error("key {key:#04X} is not on the keypad")]
    InvalidKey { key: u8 },

    #[error("session halted after a fatal error; reset or load a ROM to continue")]
    Halted,
}

pub type Result<T> = std::result::Result<T, Error>;
