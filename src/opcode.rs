/// # Opcodes
///
/// Every Chip-8 instruction is a 16 bit big-endian word. Written as four nibbles
/// `[f x y n]`:
/// - `f` picks the instruction family
/// - `n` or the whole low byte narrows families 0x0, 0x8, 0xE and 0xF down to one instruction
///
/// The remaining nibbles carry operands:
/// - `[_ n n n]` a 12 bit address
/// - `[_ _ k k]` an immediate byte
/// - `[_ x _ _]` the register Vx, or the range V0..=Vx
/// - `[_ _ y _]` the register Vy
/// - `[_ _ _ n]` a 4 bit count
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[f___]`
    fn family(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> usize;

    /// `[__y_]`
    fn y(&self) -> usize;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x() as u8, self.y() as u8, self.n())
    }

    fn family(&self) -> u8 {
        (self >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OP: u16 = 0xD4E7;

    #[test]
    fn test_nibbles() {
        assert_eq!(OP.nibbles(), (0xD, 0x4, 0xE, 0x7));
    }

    #[test]
    fn test_family() {
        assert_eq!(OP.family(), 0xD);
        assert_eq!(0x0FFFu16.family(), 0x0);
    }

    #[test]
    fn test_registers() {
        assert_eq!(OP.x(), 0x4);
        assert_eq!(OP.y(), 0xE);
    }

    #[test]
    fn test_immediates() {
        assert_eq!(OP.n(), 0x7);
        assert_eq!(OP.kk(), 0xE7);
        assert_eq!(OP.nnn(), 0x4E7);
    }
}
