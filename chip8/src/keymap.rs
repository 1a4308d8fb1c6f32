use clap::ValueEnum;
use sdl2::keyboard::Keycode;

/// Which physical keys stand in for the Chip-8 keypad
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// The left 4 alphanumeric columns
    Qwerty,
    /// The keys labelled with each hex digit
    Hex,
}

impl Layout {
    pub fn keymap(self, key: Keycode) -> Option<u8> {
        match self {
            Layout::Qwerty => qwerty(key),
            Layout::Hex => hex(key),
        }
    }
}

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn qwerty(key: Keycode) -> Option<u8> {
    match key {
        Keycode::X => Some(0x0),
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::Z => Some(0xA),
        Keycode::C => Some(0xB),
        Keycode::Num4 => Some(0xC),
        Keycode::R => Some(0xD),
        Keycode::F => Some(0xE),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

/// # Keymap
/// Each hex digit is typed as itself: `0`-`9` and `A`-`F`.
pub fn hex(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num0 => Some(0x0),
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0x4),
        Keycode::Num5 => Some(0x5),
        Keycode::Num6 => Some(0x6),
        Keycode::Num7 => Some(0x7),
        Keycode::Num8 => Some(0x8),
        Keycode::Num9 => Some(0x9),
        Keycode::A => Some(0xA),
        Keycode::B => Some(0xB),
        Keycode::C => Some(0xC),
        Keycode::D => Some(0xD),
        Keycode::E => Some(0xE),
        Keycode::F => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: [Keycode; 26] = [
        Keycode::Num0,
        Keycode::Num1,
        Keycode::Num2,
        Keycode::Num3,
        Keycode::Num4,
        Keycode::Num5,
        Keycode::Num6,
        Keycode::Num7,
        Keycode::Num8,
        Keycode::Num9,
        Keycode::A,
        Keycode::B,
        Keycode::C,
        Keycode::D,
        Keycode::E,
        Keycode::F,
        Keycode::Q,
        Keycode::W,
        Keycode::R,
        Keycode::S,
        Keycode::V,
        Keycode::X,
        Keycode::Z,
        Keycode::Space,
        Keycode::Escape,
        Keycode::Return,
    ];

    fn covers_keypad_once(layout: Layout) {
        let mut seen = [0; 16];
        for key in CANDIDATES {
            if let Some(k) = layout.keymap(key) {
                seen[k as usize] += 1;
            }
        }
        assert_eq!(seen, [1; 16]);
    }

    #[test]
    fn test_qwerty_covers_keypad() {
        covers_keypad_once(Layout::Qwerty);
    }

    #[test]
    fn test_hex_covers_keypad() {
        covers_keypad_once(Layout::Hex);
    }

    #[test]
    fn test_qwerty_positions() {
        assert_eq!(qwerty(Keycode::Num4), Some(0xC));
        assert_eq!(qwerty(Keycode::X), Some(0x0));
        assert_eq!(qwerty(Keycode::Num5), None);
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(hex(Keycode::Num4), Some(0x4));
        assert_eq!(hex(Keycode::B), Some(0xB));
        assert_eq!(hex(Keycode::Q), None);
    }

    #[test]
    fn test_controls_are_not_keys() {
        for layout in [Layout::Qwerty, Layout::Hex] {
            assert_eq!(layout.keymap(Keycode::Space), None);
            assert_eq!(layout.keymap(Keycode::Escape), None);
        }
    }
}
