use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian as a pair of bytes `(l, r)`.
/// Their behavior is cased on some combination of:
/// - `(n, _, _, _)` the family; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within the 0x8 family
/// - `(_, _, n, n)` specific behavior within the 0x0, 0xE and 0xF families
///
/// Nibbles not used to determine the operation carry its operands.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the register Vy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub l: u8,
    pub r: u8,
}

impl Opcode {
    pub fn new(l: u8, r: u8) -> Self {
        Opcode { l, r }
    }

    /// The opcode as a single big-endian word.
    pub fn word(self) -> u16 {
        u16::from(self.l) << 8 | u16::from(self.r)
    }

    /// Returns the Opcode's component nibbles.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    /// The Opcode's most significant nibble.
    /// `[f___]`
    pub fn family(self) -> u8 {
        self.l >> 4
    }

    /// The Opcode's second nibble.
    /// `[_x__]`
    pub fn x(self) -> u8 {
        self.l & 0x0F
    }

    /// The Opcode's third nibble.
    /// `[__y_]`
    pub fn y(self) -> u8 {
        self.r >> 4
    }

    /// The Opcode's fourth nibble.
    /// `[___n]`
    pub fn n(self) -> u8 {
        self.r & 0x0F
    }

    /// The Opcode's least significant byte.
    /// `[__kk]`
    pub fn kk(self) -> u8 {
        self.r
    }

    /// The Opcode without its most significant nibble.
    /// `[_nnn]`
    pub fn nnn(self) -> u16 {
        u16::from(self.l & 0x0F) << 8 | u16::from(self.r)
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        let [l, r] = word.to_be_bytes();
        Opcode { l, r }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}", self.l, self.r)
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    const OP: Opcode = Opcode { l: 0xAB, r: 0xCD };

    #[test]
    fn test_nibbles() {
        assert_eq!(OP.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_family() {
        assert_eq!(OP.family(), 0xA);
    }

    #[test]
    fn test_x() {
        assert_eq!(OP.x(), 0xB);
    }

    #[test]
    fn test_y() {
        assert_eq!(OP.y(), 0xC);
    }

    #[test]
    fn test_n() {
        assert_eq!(OP.n(), 0xD);
    }

    #[test]
    fn test_kk() {
        assert_eq!(OP.kk(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        assert_eq!(OP.nnn(), 0x0BCD);
    }

    #[test]
    fn test_word() {
        assert_eq!(OP.word(), 0xABCD);
        assert_eq!(Opcode::from(0xABCD), OP);
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::new(0x00, 0xE0).to_string(), "00e0");
    }
}
