use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::KEY_COUNT;

/// Where sprites are drawn.
pub trait Display {
    fn clear_screen(&mut self);

    /// XORs an 8-pixel-wide sprite, one byte per row, onto the screen at (x, y).
    /// Returns true if any pixel that was set got unset.
    fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool;
}

/// The hexadecimal keypad as seen by the skip-if-key instructions.
pub trait Input {
    /// Keys outside 0..F are never down
    fn is_key_down(&self, key: u8) -> bool;
}

/// Source of random bytes for the Cxkk instruction.
pub trait Entropy {
    fn next_byte(&mut self) -> u8;
}

/// Capabilities an instruction may reach for while executing.
pub struct Io<'a> {
    pub display: &'a mut dyn Display,
    pub input: &'a dyn Input,
    pub entropy: &'a mut dyn Entropy,
}

/// # Keypad
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: u8) {
        if let Some(k) = self.pressed.get_mut(key as usize) {
            *k = true;
        }
    }

    pub fn release(&mut self, key: u8) {
        if let Some(k) = self.pressed.get_mut(key as usize) {
            *k = false;
        }
    }
}

impl Input for Keypad {
    fn is_key_down(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }
}

/// Random bytes from a `StdRng`, seeded from the OS or from a fixed seed for repeatable runs.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for RandomSource {
    fn next_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press(0xE);
        assert!(keypad.is_key_down(0xE));
        keypad.release(0xE);
        assert!(!keypad.is_key_down(0xE));
    }

    #[test]
    fn test_keypad_ignores_unknown_keys() {
        let mut keypad = Keypad::new();
        keypad.press(0x10);
        assert!(!keypad.is_key_down(0x10));
        assert_eq!(keypad, Keypad::new());
    }

    #[test]
    fn test_seeded_source_repeats() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);
        let a: Vec<u8> = (0..8).map(|_| a.next_byte()).collect();
        let b: Vec<u8> = (0..8).map(|_| b.next_byte()).collect();
        assert_eq!(a, b);
    }
}
