/// Size of the addressable memory in bytes; every address is reduced modulo this.
pub const MEM_SIZE: usize = 0x1000;

/// Mask applied to the 12-bit address register and program counter.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// 0x000 - 0x200 is reserved for the interpreter (and the sprite sheet)
/// ROMs are loaded into memory starting at 0x200
pub const MEM_START: u16 = 0x200;

/// The top of memory is set aside for the display buffer.
pub const SCREEN_START: u16 = 0xF00;
pub const DISPLAY_REGION_SIZE: usize = MEM_SIZE - SCREEN_START as usize;

/// The largest program that fits between `MEM_START` and the display region.
pub const MAX_PROGRAM_LEN: usize = MEM_SIZE - MEM_START as usize - DISPLAY_REGION_SIZE;

/// Number of return addresses the call stack can hold.
pub const STACK_SIZE: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Rate at which the delay and sound timers count down.
pub const TIMER_HZ: u32 = 60;

/// Instructions executed per second unless the host asks for something else.
pub const DEFAULT_CLOCK_HZ: u32 = 500;

/// Where the sprite sheet lives in memory.
pub const FONT_START: u16 = 0x000;

/// Each hexadecimal digit sprite is 5 rows tall.
pub const FONT_SPRITE_LEN: u16 = 5;

/// # Sprite sheet
/// Sprites for the hexadecimal digits 0..F, each 4 pixels wide and 5 rows tall.
/// Only the high nibble of each row is drawn.
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
