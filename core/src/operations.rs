use crate::constants::{FONT_SPRITE_LEN, FONT_START};
use crate::error::ExecutionFault;
use crate::instruction::{Instruction, Op};
use crate::memory::Memory;
use crate::peripherals::{Display, Entropy, Input, Io};
use crate::state::State;

/// What the engine should do after an instruction ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Continue,
    /// Suspend until a key is pressed, then store it in Vx; the pc has not moved
    AwaitKey { x: u8 },
}

/// Applies an instruction's execute rule.
pub fn execute(
    instruction: &Instruction,
    state: &mut State,
    memory: &mut Memory,
    io: &mut Io<'_>,
) -> Result<Effect, ExecutionFault> {
    match instruction.op {
        Op::ClearScreen => clr(state, io.display),
        Op::Return => rts(state)?,
        Op::Sys { .. } | Op::Unmapped => state.advance(),
        Op::Jump { nnn } => jump(state, nnn),
        Op::Call { nnn } => call(state, nnn)?,
        Op::SkipEqual { x, kk } => ske(state, x, kk),
        Op::SkipNotEqual { x, kk } => skne(state, x, kk),
        Op::SkipRegistersEqual { x, y } => skre(state, x, y),
        Op::Load { x, kk } => load(state, x, kk),
        Op::Add { x, kk } => add(state, x, kk),
        Op::Move { x, y } => mv(state, x, y),
        Op::Or { x, y } => or(state, x, y),
        Op::And { x, y } => and(state, x, y),
        Op::Xor { x, y } => xor(state, x, y),
        Op::AddRegisters { x, y } => addr(state, x, y),
        Op::Sub { x, y } => sub(state, x, y),
        Op::ShiftRight { x, .. } => shr(state, x),
        Op::SubInverse { x, y } => subn(state, x, y),
        Op::ShiftLeft { x, .. } => shl(state, x),
        Op::SkipRegistersNotEqual { x, y } => skrne(state, x, y),
        Op::LoadI { nnn } => loadi(state, nnn),
        Op::JumpV0 { nnn } => jumpi(state, nnn),
        Op::Random { x, kk } => rand(state, io.entropy, x, kk),
        Op::Draw { x, y, n } => draw(state, memory, io.display, x, y, n),
        Op::SkipKeyPressed { x } => skpr(state, io.input, x),
        Op::SkipKeyReleased { x } => skup(state, io.input, x),
        Op::GetDelay { x } => moved(state, x),
        Op::AwaitKey { x } => return Ok(keyd(x)),
        Op::SetDelay { x } => loads(state, x),
        Op::SetSound { x } => ld(state, x),
        Op::AddI { x } => addi(state, x),
        Op::FontSprite { x } => ldspr(state, x),
        Op::Bcd { x } => bcd(state, memory, x),
        Op::StoreRegisters { x } => stor(state, memory, x),
        Op::ReadRegisters { x } => read(state, memory, x),
    }
    Ok(Effect::Continue)
}

fn vx(state: &State, x: u8) -> u8 {
    state.v[x as usize]
}

/// clear
pub fn clr(state: &mut State, display: &mut dyn Display) {
    display.clear_screen();
    state.advance();
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<(), ExecutionFault> {
    let address = state.pop()?;
    state.set_pc(address);
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, nnn: u16) {
    state.set_pc(nnn);
}

/// STACK.push(PC + 2); PC = addr
pub fn call(state: &mut State, nnn: u16) -> Result<(), ExecutionFault> {
    state.push(state.pc().wrapping_add(2))?;
    state.set_pc(nnn);
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    state.skip_if(vx(state, x) == kk);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    state.skip_if(vx(state, x) != kk);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    state.skip_if(vx(state, x) == vx(state, y));
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
    state.advance();
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = vx(state, x).wrapping_add(kk);
    state.advance();
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = vx(state, y);
    state.advance();
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] |= vx(state, y);
    state.advance();
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] &= vx(state, y);
    state.advance();
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] ^= vx(state, y);
    state.advance();
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, carry) = vx(state, x).overflowing_add(vx(state, y));
    state.v[x as usize] = res;
    state.set_vf(carry);
    state.advance();
}

/// VF = !borrow; Vx -= Vy
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (a, b) = (vx(state, x), vx(state, y));
    state.set_vf(a >= b);
    state.v[x as usize] = a.wrapping_sub(b);
    state.advance();
}

/// VF = lsb(Vx); Vx >>= 1
pub fn shr(state: &mut State, x: u8) {
    let a = vx(state, x);
    state.v[0xF] = a & 0x1;
    state.v[x as usize] = a >> 1;
    state.advance();
}

/// VF = !borrow; Vx = Vy - Vx
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (a, b) = (vx(state, x), vx(state, y));
    state.set_vf(b >= a);
    state.v[x as usize] = b.wrapping_sub(a);
    state.advance();
}

/// VF = msb(Vx); Vx <<= 1
pub fn shl(state: &mut State, x: u8) {
    let a = vx(state, x);
    state.v[0xF] = (a >> 7) & 0x1;
    state.v[x as usize] = a << 1;
    state.advance();
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    state.skip_if(vx(state, x) != vx(state, y));
}

/// I = addr
pub fn loadi(state: &mut State, nnn: u16) {
    state.set_i(nnn);
    state.advance();
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, nnn: u16) {
    state.set_pc(u16::from(state.v[0x0]) + nnn);
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, entropy: &mut dyn Entropy, x: u8, kk: u8) {
    state.v[x as usize] = entropy.next_byte() & kk;
    state.advance();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite in memory I..I+n onto the display at (Vx, Vy).
/// Sets VF if any pixels were erased
pub fn draw(
    state: &mut State,
    memory: &Memory,
    display: &mut dyn Display,
    x: u8,
    y: u8,
    n: u8,
) {
    let rows = memory.read_slice(state.i(), n as usize);
    let collision = display.draw_sprite(vx(state, x), vx(state, y), &rows);
    state.set_vf(collision);
    state.advance();
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, input: &dyn Input, x: u8) {
    state.skip_if(input.is_key_down(vx(state, x)));
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, input: &dyn Input, x: u8) {
    state.skip_if(!input.is_key_down(vx(state, x)));
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer();
    state.advance();
}

/// await keypress for Vx
/// The engine stores the key and moves the pc on once it arrives.
pub fn keyd(x: u8) -> Effect {
    Effect::AwaitKey { x }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.set_delay_timer(vx(state, x));
    state.advance();
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.set_sound_timer(vx(state, x));
    state.advance();
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.set_i(state.i() + u16::from(vx(state, x)));
    state.advance();
}

/// I = sprite_addr(Vx)
/// Set I to the memory address of the sprite for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    state.set_i(FONT_START + u16::from(vx(state, x) & 0xF) * FONT_SPRITE_LEN);
    state.advance();
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, memory: &mut Memory, x: u8) {
    let value = vx(state, x);
    memory.write_slice(state.i(), &[value / 100, value / 10 % 10, value % 10]);
    state.advance();
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left unmodified
pub fn stor(state: &mut State, memory: &mut Memory, x: u8) {
    memory.write_slice(state.i(), &state.v[..=x as usize]);
    state.advance();
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left unmodified
pub fn read(state: &mut State, memory: &Memory, x: u8) {
    let bytes = memory.read_slice(state.i(), x as usize + 1);
    state.v[..=x as usize].copy_from_slice(&bytes);
    state.advance();
}

#[cfg(test)]
mod test_operations {
    use super::*;
    use crate::frame::FrameBuffer;
    use crate::peripherals::Keypad;

    struct Fixed(u8);

    impl Entropy for Fixed {
        fn next_byte(&mut self) -> u8 {
            self.0
        }
    }

    struct Machine {
        state: State,
        memory: Memory,
        frame: FrameBuffer,
        keypad: Keypad,
        entropy: Fixed,
    }

    impl Machine {
        fn new() -> Self {
            Machine {
                state: State::new(),
                memory: Memory::new(),
                frame: FrameBuffer::new(),
                keypad: Keypad::new(),
                entropy: Fixed(0xFF),
            }
        }

        fn run(&mut self, word: u16) -> Result<Effect, ExecutionFault> {
            let instruction = Instruction::from(crate::opcode::Opcode::from(word));
            let mut io = Io {
                display: &mut self.frame,
                input: &self.keypad,
                entropy: &mut self.entropy,
            };
            execute(&instruction, &mut self.state, &mut self.memory, &mut io)
        }
    }

    #[test]
    fn test_00e0_cls() {
        let mut m = Machine::new();
        m.frame.draw_sprite(0, 0, &[0x80]);
        m.run(0x00E0).unwrap();
        assert!(!m.frame.pixel(0, 0));
        assert_eq!(m.state.pc(), 0x202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut m = Machine::new();
        m.state.push(0x0ABC).unwrap();
        m.run(0x00EE).unwrap();
        assert_eq!(m.state.sp(), 0x0);
        assert_eq!(m.state.pc(), 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_underflows() {
        let mut m = Machine::new();
        assert_eq!(
            m.run(0x00EE),
            Err(ExecutionFault::StackUnderflow { pc: 0x200 })
        );
    }

    #[test]
    fn test_0nnn_sys_is_ignored() {
        let mut m = Machine::new();
        m.run(0x0123).unwrap();
        assert_eq!(m.state.pc(), 0x202);
        assert_eq!(m.state.v, [0; 16]);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut m = Machine::new();
        m.run(0x1ABC).unwrap();
        assert_eq!(m.state.pc(), 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut m = Machine::new();
        m.state.set_pc(0x0ABC);
        m.run(0x2124).unwrap();
        assert_eq!(m.state.sp(), 0x1);
        assert_eq!(m.state.stack(), &[0x0ABE]);
        assert_eq!(m.state.pc(), 0x0124);
    }

    #[test]
    fn test_2nnn_call_overflows() {
        let mut m = Machine::new();
        for _ in 0..16 {
            m.run(0x2200).unwrap();
        }
        assert_eq!(
            m.run(0x2200),
            Err(ExecutionFault::StackOverflow { pc: 0x200 })
        );
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.run(0x3111).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut m = Machine::new();
        m.run(0x3111).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut m = Machine::new();
        m.run(0x4111).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.run(0x4111).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.state.v[0x2] = 0x11;
        m.run(0x5120).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.run(0x5120).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut m = Machine::new();
        m.run(0x6122).unwrap();
        assert_eq!(m.state.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add_wraps() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0xFF;
        m.run(0x7102).unwrap();
        assert_eq!(m.state.v[0x1], 0x01);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut m = Machine::new();
        m.state.v[0x2] = 0x1;
        m.run(0x8120).unwrap();
        assert_eq!(m.state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x6;
        m.state.v[0x2] = 0x3;
        m.run(0x8121).unwrap();
        assert_eq!(m.state.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x6;
        m.state.v[0x2] = 0x3;
        m.run(0x8122).unwrap();
        assert_eq!(m.state.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x6;
        m.state.v[0x2] = 0x3;
        m.run(0x8123).unwrap();
        assert_eq!(m.state.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0xEE;
        m.state.v[0x2] = 0x11;
        m.run(0x8124).unwrap();
        assert_eq!(m.state.v[0x1], 0xFF);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut m = Machine::new();
        m.state.v[0x0] = 250;
        m.state.v[0x1] = 10;
        m.run(0x8014).unwrap();
        assert_eq!(m.state.v[0x0], 4);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x33;
        m.state.v[0x2] = 0x11;
        m.run(0x8125).unwrap();
        assert_eq!(m.state.v[0x1], 0x22);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut m = Machine::new();
        m.state.v[0x0] = 5;
        m.state.v[0x1] = 10;
        m.run(0x8015).unwrap();
        assert_eq!(m.state.v[0x0], 251);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_sets_flag() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.state.v[0x2] = 0x11;
        m.run(0x8125).unwrap();
        assert_eq!(m.state.v[0x1], 0x0);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x5;
        m.run(0x8106).unwrap();
        assert_eq!(m.state.v[0x1], 0x2);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x4;
        m.run(0x8106).unwrap();
        assert_eq!(m.state.v[0x1], 0x2);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.state.v[0x2] = 0x33;
        m.run(0x8127).unwrap();
        assert_eq!(m.state.v[0x1], 0x22);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x12;
        m.state.v[0x2] = 0x11;
        m.run(0x8127).unwrap();
        assert_eq!(m.state.v[0x1], 0xFF);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0xFF;
        m.run(0x810E).unwrap();
        // 0xFF * 2 = 0x01FE
        assert_eq!(m.state.v[0x1], 0xFE);
        assert_eq!(m.state.vf(), 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x4;
        m.run(0x810E).unwrap();
        assert_eq!(m.state.v[0x1], 0x8);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.run(0x9120).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x11;
        m.state.v[0x2] = 0x11;
        m.run(0x9120).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut m = Machine::new();
        m.run(0xAABC).unwrap();
        assert_eq!(m.state.i(), 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut m = Machine::new();
        m.state.v[0x0] = 0x2;
        m.run(0xBABC).unwrap();
        assert_eq!(m.state.pc(), 0xABE);
    }

    #[test]
    fn test_bnnn_jp_wraps() {
        let mut m = Machine::new();
        m.state.v[0x0] = 0x4;
        m.run(0xBFFE).unwrap();
        assert_eq!(m.state.pc(), 0x002);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut m = Machine::new();
        m.entropy = Fixed(0xAB);
        m.run(0xC10F).unwrap();
        assert_eq!(m.state.v[0x1], 0x0B);
    }

    #[test]
    fn test_dxyn_drw_draws_from_i() {
        let mut m = Machine::new();
        m.state.v[0x0] = 0x1;
        // I = 0 points at the 0x0 sprite
        m.run(0xD005).unwrap();
        assert!(m.frame.pixel(1, 1));
        assert!(m.frame.pixel(4, 5));
        assert!(!m.frame.pixel(2, 2));
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut m = Machine::new();
        m.frame.draw_sprite(0, 0, &[0x80]);
        m.run(0xD001).unwrap();
        assert_eq!(m.state.vf(), 0x1)
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut m = Machine::new();
        m.keypad.press(0xE);
        m.state.v[0x1] = 0xE;
        m.run(0xE19E).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut m = Machine::new();
        m.run(0xE19E).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut m = Machine::new();
        m.run(0xE1A1).unwrap();
        assert_eq!(m.state.pc(), 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut m = Machine::new();
        m.keypad.press(0xE);
        m.state.v[0x1] = 0xE;
        m.run(0xE1A1).unwrap();
        assert_eq!(m.state.pc(), 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut m = Machine::new();
        m.state.set_delay_timer(0xF);
        m.run(0xF107).unwrap();
        assert_eq!(m.state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_awaits_key_without_moving() {
        let mut m = Machine::new();
        assert_eq!(m.run(0xF10A), Ok(Effect::AwaitKey { x: 0x1 }));
        assert_eq!(m.state.pc(), 0x200);
    }

    #[test]
    fn test_fx15_ld() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0xF;
        m.run(0xF115).unwrap();
        assert_eq!(m.state.delay_timer(), 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0xF;
        m.run(0xF118).unwrap();
        assert_eq!(m.state.sound_timer(), 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut m = Machine::new();
        m.state.set_i(0x1);
        m.state.v[0x1] = 0x1;
        m.run(0xF11E).unwrap();
        assert_eq!(m.state.i(), 0x2);
    }

    #[test]
    fn test_fx1e_add_wraps() {
        let mut m = Machine::new();
        m.state.set_i(0xFFF);
        m.state.v[0x1] = 0x2;
        m.run(0xF11E).unwrap();
        assert_eq!(m.state.i(), 0x1);
        assert_eq!(m.state.vf(), 0x0);
    }

    #[test]
    fn test_fx29_ld() {
        let mut m = Machine::new();
        m.state.v[0x1] = 0x2;
        m.run(0xF129).unwrap();
        assert_eq!(m.state.i(), 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        let mut m = Machine::new();
        // 0x7B -> 123
        m.state.v[0x1] = 0x7B;
        m.state.set_i(0x300);
        m.run(0xF133).unwrap();
        assert_eq!(m.memory.read_slice(0x300, 3), vec![0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx_55_ld() {
        let mut m = Machine::new();
        m.state.set_i(0x300);
        m.state.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        m.run(0xF455).unwrap();
        assert_eq!(m.memory.read_slice(0x300, 6), vec![0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(m.state.i(), 0x300);
    }

    #[test]
    fn test_fx_65_ld() {
        let mut m = Machine::new();
        m.state.set_i(0x300);
        m.memory.write_slice(0x300, &[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        m.run(0xF465).unwrap();
        assert_eq!(m.state.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(m.state.i(), 0x300);
    }

    #[test]
    fn test_unmapped_is_ignored() {
        let mut m = Machine::new();
        m.run(0xF1FF).unwrap();
        assert_eq!(m.state.pc(), 0x202);
    }
}
