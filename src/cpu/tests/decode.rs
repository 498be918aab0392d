// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Exercises the instruction decode logic: operand field slicing, the
//! closed set of recognized patterns, and the unmapped-opcode policy.

use super::*;

/// Operand fields are pure bit-slices of the fetched word
mod fields {
    use super::*;

    #[test]
    fn nnn() {
        assert_eq!(Insn::Jump { n: 0x234 }, decode_one(0x1234));
        assert_eq!(Insn::Call { n: 0xabc }, decode_one(0x2abc));
        assert_eq!(Insn::LoadIndex { n: 0xfed }, decode_one(0xafed));
    }

    #[test]
    fn x_kk() {
        assert_eq!(Insn::LoadImm { x: 0xa, k: 0x55 }, decode_one(0x6a55));
        assert_eq!(Insn::AddImm { x: 0xb, k: 0x01 }, decode_one(0x7b01));
        assert_eq!(Insn::Random { x: 0x0, k: 0xff }, decode_one(0xc0ff));
    }

    #[test]
    fn x_y_n() {
        assert_eq!(Insn::Draw { x: 1, y: 2, n: 0xf }, decode_one(0xd12f));
        assert_eq!(Insn::Add { x: 0xe, y: 0x3 }, decode_one(0x8e34));
    }

    fn decode_one(word: u16) -> Insn {
        Insn::decode(&word.to_be_bytes())
            .expect("word should decode")
            .1
    }
}

/// Words outside the instruction set fail to decode
#[rustfmt::skip]
mod unmapped {
    use super::*;
    fn refused(word: u16) { assert!(Insn::decode(&word.to_be_bytes()).is_err()); }

    #[test] fn sys_call() { refused(0x0123); }
    #[test] fn skip_eq_low_bits() { refused(0x500f); }
    #[test] fn alu_gap() { refused(0x8008); refused(0x800f); }
    #[test] fn skip_ne_low_bits() { refused(0x900f); }
    #[test] fn key_skip_gap() { refused(0xe000); refused(0xe0a2); }
    #[test] fn io_gap() { refused(0xf000); refused(0xf0ff); }
}

/// Policy for unmapped opcodes: no-op by default, an error under strict
mod policy {
    use super::*;

    #[test]
    fn permissive_ignores() {
        let mut cpu = setup();
        let pc = cpu.pc;
        exec(&mut cpu, 0x500f).unwrap();
        assert_eq!(pc.wrapping_add(2), cpu.pc);
        assert_eq!([0; 16], cpu.v);
        assert_eq!(1, cpu.cycle());
    }

    #[test]
    fn strict_fails() {
        let flags = Flags {
            strict: true,
            ..Default::default()
        };
        let mut cpu = CPU::with_seed(flags, 0xC0FFEE);
        let err = exec(&mut cpu, 0x500f).unwrap_err();
        assert!(matches!(
            err,
            Error::UnrecognizedOpcode {
                word: 0x500f,
                addr: 0x200
            }
        ));
    }
}
