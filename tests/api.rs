//! Testing Cheep's public API surface
use cheep::prelude::*;
use std::{collections::hash_map::DefaultHasher, hash::Hash};

#[test]
fn construction() {
    let cpu = CPU::new(Flags::default());
    assert_eq!(LOAD_BASE, cpu.pc());
    assert_eq!(0, cpu.i());
    assert_eq!(0, cpu.cycle());
    assert_eq!(&[0u8; 16], cpu.v());
    assert_eq!(WIDTH * HEIGHT, cpu.framebuffer().len());
    assert!(cpu.framebuffer().iter().all(|&px| px == 0));
    println!("{cpu:?}"); // Debug
}

#[test]
fn load_and_run() {
    let mut cpu = CPU::new(Flags::default());
    cpu.load_program_bytes(&[0x60, 0x05, 0x70, 0x03]).unwrap();
    cpu.step().unwrap().step().unwrap();
    assert_eq!(8, cpu.v()[0]);
    assert_eq!(LOAD_BASE + 4, cpu.pc());
}

#[test]
fn load_missing_file() {
    let mut cpu = CPU::new(Flags::default());
    cpu.load_program("this/path/does/not/exist.ch8")
        .expect_err("A missing ROM should surface as an error");
}

#[test]
fn load_oversized_image() {
    let mut cpu = CPU::new(Flags::default());
    let rom = vec![0; RAM_SIZE];
    let err = cpu.load_program_bytes(&rom).unwrap_err();
    // Print it with Display and Debug
    println!("{err} {err:?}");
}

mod keys {
    use super::*;

    #[test]
    fn press_release() {
        let mut cpu = CPU::new(Flags::default());
        assert!(cpu.press(0x7).unwrap());
        assert!(!cpu.press(0x7).unwrap());
        assert!(cpu.release(0x7).unwrap());
        assert!(!cpu.release(0x7).unwrap());
    }

    #[test]
    fn press_invalid_key() {
        let mut cpu = CPU::new(Flags::default());
        cpu.press(0x21345134)
            .expect_err("This should produce an Error::InvalidKey");
    }

    #[test]
    fn release_invalid_key() {
        let mut cpu = CPU::new(Flags::default());
        cpu.release(0x21345134)
            .expect_err("This should produce an Error::InvalidKey");
    }

    #[test]
    fn set_keys_drives_skips() {
        let mut cpu = CPU::new(Flags::default());
        let mut keys = [false; 16];
        keys[0] = true;
        cpu.set_keys(keys);
        // e09e with v0 = 0: key 0 held, so the skip is taken
        cpu.load_program_bytes(&[0xe0, 0x9e]).unwrap();
        cpu.step().unwrap();
        assert_eq!(LOAD_BASE + 4, cpu.pc());
    }
}

#[test]
fn set_invalid_reg() {
    let mut cpu = CPU::new(Flags::default());
    cpu.set_v(0x21345134, 0xff)
        .expect_err("This should produce an Error::InvalidRegister");
}

#[test]
fn seeded_runs_agree() {
    let run = || {
        let mut cpu = CPU::with_seed(Flags::default(), 1234);
        cpu.load_program_bytes(&[0xc0, 0xff]).unwrap();
        cpu.step().unwrap();
        cpu.v()[0]
    };
    assert_eq!(run(), run());
}

mod flags {
    use super::*;

    #[test]
    fn default_is_permissive_and_modern() {
        assert_eq!(
            Flags::default(),
            Flags {
                strict: false,
                quirks: Quirks {
                    shift_src_vy: false,
                    jump_offset_vx: false,
                },
            }
        );
    }

    #[test]
    fn construction_keeps_flags() {
        let flags = Flags {
            strict: true,
            quirks: Quirks::from(true),
        };
        let cpu = CPU::new(flags);
        assert_eq!(flags, cpu.flags());
    }
}

mod quirks {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(
            Quirks::from(true),
            Quirks {
                shift_src_vy: true,
                jump_offset_vx: true,
            }
        );
        assert_eq!(Quirks::from(false), Quirks::default());
    }

    #[test]
    fn ord() {
        assert!(Quirks::from(false) < Quirks::from(true));
    }

    #[test]
    fn hash() {
        let mut hasher = DefaultHasher::new();
        Quirks::from(true).hash(&mut hasher);
        println!("{hasher:?}");
    }
}
