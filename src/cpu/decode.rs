//! The decoded primary opcode table.
//!
//! One entry per byte: mnemonic, instruction length, base machine cycles
//! (the not-taken count for conditionals) and a tagged operation. The
//! CB-prefixed page is not tabled; its bit fields decode arithmetically in
//! `execute.rs`.

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg16 {
    Bc,
    De,
    Hl,
    Sp,
}

/// Pairs addressable by PUSH/POP; AF replaces SP here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackReg {
    Af,
    Bc,
    De,
    Hl,
}

/// An 8-bit operand: register, memory via HL, or an immediate byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand8 {
    Reg(Reg8),
    HlInd,
    Imm,
}

/// Address forms used by the accumulator load/store family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addr {
    Bc,
    De,
    HlInc,
    HlDec,
    Abs,
    High,
    HighC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Always,
    Nz,
    Z,
    Nc,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,

    /// LD between 8-bit operands (register, (HL), immediate source).
    Ld { dst: Operand8, src: Operand8 },
    /// A <- (addr form), with HL post-inc/dec side effects where applicable.
    LoadA(Addr),
    /// (addr form) <- A.
    StoreA(Addr),
    Ld16Imm(Reg16),
    LdSpHl,
    LdHlSpOffset,
    StoreSp,

    Inc8(Operand8),
    Dec8(Operand8),
    Inc16(Reg16),
    Dec16(Reg16),

    Alu { op: AluOp, src: Operand8 },
    AddHl(Reg16),
    AddSpOffset,

    RotateA(RotOp),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jp(Cond),
    JpHl,
    Jr(Cond),
    Call(Cond),
    Ret(Cond),
    Reti,
    Rst(u8),

    Push(StackReg),
    Pop(StackReg),

    Prefix,
    Illegal,
}

pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub op: Op,
}

macro_rules! entry {
    ($mnemonic:expr, $length:expr, $cycles:expr, $op:expr) => {
        OpcodeEntry {
            mnemonic: $mnemonic,
            length: $length,
            cycles: $cycles,
            op: $op,
        }
    };
}

macro_rules! illegal {
    () => {
        entry!("??", 1, 4, Op::Illegal)
    };
}

use Addr::*;
use AluOp::*;
use Op::*;
use Operand8::{HlInd, Imm};
use Reg8::*;

const fn reg(r: Reg8) -> Operand8 {
    Operand8::Reg(r)
}

lazy_static! {
    pub static ref OPCODES: [OpcodeEntry; 256] = [
        // --- 0x00 ---
        entry!("NOP", 1, 4, Nop),
        entry!("LD BC, d16", 3, 12, Ld16Imm(Reg16::Bc)),
        entry!("LD (BC), A", 1, 8, StoreA(Bc)),
        entry!("INC BC", 1, 8, Inc16(Reg16::Bc)),
        entry!("INC B", 1, 4, Inc8(reg(B))),
        entry!("DEC B", 1, 4, Dec8(reg(B))),
        entry!("LD B, d8", 2, 8, Ld { dst: reg(B), src: Imm }),
        entry!("RLCA", 1, 4, RotateA(RotOp::Rlc)),
        entry!("LD (a16), SP", 3, 20, StoreSp),
        entry!("ADD HL, BC", 1, 8, AddHl(Reg16::Bc)),
        entry!("LD A, (BC)", 1, 8, LoadA(Bc)),
        entry!("DEC BC", 1, 8, Dec16(Reg16::Bc)),
        entry!("INC C", 1, 4, Inc8(reg(C))),
        entry!("DEC C", 1, 4, Dec8(reg(C))),
        entry!("LD C, d8", 2, 8, Ld { dst: reg(C), src: Imm }),
        entry!("RRCA", 1, 4, RotateA(RotOp::Rrc)),
        // --- 0x10 ---
        entry!("STOP", 2, 4, Stop),
        entry!("LD DE, d16", 3, 12, Ld16Imm(Reg16::De)),
        entry!("LD (DE), A", 1, 8, StoreA(De)),
        entry!("INC DE", 1, 8, Inc16(Reg16::De)),
        entry!("INC D", 1, 4, Inc8(reg(D))),
        entry!("DEC D", 1, 4, Dec8(reg(D))),
        entry!("LD D, d8", 2, 8, Ld { dst: reg(D), src: Imm }),
        entry!("RLA", 1, 4, RotateA(RotOp::Rl)),
        entry!("JR r8", 2, 12, Jr(Cond::Always)),
        entry!("ADD HL, DE", 1, 8, AddHl(Reg16::De)),
        entry!("LD A, (DE)", 1, 8, LoadA(De)),
        entry!("DEC DE", 1, 8, Dec16(Reg16::De)),
        entry!("INC E", 1, 4, Inc8(reg(E))),
        entry!("DEC E", 1, 4, Dec8(reg(E))),
        entry!("LD E, d8", 2, 8, Ld { dst: reg(E), src: Imm }),
        entry!("RRA", 1, 4, RotateA(RotOp::Rr)),
        // --- 0x20 ---
        entry!("JR NZ, r8", 2, 8, Jr(Cond::Nz)),
        entry!("LD HL, d16", 3, 12, Ld16Imm(Reg16::Hl)),
        entry!("LD (HL+), A", 1, 8, StoreA(HlInc)),
        entry!("INC HL", 1, 8, Inc16(Reg16::Hl)),
        entry!("INC H", 1, 4, Inc8(reg(H))),
        entry!("DEC H", 1, 4, Dec8(reg(H))),
        entry!("LD H, d8", 2, 8, Ld { dst: reg(H), src: Imm }),
        entry!("DAA", 1, 4, Daa),
        entry!("JR Z, r8", 2, 8, Jr(Cond::Z)),
        entry!("ADD HL, HL", 1, 8, AddHl(Reg16::Hl)),
        entry!("LD A, (HL+)", 1, 8, LoadA(HlInc)),
        entry!("DEC HL", 1, 8, Dec16(Reg16::Hl)),
        entry!("INC L", 1, 4, Inc8(reg(L))),
        entry!("DEC L", 1, 4, Dec8(reg(L))),
        entry!("LD L, d8", 2, 8, Ld { dst: reg(L), src: Imm }),
        entry!("CPL", 1, 4, Cpl),
        // --- 0x30 ---
        entry!("JR NC, r8", 2, 8, Jr(Cond::Nc)),
        entry!("LD SP, d16", 3, 12, Ld16Imm(Reg16::Sp)),
        entry!("LD (HL-), A", 1, 8, StoreA(HlDec)),
        entry!("INC SP", 1, 8, Inc16(Reg16::Sp)),
        entry!("INC (HL)", 1, 12, Inc8(HlInd)),
        entry!("DEC (HL)", 1, 12, Dec8(HlInd)),
        entry!("LD (HL), d8", 2, 12, Ld { dst: HlInd, src: Imm }),
        entry!("SCF", 1, 4, Scf),
        entry!("JR C, r8", 2, 8, Jr(Cond::C)),
        entry!("ADD HL, SP", 1, 8, AddHl(Reg16::Sp)),
        entry!("LD A, (HL-)", 1, 8, LoadA(HlDec)),
        entry!("DEC SP", 1, 8, Dec16(Reg16::Sp)),
        entry!("INC A", 1, 4, Inc8(reg(A))),
        entry!("DEC A", 1, 4, Dec8(reg(A))),
        entry!("LD A, d8", 2, 8, Ld { dst: reg(A), src: Imm }),
        entry!("CCF", 1, 4, Ccf),
        // --- 0x40: LD B, r ---
        entry!("LD B, B", 1, 4, Ld { dst: reg(B), src: reg(B) }),
        entry!("LD B, C", 1, 4, Ld { dst: reg(B), src: reg(C) }),
        entry!("LD B, D", 1, 4, Ld { dst: reg(B), src: reg(D) }),
        entry!("LD B, E", 1, 4, Ld { dst: reg(B), src: reg(E) }),
        entry!("LD B, H", 1, 4, Ld { dst: reg(B), src: reg(H) }),
        entry!("LD B, L", 1, 4, Ld { dst: reg(B), src: reg(L) }),
        entry!("LD B, (HL)", 1, 8, Ld { dst: reg(B), src: HlInd }),
        entry!("LD B, A", 1, 4, Ld { dst: reg(B), src: reg(A) }),
        // --- 0x48: LD C, r ---
        entry!("LD C, B", 1, 4, Ld { dst: reg(C), src: reg(B) }),
        entry!("LD C, C", 1, 4, Ld { dst: reg(C), src: reg(C) }),
        entry!("LD C, D", 1, 4, Ld { dst: reg(C), src: reg(D) }),
        entry!("LD C, E", 1, 4, Ld { dst: reg(C), src: reg(E) }),
        entry!("LD C, H", 1, 4, Ld { dst: reg(C), src: reg(H) }),
        entry!("LD C, L", 1, 4, Ld { dst: reg(C), src: reg(L) }),
        entry!("LD C, (HL)", 1, 8, Ld { dst: reg(C), src: HlInd }),
        entry!("LD C, A", 1, 4, Ld { dst: reg(C), src: reg(A) }),
        // --- 0x50: LD D, r ---
        entry!("LD D, B", 1, 4, Ld { dst: reg(D), src: reg(B) }),
        entry!("LD D, C", 1, 4, Ld { dst: reg(D), src: reg(C) }),
        entry!("LD D, D", 1, 4, Ld { dst: reg(D), src: reg(D) }),
        entry!("LD D, E", 1, 4, Ld { dst: reg(D), src: reg(E) }),
        entry!("LD D, H", 1, 4, Ld { dst: reg(D), src: reg(H) }),
        entry!("LD D, L", 1, 4, Ld { dst: reg(D), src: reg(L) }),
        entry!("LD D, (HL)", 1, 8, Ld { dst: reg(D), src: HlInd }),
        entry!("LD D, A", 1, 4, Ld { dst: reg(D), src: reg(A) }),
        // --- 0x58: LD E, r ---
        entry!("LD E, B", 1, 4, Ld { dst: reg(E), src: reg(B) }),
        entry!("LD E, C", 1, 4, Ld { dst: reg(E), src: reg(C) }),
        entry!("LD E, D", 1, 4, Ld { dst: reg(E), src: reg(D) }),
        entry!("LD E, E", 1, 4, Ld { dst: reg(E), src: reg(E) }),
        entry!("LD E, H", 1, 4, Ld { dst: reg(E), src: reg(H) }),
        entry!("LD E, L", 1, 4, Ld { dst: reg(E), src: reg(L) }),
        entry!("LD E, (HL)", 1, 8, Ld { dst: reg(E), src: HlInd }),
        entry!("LD E, A", 1, 4, Ld { dst: reg(E), src: reg(A) }),
        // --- 0x60: LD H, r ---
        entry!("LD H, B", 1, 4, Ld { dst: reg(H), src: reg(B) }),
        entry!("LD H, C", 1, 4, Ld { dst: reg(H), src: reg(C) }),
        entry!("LD H, D", 1, 4, Ld { dst: reg(H), src: reg(D) }),
        entry!("LD H, E", 1, 4, Ld { dst: reg(H), src: reg(E) }),
        entry!("LD H, H", 1, 4, Ld { dst: reg(H), src: reg(H) }),
        entry!("LD H, L", 1, 4, Ld { dst: reg(H), src: reg(L) }),
        entry!("LD H, (HL)", 1, 8, Ld { dst: reg(H), src: HlInd }),
        entry!("LD H, A", 1, 4, Ld { dst: reg(H), src: reg(A) }),
        // --- 0x68: LD L, r ---
        entry!("LD L, B", 1, 4, Ld { dst: reg(L), src: reg(B) }),
        entry!("LD L, C", 1, 4, Ld { dst: reg(L), src: reg(C) }),
        entry!("LD L, D", 1, 4, Ld { dst: reg(L), src: reg(D) }),
        entry!("LD L, E", 1, 4, Ld { dst: reg(L), src: reg(E) }),
        entry!("LD L, H", 1, 4, Ld { dst: reg(L), src: reg(H) }),
        entry!("LD L, L", 1, 4, Ld { dst: reg(L), src: reg(L) }),
        entry!("LD L, (HL)", 1, 8, Ld { dst: reg(L), src: HlInd }),
        entry!("LD L, A", 1, 4, Ld { dst: reg(L), src: reg(A) }),
        // --- 0x70: LD (HL), r / HALT ---
        entry!("LD (HL), B", 1, 8, Ld { dst: HlInd, src: reg(B) }),
        entry!("LD (HL), C", 1, 8, Ld { dst: HlInd, src: reg(C) }),
        entry!("LD (HL), D", 1, 8, Ld { dst: HlInd, src: reg(D) }),
        entry!("LD (HL), E", 1, 8, Ld { dst: HlInd, src: reg(E) }),
        entry!("LD (HL), H", 1, 8, Ld { dst: HlInd, src: reg(H) }),
        entry!("LD (HL), L", 1, 8, Ld { dst: HlInd, src: reg(L) }),
        entry!("HALT", 1, 4, Halt),
        entry!("LD (HL), A", 1, 8, Ld { dst: HlInd, src: reg(A) }),
        // --- 0x78: LD A, r ---
        entry!("LD A, B", 1, 4, Ld { dst: reg(A), src: reg(B) }),
        entry!("LD A, C", 1, 4, Ld { dst: reg(A), src: reg(C) }),
        entry!("LD A, D", 1, 4, Ld { dst: reg(A), src: reg(D) }),
        entry!("LD A, E", 1, 4, Ld { dst: reg(A), src: reg(E) }),
        entry!("LD A, H", 1, 4, Ld { dst: reg(A), src: reg(H) }),
        entry!("LD A, L", 1, 4, Ld { dst: reg(A), src: reg(L) }),
        entry!("LD A, (HL)", 1, 8, Ld { dst: reg(A), src: HlInd }),
        entry!("LD A, A", 1, 4, Ld { dst: reg(A), src: reg(A) }),
        // --- 0x80: ADD / ADC ---
        entry!("ADD A, B", 1, 4, Alu { op: Add, src: reg(B) }),
        entry!("ADD A, C", 1, 4, Alu { op: Add, src: reg(C) }),
        entry!("ADD A, D", 1, 4, Alu { op: Add, src: reg(D) }),
        entry!("ADD A, E", 1, 4, Alu { op: Add, src: reg(E) }),
        entry!("ADD A, H", 1, 4, Alu { op: Add, src: reg(H) }),
        entry!("ADD A, L", 1, 4, Alu { op: Add, src: reg(L) }),
        entry!("ADD A, (HL)", 1, 8, Alu { op: Add, src: HlInd }),
        entry!("ADD A, A", 1, 4, Alu { op: Add, src: reg(A) }),
        entry!("ADC A, B", 1, 4, Alu { op: Adc, src: reg(B) }),
        entry!("ADC A, C", 1, 4, Alu { op: Adc, src: reg(C) }),
        entry!("ADC A, D", 1, 4, Alu { op: Adc, src: reg(D) }),
        entry!("ADC A, E", 1, 4, Alu { op: Adc, src: reg(E) }),
        entry!("ADC A, H", 1, 4, Alu { op: Adc, src: reg(H) }),
        entry!("ADC A, L", 1, 4, Alu { op: Adc, src: reg(L) }),
        entry!("ADC A, (HL)", 1, 8, Alu { op: Adc, src: HlInd }),
        entry!("ADC A, A", 1, 4, Alu { op: Adc, src: reg(A) }),
        // --- 0x90: SUB / SBC ---
        entry!("SUB A, B", 1, 4, Alu { op: Sub, src: reg(B) }),
        entry!("SUB A, C", 1, 4, Alu { op: Sub, src: reg(C) }),
        entry!("SUB A, D", 1, 4, Alu { op: Sub, src: reg(D) }),
        entry!("SUB A, E", 1, 4, Alu { op: Sub, src: reg(E) }),
        entry!("SUB A, H", 1, 4, Alu { op: Sub, src: reg(H) }),
        entry!("SUB A, L", 1, 4, Alu { op: Sub, src: reg(L) }),
        entry!("SUB A, (HL)", 1, 8, Alu { op: Sub, src: HlInd }),
        entry!("SUB A, A", 1, 4, Alu { op: Sub, src: reg(A) }),
        entry!("SBC A, B", 1, 4, Alu { op: Sbc, src: reg(B) }),
        entry!("SBC A, C", 1, 4, Alu { op: Sbc, src: reg(C) }),
        entry!("SBC A, D", 1, 4, Alu { op: Sbc, src: reg(D) }),
        entry!("SBC A, E", 1, 4, Alu { op: Sbc, src: reg(E) }),
        entry!("SBC A, H", 1, 4, Alu { op: Sbc, src: reg(H) }),
        entry!("SBC A, L", 1, 4, Alu { op: Sbc, src: reg(L) }),
        entry!("SBC A, (HL)", 1, 8, Alu { op: Sbc, src: HlInd }),
        entry!("SBC A, A", 1, 4, Alu { op: Sbc, src: reg(A) }),
        // --- 0xA0: AND / XOR ---
        entry!("AND A, B", 1, 4, Alu { op: And, src: reg(B) }),
        entry!("AND A, C", 1, 4, Alu { op: And, src: reg(C) }),
        entry!("AND A, D", 1, 4, Alu { op: And, src: reg(D) }),
        entry!("AND A, E", 1, 4, Alu { op: And, src: reg(E) }),
        entry!("AND A, H", 1, 4, Alu { op: And, src: reg(H) }),
        entry!("AND A, L", 1, 4, Alu { op: And, src: reg(L) }),
        entry!("AND A, (HL)", 1, 8, Alu { op: And, src: HlInd }),
        entry!("AND A, A", 1, 4, Alu { op: And, src: reg(A) }),
        entry!("XOR A, B", 1, 4, Alu { op: Xor, src: reg(B) }),
        entry!("XOR A, C", 1, 4, Alu { op: Xor, src: reg(C) }),
        entry!("XOR A, D", 1, 4, Alu { op: Xor, src: reg(D) }),
        entry!("XOR A, E", 1, 4, Alu { op: Xor, src: reg(E) }),
        entry!("XOR A, H", 1, 4, Alu { op: Xor, src: reg(H) }),
        entry!("XOR A, L", 1, 4, Alu { op: Xor, src: reg(L) }),
        entry!("XOR A, (HL)", 1, 8, Alu { op: Xor, src: HlInd }),
        entry!("XOR A, A", 1, 4, Alu { op: Xor, src: reg(A) }),
        // --- 0xB0: OR / CP ---
        entry!("OR A, B", 1, 4, Alu { op: Or, src: reg(B) }),
        entry!("OR A, C", 1, 4, Alu { op: Or, src: reg(C) }),
        entry!("OR A, D", 1, 4, Alu { op: Or, src: reg(D) }),
        entry!("OR A, E", 1, 4, Alu { op: Or, src: reg(E) }),
        entry!("OR A, H", 1, 4, Alu { op: Or, src: reg(H) }),
        entry!("OR A, L", 1, 4, Alu { op: Or, src: reg(L) }),
        entry!("OR A, (HL)", 1, 8, Alu { op: Or, src: HlInd }),
        entry!("OR A, A", 1, 4, Alu { op: Or, src: reg(A) }),
        entry!("CP A, B", 1, 4, Alu { op: Cp, src: reg(B) }),
        entry!("CP A, C", 1, 4, Alu { op: Cp, src: reg(C) }),
        entry!("CP A, D", 1, 4, Alu { op: Cp, src: reg(D) }),
        entry!("CP A, E", 1, 4, Alu { op: Cp, src: reg(E) }),
        entry!("CP A, H", 1, 4, Alu { op: Cp, src: reg(H) }),
        entry!("CP A, L", 1, 4, Alu { op: Cp, src: reg(L) }),
        entry!("CP A, (HL)", 1, 8, Alu { op: Cp, src: HlInd }),
        entry!("CP A, A", 1, 4, Alu { op: Cp, src: reg(A) }),
        // --- 0xC0 ---
        entry!("RET NZ", 1, 8, Ret(Cond::Nz)),
        entry!("POP BC", 1, 12, Pop(StackReg::Bc)),
        entry!("JP NZ, a16", 3, 12, Jp(Cond::Nz)),
        entry!("JP a16", 3, 16, Jp(Cond::Always)),
        entry!("CALL NZ, a16", 3, 12, Call(Cond::Nz)),
        entry!("PUSH BC", 1, 16, Push(StackReg::Bc)),
        entry!("ADD A, d8", 2, 8, Alu { op: Add, src: Imm }),
        entry!("RST 00H", 1, 16, Rst(0x00)),
        entry!("RET Z", 1, 8, Ret(Cond::Z)),
        entry!("RET", 1, 16, Ret(Cond::Always)),
        entry!("JP Z, a16", 3, 12, Jp(Cond::Z)),
        entry!("PREFIX CB", 2, 4, Prefix),
        entry!("CALL Z, a16", 3, 12, Call(Cond::Z)),
        entry!("CALL a16", 3, 24, Call(Cond::Always)),
        entry!("ADC A, d8", 2, 8, Alu { op: Adc, src: Imm }),
        entry!("RST 08H", 1, 16, Rst(0x08)),
        // --- 0xD0 ---
        entry!("RET NC", 1, 8, Ret(Cond::Nc)),
        entry!("POP DE", 1, 12, Pop(StackReg::De)),
        entry!("JP NC, a16", 3, 12, Jp(Cond::Nc)),
        illegal!(),
        entry!("CALL NC, a16", 3, 12, Call(Cond::Nc)),
        entry!("PUSH DE", 1, 16, Push(StackReg::De)),
        entry!("SUB A, d8", 2, 8, Alu { op: Sub, src: Imm }),
        entry!("RST 10H", 1, 16, Rst(0x10)),
        entry!("RET C", 1, 8, Ret(Cond::C)),
        entry!("RETI", 1, 16, Reti),
        entry!("JP C, a16", 3, 12, Jp(Cond::C)),
        illegal!(),
        entry!("CALL C, a16", 3, 12, Call(Cond::C)),
        illegal!(),
        entry!("SBC A, d8", 2, 8, Alu { op: Sbc, src: Imm }),
        entry!("RST 18H", 1, 16, Rst(0x18)),
        // --- 0xE0 ---
        entry!("LDH (a8), A", 2, 12, StoreA(High)),
        entry!("POP HL", 1, 12, Pop(StackReg::Hl)),
        entry!("LD (C), A", 1, 8, StoreA(HighC)),
        illegal!(),
        illegal!(),
        entry!("PUSH HL", 1, 16, Push(StackReg::Hl)),
        entry!("AND A, d8", 2, 8, Alu { op: And, src: Imm }),
        entry!("RST 20H", 1, 16, Rst(0x20)),
        entry!("ADD SP, r8", 2, 16, AddSpOffset),
        entry!("JP HL", 1, 4, JpHl),
        entry!("LD (a16), A", 3, 16, StoreA(Abs)),
        illegal!(),
        illegal!(),
        illegal!(),
        entry!("XOR A, d8", 2, 8, Alu { op: Xor, src: Imm }),
        entry!("RST 28H", 1, 16, Rst(0x28)),
        // --- 0xF0 ---
        entry!("LDH A, (a8)", 2, 12, LoadA(High)),
        entry!("POP AF", 1, 12, Pop(StackReg::Af)),
        entry!("LD A, (C)", 1, 8, LoadA(HighC)),
        entry!("DI", 1, 4, Di),
        illegal!(),
        entry!("PUSH AF", 1, 16, Push(StackReg::Af)),
        entry!("OR A, d8", 2, 8, Alu { op: Or, src: Imm }),
        entry!("RST 30H", 1, 16, Rst(0x30)),
        entry!("LD HL, SP+r8", 2, 12, LdHlSpOffset),
        entry!("LD SP, HL", 1, 8, LdSpHl),
        entry!("LD A, (a16)", 3, 16, LoadA(Abs)),
        entry!("EI", 1, 4, Ei),
        illegal!(),
        illegal!(),
        entry!("CP A, d8", 2, 8, Alu { op: Cp, src: Imm }),
        entry!("RST 38H", 1, 16, Rst(0x38)),
    ];
}
