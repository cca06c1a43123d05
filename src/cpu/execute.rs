//! Execution: one exhaustive match over the decoded operation tag, plus the
//! arithmetic decode of the CB-prefixed page.

use log::warn;

use super::decode::{Addr, AluOp, Cond, Op, Operand8, Reg8, Reg16, RotOp, StackReg};
use super::{Cpu, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use crate::error::EmuError;
use crate::memory_bus::MemoryBus;

impl Cpu {
    /// Runs one decoded operation. PC has already advanced past the
    /// instruction. Returns the extra cycles beyond the table's base count
    /// (nonzero only for taken branches and the CB page).
    pub(super) fn execute(
        &mut self,
        op: Op,
        opcode: u8,
        bus: &mut MemoryBus,
    ) -> Result<u32, EmuError> {
        match op {
            Op::Nop => {}
            Op::Stop => {
                // Deliberately a two-byte no-op here; the padding byte was
                // consumed by the decode length.
                warn!("STOP executed at {:#06X}", self.op_pc);
            }
            Op::Halt => self.halted = true,
            Op::Di => self.schedule_di(),
            Op::Ei => self.schedule_ei(),

            Op::Ld { dst, src } => {
                let value = self.read_operand(src, bus);
                self.write_operand(dst, value, bus);
            }
            Op::LoadA(addr) => {
                let addr = self.resolve_addr(addr, bus);
                self.a = bus.read(addr);
            }
            Op::StoreA(addr) => {
                let addr = self.resolve_addr(addr, bus);
                bus.write(addr, self.a);
            }
            Op::Ld16Imm(rr) => {
                let value = self.imm16(bus);
                self.write_reg16(rr, value);
            }
            Op::LdSpHl => self.sp = self.hl(),
            Op::LdHlSpOffset => {
                let value = self.sp_plus_offset(bus);
                self.set_hl(value);
            }
            Op::StoreSp => {
                let addr = self.imm16(bus);
                bus.write(addr, self.sp as u8);
                bus.write(addr.wrapping_add(1), (self.sp >> 8) as u8);
            }

            Op::Inc8(operand) => {
                let value = self.read_operand(operand, bus);
                let result = self.inc8(value);
                self.write_operand(operand, result, bus);
            }
            Op::Dec8(operand) => {
                let value = self.read_operand(operand, bus);
                let result = self.dec8(value);
                self.write_operand(operand, result, bus);
            }
            Op::Inc16(rr) => {
                let value = self.read_reg16(rr).wrapping_add(1);
                self.write_reg16(rr, value);
            }
            Op::Dec16(rr) => {
                let value = self.read_reg16(rr).wrapping_sub(1);
                self.write_reg16(rr, value);
            }

            Op::Alu { op, src } => {
                let value = self.read_operand(src, bus);
                match op {
                    AluOp::Add => self.alu_add(value, false),
                    AluOp::Adc => self.alu_add(value, true),
                    AluOp::Sub => self.alu_sub(value, false),
                    AluOp::Sbc => self.alu_sub(value, true),
                    AluOp::And => self.alu_and(value),
                    AluOp::Xor => self.alu_xor(value),
                    AluOp::Or => self.alu_or(value),
                    AluOp::Cp => self.alu_cp(value),
                }
            }
            Op::AddHl(rr) => {
                let value = self.read_reg16(rr);
                self.add_hl(value);
            }
            Op::AddSpOffset => self.sp = self.sp_plus_offset(bus),

            // The accumulator rotates always clear Z, unlike their CB twins
            Op::RotateA(rot) => {
                let result = self.apply_rot(rot, self.a);
                self.a = result;
                self.set_flag(FLAG_Z, false);
            }
            Op::Daa => self.daa(),
            Op::Cpl => {
                self.a = !self.a;
                self.set_flag(FLAG_N | FLAG_H, true);
            }
            Op::Scf => {
                self.set_flag(FLAG_N | FLAG_H, false);
                self.set_flag(FLAG_C, true);
            }
            Op::Ccf => {
                let carry = self.flag(FLAG_C);
                self.set_flag(FLAG_N | FLAG_H, false);
                self.set_flag(FLAG_C, !carry);
            }

            Op::Jp(cond) => {
                let target = self.imm16(bus);
                if self.condition(cond) {
                    self.pc = target;
                    return Ok(taken_extra(cond, 4));
                }
            }
            Op::JpHl => self.pc = self.hl(),
            Op::Jr(cond) => {
                let offset = self.imm_offset(bus);
                if self.condition(cond) {
                    self.pc = self.pc.wrapping_add(offset as i16 as u16);
                    return Ok(taken_extra(cond, 4));
                }
            }
            Op::Call(cond) => {
                let target = self.imm16(bus);
                if self.condition(cond) {
                    self.push_word(self.pc, bus);
                    self.pc = target;
                    return Ok(taken_extra(cond, 12));
                }
            }
            Op::Ret(cond) => {
                if self.condition(cond) {
                    self.pc = self.pop_word(bus);
                    return Ok(taken_extra(cond, 12));
                }
            }
            Op::Reti => {
                self.pc = self.pop_word(bus);
                self.ime = true;
            }
            Op::Rst(target) => {
                self.push_word(self.pc, bus);
                self.pc = target as u16;
            }

            Op::Push(rr) => {
                let value = self.read_stack_reg(rr);
                self.push_word(value, bus);
            }
            Op::Pop(rr) => {
                let value = self.pop_word(bus);
                self.write_stack_reg(rr, value);
            }

            Op::Prefix => return Ok(self.execute_cb(bus)),
            Op::Illegal => return Err(self.illegal(opcode)),
        }
        Ok(0)
    }

    /// The CB page: bits 7-6 pick the group, 5-3 the sub-op or bit index,
    /// 2-0 the target (B C D E H L (HL) A). Returns extra cycles on top of
    /// the prefix entry's base 4.
    fn execute_cb(&mut self, bus: &mut MemoryBus) -> u32 {
        let cb = self.imm8(bus);
        let target = cb & 0x07;
        let selector = (cb >> 3) & 0x07;

        match cb >> 6 {
            0b00 => {
                let rot = match selector {
                    0 => RotOp::Rlc,
                    1 => RotOp::Rrc,
                    2 => RotOp::Rl,
                    3 => RotOp::Rr,
                    4 => RotOp::Sla,
                    5 => RotOp::Sra,
                    6 => RotOp::Swap,
                    _ => RotOp::Srl,
                };
                let value = self.read_cb_target(target, bus);
                let result = self.apply_rot(rot, value);
                self.write_cb_target(target, result, bus);
                if target == 6 { 12 } else { 4 }
            }
            0b01 => {
                let value = self.read_cb_target(target, bus);
                self.bit_test(selector, value);
                if target == 6 { 8 } else { 4 }
            }
            0b10 => {
                let value = self.read_cb_target(target, bus);
                self.write_cb_target(target, value & !(1 << selector), bus);
                if target == 6 { 12 } else { 4 }
            }
            _ => {
                let value = self.read_cb_target(target, bus);
                self.write_cb_target(target, value | (1 << selector), bus);
                if target == 6 { 12 } else { 4 }
            }
        }
    }

    fn apply_rot(&mut self, rot: RotOp, value: u8) -> u8 {
        match rot {
            RotOp::Rlc => self.rot_rlc(value),
            RotOp::Rrc => self.rot_rrc(value),
            RotOp::Rl => self.rot_rl(value),
            RotOp::Rr => self.rot_rr(value),
            RotOp::Sla => self.rot_sla(value),
            RotOp::Sra => self.rot_sra(value),
            RotOp::Swap => self.rot_swap(value),
            RotOp::Srl => self.rot_srl(value),
        }
    }

    // --- Operand plumbing ---

    fn read_operand(&self, operand: Operand8, bus: &MemoryBus) -> u8 {
        match operand {
            Operand8::Reg(r) => self.read_reg8(r),
            Operand8::HlInd => bus.read(self.hl()),
            Operand8::Imm => self.imm8(bus),
        }
    }

    fn write_operand(&mut self, operand: Operand8, value: u8, bus: &mut MemoryBus) {
        match operand {
            Operand8::Reg(r) => self.write_reg8(r, value),
            Operand8::HlInd => bus.write(self.hl(), value),
            Operand8::Imm => unreachable!("immediate is never a destination"),
        }
    }

    fn read_reg8(&self, r: Reg8) -> u8 {
        match r {
            Reg8::A => self.a,
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    fn write_reg8(&mut self, r: Reg8, value: u8) {
        match r {
            Reg8::A => self.a = value,
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    fn read_reg16(&self, rr: Reg16) -> u16 {
        match rr {
            Reg16::Bc => self.bc(),
            Reg16::De => self.de(),
            Reg16::Hl => self.hl(),
            Reg16::Sp => self.sp,
        }
    }

    fn write_reg16(&mut self, rr: Reg16, value: u16) {
        match rr {
            Reg16::Bc => self.set_bc(value),
            Reg16::De => self.set_de(value),
            Reg16::Hl => self.set_hl(value),
            Reg16::Sp => self.sp = value,
        }
    }

    fn read_stack_reg(&self, rr: StackReg) -> u16 {
        match rr {
            StackReg::Af => self.af(),
            StackReg::Bc => self.bc(),
            StackReg::De => self.de(),
            StackReg::Hl => self.hl(),
        }
    }

    fn write_stack_reg(&mut self, rr: StackReg, value: u16) {
        match rr {
            // set_af masks the flag low nibble
            StackReg::Af => self.set_af(value),
            StackReg::Bc => self.set_bc(value),
            StackReg::De => self.set_de(value),
            StackReg::Hl => self.set_hl(value),
        }
    }

    /// Effective address for the accumulator load/store family, including
    /// the HL post-increment/decrement side effects.
    fn resolve_addr(&mut self, addr: Addr, bus: &MemoryBus) -> u16 {
        match addr {
            Addr::Bc => self.bc(),
            Addr::De => self.de(),
            Addr::HlInc => {
                let hl = self.hl();
                self.set_hl(hl.wrapping_add(1));
                hl
            }
            Addr::HlDec => {
                let hl = self.hl();
                self.set_hl(hl.wrapping_sub(1));
                hl
            }
            Addr::Abs => self.imm16(bus),
            Addr::High => 0xFF00 | self.imm8(bus) as u16,
            Addr::HighC => 0xFF00 | self.c as u16,
        }
    }

    fn read_cb_target(&self, target: u8, bus: &MemoryBus) -> u8 {
        match target {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            6 => bus.read(self.hl()),
            _ => self.a,
        }
    }

    fn write_cb_target(&mut self, target: u8, value: u8, bus: &mut MemoryBus) {
        match target {
            0 => self.b = value,
            1 => self.c = value,
            2 => self.d = value,
            3 => self.e = value,
            4 => self.h = value,
            5 => self.l = value,
            6 => bus.write(self.hl(), value),
            _ => self.a = value,
        }
    }
}

/// Unconditional branches already carry their full cost in the base count.
fn taken_extra(cond: Cond, extra: u32) -> u32 {
    if cond == Cond::Always { 0 } else { extra }
}
