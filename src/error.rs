use thiserror::Error;

/// The two fatal conditions the core can surface. Everything else the guest
/// can do wrong (ROM writes, unusable-region writes, off-screen sprites) is
/// swallowed by bus or PPU policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmuError {
    #[error("illegal opcode {opcode:#04X} at {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("cannot load ROM: {reason}")]
    RomLoad { reason: String },
}
