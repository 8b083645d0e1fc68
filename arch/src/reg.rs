use strum::{Display, EnumIter, EnumString};

/// Base address of the memory-mapped screen.
pub const SCREEN: u16 = 0x4000;
/// Address of the memory-mapped keyboard.
pub const KBD: u16 = 0x6000;
/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Symbols bound before assembly starts.
///
/// `SP`, `LCL`, `ARG`, `THIS` and `THAT` alias `R0`..`R4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum Reg {
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    SCREEN,
    KBD,
}

impl Reg {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn addr(self) -> u16 {
        match self {
            Reg::SP | Reg::R0 => 0,
            Reg::LCL | Reg::R1 => 1,
            Reg::ARG | Reg::R2 => 2,
            Reg::THIS | Reg::R3 => 3,
            Reg::THAT | Reg::R4 => 4,
            Reg::R5 => 5,
            Reg::R6 => 6,
            Reg::R7 => 7,
            Reg::R8 => 8,
            Reg::R9 => 9,
            Reg::R10 => 10,
            Reg::R11 => 11,
            Reg::R12 => 12,
            Reg::R13 => 13,
            Reg::R14 => 14,
            Reg::R15 => 15,
            Reg::SCREEN => SCREEN,
            Reg::KBD => KBD,
        }
    }
}
