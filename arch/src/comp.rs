use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Computation field of a C-instruction (`a c1 c2 c3 c4 c5 c6`).
///
/// The `a` bit selects `M` (memory at `A`) instead of the `A` register as the
/// second ALU operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display, EnumIter)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Comp {
    #[strum(serialize = "0")]   Zero      = 0b0101010,
    #[strum(serialize = "1")]   One       = 0b0111111,
    #[strum(serialize = "-1")]  MinusOne  = 0b0111010,
    #[strum(serialize = "D")]   D         = 0b0001100,
    #[strum(serialize = "A")]   A         = 0b0110000,
    #[strum(serialize = "!D")]  NotD      = 0b0001101,
    #[strum(serialize = "!A")]  NotA      = 0b0110001,
    #[strum(serialize = "-D")]  NegD      = 0b0001111,
    #[strum(serialize = "-A")]  NegA      = 0b0110011,
    #[strum(serialize = "D+1")] DPlusOne  = 0b0011111,
    #[strum(serialize = "A+1")] APlusOne  = 0b0110111,
    #[strum(serialize = "D-1")] DMinusOne = 0b0001110,
    #[strum(serialize = "A-1")] AMinusOne = 0b0110010,
    #[strum(serialize = "D+A")] DPlusA    = 0b0000010,
    #[strum(serialize = "D-A")] DMinusA   = 0b0010011,
    #[strum(serialize = "A-D")] AMinusD   = 0b0000111,
    #[strum(serialize = "D&A")] DAndA     = 0b0000000,
    #[strum(serialize = "D|A")] DOrA      = 0b0010101,

    #[strum(serialize = "M")]   M         = 0b1110000,
    #[strum(serialize = "!M")]  NotM      = 0b1110001,
    #[strum(serialize = "-M")]  NegM      = 0b1110011,
    #[strum(serialize = "M+1")] MPlusOne  = 0b1110111,
    #[strum(serialize = "M-1")] MMinusOne = 0b1110010,
    #[strum(serialize = "D+M")] DPlusM    = 0b1000010,
    #[strum(serialize = "D-M")] DMinusM   = 0b1010011,
    #[strum(serialize = "M-D")] MMinusD   = 0b1000111,
    #[strum(serialize = "D&M")] DAndM     = 0b1000000,
    #[strum(serialize = "D|M")] DOrM      = 0b1010101,
}

impl Comp {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    /// Whether the computation reads memory (`a` bit set).
    pub fn reads_memory(self) -> bool {
        self.bits() & 0b1000000 != 0
    }
}
