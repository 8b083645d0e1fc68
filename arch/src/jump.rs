use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Jump field of a C-instruction (`j1 j2 j3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, EnumString, Display, EnumIter)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    JGT  = 0b001,
    JEQ  = 0b010,
    JGE  = 0b011,
    JLT  = 0b100,
    JNE  = 0b101,
    JLE  = 0b110,
    JMP  = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}
