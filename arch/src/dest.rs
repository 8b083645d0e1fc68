use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Destination field of a C-instruction (`d1 d2 d3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, EnumString, Display, EnumIter)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    M    = 0b001,
    D    = 0b010,
    MD   = 0b011,
    A    = 0b100,
    AM   = 0b101,
    AD   = 0b110,
    AMD  = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}
