use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// Largest value an A-instruction can load.
pub const ADDR_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value` : `0vvv vvvv vvvv vvvv`
    A(u16),
    /// `dest=comp;jump` : `111a cccc ccdd djjj`
    C(Dest, Comp, Jump),
}

impl Inst {
    /// Returns `None` when the value does not fit in 15 bits.
    pub fn a(value: u16) -> Option<Inst> {
        if value <= ADDR_MAX {
            Some(Inst::A(value))
        } else {
            None
        }
    }

    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(value) => {
                debug_assert!(
                    value <= ADDR_MAX,
                    "A-instruction value 0x{:04X} exceeds 15 bits",
                    value
                );
                value & ADDR_MAX
            }
            Inst::C(dest, comp, jump) => {
                (0b111 << 13) | (comp.bits() << 6) | (dest.bits() << 3) | jump.bits()
            }
        }
    }

    /// The 16 character `0`/`1` text form.
    pub fn to_bin_string(self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>0x{:0>4X}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => "".to_string(),
                    _ => cformat!("<b>{}</>=", dest),
                };
                let comp = if comp.reads_memory() {
                    cformat!("<c>{}</>", comp)
                } else {
                    cformat!("<g>{}</>", comp)
                };
                let jump = match jump {
                    Jump::Null => "".to_string(),
                    _ => cformat!(";<m>{}</>", jump),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}
