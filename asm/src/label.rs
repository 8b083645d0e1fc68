use arch::inst::ADDR_MAX;

use crate::{
    error::{Diag, Error, Redefined},
    parser::{Command, Line},
    symbol::{Ident, SymbolTable},
};

/// First pass: bind every label to the ROM address of the next instruction.
///
/// A label that is already bound keeps its first address and is reported
/// back as a warning.
pub fn collect_labels(
    stmts: &[(Line, Command)],
    table: &mut SymbolTable,
) -> Result<Vec<Redefined>, Diag> {
    let mut warns = vec![];
    let mut pc: usize = 0;
    for (line, cmd) in stmts {
        match cmd {
            Command::Label(label) => {
                let addr = u16::try_from(pc)
                    .ok()
                    .filter(|addr| *addr <= ADDR_MAX)
                    .ok_or_else(|| Diag::new(line, Error::AddressOutOfRange(label.clone())))?;
                if let Err((prev, _)) = table.insert(label, Ident::Label(line.clone()), addr) {
                    warns.push(Redefined {
                        name: label.clone(),
                        line: line.clone(),
                        prev: match prev {
                            Ident::Label(prev) => Some(prev),
                            Ident::Predefined | Ident::Variable => None,
                        },
                    });
                }
            }
            Command::Addr(_) | Command::Comp { .. } => pc += 1,
        }
    }
    Ok(warns)
}
