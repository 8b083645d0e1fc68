use arch::{
    comp::Comp,
    dest::Dest,
    inst::{Inst, ADDR_MAX},
    jump::Jump,
    reg::VAR_BASE,
};

use crate::{
    error::{Diag, Error, Field},
    parser::{Command, Line},
    symbol::{Ident, SymbolTable},
};

/// Second pass. Resolves symbols (allocating variables on first use) and
/// encodes every executable command, in source order.
pub fn generate(stmts: &[(Line, Command)], table: &mut SymbolTable) -> Result<Vec<Inst>, Diag> {
    let mut codegen = Codegen::new(table);
    let mut insts = vec![];
    for (line, cmd) in stmts {
        match cmd {
            Command::Addr(symbol) => {
                let inst = codegen
                    .resolve(symbol)
                    .and_then(|addr| {
                        Inst::a(addr).ok_or_else(|| Error::AddressOutOfRange(symbol.clone()))
                    })
                    .map_err(|err| Diag::new(line, err))?;
                insts.push(inst);
            }
            Command::Comp { dest, comp, jump } => {
                let inst = encode_comp(dest, comp, jump).map_err(|err| Diag::new(line, err))?;
                insts.push(inst);
            }
            Command::Label(_) => {}
        }
    }
    Ok(insts)
}

struct Codegen<'a> {
    table: &'a mut SymbolTable,
    next_var: u16,
}

impl<'a> Codegen<'a> {
    fn new(table: &'a mut SymbolTable) -> Self {
        Codegen {
            table,
            next_var: VAR_BASE,
        }
    }

    fn resolve(&mut self, symbol: &str) -> Result<u16, Error> {
        let out_of_range = || Error::AddressOutOfRange(symbol.to_string());

        // Literal
        if symbol.bytes().all(|b| b.is_ascii_digit()) {
            return symbol.parse::<u16>().map_err(|_| out_of_range());
        }

        // Label, predefined or known variable; otherwise a new variable
        let next_var = &mut self.next_var;
        self.table
            .get_or_insert_with(symbol, Ident::Variable, || {
                if *next_var > ADDR_MAX {
                    return Err(out_of_range());
                }
                *next_var += 1;
                Ok(*next_var - 1)
            })
    }
}

fn encode_comp(dest: &str, comp: &str, jump: &str) -> Result<Inst, Error> {
    let unknown = |field: Field, mnemonic: &str| Error::UnknownMnemonic {
        field,
        mnemonic: mnemonic.to_string(),
    };
    let comp = Comp::parse(comp).ok_or_else(|| unknown(Field::Comp, comp))?;
    let dest = Dest::parse(dest).ok_or_else(|| unknown(Field::Dest, dest))?;
    let jump = Jump::parse(jump).ok_or_else(|| unknown(Field::Jump, jump))?;
    Ok(Inst::C(dest, comp, jump))
}
