pub mod codegen;
pub mod error;
pub mod label;
pub mod msg;
pub mod parser;
pub mod symbol;

pub use error::{Diag, Error, Field, Redefined};

use arch::inst::Inst;
use parser::{Command, Line};
use symbol::SymbolTable;

/// Result of a successful assembly run.
#[derive(Debug)]
pub struct Program {
    /// Normalized, classified source lines.
    pub stmts: Vec<(Line, Command)>,
    /// One instruction per executable command, in source order.
    pub insts: Vec<Inst>,
    /// Final symbol table, including allocated variables.
    pub symbols: SymbolTable,
    /// Re-declared labels. These never affect the output.
    pub warnings: Vec<Redefined>,
}

impl Program {
    pub fn to_bin_lines(&self) -> Vec<String> {
        self.insts.iter().map(|inst| inst.to_bin_string()).collect()
    }
}

/// Translate a whole program. Any error aborts the run.
pub fn assemble(src: &str) -> Result<Program, Diag> {
    let stmts = parser::parse(src)?;
    let mut symbols = SymbolTable::new();
    let warnings = label::collect_labels(&stmts, &mut symbols)?;
    let insts = codegen::generate(&stmts, &mut symbols)?;
    Ok(Program {
        stmts,
        insts,
        symbols,
        warnings,
    })
}
