use color_print::cformat;
use hackasm::{
    symbol::{Ident, SymbolTable},
    Program,
};

pub fn print_dump(program: &Program) {
    let mut insts = program.insts.iter();
    let mut pc: usize = 0;
    eprintln!("-------+------------------+-----------------------------------------------");
    for (line, cmd) in &program.stmts {
        let comment = line
            .comment()
            .map(|s| cformat!(" <c>// {}</>", s))
            .unwrap_or_default();

        let body = if cmd.is_code() {
            let (bin, resolved) = match insts.next() {
                Some(inst) => (inst.to_bin_string(), inst.cformat()),
                None => ("?".repeat(16), "".to_string()),
            };
            let body = format!(
                "[{:04X}] {} | {:>4}:   {:<24} {}{}",
                pc,
                bin,
                line.no(),
                cmd.cformat(),
                resolved,
                comment
            );
            pc += 1;
            body
        } else {
            format!("{:6} {:16} | {:>4}: {}{}", "", "", line.no(), cmd.cformat(), comment)
        };
        eprintln!("{}", body);
    }
    eprintln!("-------+------------------+-----------------------------------------------");
}

pub fn print_symbols(symbols: &SymbolTable) {
    eprintln!("-------+---------------+--------------------------------");
    for (name, kind, val) in symbols.iter() {
        let kind = match kind {
            Ident::Predefined => "predefined".to_string(),
            Ident::Label(line) => cformat!("<g>label</> (line {})", line.no()),
            Ident::Variable => cformat!("<y>variable</>"),
        };
        eprintln!("{:>6} | {:<13} | {}", val, name, kind);
    }
    eprintln!("-------+---------------+--------------------------------");
}
