mod util;

use color_print::cformat;
use hackasm::{Error, Program};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    process::ExitCode,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (`-` or omitted: standard input)
    input: Option<String>,

    /// Output file (omitted: standard output)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing to stderr
    #[clap(short, long)]
    dump: bool,

    /// Dump symbol table to stderr
    #[clap(short, long)]
    symbols: bool,

    /// Report progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    let use_color = hackasm::msg::use_color();
    let path = match args.input.as_deref() {
        None | Some("-") => "<stdin>",
        Some(path) => path,
    };

    macro_rules! progress {
        ($($arg:tt)*) => {
            if args.verbose {
                eprintln!($($arg)*);
            }
        };
    }

    progress!("1. Read Source");
    progress!("  < {}", path);
    let src = match read_source(args.input.as_deref()) {
        Ok(src) => src,
        Err(err) => return fail(&err, use_color),
    };

    progress!("2. Collect Labels & Generate Binary");
    let program = match hackasm::assemble(&src) {
        Ok(program) => program,
        Err(diag) => {
            diag.print(path, use_color);
            return ExitCode::FAILURE;
        }
    };
    for warn in &program.warnings {
        warn.print(path, use_color);
    }
    progress!(
        "  - {} instructions, {} symbols",
        program.insts.len(),
        program.symbols.len()
    );

    if args.dump {
        util::print_dump(&program);
    }
    if args.symbols {
        util::print_symbols(&program.symbols);
    }

    progress!("3. Write Binary");
    progress!("  > {}", args.output.as_deref().unwrap_or("<stdout>"));
    match write_binary(args.output.as_deref(), &program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err, use_color),
    }
}

fn read_source(input: Option<&str>) -> Result<String, Error> {
    let mut src = String::new();
    match input {
        None | Some("-") => {
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(Error::FileRead)?;
        }
        Some(path) => {
            File::open(path)
                .map_err(|err| Error::FileOpen(path.to_string(), err))?
                .read_to_string(&mut src)
                .map_err(Error::FileRead)?;
        }
    }
    Ok(src)
}

fn write_binary(output: Option<&str>, program: &Program) -> Result<(), Error> {
    let (name, sink): (&str, Box<dyn Write>) = match output {
        None => ("<stdout>", Box::new(std::io::stdout().lock())),
        Some(path) => (
            path,
            Box::new(File::create(path).map_err(|err| Error::FileCreate(path.to_string(), err))?),
        ),
    };
    let mut sink = BufWriter::new(sink);
    for line in program.to_bin_lines() {
        writeln!(sink, "{}", line).map_err(|err| Error::FileWrite(name.to_string(), err))?;
    }
    sink.flush()
        .map_err(|err| Error::FileWrite(name.to_string(), err))
}

fn fail(err: &Error, use_color: bool) -> ExitCode {
    let source = std::error::Error::source(err);
    if use_color {
        eprintln!("{}", cformat!("<red,bold>error</>: {}", err));
        if let Some(source) = source {
            eprintln!("{}", cformat!("  <blue>caused by</>: {}", source));
        }
    } else {
        eprintln!("error: {}", err);
        if let Some(source) = source {
            eprintln!("  caused by: {}", source);
        }
    }
    ExitCode::FAILURE
}
