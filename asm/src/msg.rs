use crate::parser::Line;
use color_print::cformat;
use std::io::IsTerminal;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

/// Color only when stderr is a terminal and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

impl Msg {
    pub fn format(&self, path: &str, line: &Line, use_color: bool) -> String {
        if !use_color {
            let head = match self {
                Msg::Error(msg) => format!("error: {}", msg),
                Msg::Warn(msg) => format!("warn: {}", msg),
                Msg::Note(msg) => format!("note: {}", msg),
            };
            return [
                head,
                format!("     --> {}:{}", path, line.no()),
                "      |".to_string(),
                format!(" {:>4} | {}", line.no(), line.raw()),
                "      |".to_string(),
            ]
            .join("\n");
        }

        let head = match self {
            Msg::Error(msg) => cformat!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cformat!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cformat!("<green,bold>note</>: {}", msg),
        };
        [
            head,
            cformat!("     <blue>--></> <underline>{}:{}</>", path, line.no()),
            cformat!("      <blue>|</>"),
            cformat!(" <blue>{:>4} |</> {}", line.no(), line.raw()),
            cformat!("      <blue>|</>"),
        ]
        .join("\n")
    }

    pub fn print(&self, path: &str, line: &Line, use_color: bool) {
        eprintln!("{}", self.format(path, line, use_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        let line = Line::new(2, "  D=X // bad");
        let text = Msg::Error("Unknown comp mnemonic: `X`".to_string()).format("prog.asm", &line, false);
        assert!(!text.contains('\x1b'));
        assert_eq!(
            text,
            "error: Unknown comp mnemonic: `X`\n     --> prog.asm:3\n      |\n    3 |   D=X // bad\n      |"
        );
    }

    #[test]
    fn test_colored() {
        let line = Line::new(0, "(LOOP)");
        let text = Msg::Warn("Re-defined label: `LOOP`".to_string()).format("<stdin>", &line, true);
        assert!(text.contains('\x1b'));
        assert!(text.contains("Re-defined label: `LOOP`"));
    }
}
