use color_print::cformat;

use crate::error::{Diag, Error};

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
    comment: Option<String>,
}

impl Line {
    /// `idx` is the 0-based position of the line in the source text.
    pub fn new(idx: usize, raw: &str) -> Self {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.trim().to_string())),
            None => (raw, None),
        };
        Line {
            idx,
            raw: raw.to_string(),
            code: code.trim().to_string(),
            comment,
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Strip comments and whitespace, dropping lines left empty.
pub fn normalize(src: &str) -> Vec<Line> {
    src.lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(idx, raw))
        .filter(|line| !line.code.is_empty())
        .collect()
}

// ----------------------------------------------------------------------------
// Command

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `@symbol` or `@literal`
    Addr(String),
    /// `dest=comp;jump`, `dest` and `jump` may be empty
    Comp {
        dest: String,
        comp: String,
        jump: String,
    },
    /// `(symbol)`
    Label(String),
}

impl Command {
    pub fn parse(code: &str) -> Result<Command, Error> {
        let malformed = || Error::MalformedCommand(code.to_string());

        if let Some(symbol) = code.strip_prefix('@') {
            if symbol.is_empty() {
                return Err(malformed());
            }
            return Ok(Command::Addr(symbol.to_string()));
        }

        if let Some(rest) = code.strip_prefix('(') {
            return match rest.strip_suffix(')') {
                Some(symbol) if !symbol.is_empty() => Ok(Command::Label(symbol.to_string())),
                _ => Err(malformed()),
            };
        }

        let (dest, rest) = match code.split_once('=') {
            Some(("", _)) => return Err(malformed()),
            Some((dest, rest)) => (dest, rest),
            None => ("", code),
        };
        let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
        if comp.is_empty() {
            return Err(malformed());
        }

        Ok(Command::Comp {
            dest: dest.to_string(),
            comp: comp.to_string(),
            jump: jump.to_string(),
        })
    }

    /// Whether the command occupies a ROM address.
    pub fn is_code(&self) -> bool {
        match self {
            Command::Addr(_) | Command::Comp { .. } => true,
            Command::Label(_) => false,
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Command::Addr(symbol) => cformat!("<r>@</><y>{}</>", symbol),
            Command::Comp { dest, comp, jump } => {
                let dest = if dest.is_empty() {
                    "".to_string()
                } else {
                    cformat!("<b>{}</>=", dest)
                };
                let jump = if jump.is_empty() {
                    "".to_string()
                } else {
                    cformat!(";<m>{}</>", jump)
                };
                cformat!("{}<g>{}</>{}", dest, comp, jump)
            }
            Command::Label(symbol) => cformat!("<g,s>({})</>", symbol),
        }
    }
}

/// Normalize and classify a whole program.
pub fn parse(src: &str) -> Result<Vec<(Line, Command)>, Diag> {
    normalize(src)
        .into_iter()
        .map(|line| match Command::parse(line.code()) {
            Ok(cmd) => Ok((line, cmd)),
            Err(err) => Err(Diag::new(&line, err)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(dest: &str, comp: &str, jump: &str) -> Command {
        Command::Comp {
            dest: dest.to_string(),
            comp: comp.to_string(),
            jump: jump.to_string(),
        }
    }

    #[test]
    fn test_normalize() {
        let src = "// header\n\n  @2  \n\tD=A // load\n   // indented\n0;JMP\r\n";
        let lines = normalize(src);
        let codes: Vec<&str> = lines.iter().map(|line| line.code()).collect();
        assert_eq!(codes, vec!["@2", "D=A", "0;JMP"]);
        assert_eq!(lines[0].no(), 3);
        assert_eq!(lines[1].comment(), Some("load"));
        assert_eq!(lines[1].raw(), "\tD=A // load");
        assert_eq!(lines[2].no(), 6);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n   \n// only comments\n//\n").is_empty());
    }

    #[test]
    fn test_comment_marker_first_occurrence() {
        let line = Line::new(0, "M=D//a//b");
        assert_eq!(line.code(), "M=D");
        assert_eq!(line.comment(), Some("a//b"));
    }

    macro_rules! test_parse {
        ($($name:ident: $code:expr => $cmd:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Command::parse($code).unwrap(), $cmd);
                }
            )*
        }
    }

    test_parse! {
        test_addr_literal: "@21" => Command::Addr("21".to_string()),
        test_addr_symbol: "@sum.1" => Command::Addr("sum.1".to_string()),
        test_label: "(LOOP)" => Command::Label("LOOP".to_string()),
        test_comp_only: "D+1" => comp("", "D+1", ""),
        test_dest_comp: "AM=M-1" => comp("AM", "M-1", ""),
        test_comp_jump: "D;JGT" => comp("", "D", "JGT"),
        test_dest_comp_jump: "AMD=D|M;JNE" => comp("AMD", "D|M", "JNE"),
        test_empty_jump: "0;" => comp("", "0", ""),
        test_unknown_kept: "D=X" => comp("D", "X", ""),
    }

    macro_rules! test_malformed {
        ($($name:ident: $code:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert!(matches!(
                        Command::parse($code),
                        Err(Error::MalformedCommand(code)) if code == $code
                    ));
                }
            )*
        }
    }

    test_malformed! {
        test_unclosed_label: "(LOOP",
        test_empty_label: "()",
        test_empty_addr: "@",
        test_empty_comp_after_dest: "D=",
        test_empty_comp_before_jump: ";JMP",
        test_empty_dest: "=D",
    }

    #[test]
    fn test_is_code() {
        assert!(Command::Addr("1".to_string()).is_code());
        assert!(comp("", "0", "JMP").is_code());
        assert!(!Command::Label("END".to_string()).is_code());
    }

    #[test]
    fn test_parse_program() {
        let stmts = parse("(START)\n@START\n0;JMP\n").unwrap();
        let cmds: Vec<Command> = stmts.into_iter().map(|(_, cmd)| cmd).collect();
        assert_eq!(
            cmds,
            vec![
                Command::Label("START".to_string()),
                Command::Addr("START".to_string()),
                comp("", "0", "JMP"),
            ]
        );
    }

    #[test]
    fn test_parse_program_error_line() {
        let diag = parse("@1\n\n(BROKEN\nD=A\n").unwrap_err();
        assert_eq!(diag.line.no(), 3);
        assert!(matches!(diag.error, Error::MalformedCommand(_)));
    }
}
