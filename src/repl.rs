use std::io::{self, BufRead, Write};

use log::info;

use crate::execute;

const BANNER: &str = concat!("fredlang ",
                             env!("CARGO_PKG_VERSION"),
                             " REPL. Type an expression, or `exit` to quit.");
const PROMPT: &str = "> ";

/// Runs an interactive session over `input` and `output`.
///
/// Prints a banner, then for every line read: evaluates it, and writes the
/// resulting value or the diagnostics. Blank lines are skipped. The session
/// ends at end of input or when the line `exit` is entered.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// fredlang::repl::run(Cursor::new("1 + 2\n\n!10\nexit\n3"), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("> 3\n"));
/// assert!(output.contains("Cannot evaluate unary '!' on integer."));
/// assert!(!output.contains("> 3\n> 3"));
/// ```
pub fn run<R, W>(input: R, mut output: W) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    writeln!(output, "{BANNER}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        let line = line.trim();
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match execute(line) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    info!("REPL session ended");
    Ok(())
}
