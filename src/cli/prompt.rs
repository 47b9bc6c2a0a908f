//! Overwrite confirmation for an existing key file.

use std::io::{self, BufRead, IsTerminal, Write};

const QUESTION: &str = "Language key file already exists. Overwrite? (Y or N) ";

/// Ask whether to overwrite the existing key file.
///
/// Without an interactive stdin there is nobody to ask, so the answer is yes.
pub fn confirm_overwrite() -> io::Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(true);
    }
    ask_overwrite(&mut stdin.lock(), &mut io::stdout().lock())
}

/// Repeat the question until the answer is `Y` or `N` (any case).
///
/// End of input counts as `N`.
pub fn ask_overwrite<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    let mut line = String::new();
    loop {
        write!(output, "{}", QUESTION)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim() {
            answer if answer.eq_ignore_ascii_case("y") => return Ok(true),
            answer if answer.eq_ignore_ascii_case("n") => return Ok(false),
            _ => continue,
        }
    }
}
