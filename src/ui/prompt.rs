use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Interactive line prompts for options missing from the command line.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far, consuming the prompter
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until a non-empty answer is given, or return `default` on an
    /// empty answer when one exists.
    pub fn text(&mut self, label: &str, default: Option<&str>) -> io::Result<String> {
        loop {
            let answer = self.ask(label, default)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            if let Some(default) = default {
                return Ok(default.to_string());
            }
        }
    }

    /// Like [`Prompter::text`], re-asking until the answer parses as `T`.
    pub fn parsed<T>(&mut self, label: &str, default: Option<T>) -> io::Result<T>
    where
        T: FromStr + Display + Clone,
    {
        let shown = default.as_ref().map(ToString::to_string);
        loop {
            let answer = self.ask(label, shown.as_deref())?;
            if answer.is_empty() {
                if let Some(default) = &default {
                    return Ok(default.clone());
                }
                continue;
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Error: '{}' is not a valid value.", answer)?,
            }
        }
    }

    fn ask(&mut self, label: &str, default: Option<&str>) -> io::Result<String> {
        match default {
            Some(d) => write!(self.output, "{} [{}]: ", label, d)?,
            None => write!(self.output, "{}: ", label)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for '{}'", label),
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_text_reasks_on_empty_without_default() {
        let mut p = prompter("\n  \nNike\n");
        assert_eq!(p.text("Brand name", None).unwrap(), "Nike");
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("Brand name: ").count(), 3);
    }

    #[test]
    fn test_text_default_on_empty() {
        let mut p = prompter("\n");
        assert_eq!(p.text("Description (optional)", Some("")).unwrap(), "");
        assert_eq!(String::from_utf8(p.output).unwrap(), "Description (optional) []: ");
    }

    #[test]
    fn test_parsed_reasks_on_garbage() {
        let mut p = prompter("abc\n42.5\n");
        let price: f64 = p.parsed("Price", None).unwrap();
        assert_eq!(price, 42.5);
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("Error: 'abc' is not a valid value."));
    }

    #[test]
    fn test_parsed_default() {
        let mut p = prompter("\n");
        assert_eq!(p.parsed::<i64>("Quantity", Some(0)).unwrap(), 0);
        assert_eq!(String::from_utf8(p.output).unwrap(), "Quantity [0]: ");
    }

    #[test]
    fn test_eof_is_error() {
        let mut p = prompter("");
        let err = p.text("Brand name", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
