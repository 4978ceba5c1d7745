//! Output sink for the command surface
//!
//! Successful results go to `out`; not-found and failure messages go to
//! `err`. The same calls render plain tab-separated text, boxed tables, or
//! JSON envelopes depending on [`OutputFormat`].

use std::io::{self, Write};
use serde::Serialize;
use tabled::Tabled;
use crate::Error;
use super::{table, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text
    #[default]
    Plain,
    /// Boxed tables
    Table,
    /// One JSON document per result
    Json,
}

impl OutputFormat {
    pub fn is_human(&self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

pub struct Console<W: Write = io::Stdout, E: Write = io::Stderr> {
    pub out: W,
    pub err: E,
    pub format: OutputFormat,
    theme: Theme,
}

impl Console {
    pub fn stdio(format: OutputFormat) -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
            format,
            theme: Theme::detect(),
        }
    }
}

impl<W: Write, E: Write> Console<W, E> {
    /// Uncolored console over arbitrary writers
    pub fn new(out: W, err: E, format: OutputFormat) -> Self {
        Self {
            out,
            err,
            format,
            theme: Theme::plain(),
        }
    }

    /// Report a successful write, with `entity` as the JSON payload
    pub fn done<T: Serialize>(&mut self, command: &str, message: &str, entity: &T) -> io::Result<()> {
        if self.format.is_human() {
            let line = self.theme.paint(message, &self.theme.success);
            writeln!(self.out, "{}", line)
        } else {
            self.emit_ok(command, entity)
        }
    }

    /// Render a listing: `empty` when there are no rows, otherwise the
    /// optional `title` followed by the table. JSON mode emits `data`.
    pub fn listing<R, D>(
        &mut self,
        command: &str,
        title: Option<&str>,
        empty: &str,
        rows: &[R],
        data: &D,
    ) -> io::Result<()>
    where
        R: Tabled,
        D: Serialize + ?Sized,
    {
        if !self.format.is_human() {
            return self.emit_ok(command, data);
        }
        if rows.is_empty() {
            return writeln!(self.out, "{}", empty);
        }
        if let Some(title) = title {
            let line = self.theme.paint(title, &self.theme.header);
            writeln!(self.out, "{}", line)?;
        }
        let rendered = match self.format {
            OutputFormat::Table => table::boxed(rows),
            _ => table::tsv(rows),
        };
        write!(self.out, "{}", rendered)
    }

    /// An id that matched no row
    pub fn not_found(&mut self, command: &str, message: &str) -> io::Result<()> {
        self.emit_err(command, "not_found", message)
    }

    /// Validation failures are shown as `Error: ...`, anything else as a
    /// generic failure.
    pub fn error(&mut self, command: &str, error: &Error) -> io::Result<()> {
        let message = if error.is_validation() {
            format!("Error: {}", error)
        } else {
            format!("An error occurred: {}", error)
        };
        if self.format.is_human() {
            self.emit_err(command, error.kind(), &message)
        } else {
            self.emit_err(command, error.kind(), &error.to_string())
        }
    }

    fn emit_ok<T: Serialize + ?Sized>(&mut self, command: &str, data: &T) -> io::Result<()> {
        let envelope = serde_json::json!({
            "status": "ok",
            "command": command,
            "data": data,
        });
        serde_json::to_writer_pretty(&mut self.out, &envelope)?;
        writeln!(self.out)
    }

    fn emit_err(&mut self, command: &str, kind: &str, message: &str) -> io::Result<()> {
        if self.format.is_human() {
            let line = self.theme.paint(message, &self.theme.error);
            return writeln!(self.err, "{}", line);
        }
        let envelope = serde_json::json!({
            "status": "error",
            "command": command,
            "kind": kind,
            "message": message,
        });
        serde_json::to_writer_pretty(&mut self.err, &envelope)?;
        writeln!(self.err)
    }
}
