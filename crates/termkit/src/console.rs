//! A single handle over the output stream and the interactive terminal.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use serde::Serialize;
use termkit_input::{Form, FormError, FormResult, RealTerminal, TerminalIO};
use termkit_render::{ansi_with, write_list, BorderStyle, ColorChoice, ColumnSpec, ListStyle, Table};

/// Styled output to `W` and prompts through `T`.
///
/// The color choice applies to everything the console emits: styled text,
/// table headers and form error messages.
pub struct Console<W: Write, T: TerminalIO> {
    out: W,
    terminal: T,
    color: ColorChoice,
    table: Table,
}

impl Console<Stdout, RealTerminal> {
    /// A console on stdout and stdin.
    pub fn stdout() -> Self {
        Console::new(io::stdout(), RealTerminal)
    }
}

impl<W: Write, T: TerminalIO> Console<W, T> {
    pub fn new(out: W, terminal: T) -> Self {
        Self {
            out,
            terminal,
            color: ColorChoice::Auto,
            table: Table::new(),
        }
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self.table = self.table.color(color);
        self
    }

    /// Border used by [`Console::table`].
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.table = self.table.border(border);
        self
    }

    /// Style descriptor applied to table headers.
    pub fn header_style(mut self, styles: impl Into<String>) -> Self {
        self.table = self.table.header_style(styles);
        self
    }

    /// `text` styled for this console. Nothing is written.
    pub fn ansi(&self, text: &str, styles: &str) -> String {
        ansi_with(text, styles, self.color)
    }

    /// Write `text` styled, followed by a newline.
    pub fn println(&mut self, text: &str, styles: &str) -> io::Result<()> {
        let styled = self.ansi(text, styles);
        writeln!(self.out, "{}", styled)
    }

    pub fn table<R: Serialize>(&mut self, records: &[R], columns: Option<&ColumnSpec>) -> io::Result<()> {
        self.table.write_to(&mut self.out, records, columns)
    }

    pub fn list_items<I: Display>(
        &mut self,
        items: impl IntoIterator<Item = I>,
        style: &ListStyle,
    ) -> io::Result<()> {
        write_list(&mut self.out, items, style)
    }

    /// Runs `form` on this console's terminal, using its color choice for
    /// error messages.
    pub fn input_form(&mut self, form: &Form) -> Result<FormResult, FormError> {
        self.out.flush()?;
        form.clone().color(self.color).run_with(&self.terminal)
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Consumes the console, returning the output writer.
    pub fn into_writer(self) -> W {
        self.out
    }
}
