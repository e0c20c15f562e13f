//! The read-eval-print loop.
//!
//! Every line read is answered on the same channel: the prompt first, then
//! the command's result lines. Recoverable errors are printed as a single
//! line and the loop keeps going; only I/O failures end it early.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::statement::{Command, MetaCommand, Statement};
use crate::{
    PAGE_SIZE, PROMPT, ROW_SIZE, ROWS_PER_PAGE, Result, TABLE_MAX_PAGES, TABLE_MAX_ROWS, Table,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    table: Table,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_table(input, output, Table::new())
    }

    pub fn with_table(input: R, output: W, table: Table) -> Self {
        Self {
            input,
            output,
            table,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Runs until `.exit` or end of input, both of which are a clean stop.
    pub fn run(&mut self) -> Result<()> {
        let mut buffer = Vec::new();
        loop {
            self.print_prompt()?;

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buffer);

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        debug!(rows = self.table.len(), "closing");
        self.output.flush()?;
        Ok(())
    }

    /// Parses and executes one line, reporting recoverable errors inline.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "command failed");
                writeln!(self.output, "{e}")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::Meta(MetaCommand::Exit) => return Ok(Flow::Exit),
            Command::Meta(MetaCommand::Constants) => self.print_constants()?,
            Command::Statement(Statement::Insert(row)) => {
                self.table.insert(&row)?;
                writeln!(self.output, "Executed.")?;
            }
            Command::Statement(Statement::Select) => {
                for row in self.table.scan() {
                    writeln!(self.output, "{row}")?;
                }
                writeln!(self.output, "Executed.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_prompt(&mut self) -> Result<()> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_constants(&mut self) -> Result<()> {
        writeln!(self.output, "Constants:")?;
        writeln!(self.output, "ROW_SIZE: {ROW_SIZE}")?;
        writeln!(self.output, "PAGE_SIZE: {PAGE_SIZE}")?;
        writeln!(self.output, "ROWS_PER_PAGE: {ROWS_PER_PAGE}")?;
        writeln!(self.output, "TABLE_MAX_PAGES: {TABLE_MAX_PAGES}")?;
        writeln!(self.output, "TABLE_MAX_ROWS: {TABLE_MAX_ROWS}")?;
        Ok(())
    }
}
