// Shared text sink for demo output.
//
// Demos never call println! directly; every line goes through `emit` so the
// driver can point them at stdout and tests can capture the exact bytes.

use crate::error::PatternError;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

pub type Console = Rc<RefCell<dyn Write>>;

pub fn stdout() -> Console {
    Rc::new(RefCell::new(io::stdout()))
}

/// Writes one line to the console.
pub fn emit(console: &Console, line: impl fmt::Display) -> Result<(), PatternError> {
    let mut sink = console
        .try_borrow_mut()
        .map_err(|_| PatternError::ConsoleBusy)?;
    writeln!(sink, "{line}")?;
    Ok(())
}

/// In-memory console that keeps everything written to it.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console(&self) -> Console {
        self.buffer.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}
