use std::fmt;

/// A fully built console client invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConsoleCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Returns true if some argument equals `arg` exactly
    #[cfg(test)]
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

/// Renders the command line the way a shell would show it
impl fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
