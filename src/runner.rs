use std::io::{BufRead, Write};

use colored::Colorize;

use crate::{DemoConfig, Result, Scenario};

/// Drives the demos listed in a config and frames them with headers.
pub struct Runner<'a> {
    config: &'a DemoConfig,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a DemoConfig) -> Self {
        Self { config }
    }

    fn header(&self, text: &str) -> String {
        let line = format!("=== {text} ===");
        if self.config.color {
            line.bold().cyan().to_string()
        } else {
            line
        }
    }

    /// A didactic failure in the violation half is printed, not propagated.
    pub fn run_scenario(&self, scenario: Scenario, out: &mut dyn Write) -> Result<()> {
        tracing::info!(%scenario, "running scenario");

        writeln!(out, "{}", self.header(&format!("{} Violation Demo", scenario.title())))?;
        if let Err(err) = scenario.run_violation(out, self.config) {
            if !err.is_didactic() {
                return Err(err);
            }
            tracing::debug!(%scenario, error = %err, "violation demo failed as intended");
            let message = format!("Error: {err}");
            if self.config.color {
                writeln!(out, "{}", message.red())?;
            } else {
                writeln!(out, "{message}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", self.header(&format!("{} Obeying Demo", scenario.title())))?;
        scenario.run_obeying(out, self.config)?;
        tracing::debug!(%scenario, "scenario finished");
        Ok(())
    }

    pub fn run_all(&self, out: &mut dyn Write) -> Result<()> {
        for (idx, scenario) in self.config.scenarios.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            self.run_scenario(*scenario, out)?;
        }
        Ok(())
    }

    /// Blocks until a line (or EOF) arrives on `input`, if the config asks for it.
    pub fn pause(&self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        if !self.config.pause_on_exit {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "Press Enter to exit...")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(())
    }
}
