use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lineq::{ReportConfig, parse_system_from_file, write_report};

/// Solve a system of three linear equations in x, y and z.
///
/// Each equation sits on its own line, e.g. `2x - 3y + z = 5`. Lines that are not
/// equations are ignored.
#[derive(Parser, Debug)]
#[command(name = "lineq", version, about)]
pub struct Cli {
    /// File holding the equations
    #[arg(default_value = "equations.txt")]
    pub file: PathBuf,

    /// Warn about every non-blank line that was skipped
    #[arg(long)]
    pub strict: bool,

    /// Also print the exact rational solution
    #[arg(long)]
    pub exact: bool,
}

impl From<&Cli> for ReportConfig {
    fn from(cli: &Cli) -> Self {
        ReportConfig {
            strict: cli.strict,
            exact: cli.exact,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = ReportConfig::from(&self);
        tracing::info!("reading equations from {}", self.file.display());

        let (parsed, diagnostics) = parse_system_from_file(&self.file)?;
        tracing::debug!(
            equations = parsed.len(),
            skipped = diagnostics.skipped.len(),
            "parsed input"
        );

        let mut stdout = io::stdout().lock();
        write_report(parsed, &diagnostics, &config, &mut stdout)
            .with_context(|| format!("cannot solve the system in {}", self.file.display()))
    }
}
