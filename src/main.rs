use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use muxml2ini::{Cli, Config, ErrorReporter, Invocation, Output, SystemHomeDir};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    let argv0 = std::env::args_os().next();
    let program = muxml2ini::program_name(argv0.as_deref().map(Path::new));

    match cli.invocation(&program, &SystemHomeDir)? {
        Invocation::Usage { program } => {
            print!("{}", muxml2ini::usage(&program));
            Ok(ExitCode::from(1))
        }
        Invocation::Convert(config) => {
            run(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let reporter = ErrorReporter::new(config.verbosity);
    reporter.report_loading(config.input());

    let conversion = muxml2ini::convert(config.input())?;
    reporter.report_warnings(&conversion.warnings);

    let stdout = io::stdout();
    Output::write_sections(&mut stdout.lock(), &conversion.sections)
        .context("Failed to write INI output")?;

    reporter.report_summary(&conversion);
    Ok(())
}
