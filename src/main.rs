use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use phoneintel::{AnalyzerConfig, PhoneAnalyzer, render_report, render_summary};

const PROGRESS_STEPS: &[&str] = &[
    "Parsing number format",
    "Validating number structure",
    "Gathering geographic data",
    "Retrieving carrier information",
    "Calculating risk assessment",
];

fn read_number() -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(
        stdout,
        "\nEnter phone number to analyze (with country code, e.g., +1234567890): "
    )?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::from_env()?;
    let analyzer = PhoneAnalyzer::new(config);

    let input = read_number()?;
    let report = analyzer.analyze(&input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\nAnalyzing phone number...")?;
    for step in PROGRESS_STEPS {
        writeln!(stdout, "   • {}", step)?;
    }
    render_report(&report, &mut stdout)?;
    render_summary(&report, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nError: {}", err);
            ExitCode::FAILURE
        }
    }
}
