use anyhow::{Context, Result};
use clap::Parser;
use singlehdr::amalgamator::Amalgamator;
use singlehdr::cli::{Cli, OutputTarget, ReportFormat};
use singlehdr::report::Report;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the run summary in the requested format
fn print_report(report: &Report, format: ReportFormat, quiet: bool) -> Result<()> {
    match format {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text if !quiet => eprintln!("{}", report),
        ReportFormat::Text => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let plan = args.resolve(&cwd)?;
    let mut amalgamator = Amalgamator::new(plan.sources, plan.options);
    info!(
        "Amalgamating {} headers (guard style {:?}, suffix {})",
        amalgamator.sources().len(),
        amalgamator.options().guard_style,
        amalgamator.options().guard_suffix
    );
    let report = match &plan.output {
        OutputTarget::File(path) => amalgamator
            .write_file(path)
            .with_context(|| format!("Failed to build {}", path.display()))?,
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            amalgamator
                .write_to(&mut lock)
                .context("Failed to build header on stdout")?
        }
    };

    // A JSON report would interleave with the header on stdout
    let format = if plan.output == OutputTarget::Stdout {
        ReportFormat::Text
    } else {
        args.report
    };
    print_report(&report, format, args.quiet)?;

    Ok(())
}
