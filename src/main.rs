use std::io::Write;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rss_gen::{
    Cli, Config, ConfigManager, ErrorReporter, FeedSource, Output, RenderSummary, VerbosityLevel,
    serialize,
};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let cli_verbosity = if cli.quiet {
        VerbosityLevel::Quiet
    } else if cli.verbose {
        VerbosityLevel::Verbose
    } else {
        VerbosityLevel::Normal
    };

    let config = match ConfigManager::load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            ErrorReporter::new(cli_verbosity).report_config_error(&error);
            return ExitCode::FAILURE;
        }
    };

    let verbosity = VerbosityLevel::from_config(&config);
    init_logging(verbosity);

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        return ExitCode::FAILURE;
    }

    match run(&cli, &config, verbosity) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ErrorReporter::new(verbosity).report_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: VerbosityLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli, config: &Config, verbosity: VerbosityLevel) -> rss_gen::Result<()> {
    let source = FeedSource::from_path(&cli.input)?;
    let builder = source.into_builder().validate(config.validation.enabled);
    let validated = builder.will_validate();
    let document = builder.build()?;
    let xml = serialize(&document);

    match &config.output.path {
        Some(path) => std::fs::write(path, &xml)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    info!(bytes = xml.len(), "feed written");

    let summary = RenderSummary::from_document(
        &document,
        xml.len(),
        validated,
        config.output.path.clone(),
    );
    eprint!("{}", Output::new(verbosity).format_summary(&summary));

    Ok(())
}
