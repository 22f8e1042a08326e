use std::fs;
use std::io;

use regcolor::cli::Cli;
use regcolor::error::io_error;
use regcolor::{Result, backend};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Bytes that are not UTF-8 become U+FFFD and fail character validation
    let bytes = fs::read(&cli.input).map_err(io_error(&cli.input))?;
    let input = String::from_utf8_lossy(&bytes);

    let coloring = regcolor::color(&input)?;
    let listing = backend::render(&coloring);

    backend::write_output(&cli.output, &listing)?;
    if !cli.quiet {
        backend::echo(&mut io::stdout().lock(), &listing)?;
    }

    Ok(())
}
