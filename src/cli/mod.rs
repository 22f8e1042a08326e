use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "regcolor")]
#[command(about = "Assigns registers A-Z to the nodes of an interference graph")]
pub struct Cli {
    /// Adjacency list to color, one `node,neighbor,...` line per node
    pub input: PathBuf,

    /// File that receives one `<node><color>` line per node
    pub output: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Don't echo the coloring to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parses the process arguments. Usage errors exit with status 1,
    /// `--help` with status 0.
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() { 1 } else { 0 };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
