/*!
 * Command-line interface for InspectFS
 */

use std::io::{self, BufWriter, Write};
use std::process;

use clap::{CommandFactory, Parser};

use inspectfs::config::{self, Args, Config};
use inspectfs::error::Result;
use inspectfs::patterns::PatternSet;
use inspectfs::scanner::Inspector;
use inspectfs::writer::ReportWriter;

fn main() {
    let args = Args::parse();

    // Generate shell completions and exit early if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args);
    config.validate()?;

    let root = config.canonical_root()?;
    let patterns = PatternSet::load(&config::ignore_file_path(&root));
    let inspector = Inspector::new(root, patterns);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(BufWriter::new(stdout.lock()));
    writer.write_report(&inspector)?;
    writer.into_inner().flush()?;

    Ok(())
}
