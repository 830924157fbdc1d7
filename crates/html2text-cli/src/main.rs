//! html2text CLI - converts HTML to plain text or Markdown

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, LevelFilter};

use html2text::{Html2Text, Options};

#[derive(Parser)]
#[command(name = "html2text")]
#[command(version)]
#[command(about = "Converts HTML to plaintext or markdown", long_about = None)]
struct Cli {
    /// Input HTML file, or `-` to read standard input
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Activate quiet log output
    #[arg(short, long)]
    quiet: bool,

    /// Activate verbose log output
    #[arg(short, long)]
    verbose: bool,

    /// Omit special links output
    #[arg(short, long)]
    omit_links: bool,

    /// Activate pretty tables output
    #[arg(short, long)]
    pretty_tables: bool,

    /// Activate markdown mode
    #[arg(short, long)]
    markdown: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    fn options(&self) -> Options {
        Options {
            omit_links: self.omit_links,
            pretty_tables: self.pretty_tables,
            markdown: self.markdown,
            ..Default::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let service = Html2Text::with_options(cli.options());

    let text = if cli.input.as_os_str() == "-" {
        debug!("Reading HTML from stdin");
        service.render_reader(io::stdin().lock())?
    } else {
        debug!("Reading HTML from {}", cli.input.display());
        let file = File::open(&cli.input)
            .map_err(|e| format!("opening {:?}: {}", cli.input, e))?;
        service.render_reader(file)?
    };

    write_output(&mut io::stdout().lock(), &text)?;
    Ok(())
}

/// Write the rendered text as a newline-terminated block.
fn write_output<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}
