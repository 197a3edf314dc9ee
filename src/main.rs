//! CLI entry point for ctxsnap

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use ctxsnap::output::{JSON_FILE_NAME, MARKDOWN_FILE_NAME};
use ctxsnap::{OutputConfig, ScanResult, WalkerConfig, logging, write_artifacts};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ctxsnap")]
#[command(about = "Snapshot project structure, file previews and git state for an assistant session")]
#[command(version)]
struct Args {
    /// Directory to snapshot
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (deeper directories become MAX_DEPTH_REACHED)
    #[arg(short = 'L', long = "level", default_value_t = ctxsnap::tree::DEFAULT_MAX_DEPTH)]
    level: usize,

    /// Do not embed file previews
    #[arg(long = "no-content")]
    no_content: bool,

    /// Extra ignore pattern, a regex searched in the relative path (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "REGEX")]
    ignore: Vec<String>,

    /// Directory the two context files are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log recovered failures (unreadable files, missing git, ...) to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    println!("Scanning project structure...");
    let start = Instant::now();

    let walker_config = WalkerConfig {
        max_depth: args.level,
        include_content: !args.no_content,
        ..Default::default()
    }
    .with_extra_ignores(args.ignore.iter().cloned());

    let output_config = OutputConfig::default().with_output_dir(&args.output_dir);

    let result = ScanResult::collect(&args.path, walker_config)
        .and_then(|snapshot| write_artifacts(&snapshot, &output_config));

    if let Err(e) = result {
        eprintln!("ctxsnap: error: {}", e);
        process::exit(1);
    }

    if let Err(e) = print_summary(start.elapsed().as_secs_f64(), should_use_color(args.color)) {
        eprintln!("ctxsnap: error writing output: {}", e);
        process::exit(1);
    }
}

/// Print the completion report.
fn print_summary(elapsed_secs: f64, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "Scan complete!")?;
    stdout.reset()?;
    writeln!(stdout, " Files created in {:.2} seconds:", elapsed_secs)?;
    writeln!(stdout, "- {} (Full project data)", JSON_FILE_NAME)?;
    writeln!(stdout, "- {} (Formatted context for Copilot)", MARKDOWN_FILE_NAME)?;
    Ok(())
}
