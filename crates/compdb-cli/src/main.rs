use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use compdb_build::{ensure_dir, generate, BuildPaths, Job};
use miette::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "compdb")]
#[command(
    author,
    version,
    about = "Generate a JSON compilation database and build data from make dumps"
)]
struct Cli {
    /// Compile-command list dump (directory, command, file per record)
    #[arg(long, value_name = "PATH")]
    list: Option<PathBuf>,

    /// Include-path dump (space-separated directories)
    #[arg(long, value_name = "PATH")]
    incs: Option<PathBuf>,

    /// Project root directory, created if missing
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Output directory, created if missing
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// TOML file supplying any of the paths above
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity, use -vv for trace output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except for errors; overrides -v
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn paths(&self) -> BuildPaths {
        BuildPaths {
            list: self.list.clone(),
            incs: self.incs.clone(),
            root: self.root.clone(),
            output: self.output.clone(),
        }
    }
}

fn usage_error(kind: ErrorKind, message: String) -> clap::Error {
    Cli::command().error(kind, message)
}

fn require(value: Option<PathBuf>, flag: &str) -> Result<PathBuf, clap::Error> {
    value.ok_or_else(|| {
        usage_error(
            ErrorKind::MissingRequiredArgument,
            format!("the following required argument was not provided: {flag}"),
        )
    })
}

fn existing_file(path: PathBuf) -> Result<PathBuf, clap::Error> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(usage_error(
            ErrorKind::ValueValidation,
            format!("'{}' not found / not a file", path.display()),
        ))
    }
}

fn existing_folder(path: PathBuf) -> Result<PathBuf, clap::Error> {
    match ensure_dir(&path) {
        Ok(()) if path.is_dir() => Ok(path),
        _ => Err(usage_error(
            ErrorKind::ValueValidation,
            format!("'{}' not found / not a folder", path.display()),
        )),
    }
}

/// Check the merged paths and turn them into a job.
fn validate(paths: BuildPaths) -> Result<Job, clap::Error> {
    let list = require(paths.list, "--list <PATH>")?;
    let incs = require(paths.incs, "--incs <PATH>")?;
    let root = require(paths.root, "--root <PATH>")?;
    let output = require(paths.output, "--output <PATH>")?;

    Ok(Job {
        list: existing_file(list)?,
        incs: existing_file(incs)?,
        root: existing_folder(root)?,
        output: existing_folder(output)?,
    })
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    tracing::info!("executing compdb ...");

    let from_file = match &cli.config {
        Some(path) => BuildPaths::from_file(path)?,
        None => BuildPaths::default(),
    };
    let job = validate(cli.paths().or(from_file)).unwrap_or_else(|e| e.exit());

    let (collection, files) = generate(&job)?;

    tracing::info!(
        commands = collection.commands.len(),
        includes = collection.includes.len(),
        headers = collection.headers.len(),
        compile_commands = %files.compile_commands.display(),
        build = %files.build.display(),
        "collected build data"
    );
    if !cli.quiet {
        println!("Wrote {}", files.compile_commands.display());
        println!("Wrote {}", files.build.display());
    }

    Ok(())
}
