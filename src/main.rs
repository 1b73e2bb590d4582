use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use yamlutils::config::Config;
use yamlutils::document::tree::{split_path, Document};
use yamlutils::file::loader::{load_file, load_stdin};
use yamlutils::fileutils::{
    copy_file, list_dirs, list_files, string_replace, FileList, ListOptions, ReplaceOptions,
};
use yamlutils::navigate::RenderError;

/// yamlutils - query YAML/JSON documents by path and manipulate files
#[derive(Parser)]
#[command(name = "yamlutils")]
#[command(version)]
#[command(about = "Query YAML/JSON documents by path and manipulate files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a /-separated path
    Get {
        /// Document to read (`-` for stdin)
        file: String,

        /// Path such as `level1/level2/3/level4` (omit for the whole document)
        #[arg(default_value = "")]
        path: String,

        /// Wrap the result in its last path segment
        #[arg(short = 'c', long)]
        include_container: bool,
    },

    /// List the entries of a directory
    Ls {
        dir: PathBuf,

        /// Only list files
        #[arg(long)]
        files_only: bool,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Order entries numerically by basename
        #[arg(short, long)]
        numeric: bool,

        /// Reverse the order
        #[arg(long)]
        reverse: bool,
    },

    /// List a directory and all directories below it
    Dirs {
        dir: PathBuf,

        /// Order entries numerically by basename
        #[arg(short, long)]
        numeric: bool,

        /// Reverse the order
        #[arg(long)]
        reverse: bool,
    },

    /// Copy a file, syncing the destination to disk
    Cp { src: PathBuf, dst: PathBuf },

    /// Replace text on every line of a file
    Replace {
        file: PathBuf,
        old: String,
        new: String,

        /// Replace at most N occurrences per line
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Longest accepted line in bytes
        #[arg(long)]
        buffer_size: Option<usize>,

        /// Write <file>.bak before overwriting
        #[arg(long)]
        backup: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let loaded = Config::try_load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(cli.verbose, &config);
    if let Err(err) = &loaded {
        warn!("ignoring config file, using defaults: {:#}", err);
    }

    match cli.command {
        Command::Get {
            file,
            path,
            include_container,
        } => run_get(&file, &path, include_container || config.include_container),
        Command::Ls {
            dir,
            files_only,
            recursive,
            numeric,
            reverse,
        } => {
            let options = ListOptions {
                ignore_dirs: files_only,
                recursive,
                numeric_sort: numeric || config.numeric_sort,
                reverse,
            };
            print_listing(list_files(&dir, options)?)
        }
        Command::Dirs {
            dir,
            numeric,
            reverse,
        } => print_listing(list_dirs(&dir, numeric || config.numeric_sort, reverse)?),
        Command::Cp { src, dst } => {
            copy_file(&src, &dst)
                .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Replace {
            file,
            old,
            new,
            limit,
            buffer_size,
            backup,
        } => {
            let options = ReplaceOptions {
                limit,
                buffer_size: buffer_size.unwrap_or(config.buffer_size),
                create_backup: backup || config.create_backup,
            };
            let changed = string_replace(&file, &old, &new, &options)
                .with_context(|| format!("Failed to update {}", file.display()))?;
            println!("{}", changed);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins, then the `-v` count, then the config file.
fn init_logging(verbose: u8, config: &Config) {
    let fallback = match verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_get(file: &str, path: &str, include_container: bool) -> Result<ExitCode> {
    let doc: Document = if file == "-" {
        load_stdin().context("Failed to load document from stdin")?
    } else {
        load_file(file).with_context(|| format!("Failed to load {}", file))?
    };

    let keys = split_path(path);
    debug!(?keys, include_container, "rendering path");

    let mut stdout = io::stdout().lock();
    match doc.get_string(include_container, &keys) {
        Ok(text) => {
            write_text(&mut stdout, &text)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(RenderError::Path { text, source }) => {
            write_text(&mut stdout, &text)?;
            eprintln!("Error: {}", source);
            Ok(ExitCode::from(source.kind().exit_code() as u8))
        }
        Err(err) => Err(err.into()),
    }
}

/// Writes `text` followed by a newline unless it already ends with one.
fn write_text(out: &mut impl Write, text: &str) -> Result<()> {
    if text.ends_with('\n') {
        write!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", text)?;
    }
    out.flush()?;
    Ok(())
}

fn print_listing(list: FileList) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for entry in list {
        match entry {
            Ok(path) => writeln!(stdout, "{}", path.display())?,
            Err(err) => {
                eprintln!("Error: {}", err);
                failed = true;
            }
        }
    }
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
