use clap::{Parser, Subcommand};
use mixdown::cli::{digest_bytes, digest_file, show_info, DigestOptions};
use mixdown::params::{HashAlgorithm, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("MIXDOWN_VERSION");
const BUILD: &str = env!("MIXDOWN_BUILD");
const PROFILE: &str = env!("MIXDOWN_PROFILE");
const GIT_HASH: &str = env!("MIXDOWN_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "mixdown")]
#[command(author, about = "Deterministic obfuscation digest pipeline", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log pipeline stages to stderr (RUST_LOG overrides the level)
    #[arg(long)]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest a file or literal text through the pipeline
    #[command(alias = "d")]
    Digest {
        /// Secret key (UTF-8 bytes)
        #[arg(long, required = true)]
        key: String,

        /// Input file to digest
        input: Option<PathBuf>,

        /// Digest a literal string instead of a file
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Hash algorithm for the digest stages
        #[arg(long, default_value = "sha256", value_parser = parse_hash)]
        hash: HashAlgorithm,

        /// Output rendering
        #[arg(long, default_value = "hex", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Show the fixed pipeline parameters
    #[command(alias = "i")]
    Info,
}

fn parse_hash(s: &str) -> Result<HashAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("mixdown {}", get_version());
        return ExitCode::SUCCESS;
    }

    if cli.log {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Digest {
            key,
            input,
            text,
            hash,
            format,
        } => {
            let options = DigestOptions { key, hash, format };

            let rendered = match (&input, &text) {
                (Some(path), None) => digest_file(path, &options),
                (None, Some(text)) => digest_bytes(text.as_bytes(), &options),
                _ => {
                    eprintln!("Error: provide an input file or --text");
                    return ExitCode::FAILURE;
                }
            };

            match rendered {
                Ok(line) => {
                    println!("{}", line);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info => {
            print!("{}", show_info());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
