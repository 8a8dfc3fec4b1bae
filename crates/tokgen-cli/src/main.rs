use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tokgen_cli::generate::{DEFAULT_INPUT, DEFAULT_PREDICATES_FILE, DEFAULT_TOKEN_TYPE_FILE};
use tokgen_cli::{generate, logging, GenerateOptions, Report};
use tokgen_emit::Layout;
use tokgen_names::{load_path, Policy};

#[derive(Parser, Debug)]
#[command(name = "tokgen")]
#[command(about = "Generate TokenType.hpp and Token.gen.hpp from a token name list")]
struct Cli {
    /// With no subcommand, runs `generate` with every default
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write both artifacts from the token list
    Generate {
        /// Token list, one name per line
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Directory the artifacts are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// File name of the enumeration artifact
        #[arg(long, default_value = DEFAULT_TOKEN_TYPE_FILE)]
        token_type: PathBuf,

        /// File name of the predicates artifact
        #[arg(long, default_value = DEFAULT_PREDICATES_FILE)]
        predicates: PathBuf,

        /// Enclosing namespaces, e.g. `atom::assembler` (empty for none)
        #[arg(long)]
        namespace: Option<String>,

        /// Include guard; derived from the namespaces when omitted
        #[arg(long)]
        guard: Option<String>,

        /// Accept blank and duplicate names and an empty list
        #[arg(long)]
        permissive: bool,

        /// Summary format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Load the token list and print the normalized names
    List {
        /// Token list, one name per line
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Accept blank and duplicate names and an empty list
        #[arg(long)]
        permissive: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        None => cmd_generate(&GenerateOptions::default(), Format::Pretty),

        Some(Commands::Generate {
            input,
            out_dir,
            token_type,
            predicates,
            namespace,
            guard,
            permissive,
            format,
        }) => {
            let mut layout = Layout::default();
            if let Some(path) = namespace {
                layout = layout.with_namespace_path(&path);
            }
            if let Some(guard) = guard {
                layout = layout.with_guard(guard);
            }
            let opts = GenerateOptions {
                input,
                out_dir,
                token_type_file: token_type,
                predicates_file: predicates,
                policy: policy(permissive),
                layout,
            };
            cmd_generate(&opts, format)
        }

        Some(Commands::List {
            input,
            permissive,
            format,
        }) => cmd_list(&input, policy(permissive), format),
    }
}

fn policy(permissive: bool) -> Policy {
    if permissive {
        Policy::Permissive
    } else {
        Policy::Strict
    }
}

fn cmd_generate(opts: &GenerateOptions, format: Format) -> Result<()> {
    let report = generate(opts)?;
    match format {
        Format::Pretty => print_report(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("Generated {} token kinds.", report.tokens);
    for artifact in [&report.token_type, &report.predicates] {
        println!(
            "  {} ({} bytes, sha256 {})",
            artifact.path.display(),
            artifact.bytes,
            artifact.sha256
        );
    }
}

fn cmd_list(input: &Path, policy: Policy, format: Format) -> Result<()> {
    let names = load_path(input, policy)?;
    match format {
        Format::Pretty => {
            for name in &names {
                println!("{:>4} {}", name.index, name);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&names)?),
    }
    Ok(())
}
