use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::flags::{scan_options, GraphFormat, ReportFormat};

mod commands;
mod flags;

#[derive(Parser)]
#[command(name = "sbom-scout")]
#[command(about = "Schema-agnostic SBOM inventory and consistency analysis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings and errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the SBOM documents that would be analyzed
    List {
        /// Directory containing SBOM JSON documents
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Do not honor .gitignore files during the scan
        #[arg(long)]
        no_gitignore: bool,

        /// Only scan the top level of the directory
        #[arg(long)]
        flat: bool,
    },
    /// Analyze a directory of SBOM documents and write reports
    Analyze {
        /// Directory containing SBOM JSON documents
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Directory for report artifacts
        #[arg(short, long, default_value = "result/analysis")]
        out_dir: PathBuf,

        /// Report formats to produce
        #[arg(long, value_enum, default_value_t = ReportFormat::All)]
        format: ReportFormat,

        /// Do not honor .gitignore files during the scan
        #[arg(long)]
        no_gitignore: bool,

        /// Only scan the top level of the directory
        #[arg(long)]
        flat: bool,
    },
    /// Survey the top-level fields of every document
    Schema {
        /// Directory containing SBOM JSON documents
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Do not honor .gitignore files during the scan
        #[arg(long)]
        no_gitignore: bool,

        /// Only scan the top level of the directory
        #[arg(long)]
        flat: bool,
    },
    /// Export the dependency graph of one document
    Graph {
        /// SBOM document to graph
        file: PathBuf,

        /// Export format
        #[arg(long, value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::List {
            dir,
            no_gitignore,
            flat,
        } => commands::list::run(&dir, scan_options(no_gitignore, flat)),
        Commands::Analyze {
            dir,
            out_dir,
            format,
            no_gitignore,
            flat,
        } => commands::analyze::run(&dir, &out_dir, format, scan_options(no_gitignore, flat)),
        Commands::Schema {
            dir,
            out,
            no_gitignore,
            flat,
        } => commands::schema::run(&dir, out.as_deref(), scan_options(no_gitignore, flat)),
        Commands::Graph { file, format, out } => {
            commands::graph::run(&file, format, out.as_deref())
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
