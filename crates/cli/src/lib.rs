mod query;
mod schema;
mod serve;

use catalogscope_core::ServiceConfig;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "catalogscope",
    version,
    about = "Normalized, paginated query service over a university course catalog",
    long_about = "Catalogscope splits raw catalog identifiers into subject and code, validates \
                  term/subject/code parameters, and serves filtered, paginated course listings \
                  and course details over HTTP."
)]
pub struct Cli {
    /// Config file (defaults to ~/.catalogscope/config.toml when present)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// JSON catalog snapshot to read course data from (overrides the config file)
    #[arg(long, value_name = "SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the known academic terms
    Terms,
    /// List the courses of a term
    Courses {
        #[arg(value_name = "TERM")]
        term: String,

        /// Only courses of this subject
        #[arg(long)]
        subject: Option<String>,

        /// Only courses with this code
        #[arg(long)]
        code: Option<String>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<String>,

        /// Courses per page
        #[arg(long)]
        limit: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show a course with its sections, or a single section
    Course {
        #[arg(value_name = "TERM")]
        term: String,

        #[arg(value_name = "SUBJECT")]
        subject: String,

        #[arg(value_name = "CODE")]
        code: String,

        #[arg(value_name = "SECTION")]
        section: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the JSON schemas of the HTTP responses
    Schema,
}

impl Commands {
    fn source(&self) -> Option<&SourceArgs> {
        match self {
            Commands::Serve { source, .. }
            | Commands::Courses { source, .. }
            | Commands::Course { source, .. } => Some(source),
            Commands::Terms | Commands::Schema => None,
        }
    }
}

fn load_config(path: Option<&PathBuf>, source: &SourceArgs) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load(path.map(PathBuf::as_path))?;
    if let Some(snapshot) = &source.snapshot {
        config.snapshot = Some(snapshot.clone());
    }
    Ok(config)
}

pub fn run() -> CliResult {
    let cli = Cli::parse();

    let source = cli.command.source().cloned().unwrap_or_default();
    let mut config = load_config(cli.config.as_ref(), &source)?;

    // Only the server logs to stderr; query commands keep stdout/stderr for their output
    let (component, to_stderr) = match &cli.command {
        Commands::Serve { .. } => ("serve", true),
        _ => ("cli", false),
    };
    let _guard = catalogscope_runtime::init_logging(component, &config.logging, to_stderr);

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Serve { bind, .. } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            rt.block_on(serve::run(config))
        }
        Commands::Terms => query::terms(),
        Commands::Courses {
            term,
            subject,
            code,
            page,
            limit,
            ..
        } => {
            let params = catalogscope_core::validate::ListCoursesParams {
                subject,
                code,
                page,
                limit,
            };
            rt.block_on(query::courses(config, term, params))
        }
        Commands::Course {
            term,
            subject,
            code,
            section,
            ..
        } => rt.block_on(query::course(config, term, subject, code, section)),
        Commands::Schema => schema::run(),
    }
}
