use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use roster::core::stats::LoadSummary;
use roster::export::{write_records, ExportFormat};
use roster::ingest::discovery::list_country_dirs;
use roster::{Config, FilterCriteria, Result, SearchKind, Session};

/// Search and filter colon-delimited person records by country directory.
#[derive(Debug, Parser)]
#[command(name = "roster", version)]
struct Cli {
    /// JSON file overriding the default configuration
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List country directories under a root
    Countries {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Load a country directory, then search, filter and export
    Query(QueryArgs),
}

#[derive(Debug, clap::Args)]
struct QueryArgs {
    /// Country directory to load
    dir: PathBuf,

    /// city, name, phone, userid or email
    #[arg(long, default_value = "city")]
    kind: String,

    #[arg(long)]
    term: Option<String>,

    #[arg(long, default_value = "")]
    min_age: String,

    #[arg(long, default_value = "")]
    max_age: String,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    gender: String,

    /// Write the results here (.csv gets the semicolon table)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Print results as JSON instead of colon lines
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Countries { root } => {
            for country in list_country_dirs(&root)? {
                println!("{}", country);
            }
            Ok(())
        }
        Command::Query(args) => run_query(Session::new(config), args),
    }
}

fn run_query(mut session: Session, args: QueryArgs) -> Result<()> {
    let summary = session.load(&args.dir)?;
    report_load(&summary);

    if let Some(term) = &args.term {
        let kind: SearchKind = args.kind.parse()?;
        let hits = session.search(kind, term)?.len();
        if hits == 0 {
            tracing::info!(%kind, %term, "no results found");
        }
    }

    let criteria = FilterCriteria {
        min_age: args.min_age,
        max_age: args.max_age,
        city: args.city,
        phone: args.phone,
        gender: args.gender,
    };
    if !criteria.is_empty() {
        session.apply_filters(&criteria)?;
        tracing::info!(
            filters = %session.applied_filters().describe().join(", "),
            results = session.results().len(),
            "filters applied"
        );
    }

    if args.json {
        let records: Vec<&roster::Record> = session.results().iter().map(|r| r.as_ref()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        write_records(&mut stdout, session.results(), ExportFormat::Colon)?;
    }
    eprintln!("{}", session.stats());

    if let Some(path) = &args.export {
        let written = session.export(path)?;
        tracing::info!(path = %path.display(), records = written, "export finished");
    }

    Ok(())
}

fn report_load(summary: &LoadSummary) {
    tracing::info!(
        country = %summary.country,
        records = summary.record_count,
        skipped_files = summary.skipped_files.len(),
        skipped_lines = summary.skipped_lines,
        "load finished"
    );
}
