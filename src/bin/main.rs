//! erdq CLI - Compile ERD query scripts to query specifications
//!
//! Usage:
//!   erdq tables --data-source <id>
//!   erdq compile <script.json> [--output <file>] [--copy]
//!   erdq submit <script.json> --data-source <id> --type <type>
//!
//! Examples:
//!   erdq tables --data-source 42
//!   erdq compile demos/orders.json --output spec.json
//!   erdq submit demos/orders.json --data-source 42 --type report

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use erdq::catalog::{HttpSchemaCatalog, SchemaCatalog};
use erdq::config::Settings;
use erdq::export::{canonical_json, ExportGateway, HttpQueryApi};
use erdq::model::Table;
use erdq::script::Script;
use erdq::session::{EditorSession, NotificationLevel};

#[derive(Parser)]
#[command(name = "erdq")]
#[command(about = "erdq - Compile entity-relationship diagrams into query specifications")]
#[command(version)]
struct Cli {
    /// Path to an erdq.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tables of a data source with their field types
    Tables {
        /// Data source identifier
        #[arg(short, long)]
        data_source: String,

        /// Override the configured data service URL
        #[arg(long)]
        data_service: Option<String>,
    },

    /// Replay a gesture script and print the canonical specification
    Compile {
        /// Path to the script (.json)
        script: PathBuf,

        /// Write the specification to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy the specification to the clipboard
        #[arg(long)]
        copy: bool,

        /// Resolve tables missing from the script against this data source
        #[arg(short, long)]
        data_source: Option<String>,
    },

    /// Replay a gesture script and submit it to the query API
    Submit {
        /// Path to the script (.json)
        script: PathBuf,

        /// Data source identifier
        #[arg(short, long)]
        data_source: String,

        /// Query type discriminator
        #[arg(short = 't', long = "type")]
        query_type: String,

        /// Override the configured API service URL
        #[arg(long)]
        api_service: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_str()),
    )
    .init();

    match cli.command {
        Commands::Tables {
            data_source,
            data_service,
        } => cmd_tables(&settings, &data_source, data_service).await,
        Commands::Compile {
            script,
            output,
            copy,
            data_source,
        } => cmd_compile(&settings, script, output, copy, data_source).await,
        Commands::Submit {
            script,
            data_source,
            query_type,
            api_service,
        } => cmd_submit(&settings, script, &data_source, &query_type, api_service).await,
    }
}

async fn cmd_tables(
    settings: &Settings,
    data_source: &str,
    data_service: Option<String>,
) -> ExitCode {
    let tables = match fetch_tables(settings, data_source, data_service).await {
        Ok(tables) => tables,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    if tables.is_empty() {
        println!("No tables found.");
        return ExitCode::SUCCESS;
    }

    for table in &tables {
        println!("{}", table.name);
        for field in &table.fields {
            let key = if field.is_primary_key {
                " [PK]"
            } else if field.is_foreign_key {
                " [FK]"
            } else {
                ""
            };
            println!("  {:<24} {}{}", field.name, field.field_type, key);
        }
    }

    ExitCode::SUCCESS
}

async fn cmd_compile(
    settings: &Settings,
    script_path: PathBuf,
    output: Option<PathBuf>,
    copy: bool,
    data_source: Option<String>,
) -> ExitCode {
    let mut session = match load_session(settings, &script_path, data_source.as_deref()).await {
        Ok(session) => session,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let compiled = session.compile();
    if compiled.specification.is_empty() {
        eprintln!("warning: no fields are configured; the specification selects nothing");
    }
    for dropped in &compiled.dropped {
        eprintln!(
            "warning: connection {} ignored: {}",
            dropped.connection_id, dropped.reason
        );
    }

    match output {
        Some(path) => {
            let directory = path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned());
            let gateway = ExportGateway::new(directory).with_file_name(file_name);
            if session.download(&gateway).is_none() {
                return report_notifications(&mut session);
            }
        }
        None => match canonical_json(&compiled.specification) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if copy {
        let gateway = match ExportGateway::from_settings(&settings.export) {
            Ok(gateway) => gateway,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        session.copy_to_clipboard(&gateway).await;
    }

    report_notifications(&mut session)
}

async fn cmd_submit(
    settings: &Settings,
    script_path: PathBuf,
    data_source: &str,
    query_type: &str,
    api_service: Option<String>,
) -> ExitCode {
    let base_url = match api_service {
        Some(url) => url,
        None => match settings.services.resolved_api_service() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut session = match load_session(settings, &script_path, Some(data_source)).await {
        Ok(session) => session,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let api = HttpQueryApi::new(base_url);
    session.open_export_panel();
    session.create_query(&api, data_source, query_type).await;

    report_notifications(&mut session)
}

/// Replay a script into a fresh session. Tables the script does not
/// declare are fetched from `data_source` when one is given.
async fn load_session(
    settings: &Settings,
    script_path: &Path,
    data_source: Option<&str>,
) -> Result<EditorSession, String> {
    let script = Script::from_file(script_path)
        .map_err(|e| format!("'{}': {}", script_path.display(), e))?;

    let catalog = match data_source {
        Some(id) if !script.undeclared_tables().is_empty() => {
            fetch_tables(settings, id, None).await?
        }
        _ => Vec::new(),
    };

    let mut session = EditorSession::with_layout(settings.layout);
    let summary = script
        .replay(&mut session, &catalog)
        .map_err(|e| e.to_string())?;
    log::info!(
        "replayed {} tables, {} connections ({} skipped), {} field configs",
        summary.nodes_added,
        summary.connections_added,
        summary.connections_skipped,
        summary.fields_configured
    );
    Ok(session)
}

async fn fetch_tables(
    settings: &Settings,
    data_source: &str,
    data_service: Option<String>,
) -> Result<Vec<Table>, String> {
    let base_url = match data_service {
        Some(url) => url,
        None => settings
            .services
            .resolved_data_service()
            .map_err(|e| e.to_string())?,
    };
    HttpSchemaCatalog::new(base_url)
        .fetch_tables(data_source)
        .await
        .map_err(|e| e.to_string())
}

/// Print queued notifications; any error notification fails the command.
fn report_notifications(session: &mut EditorSession) -> ExitCode {
    let mut failed = false;
    for notification in session.take_notifications() {
        match notification.level {
            NotificationLevel::Success => eprintln!("{}", notification.message),
            NotificationLevel::Error => {
                failed = true;
                eprintln!("Error: {}", notification.message);
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
