use backend::config::db::{DbConfig, DbKind};
use backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::MigrationCommand;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(c: Command) -> Self {
        match c {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Jokenpo database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database type; defaults to JOKENPO_DB from the environment
    #[arg(short, long, value_enum)]
    db: Option<Db>,

    /// SQLite file path; defaults to JOKENPO_SQLITE_PATH
    #[arg(long)]
    sqlite_path: Option<std::path::PathBuf>,
}

/// Resolve the target from the environment, with CLI flags taking precedence.
fn resolve_config(args: &Args) -> Result<DbConfig, String> {
    let db_override = args.db.map(|db| match db {
        Db::Postgres => DbKind::Postgres.to_string(),
        Db::SqliteFile => DbKind::SqliteFile.to_string(),
    });
    let path_override = args
        .sqlite_path
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned());

    let lookup = move |name: &str| match name {
        "JOKENPO_DB" if db_override.is_some() => db_override.clone(),
        "JOKENPO_SQLITE_PATH" if path_override.is_some() => path_override.clone(),
        _ => std::env::var(name).ok(),
    };
    let cfg = DbConfig::from_lookup(&lookup).map_err(|e| e.to_string())?;

    if cfg.kind() == DbKind::SqliteMemory {
        return Err(
            "sqlite-memory is not supported here: the database would vanish when the command exits"
                .into(),
        );
    }

    Ok(cfg)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let cfg = match resolve_config(&args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let conn = match connect_db(&cfg).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
