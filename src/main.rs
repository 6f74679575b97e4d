use clap::{ArgAction, Parser};
use mystruct::{
    config::{ConfigFile, ConnectionConfig},
    repl, MySqlCatalog, SchemaError, Session,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// A convenient converter from MySQL tables to Go structs
#[derive(Parser)]
#[command(
    name = "mystruct",
    version,
    override_usage = "mystruct [OPTIONS] [DATABASE]",
    disable_help_flag = true
)]
struct Cli {
    /// Host address of the database. [default: 127.0.0.1]
    #[arg(long, short = 'h')]
    host: Option<String>,
    /// Port number to use for connection. [default: 3306]
    #[arg(long, short = 'P')]
    port: Option<u16>,
    /// User name to connect to the database. [default: root]
    #[arg(long, short = 'u')]
    username: Option<String>,
    /// Password to connect to the database.
    #[arg(long, short = 'p')]
    password: Option<String>,
    /// Database to use.
    #[arg(long, short = 'D')]
    database: Option<String>,
    /// Path to a TOML file with a [connection] table.
    #[arg(long = "config", short = 'c')]
    config_path: Option<PathBuf>,
    /// Database to use, when --database is not given.
    #[arg(value_name = "DATABASE")]
    database_arg: Option<String>,
    /// Show this message and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            database: self.database.clone().or_else(|| self.database_arg.clone()),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();
}

fn read_password<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(output, "Password:")?;
    output.flush()?;

    let mut password = String::new();
    input.read_line(&mut password)?;

    Ok(password.trim_end_matches(&['\r', '\n'][..]).to_string())
}

async fn handle(cli: Cli) -> Result<(), SchemaError> {
    let from_file = match &cli.config_path {
        Some(path) => ConfigFile::load(path)?.connection,
        None => ConnectionConfig::default(),
    };
    let mut options = cli.connection_config().or(from_file).into_options();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if options.password.is_empty() {
        options.password = read_password(stdin.lock(), stdout.lock())?;
    }

    debug!(host = %options.host, username = %options.username, "opening connection");

    let username = options.username.clone();
    let host = options.host.clone();
    let database = options.database.clone();

    let catalog = MySqlCatalog::open(options)
        .await
        .map_err(|err| SchemaError::connectivity("failed to connect", err))?;
    let mut session = Session::new(catalog, database);

    repl::run(&mut session, &username, &host, stdin.lock(), stdout.lock()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = handle(cli).await {
        println!("{}", e);
    }
}
