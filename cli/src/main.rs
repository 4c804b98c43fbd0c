mod import;

use std::fs::File;
use std::io;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; pass --session-token or set CONCERT_SESSION_TOKEN")]
    MissingSessionToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cannot open {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error(transparent)]
    Import(#[from] import::ImportError),
}

#[derive(Parser, Debug)]
#[command(name = "concert-cli", about = "Concert Journal API and import CLI")]
struct Cli {
    #[arg(long, env = "CONCERT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "CONCERT_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    session_token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `/healthz`.
    Ping,
    /// Sign in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CONCERT_PASSWORD")]
        password: String,
    },
    Events(EventsCommand),
    /// Turn a `Band,Wo,Wann` spreadsheet export into journal entries.
    ImportCsv(ImportCsvArgs),
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List,
}

#[derive(Args, Debug)]
struct ImportCsvArgs {
    #[arg(long, default_value = "Bands.csv", help = "Input file path, or - for stdin")]
    input: String,

    #[arg(long, default_value = "admin@example.com", help = "Owner of the generated SQL rows")]
    user_email: String,

    #[arg(long, default_value_t = false, help = "POST rows to the server instead of printing SQL")]
    apply: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, session_token: cli.session_token };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { email, password } => run_login(&ctx, &email, &password).await,
        Command::Events(events) => run_events(&ctx, events).await,
        Command::ImportCsv(args) => run_import(&ctx, args).await,
    }
}

fn endpoint(cli: &CliContext, path: &str) -> String {
    format!("{}{}", cli.base_url.trim_end_matches('/'), path)
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(endpoint(cli, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_login(cli: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint(cli, "/api/auth/login"))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }
    let body = response.json::<Value>().await?;
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or(CliError::MissingField("token"))?;
    println!("{token}");
    Ok(())
}

async fn run_events(cli: &CliContext, events: EventsCommand) -> Result<(), CliError> {
    match events.command {
        EventsSubcommand::List => {
            let json = api_request(cli, reqwest::Method::GET, "/api/events", None).await?;
            print_json(&json)
        }
    }
}

async fn run_import(cli: &CliContext, args: ImportCsvArgs) -> Result<(), CliError> {
    let rows = if args.input == "-" {
        import::read_rows(io::stdin())?
    } else {
        let file = File::open(&args.input).map_err(|source| CliError::Input { path: args.input.clone(), source })?;
        import::read_rows(file)?
    };

    if !args.apply {
        for row in &rows {
            println!("{}", import::insert_statement(row, &args.user_email));
        }
        return Ok(());
    }

    let mut created = 0_usize;
    for row in &rows {
        api_request(cli, reqwest::Method::POST, "/api/events", Some(row.to_payload())).await?;
        created += 1;
    }
    eprintln!("imported {created} events");
    Ok(())
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let session_token = cli
        .session_token
        .as_deref()
        .ok_or(CliError::MissingSessionToken)?;

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(&format!("session_token={session_token}"))?);

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let request = client.request(method, endpoint(cli, path));
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: text });
    }

    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
