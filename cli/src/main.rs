mod render;

use clap::{Args, Parser, Subcommand};
use records::auth::{self, Credentials, LoginResponse};
use records::endpoint::{self, DEFAULT_API_BASE_URL};
use records::{ApiError, Classroom, DEFAULT_PAGE_SIZE, Entity, Parent, Student, Teacher, page, search};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use render::Row;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set SCHOOL_RECORDS_TOKEN")]
    MissingToken,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "records-cli", about = "School records API CLI")]
struct Cli {
    #[arg(long, env = "SCHOOL_RECORDS_API_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SCHOOL_RECORDS_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the JWT.
    Login(CredentialArgs),
    Register(CredentialArgs),
    Classroom(EntityCommand),
    Student(EntityCommand),
    Teacher(EntityCommand),
    Parent(EntityCommand),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct EntityCommand {
    #[command(subcommand)]
    command: EntitySubcommand,
}

#[derive(Subcommand, Debug)]
enum EntitySubcommand {
    List(ListArgs),
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    per_page: usize,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    match cli.command {
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Classroom(cmd) => run_entity::<Classroom>(&ctx, cmd).await,
        Command::Student(cmd) => run_entity::<Student>(&ctx, cmd).await,
        Command::Teacher(cmd) => run_entity::<Teacher>(&ctx, cmd).await,
        Command::Parent(cmd) => run_entity::<Parent>(&ctx, cmd).await,
    }
}

async fn run_login(cli: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let credentials = auth::validate_login(&args.email, &args.password).map_err(CliError::Invalid)?;
    let body = api_request(cli, reqwest::Method::POST, endpoint::LOGIN_PATH, false, Some(&credentials)).await?;
    let response: LoginResponse = serde_json::from_value(body)?;
    println!("{}", response.jwt_token);
    Ok(())
}

async fn run_register(cli: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let credentials = auth::validate_login(&args.email, &args.password).map_err(CliError::Invalid)?;
    api_request(cli, reqwest::Method::POST, endpoint::REGISTER_PATH, false, Some(&credentials)).await?;
    println!("registered {}", credentials.email);
    Ok(())
}

async fn run_entity<T: Entity + Row>(cli: &CliContext, cmd: EntityCommand) -> Result<(), CliError> {
    match cmd.command {
        EntitySubcommand::List(args) => {
            let body = api_request(cli, reqwest::Method::GET, T::KIND.list_path(), true, None).await?;
            let rows = T::decode_list(body).map_err(ApiError::from)?;
            let filtered: Vec<T> = search::filter(&rows, &args.search).into_iter().cloned().collect();
            let page = page::paginate(&filtered, args.page, args.per_page);
            print!("{}", render::render_page(&page));
            Ok(())
        }
        EntitySubcommand::Delete { id } => {
            let path = T::KIND.delete_path(id);
            api_request(cli, reqwest::Method::DELETE, &path, true, None).await?;
            println!("deleted {} {id}", T::KIND.label());
            Ok(())
        }
    }
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    authenticated: bool,
    body: Option<&Credentials>,
) -> Result<Value, CliError> {
    let mut headers = HeaderMap::new();
    if authenticated {
        let token = cli.token.as_deref().filter(|t| !t.trim().is_empty()).ok_or(CliError::MissingToken)?;
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&endpoint::bearer(token))?);
    }

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    let url = endpoint::url(&cli.base_url, path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body { request.json(json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16()).into());
    }

    // Delete and register answer with an empty or plain-text body.
    let text = response.text().await?;
    Ok(serde_json::from_str::<Value>(&text).unwrap_or(Value::Null))
}
