use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use inventory::endpoint::{self, ApiRequest};
use inventory::input::{accept_mass, accept_quantity};
use inventory::model::InvalidRecord;
use inventory::response::{self, ResponseError};
use inventory::{Chemical, ChemicalFields, HazardType, HttpMethod, Material, MaterialFields, NewBorrower};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidRecord),
    #[error("no {kind} with id {pk}")]
    NotFound { kind: &'static str, pk: i64 },
}

impl From<ResponseError> for CliError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::Status { status, body } => Self::ServerError { status, body },
            ResponseError::Malformed(e) => Self::InvalidJson(e),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Stockroom inventory API CLI")]
struct Cli {
    #[arg(long, env = "STOCKROOM_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Material(MaterialCommand),
    Chemical(ChemicalCommand),
    User(UserCommand),
}

#[derive(Args, Debug)]
struct MaterialCommand {
    #[command(subcommand)]
    command: MaterialSubcommand,
}

#[derive(Subcommand, Debug)]
enum MaterialSubcommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_quantity, default_value = "0")]
        quantity: u32,
    },
    /// Change the given fields; the rest keep their current values.
    Edit {
        pk: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_quantity)]
        quantity: Option<u32>,
    },
    Delete {
        pk: i64,
    },
}

#[derive(Args, Debug)]
struct ChemicalCommand {
    #[command(subcommand)]
    command: ChemicalSubcommand,
}

#[derive(Args, Debug, Default)]
struct ChemicalArgs {
    #[arg(long)]
    brand: Option<String>,
    #[arg(long, value_parser = parse_mass)]
    mass: Option<f64>,
    #[arg(long)]
    hazard: Option<HazardType>,
    #[arg(long, help = "Expiration date, YYYY-MM-DD")]
    expires: Option<NaiveDate>,
    #[arg(long)]
    location: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ChemicalSubcommand {
    List {
        #[arg(long)]
        hazard: Option<HazardType>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: ChemicalArgs,
    },
    /// Change the given fields; the rest keep their current values.
    Edit {
        pk: i64,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ChemicalArgs,
    },
    Delete {
        pk: i64,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    AddBorrower {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let ctx = CliContext { client, base_url: cli.base_url };

    let json = match cli.command {
        Command::Material(material) => run_material(&ctx, material).await?,
        Command::Chemical(chemical) => run_chemical(&ctx, chemical).await?,
        Command::User(user) => run_user(&ctx, user).await?,
    };
    print_json(&json)
}

struct CliContext {
    client: reqwest::Client,
    base_url: String,
}

async fn run_material(ctx: &CliContext, material: MaterialCommand) -> Result<Value, CliError> {
    match material.command {
        MaterialSubcommand::List => api_request(ctx, &endpoint::list_materials()).await,
        MaterialSubcommand::Add { name, quantity } => {
            let fields = MaterialFields { name, quantity }.validated()?;
            api_request(ctx, &endpoint::create_material(&fields)).await
        }
        MaterialSubcommand::Edit { pk, name, quantity } => {
            let current = find_material(ctx, pk).await?;
            let fields = edit_material_fields(current.fields(), name, quantity)?;
            api_request(ctx, &endpoint::update_material(pk, &fields)).await
        }
        MaterialSubcommand::Delete { pk } => api_request(ctx, &endpoint::delete_material(pk)).await,
    }
}

async fn run_chemical(ctx: &CliContext, chemical: ChemicalCommand) -> Result<Value, CliError> {
    match chemical.command {
        ChemicalSubcommand::List { hazard } => api_request(ctx, &endpoint::list_chemicals(hazard)).await,
        ChemicalSubcommand::Add { name, fields } => {
            let base = ChemicalFields { chemical_name: name, ..ChemicalFields::default() };
            let fields = edit_chemical_fields(base, None, fields)?;
            api_request(ctx, &endpoint::create_chemical(&fields)).await
        }
        ChemicalSubcommand::Edit { pk, name, fields } => {
            let current = find_chemical(ctx, pk).await?;
            let fields = edit_chemical_fields(current.fields(), name, fields)?;
            api_request(ctx, &endpoint::update_chemical(pk, &fields)).await
        }
        ChemicalSubcommand::Delete { pk } => api_request(ctx, &endpoint::delete_chemical(pk)).await,
    }
}

async fn run_user(ctx: &CliContext, user: UserCommand) -> Result<Value, CliError> {
    match user.command {
        UserSubcommand::List => api_request(ctx, &endpoint::list_users()).await,
        UserSubcommand::AddBorrower { name, email, username } => {
            let borrower = NewBorrower { name, email, username }.validated()?;
            api_request(ctx, &endpoint::create_borrower(&borrower)).await
        }
    }
}

async fn find_material(ctx: &CliContext, pk: i64) -> Result<Material, CliError> {
    let list = api_request(ctx, &endpoint::list_materials()).await?;
    let items: Vec<Material> = serde_json::from_value(list)?;
    items.into_iter().find(|m| m.id == pk).ok_or(CliError::NotFound { kind: "material", pk })
}

async fn find_chemical(ctx: &CliContext, pk: i64) -> Result<Chemical, CliError> {
    let list = api_request(ctx, &endpoint::list_chemicals(None)).await?;
    let items: Vec<Chemical> = serde_json::from_value(list)?;
    items.into_iter().find(|c| c.id == pk).ok_or(CliError::NotFound { kind: "chemical", pk })
}

fn edit_material_fields(
    current: MaterialFields,
    name: Option<String>,
    quantity: Option<u32>,
) -> Result<MaterialFields, InvalidRecord> {
    MaterialFields { name: name.unwrap_or(current.name), quantity: quantity.unwrap_or(current.quantity) }.validated()
}

fn edit_chemical_fields(
    current: ChemicalFields,
    name: Option<String>,
    args: ChemicalArgs,
) -> Result<ChemicalFields, InvalidRecord> {
    ChemicalFields {
        chemical_name: name.unwrap_or(current.chemical_name),
        brand_name: args.brand.unwrap_or(current.brand_name),
        mass: args.mass.unwrap_or(current.mass),
        hazard_type: args.hazard.or(current.hazard_type),
        expiration_date: args.expires.or(current.expiration_date),
        location: args.location.or(current.location),
    }
    .validated()
}

fn parse_quantity(raw: &str) -> Result<u32, String> {
    accept_quantity(raw).ok_or_else(|| format!("quantity must be a whole number, got `{raw}`"))
}

fn parse_mass(raw: &str) -> Result<f64, String> {
    accept_mass(raw).ok_or_else(|| format!("mass must be a number with at most 2 decimals, got `{raw}`"))
}

fn to_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

async fn api_request(ctx: &CliContext, request: &ApiRequest) -> Result<Value, CliError> {
    let mut builder = ctx
        .client
        .request(to_method(request.method), request.url(&ctx.base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .query(&request.query);
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(response::decode::<Value>(status, &body)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
