use crate::domain::model::{BeerDto, BeerType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "beer-stock")]
#[command(about = "Register beers and track their stock")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "JSON stock file (overrides store.data_file)")]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a new beer
    Create(CreateArgs),
    /// Show a beer by name
    Find { name: String },
    /// List every registered beer
    List,
    /// Remove a beer by id
    Delete { id: u64 },
    /// Add stock to a beer
    Increment { id: u64, amount: u32 },
    /// Remove stock from a beer
    Decrement { id: u64, amount: u32 },
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub id: Option<u64>,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub max: u32,

    #[arg(long)]
    pub quantity: u32,

    #[arg(long = "type", value_enum)]
    pub beer_type: BeerType,
}

impl From<CreateArgs> for BeerDto {
    fn from(args: CreateArgs) -> Self {
        BeerDto {
            id: args.id,
            name: args.name,
            brand: args.brand,
            max: args.max,
            quantity: args.quantity,
            beer_type: args.beer_type,
        }
    }
}
