use chef_core::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mychef")]
#[command(about = "Recipe catalog, weekly meal plans and dish recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the remote recipe source
    #[arg(long, global = true)]
    offline: bool,

    /// Recipe archive to use when the remote source is unavailable
    #[arg(long, global = true)]
    archive: Option<PathBuf>,

    /// Override the remote recipe URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Seed the random selection for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the name and description of every recipe
    Recipes,

    /// List known recipe categories
    Categories,

    /// List the recipes of one category
    Category {
        /// Category label, e.g. 水产
        name: String,
    },

    /// Plan a week of breakfast, lunch and dinner
    Plan {
        /// Number of people eating (1-10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
        people: u32,

        /// Ingredient the household is allergic to (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Ingredient to avoid (repeatable)
        #[arg(long = "avoid")]
        avoid_items: Vec<String>,
    },

    /// Recommend one meal of meat and vegetable dishes
    Eat {
        /// Number of people eating (1-10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
        people: u32,

        /// Include a grocery list for the chosen dishes
        #[arg(long)]
        groceries: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    chef_core::logging::init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);

    let catalog = load_catalog(&config.source).await;
    let problems = catalog.validate();
    if !problems.is_empty() {
        for problem in &problems {
            tracing::warn!("Catalog: {}", problem);
        }
    }

    let cookbook = Cookbook::new(Arc::new(catalog), config);
    let mut rng = cli
        .seed
        .map(RngSource::seeded)
        .unwrap_or_else(RngSource::from_entropy);

    match cli.command {
        Commands::Recipes => print_json(&cookbook.get_all_recipes()),
        Commands::Categories => print_json(&cookbook.categories()),
        Commands::Category { name } => print_json(&cookbook.get_recipes_by_category(&name)?),
        Commands::Plan {
            people,
            allergies,
            avoid_items,
        } => {
            let request = MealRequest {
                allergies,
                avoid_items,
                people_count: people,
            };
            print_json(&cookbook.recommend_meals(&request, &mut rng)?)
        }
        Commands::Eat { people, groceries } => {
            print_json(&cookbook.what_to_eat(people, groceries, &mut rng)?)
        }
    }
}

/// Command line flags win over the config file
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if cli.offline {
        config.source.offline = true;
    }
    if let Some(ref archive) = cli.archive {
        config.source.archive_path = Some(archive.clone());
    }
    if let Some(ref url) = cli.url {
        config.source.remote_url = Some(url.clone());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
