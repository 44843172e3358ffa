// SPDX-License-Identifier: MIT

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use hackberry_rs::hackberry::condition::{split, ConditionEvaluator, DefaultConditionEvaluator};
use hackberry_rs::hackberry::context::AttributeContext;
use hackberry_rs::hackberry::loader::AttributeLoader;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a condition against a set of attributes
    Eval {
        /// The condition, e.g. "age >= 18"
        #[arg(short, long)]
        condition: String,

        /// YAML or JSON file with attribute values
        #[arg(short, long)]
        attributes: Option<PathBuf>,

        /// Attribute override as name=value, may be repeated
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Show how a condition is split into name, operator and literal
    Explain {
        /// The condition to inspect
        #[arg(short, long)]
        condition: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            condition,
            attributes,
            set,
        } => {
            let mut context = match attributes {
                Some(path) => AttributeLoader::new()
                    .load_file(&path)
                    .with_context(|| format!("Failed to load attributes from {}", path.display()))?,
                None => AttributeContext::new(),
            };

            AttributeLoader::apply_overrides(&mut context, &set)?;

            let evaluator = DefaultConditionEvaluator::new();
            let satisfied = evaluator.is_satisfied(&condition, &context)?;
            println!("{}", satisfied);
        }
        Commands::Explain { condition } => {
            let comparison = split(&condition)?;
            println!("name:     {}", comparison.name);
            println!(
                "operator: {} (at byte {})",
                comparison.operator, comparison.position
            );
            println!("literal:  {}", comparison.literal);
        }
    }

    Ok(())
}
