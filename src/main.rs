//! Ledgerview CLI
//!
//! Terminal front end for the customer/transaction view:
//! - Print the joined, filtered table
//! - Select a row and show the customer's daily totals
//! - Emit chart data and options as JSON
//! - List customers, generate a config file

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ledgerview::config::{generate_default_config, Config, LoggingConfig};
use ledgerview::dataset::{format_amount, Dataset};
use ledgerview::view::{cell_text, ChartSource, Column, CustomerTable, TableSource};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ledgerview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Customer transaction table with per-day charts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset JSON file (default: configured path, else the bundled dataset)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Filter by customer name (case-insensitive substring)
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by transaction amount (substring of the displayed amount)
    #[arg(long)]
    pub amount: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the joined transaction table
    Table {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Select a visible row and print that customer's daily totals
    Select {
        /// Row number as printed by `table` with the same filters
        row: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print chart data and options (JSON) for a visible row's customer
    Chart {
        /// Row number as printed by `table` with the same filters
        row: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List customers
    Customers,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, search) = match &cli.config {
        Some(path) => (
            Config::load_with_env(path).with_context(|| format!("loading config {:?}", path))?,
            None,
        ),
        None => {
            let search = Config::search_default();
            (search.config.clone(), Some(search))
        }
    };

    init_logging(&config.logging);
    if let Some(search) = &search {
        search.log();
    }

    tracing::debug!("Ledgerview v{}", env!("CARGO_PKG_VERSION"));

    let dataset = || load_dataset(cli.dataset.as_deref(), &config);

    match cli.command {
        Commands::Table { filters } => {
            let table = build_table(dataset()?, &config, &filters);
            match cli.format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&table.visible_rows())?);
                }
                "csv" => print_csv(&table)?,
                _ => print_table(&table),
            }
        }

        Commands::Select { row, filters } => {
            let mut table = build_table(dataset()?, &config, &filters);
            select_or_exit(&mut table, row);

            match cli.format.as_str() {
                "json" => {
                    let body = serde_json::json!({
                        "selection": table.selection(),
                        "transactions": table.selected_transactions(),
                        "daily_totals": table.daily_totals(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["date", "amount"])?;
                    for (date, amount) in table.daily_totals().iter() {
                        writer.write_record([date, format_amount(amount).as_str()])?;
                    }
                    writer.flush()?;
                }
                _ => print_daily_totals(&table),
            }
        }

        Commands::Chart { row, filters } => {
            let mut table = build_table(dataset()?, &config, &filters);
            select_or_exit(&mut table, row);

            let body = serde_json::json!({
                "title": table.details_heading(),
                "data": table.chart_data(),
                "options": table.chart_options(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Customers => {
            let dataset = dataset()?;
            if dataset.customers.is_empty() {
                println!("No customers in dataset.");
            } else {
                println!("{:<10} {}", "ID", "Name");
                println!("{}", "-".repeat(40));

                for customer in &dataset.customers {
                    let id = customer
                        .id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("{:<10} {}", id, customer.name);
                }
            }
        }

        Commands::Config { output } => write_config(output.as_deref())?,
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("ledgerview={}", logging.level)));

    // Logs go to stderr so table/JSON output stays clean on stdout
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_dataset(cli_path: Option<&Path>, config: &Config) -> anyhow::Result<Dataset> {
    let path = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.dataset.path.as_ref().map(PathBuf::from));

    match path {
        Some(path) => Dataset::load(&path).with_context(|| format!("loading dataset {:?}", path)),
        None => {
            tracing::debug!("Using bundled dataset");
            Ok(Dataset::bundled())
        }
    }
}

fn build_table(dataset: Dataset, config: &Config, filters: &FilterArgs) -> CustomerTable {
    let mut table = CustomerTable::with_chart_config(dataset, config.chart.clone());
    if let Some(name) = &filters.name {
        table.set_filter(Column::CustomerName, name);
    }
    if let Some(amount) = &filters.amount {
        table.set_filter(Column::Amount, amount);
    }
    table
}

fn select_or_exit(table: &mut CustomerTable, row: usize) {
    if table.select_row(row).is_none() {
        eprintln!(
            "Row {} is out of range ({} visible rows)",
            row,
            table.visible_rows().len()
        );
        std::process::exit(1);
    }
}

fn write_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

fn print_table(table: &CustomerTable) {
    let rows = table.visible_rows();

    if rows.is_empty() {
        println!("No rows match the current filters");
        return;
    }

    print!("{:<5}", "#");
    for column in table.columns() {
        print!(" | {:<20}", column.header());
    }
    println!();

    println!("{}", "-".repeat(5 + table.columns().len() * 23));

    for (i, row) in rows.iter().enumerate() {
        print!("{:<5}", i);
        for column in table.columns() {
            print!(" | {:<20}", cell_text(row, *column));
        }
        println!();
    }
}

fn print_csv(table: &CustomerTable) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());

    writer.write_record(table.columns().iter().map(|c| c.accessor()))?;
    for row in table.visible_rows() {
        writer.write_record(table.columns().iter().map(|c| cell_text(row, *c)))?;
    }
    writer.flush()?;
    Ok(())
}

fn print_daily_totals(table: &CustomerTable) {
    if let Some(heading) = table.details_heading() {
        println!("{}", heading);
        println!();
    }

    let totals = table.daily_totals();
    println!("{:<12} | {}", "Date", "Amount");
    println!("{}", "-".repeat(26));
    for (date, amount) in totals.iter() {
        println!("{:<12} | {}", date, format_amount(amount));
    }
    println!("{}", "-".repeat(26));
    println!("{:<12} | {}", "Total", format_amount(totals.total()));
}
