//! StockLab CLI: browse the NEPSE sample repository from the terminal.
//!
//! Commands:
//! - `list`: every stock, optionally sorted by a key and algorithm
//! - `search`: multi-criteria filter (name/symbol, sector, price bounds)
//! - `range`: stocks priced within `[MIN, MAX]`, ascending
//! - `gainers` / `losers`: top movers by change percent
//! - `show`: one stock by symbol
//! - `sectors`: sector list with counts and total market cap
//! - `recent`: recently added stocks
//!
//! `--json` switches any listing to JSON rows on stdout.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stocklab_core::domain::to_rows;
use stocklab_core::{
    RepositoryConfig, SortAlgorithm, SortDirection, SortKey, Stock, StockFilter, StockRepository,
};

#[derive(Debug, Parser)]
#[command(name = "stocklab", about = "StockLab CLI: NEPSE stock repository demo")]
struct Cli {
    /// Repository config (TOML). Defaults to the seeded sample.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a table.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every stock.
    List {
        /// Sort key: symbol, name, price, market-cap, volume, year, change.
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort order: asc or desc.
        #[arg(long, default_value = "asc")]
        order: SortDirection,

        /// Sort algorithm: quick or merge.
        #[arg(long, default_value = "merge")]
        algorithm: SortAlgorithm,
    },
    /// Filter stocks by name/symbol, sector, and price bounds.
    Search {
        /// Substring of company name or symbol.
        #[arg(long)]
        query: Option<String>,

        /// Substring of sector.
        #[arg(long)]
        sector: Option<String>,

        /// Minimum price (inclusive).
        #[arg(long)]
        min: Option<f64>,

        /// Maximum price (inclusive).
        #[arg(long)]
        max: Option<f64>,
    },
    /// Stocks priced within [MIN, MAX], ascending by price.
    Range { min: f64, max: f64 },
    /// Biggest gainers by change percent.
    Gainers {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Biggest losers by change percent.
    Losers {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Show one stock.
    Show { symbol: String },
    /// Sectors with stock counts.
    Sectors,
    /// Recently added stocks, oldest first.
    Recent,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut repo = load_repository(cli.config.as_deref())?;
    debug!(stocks = repo.len(), "repository ready");

    match cli.command {
        Commands::List {
            sort,
            order,
            algorithm,
        } => {
            let stocks = match sort {
                Some(key) => repo.sorted_with(key, order, algorithm),
                None => repo.all(),
            };
            print_stocks(&stocks, cli.json)
        }
        Commands::Search {
            query,
            sector,
            min,
            max,
        } => {
            let filter = StockFilter {
                query,
                sector,
                min_price: min,
                max_price: max,
            };
            print_stocks(&repo.search(&filter), cli.json)
        }
        Commands::Range { min, max } => {
            if min > max {
                bail!("MIN ({min}) must not exceed MAX ({max})");
            }
            print_stocks(&repo.search_by_price_range(min, max), cli.json)
        }
        Commands::Gainers { limit } => print_stocks(&repo.top_gainers(limit), cli.json),
        Commands::Losers { limit } => print_stocks(&repo.top_losers(limit), cli.json),
        Commands::Show { symbol } => {
            let Some(stock) = repo.view(&symbol) else {
                bail!("no stock with symbol {}", symbol.trim().to_uppercase());
            };
            if cli.json {
                print_stocks(std::slice::from_ref(&stock), true)
            } else {
                print_detail(&stock);
                Ok(())
            }
        }
        Commands::Sectors => print_sectors(&repo, cli.json),
        Commands::Recent => print_stocks(&repo.recently_added(), cli.json),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_repository(config: Option<&Path>) -> Result<StockRepository> {
    let config = match config {
        Some(path) => RepositoryConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RepositoryConfig::default(),
    };
    Ok(StockRepository::with_config(&config)?)
}

// ── Output ───────────────────────────────────────────────────────────

fn print_stocks(stocks: &[Stock], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&to_rows(stocks))?);
        return Ok(());
    }
    if stocks.is_empty() {
        println!("No stocks found.");
        return Ok(());
    }
    println!(
        "{:<8} {:<26} {:<20} {:>10} {:>8} {:>10} {:>12} {:>6}",
        "Symbol", "Company", "Sector", "Price", "Chg %", "Volume", "Mkt Cap", "Year"
    );
    println!("{}", "-".repeat(107));
    for s in stocks {
        println!(
            "{:<8} {:<26} {:<20} {:>10.2} {:>+8.2} {:>10} {:>12} {:>6}",
            s.symbol(),
            truncate(s.company_name(), 26),
            truncate(s.sector(), 20),
            s.current_price(),
            s.change_percent(),
            s.volume(),
            format_cap(s.market_cap()),
            s.year_listed(),
        );
    }
    Ok(())
}

fn print_detail(stock: &Stock) {
    println!();
    println!("=== {} ===", stock.symbol());
    println!("Company:        {}", stock.company_name());
    println!("Sector:         {}", stock.sector());
    println!("Price:          Rs. {:.2}", stock.current_price());
    println!("Previous:       Rs. {:.2}", stock.previous_price());
    println!("Change:         {:+.2}%", stock.change_percent());
    println!("Volume:         {}", stock.volume());
    println!("Market cap:     {}", format_cap(stock.market_cap()));
    println!("Listed:         {}", stock.year_listed());
    println!("Added:          {}", stock.added_date().format("%Y-%m-%d %H:%M:%S"));
}

fn print_sectors(repo: &StockRepository, json: bool) -> Result<()> {
    let counts = repo.sector_counts();
    let sectors: Vec<(String, usize)> = repo
        .all_sectors()
        .into_iter()
        .map(|s| {
            let n = counts.get(&s).copied().unwrap_or(0);
            (s, n)
        })
        .collect();

    if json {
        let value = serde_json::json!({
            "sectors": sectors
                .iter()
                .map(|(name, count)| serde_json::json!({ "sector": name, "count": count }))
                .collect::<Vec<_>>(),
            "total_market_cap": repo.total_market_cap(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<22} {:>6}", "Sector", "Stocks");
    println!("{}", "-".repeat(29));
    for (name, count) in &sectors {
        println!("{name:<22} {count:>6}");
    }
    println!();
    println!("Total market cap: {}", format_cap(repo.total_market_cap()));
    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Rupee amount in the largest fitting unit (Arab = 1e9, Crore = 1e7).
fn format_cap(amount: f64) -> String {
    if amount >= 1e9 {
        format!("{:.1} Arab", amount / 1e9)
    } else if amount >= 1e7 {
        format!("{:.1} Cr", amount / 1e7)
    } else {
        format!("{amount:.0}")
    }
}
