//! Command line interface for the DLMM pool scout.
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dlmm_scout_api::{AppState, ServerConfig};
use dlmm_scout_data::{LocalStore, MeteoraDlmmProvider, PoolDataProvider};
use dlmm_scout_domain::{
    DepositAssumption, HealthReport, HealthThresholds, PoolFilter, PoolInfo, RankedPool,
    RoiEstimate, estimate_roi, rank_pools, score_pool, search_pools,
};
use dotenv::dotenv;
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dlmm-scout")]
#[command(about = "Meteora DLMM pool explorer and deposit ROI scout", long_about = None)]
struct Cli {
    /// Base URL of the DLMM pair API
    #[arg(long, env = "DLMM_API_URL", default_value = dlmm_scout_data::DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the local store database
    #[arg(long, env = "DLMM_STORE_PATH", default_value = "dlmm-scout.db")]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank pools by projected daily return for a deposit
    Top {
        /// Deposit amount in USD (falls back to the saved deposit)
        #[arg(short, long)]
        deposit: Option<Decimal>,

        /// Assume the deposit joins the pool, growing its liquidity
        #[arg(long)]
        add_deposit: bool,

        /// Pools below this liquidity rank last with a zero return
        #[arg(long, default_value_t = Decimal::ZERO)]
        min_liquidity: Decimal,

        /// Pools below this 24h volume rank last with a zero return
        #[arg(long, default_value_t = Decimal::ZERO)]
        min_volume: Decimal,

        /// Number of pools to show
        #[arg(short, long, default_value_t = dlmm_scout_domain::DEFAULT_RANKING_LIMIT)]
        limit: usize,
    },
    /// Show one pool with its ROI estimate and health report
    Inspect {
        /// Pool address
        address: String,

        /// Deposit amount in USD (falls back to the saved deposit)
        #[arg(short, long)]
        deposit: Option<Decimal>,

        /// Assume the deposit joins the pool, growing its liquidity
        #[arg(long)]
        add_deposit: bool,

        /// Also fetch the pool's bin arrays
        #[arg(long)]
        bin_arrays: bool,
    },
    /// Search pools by name or address
    Search {
        /// Substring to match
        query: String,

        /// Exclude pools below this liquidity
        #[arg(long, default_value_t = Decimal::ZERO)]
        min_liquidity: Decimal,

        /// Exclude pools below this 24h volume
        #[arg(long, default_value_t = Decimal::ZERO)]
        min_volume: Decimal,
    },
    /// Inspect or edit the local store
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Run the dashboard REST API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8787")]
        bind: SocketAddr,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Print the value stored under a key
    Get { key: String },
    /// Store a value under a key
    Set { key: String, value: String },
    /// Delete a key
    Delete { key: String },
    /// List every key
    List,
    /// Delete every entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let provider = MeteoraDlmmProvider::with_base_url(&cli.base_url);
    let store = LocalStore::open(&cli.store_path)
        .with_context(|| format!("opening store at {}", cli.store_path.display()))?;

    match cli.command {
        Commands::Top {
            deposit,
            add_deposit,
            min_liquidity,
            min_volume,
            limit,
        } => {
            let amount = resolve_deposit(&store, deposit)?;
            let assumption = DepositAssumption::new(amount, add_deposit)?;
            let filter = PoolFilter::new(min_liquidity, min_volume)?;

            let pools = provider.fetch_pools().await?;
            let ranked = rank_pools(&pools, &assumption, &filter, limit);
            print_ranking(&ranked, amount);
        }
        Commands::Inspect {
            address,
            deposit,
            add_deposit,
            bin_arrays,
        } => {
            let pools = provider.fetch_pools().await?;
            let pool = pools
                .iter()
                .find(|p| p.address == address)
                .with_context(|| format!("no pool with address {address}"))?;
            store.save_selected_pool(pool)?;

            print_pool(pool);

            let amount = match deposit {
                Some(amount) => {
                    let amount = positive_deposit(amount)?;
                    store.save_deposit(amount)?;
                    amount
                }
                None => store.load_deposit()?.unwrap_or(Decimal::ZERO),
            };
            let assumption = DepositAssumption::new(amount, add_deposit)?;
            print_estimate(amount, &estimate_roi(pool, &assumption));

            let report = score_pool(pool, &pools, &HealthThresholds::default(), amount);
            print_health(pool, &report);

            if bin_arrays {
                let arrays = provider.fetch_bin_arrays(&address).await?;
                println!("\nBin arrays: {} fetched", arrays.len());
            }
        }
        Commands::Search {
            query,
            min_liquidity,
            min_volume,
        } => {
            let filter = PoolFilter::new(min_liquidity, min_volume)?;
            let pools = provider.fetch_pools().await?;
            let results = search_pools(&pools, &query, &filter);

            if results.is_empty() {
                println!("No pools match \"{query}\"");
            }
            for (i, pool) in results.iter().enumerate() {
                println!(
                    "{}) {} ({}) liquidity ${:.2}",
                    i + 1,
                    pool.name,
                    pool.address,
                    pool.liquidity
                );
            }
        }
        Commands::Store { action } => run_store_action(&store, action)?,
        Commands::Serve { bind } => {
            let state = AppState::new(Arc::new(provider), store, HealthThresholds::default());
            match state.refresh().await {
                Ok(fetched) => info!(fetched, "initial pool snapshot loaded"),
                Err(err) => {
                    warn!(error = %err, "initial pool fetch failed, starting with an empty snapshot");
                }
            }
            dlmm_scout_api::serve(ServerConfig { bind }, state).await?;
        }
    }

    Ok(())
}

/// A `--deposit` flag wins and is persisted; otherwise the saved deposit is
/// used, matching the dashboard's remembered TVL input.
fn resolve_deposit(store: &LocalStore, flag: Option<Decimal>) -> Result<Decimal> {
    match flag {
        Some(amount) => {
            let amount = positive_deposit(amount)?;
            store.save_deposit(amount)?;
            Ok(amount)
        }
        None => store
            .load_deposit()?
            .context("no deposit given and none saved; pass --deposit"),
    }
}

fn positive_deposit(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        bail!("deposit must be positive, got {amount}");
    }
    Ok(amount)
}

fn run_store_action(store: &LocalStore, action: StoreAction) -> Result<()> {
    match action {
        StoreAction::Get { key } => match store.get(&key)? {
            Some(value) => println!("{value}"),
            None => bail!("no entry under key {key}"),
        },
        StoreAction::Set { key, value } => {
            store.set(&key, &value)?;
            println!("stored {key}");
        }
        StoreAction::Delete { key } => {
            if store.delete(&key)? {
                println!("deleted {key}");
            } else {
                bail!("no entry under key {key}");
            }
        }
        StoreAction::List => {
            for key in store.keys()? {
                println!("{key}");
            }
        }
        StoreAction::Clear => {
            store.clear()?;
            println!("store cleared");
        }
    }
    Ok(())
}

fn print_ranking(ranked: &[RankedPool], amount: Decimal) {
    println!(
        "📊 Top {} pools by projected daily return on a ${:.2} deposit",
        ranked.len(),
        amount
    );
    println!(
        "{:<28} | {:>14} | {:>12} | {:>14} | {:>12}",
        "Name", "Liquidity", "24h Fees", "24h Volume", "Daily Return"
    );
    println!("{}", "-".repeat(92));
    for entry in ranked {
        let pool = &entry.pool;
        println!(
            "{:<28} | {:>14.2} | {:>12.2} | {:>14.2} | {:>12.4}",
            pool.name, pool.liquidity, pool.fees_24h, pool.trade_volume_24h, entry.daily_return
        );
    }
}

fn print_pool(pool: &PoolInfo) {
    println!("🔍 {}", pool.name);
    println!("{}", pool.address);
    println!("{:<26} {}", "Bin Step", pool.bin_step);
    println!("{:<26} {}%", "Base Fee", pool.base_fee_percentage);
    println!("{:<26} ${:.2}", "Liquidity", pool.liquidity);
    println!("{:<26} ${:.2}", "24h Fees", pool.fees_24h);
    println!("{:<26} ${:.2}", "24h Volume", pool.trade_volume_24h);
    println!(
        "{:<26} ${:.2}",
        "Cumulative Trade Volume", pool.cumulative_trade_volume
    );
    println!(
        "{:<26} ${:.2}",
        "Cumulative Fee Volume", pool.cumulative_fee_volume
    );
    println!("Links:");
    println!("  Meteora  https://app.meteora.ag/dlmm/{}", pool.address);
    println!(
        "  Birdeye  https://birdeye.so/token/{}/{}",
        pool.mint_x, pool.address
    );
    println!(
        "  Jupiter  https://jup.ag/swap/{}-{}",
        pool.mint_x, pool.mint_y
    );
    println!("  SolScan  https://solscan.io/account/{}", pool.address);
}

fn print_estimate(amount: Decimal, estimate: &RoiEstimate) {
    println!("\n💰 ROI estimate for a ${:.2} deposit", amount);
    println!("  Share of pool  {:.2}%", estimate.percent_of_pool);
    println!("  Daily return   ${:.2}", estimate.daily_return);
    match estimate.days_to_break_even {
        Some(days) => println!("  Break-even     {:.2} days", days),
        None => println!("  Break-even     never at the current rate"),
    }
}

fn print_health(pool: &PoolInfo, report: &HealthReport) {
    let verdict = |ok: bool| if ok { "Good" } else { "Poor" };
    println!("\n🩺 Health of {}", pool.name);
    println!("  Liquidity            {}", verdict(report.liquidity_ok));
    println!("  Volume               {}", verdict(report.volume_ok));
    println!("  Diversity            {}", verdict(report.diversity_ok));
    println!("  Your contribution    {:.2}%", report.user_contribution_pct);
    println!("  Projected return     ${:.2}", report.projected_return);
    println!(
        "  Higher-TVL return    {:.2}%",
        report.higher_tvl_return * Decimal::ONE_HUNDRED
    );
    println!(
        "  Higher-volume return {:.2}%",
        report.higher_volume_return * Decimal::ONE_HUNDRED
    );
    println!("  Overall score        {:.2} / 1.00", report.health_score);
}
