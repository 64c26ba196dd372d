use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use chargescout::{
    format_summary, load_weights, BatteryRequirement, CatalogStore, ChargeTime, Chemistry, Phase,
    ProductRecord, RecommendOptions, Recommender,
};

#[derive(Parser, Debug)]
#[command(
    name = "recommend",
    about = "Recommend battery chargers from a product catalog"
)]
struct Cli {
    /// Catalog file: a JSON array of product records, or a SQLite catalog
    /// database created by chargescout
    #[arg(long)]
    catalog: PathBuf,

    /// Battery pack voltage in volts
    #[arg(long)]
    voltage: u16,

    /// Battery capacity in amp-hours
    #[arg(long)]
    amp_hours: f32,

    /// Battery chemistry (lead-acid, agm, flooded, lithium)
    #[arg(long, default_value = "lead-acid")]
    chemistry: String,

    /// Charge-time class: overnight or fast
    #[arg(long, default_value = "overnight")]
    charge_time: String,

    /// Facility input phase (1P or 3P), when known
    #[arg(long)]
    phase: Option<String>,

    /// Prefer products that ship from stock
    #[arg(long)]
    quick_ship: bool,

    /// Cap on matches and fallbacks, each
    #[arg(long, default_value_t = 5)]
    max_results: usize,

    /// Alternate scoring weight table (TOML)
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Emit a debug trace of candidate scoring
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let products = load_products(&cli.catalog)?;

    let charge_time = ChargeTime::from_label(&cli.charge_time)
        .with_context(|| format!("unknown charge time '{}'", cli.charge_time))?;
    let input_phase = match &cli.phase {
        Some(label) => match Phase::from_label(label) {
            Some(phase) => Some(phase),
            None => bail!("unknown phase '{}'; expected 1P or 3P", label),
        },
        None => None,
    };

    let requirement = BatteryRequirement {
        voltage: cli.voltage,
        amp_hours: cli.amp_hours,
        chemistry: Chemistry::from_label(&cli.chemistry),
        charge_time,
        input_phase,
        prefer_quick_ship: cli.quick_ship,
    };

    let recommender = match &cli.weights {
        Some(path) => Recommender::new(
            load_weights(path)
                .with_context(|| format!("failed to load weights from {}", path.display()))?,
        ),
        None => Recommender::with_defaults(),
    };

    let options = RecommendOptions {
        max_results: cli.max_results,
        debug_trace: cli.debug,
        ..RecommendOptions::default()
    };

    let result = recommender.recommend(&products, &requirement, &options);
    print!("{}", format_summary(&result));
    Ok(())
}

fn load_products(path: &PathBuf) -> Result<Vec<ProductRecord>> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("catalog {} is not a product array", path.display()))
    } else {
        let store = CatalogStore::open(path)
            .with_context(|| format!("failed to open catalog database {}", path.display()))?;
        Ok(store.load_all()?)
    }
}
