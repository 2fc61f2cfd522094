//! # Seed Data Generator
//!
//! Populates the database with a demo hardware catalog and a handful of
//! campaigns, then prints every item with its resolved price.
//!
//! ## Usage
//! ```bash
//! # Seed ./pricing_dev.db and price the catalog for today
//! cargo run -p pricing-db --bin seed
//!
//! # Price as of a fixed date, as JSON
//! cargo run -p pricing-db --bin seed -- --today 2026-12-24 --json
//!
//! # Specify database path
//! cargo run -p pricing-db --bin seed -- --db ./data/pricing.db
//! ```
//!
//! ## Generated Campaigns
//! Windows are placed relative to the resolution date so the demo always
//! shows something:
//! - a storewide percentage (GLOBAL)
//! - a deeper percentage on one category (CATEGORY)
//! - a fixed amount on one item (PRODUCT)
//! - one expired and one disabled campaign, which never apply

use chrono::{Duration, NaiveDate};
use pricing_core::{CampaignInput, ItemInput, PricedItem};
use pricing_db::{Database, DbResult, PricingConfig, PricingService};
use std::collections::HashMap;
use std::env;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Demo catalog: (name, category, price, stock)
const CATALOG: &[(&str, &str, f64, i64)] = &[
    ("Rotary Impact Drill", "POWER TOOLS", 18_500.00, 12),
    ("Angle Grinder 115mm", "POWER TOOLS", 9_750.00, 8),
    ("Cordless Jigsaw", "POWER TOOLS", 14_200.00, 5),
    ("Claw Hammer 16oz", "HAND TOOLS", 1_450.00, 40),
    ("Adjustable Wrench 10in", "HAND TOOLS", 1_890.50, 25),
    ("Screwdriver Set 12pc", "HAND TOOLS", 2_399.99, 30),
    ("Safety Goggles", "SAFETY GEAR", 650.00, 100),
    ("Work Gloves (Pair)", "SAFETY GEAR", 480.00, 150),
    ("Hard Hat", "SAFETY GEAR", 1_200.00, 20),
    ("PVC Pipe 1in x 10ft", "PLUMBING", 875.25, 60),
    ("Teflon Tape", "PLUMBING", 95.00, 300),
    ("Cement 50kg", "BUILDING", 2_150.00, 0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = PricingConfig::load()?.with_args(env::args().skip(1))?;

    if config.show_help {
        println!("Campaign Pricing Seed Data Generator");
        println!();
        println!("Usage: seed [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --db <PATH>          Database file path (default: ./pricing_dev.db)");
        println!("  --today <YYYY-MM-DD> Resolution date (default: local date)");
        println!("  --json               Print the priced catalog as JSON");
        println!("  -h, --help           Show this help message");
        println!();
        println!("Environment: PRICING_DB_PATH, PRICING_TODAY, RUST_LOG");
        return Ok(());
    }

    let today = config.resolution_date();
    info!(db = %config.database_path.display(), %today, "Starting seed");

    let db = Database::new(config.db_config()).await?;

    let existing = db.items().count().await?;
    if existing > 0 {
        info!(existing, "Database already seeded, skipping inserts");
    } else {
        seed_items(&db).await?;
        seed_campaigns(&db, today).await?;
    }

    let catalog = PricingService::new(db.clone()).price_catalog(today).await?;

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        let names: HashMap<String, String> = db
            .campaigns()
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        print_table(&catalog, &names, today);
    }

    db.close().await;
    Ok(())
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,pricing=debug,sqlx=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    build_subscriber(filter).init();
}

/// The filter alone decides what is logged; logs go to stderr so `--json`
/// output stays clean.
fn build_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

async fn seed_items(db: &Database) -> DbResult<()> {
    let items = db.items();

    for (name, category, price, stock) in CATALOG {
        let input = ItemInput {
            name: Some(name.to_string()),
            description: None,
            base_price: Some(*price),
            stock_quantity: Some(*stock),
            category: Some(category.to_string()),
            image_url: None,
        };

        if let Err(e) = items.create(input).await {
            warn!(item = %name, error = %e, "Failed to insert item");
        }
    }

    info!(count = items.count().await?, "Items seeded");
    Ok(())
}

async fn seed_campaigns(db: &Database, today: NaiveDate) -> DbResult<()> {
    let campaigns = db.campaigns();

    let drill_id = db
        .items()
        .get_all()
        .await?
        .into_iter()
        .find(|i| i.name == CATALOG[0].0)
        .map(|i| i.id);

    let window = |from: i64, to: i64| {
        (
            Some(today + Duration::days(from)),
            Some(today + Duration::days(to)),
        )
    };

    let mut inputs = vec![
        campaign("Storewide Week", "PERCENTAGE", 10.0, window(-3, 4), "GLOBAL", None),
        campaign(
            "Power Tool Days",
            "PERCENTAGE",
            20.0,
            window(0, 14),
            "CATEGORY",
            Some("POWER TOOLS"),
        ),
        campaign("Last Month Clearance", "PERCENTAGE", 50.0, window(-40, -10), "GLOBAL", None),
    ];
    if let Some(id) = drill_id.as_deref() {
        inputs.push(campaign(
            "Drill Trade-In",
            "FIXED_AMOUNT",
            2_500.0,
            window(-1, 1),
            "PRODUCT",
            Some(id),
        ));
    }

    for input in inputs {
        campaigns.create(input).await?;
    }

    let paused = campaigns
        .create(campaign(
            "Paused Safety Promo",
            "PERCENTAGE",
            30.0,
            window(-7, 7),
            "CATEGORY",
            Some("SAFETY GEAR"),
        ))
        .await?;
    campaigns.set_enabled(&paused.id, false).await?;

    info!(count = campaigns.get_all().await?.len(), "Campaigns seeded");
    Ok(())
}

fn campaign(
    name: &str,
    kind: &str,
    value: f64,
    (start_date, end_date): (Option<NaiveDate>, Option<NaiveDate>),
    target_type: &str,
    target_id: Option<&str>,
) -> CampaignInput {
    CampaignInput {
        name: Some(name.to_string()),
        discount_value: Some(value),
        discount_type: Some(kind.to_string()),
        start_date,
        end_date,
        target_type: Some(target_type.to_string()),
        target_id: target_id.map(str::to_string),
        active: None,
    }
}

fn print_table(catalog: &[PricedItem], campaign_names: &HashMap<String, String>, today: NaiveDate) {
    println!("Prices as of {today}");
    println!();
    println!(
        "{:<26} {:<12} {:>12} {:>12}  {}",
        "ITEM", "CATEGORY", "BASE", "PRICE", "CAMPAIGN"
    );
    println!("{}", "-".repeat(84));

    for priced in catalog {
        let campaign = priced
            .resolution
            .applied_campaign_id
            .as_ref()
            .map(|id| campaign_names.get(id).map(String::as_str).unwrap_or(id.as_str()))
            .unwrap_or("-");
        let marker = if priced.resolution.discounted { "*" } else { " " };

        println!(
            "{:<26} {:<12} {:>12} {:>11}{}  {}",
            priced.item.name,
            priced.item.category.as_deref().unwrap_or("-"),
            priced.item.base_price().to_string(),
            priced.resolution.price.to_string(),
            marker,
            campaign
        );
    }

    println!();
    println!("* discounted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_default_filter_levels() {
        let subscriber = build_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "sqlx::query", Level::DEBUG));
            assert!(tracing::enabled!(target: "sqlx::query", Level::WARN));
            assert!(tracing::enabled!(target: "pricing_core::resolver", Level::DEBUG));
            assert!(!tracing::enabled!(target: "pricing_core::resolver", Level::TRACE));
            assert!(tracing::enabled!(target: "seed", Level::INFO));
            assert!(!tracing::enabled!(target: "seed", Level::DEBUG));
        });
    }

    #[test]
    fn test_explicit_filter_is_respected() {
        let subscriber = build_subscriber(EnvFilter::new("warn"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "pricing_db::pool", Level::INFO));
            assert!(tracing::enabled!(target: "pricing_db::pool", Level::WARN));
        });
    }
}
