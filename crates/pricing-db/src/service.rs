//! # Pricing Service
//!
//! Fetch-then-resolve: loads store snapshots, then hands them to the pure
//! resolver.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price_catalog(today)                                                   │
//! │       │                                                                 │
//! │       ├── items().get_all()      ─┐                                     │
//! │       ├── campaigns().get_all()  ─┤  async I/O, finished before…        │
//! │       ▼                           │                                     │
//! │  PriceResolver::resolve_catalog  ◀┘  …the synchronous core runs         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller owns the clock: `today` is always passed in.

use chrono::NaiveDate;
use pricing_core::{PriceResolver, PricedItem, ScopePrecedence, SelectionPolicy};
use tracing::{debug, instrument};

use crate::error::{DbError, DbResult};
use crate::pool::Database;

/// Resolves prices for stored items against stored campaigns.
#[derive(Debug, Clone)]
pub struct PricingService<P = ScopePrecedence> {
    db: Database,
    resolver: PriceResolver<P>,
}

impl PricingService<ScopePrecedence> {
    /// Creates a service using scope precedence.
    pub fn new(db: Database) -> Self {
        PricingService {
            db,
            resolver: PriceResolver::new(),
        }
    }
}

impl<P: SelectionPolicy> PricingService<P> {
    /// Creates a service with a custom selection policy.
    pub fn with_policy(db: Database, policy: P) -> Self {
        PricingService {
            db,
            resolver: PriceResolver::with_policy(policy),
        }
    }

    /// Every stored item with its resolved price, in store order.
    #[instrument(skip(self))]
    pub async fn price_catalog(&self, today: NaiveDate) -> DbResult<Vec<PricedItem>> {
        let items = self.db.items().get_all().await?;
        let campaigns = self.db.campaigns().get_all().await?;

        debug!(
            items = items.len(),
            campaigns = campaigns.len(),
            "Snapshots loaded"
        );

        Ok(self.resolver.resolve_catalog(items, &campaigns, today)?)
    }

    /// One stored item with its resolved price.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with that id
    #[instrument(skip(self))]
    pub async fn price_item(&self, id: &str, today: NaiveDate) -> DbResult<PricedItem> {
        let item = self
            .db
            .items()
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", id))?;
        let campaigns = self.db.campaigns().get_all().await?;

        let resolution = self.resolver.resolve(&item, &campaigns, today)?;
        Ok(PricedItem { item, resolution })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
