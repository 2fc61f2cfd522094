//! # Price Resolver
//!
//! The one operation the core exposes: item + campaigns + date → price.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve_price(item, campaigns, today)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_item / validate_campaign   ── bad shape ──► Err(CoreError)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  eligibility::eligible      (stable filter)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SelectionPolicy::select    (one campaign or none)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculator::price_with     (floored at zero)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PriceResolution { price, discounted, applied_campaign_id }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached between calls and nothing reads the clock: the same
//! inputs always give the same output. Safe to call from any number of
//! threads at once.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::calculator;
use crate::eligibility;
use crate::error::CoreResult;
use crate::selector::{ScopePrecedence, SelectionPolicy};
use crate::types::{Campaign, Item, PriceResolution, PricedItem};
use crate::validation::{validate_campaign, validate_item};

/// Resolver bound to a selection policy.
///
/// ## Usage
/// ```rust
/// use chrono::NaiveDate;
/// use pricing_core::resolver::PriceResolver;
/// use pricing_core::types::Item;
///
/// let resolver = PriceResolver::new();
/// let item = Item {
///     id: "7".into(), name: "Drill".into(), description: None,
///     base_price_cents: 100_000, stock_quantity: 3, category: None, image_url: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
///
/// let resolution = resolver.resolve(&item, &[], today).unwrap();
/// assert_eq!(resolution.price.cents(), 100_000);
/// assert!(!resolution.discounted);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceResolver<P = ScopePrecedence> {
    policy: P,
}

impl PriceResolver<ScopePrecedence> {
    /// Creates a resolver with the default [`ScopePrecedence`] policy.
    pub fn new() -> Self {
        PriceResolver {
            policy: ScopePrecedence,
        }
    }
}

impl<P: SelectionPolicy> PriceResolver<P> {
    /// Creates a resolver with a custom policy.
    pub fn with_policy(policy: P) -> Self {
        PriceResolver { policy }
    }

    /// Resolves the effective price of `item` on `today`.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if the item or any campaign has a negative
    ///   price/magnitude or the item has no id
    pub fn resolve(
        &self,
        item: &Item,
        campaigns: &[Campaign],
        today: NaiveDate,
    ) -> CoreResult<PriceResolution> {
        validate_item(item)?;
        for campaign in campaigns {
            validate_campaign(campaign)?;
        }

        Ok(self.resolve_validated(item, campaigns, today))
    }

    /// Resolves every item against the same campaign snapshot.
    ///
    /// Campaigns are validated once; items are validated one by one and the
    /// first bad item aborts the listing.
    pub fn resolve_catalog(
        &self,
        items: Vec<Item>,
        campaigns: &[Campaign],
        today: NaiveDate,
    ) -> CoreResult<Vec<PricedItem>> {
        for campaign in campaigns {
            validate_campaign(campaign)?;
        }

        let mut priced = Vec::with_capacity(items.len());
        for item in items {
            validate_item(&item)?;
            let resolution = self.resolve_validated(&item, campaigns, today);
            priced.push(PricedItem { item, resolution });
        }

        debug!(
            items = priced.len(),
            discounted = priced.iter().filter(|p| p.resolution.discounted).count(),
            %today,
            "Catalog resolved"
        );

        Ok(priced)
    }

    fn resolve_validated(
        &self,
        item: &Item,
        campaigns: &[Campaign],
        today: NaiveDate,
    ) -> PriceResolution {
        let eligible = eligibility::eligible(item, campaigns, today);
        let chosen = self.policy.select(&eligible);
        let resolution = calculator::price_with(item.base_price(), chosen);

        trace!(
            item_id = %item.id,
            candidates = campaigns.len(),
            eligible = eligible.len(),
            applied = ?resolution.applied_campaign_id,
            base = %item.base_price(),
            price = %resolution.price,
            "Price resolved"
        );

        resolution
    }
}

/// Resolves with the default [`ScopePrecedence`] policy.
pub fn resolve_price(
    item: &Item,
    campaigns: &[Campaign],
    today: NaiveDate,
) -> CoreResult<PriceResolution> {
    PriceResolver::new().resolve(item, campaigns, today)
}

// =============================================================================
// Unit Tests
// =============================================================================
