//! # Domain Types
//!
//! Records consumed and produced by the resolver.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Campaign     │   │ PriceResolution │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  price          │       │
//! │  │  base_price     │   │  discount_kind  │   │  discounted     │       │
//! │  │  category       │   │  discount_value │   │  applied_id     │       │
//! │  └─────────────────┘   │  start/end date │   └─────────────────┘       │
//! │                        │  scope, target  │                              │
//! │                        │  enabled        │                              │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Percentage    │   │  DiscountKind   │   │  CampaignScope  │       │
//! │  │  bps (u32)      │   │  Percentage     │   │  Global         │       │
//! │  │  2000 = 20%     │   │  FixedAmount    │   │  Product        │       │
//! │  └─────────────────┘   └─────────────────┘   │  Category       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Item` and `Campaign` are immutable snapshots handed over by the store.
//! Updates build a new record; nothing here has setters.
//!
//! `ItemInput` and `CampaignInput` are the loosely-typed payloads coming from
//! forms and JSON bodies. They are turned into records by
//! [`crate::validation`], which fails fast on missing or malformed fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20%. Values above 10000 are
/// representable; discounting with them floors the price at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Returns the value in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percentage(0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

// =============================================================================
// Discount Kind
// =============================================================================

/// How a campaign's `discount_value` is applied to the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// `price × (1 − value / 100)`.
    Percentage,
    /// `price − value`.
    FixedAmount,
}

impl DiscountKind {
    /// Wire/storage tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "PERCENTAGE",
            DiscountKind::FixedAmount => "FIXED_AMOUNT",
        }
    }
}

impl FromStr for DiscountKind {
    type Err = CoreError;

    /// Parses the exact upper-case tag. Anything else is unsupported; there is
    /// no fallback to `FixedAmount`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENTAGE" => Ok(DiscountKind::Percentage),
            "FIXED_AMOUNT" => Ok(DiscountKind::FixedAmount),
            other => Err(CoreError::UnsupportedDiscountKind(other.to_string())),
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Campaign Scope
// =============================================================================

/// Targeting breadth of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignScope {
    /// Every item in the catalog.
    Global,
    /// The single item whose id equals `target_id`.
    Product,
    /// Every item whose category equals `target_id`.
    Category,
}

impl CampaignScope {
    /// Wire/storage tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CampaignScope::Global => "GLOBAL",
            CampaignScope::Product => "PRODUCT",
            CampaignScope::Category => "CATEGORY",
        }
    }

    /// Whether campaigns of this scope need a `target_id` to ever apply.
    pub const fn requires_target(&self) -> bool {
        !matches!(self, CampaignScope::Global)
    }
}

impl FromStr for CampaignScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GLOBAL" => Ok(CampaignScope::Global),
            "PRODUCT" => Ok(CampaignScope::Product),
            "CATEGORY" => Ok(CampaignScope::Category),
            other => Err(CoreError::UnsupportedScope(other.to_string())),
        }
    }
}

impl fmt::Display for CampaignScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog entry. Only `id`, `base_price_cents` and `category` take part in
/// price resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    pub description: Option<String>,

    /// Price before any campaign, in cents.
    pub base_price_cents: i64,

    pub stock_quantity: i64,

    /// Catalog grouping, e.g. "Power Tools". Matched by CATEGORY campaigns.
    pub category: Option<String>,

    pub image_url: Option<String>,
}

impl Item {
    /// Returns the base price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }
}

// =============================================================================
// Campaign
// =============================================================================

/// A time-bounded discount rule.
///
/// Stored with TEXT tags for kind and scope; the database layer parses them
/// with `FromStr` so an unknown tag surfaces as an unsupported-kind error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,

    pub name: String,

    pub discount_kind: DiscountKind,

    /// Magnitude in hundredths: cents for `FixedAmount`, basis points for
    /// `Percentage` (2000 = 20%).
    pub discount_value: i64,

    /// First day the campaign applies (inclusive).
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,

    /// Last day the campaign applies (inclusive).
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,

    pub scope: CampaignScope,

    /// Item id for `Product`, category name for `Category`, ignored for `Global`.
    pub target_id: Option<String>,

    /// Controlled by the store's activation workflow.
    pub enabled: bool,
}

impl Campaign {
    /// The magnitude read as a fixed amount.
    #[inline]
    pub fn fixed_amount(&self) -> Money {
        Money::from_cents(self.discount_value)
    }

    /// The magnitude read as a percentage. Negative values clamp to zero.
    #[inline]
    pub fn percentage(&self) -> Percentage {
        Percentage::from_bps(self.discount_value.clamp(0, u32::MAX as i64) as u32)
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Item payload as submitted by the catalog form.
///
/// Every field is optional here so that a missing value surfaces as a
/// validation error naming it, instead of a silent zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Decimal price in major units, e.g. `1250.50`.
    pub base_price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Campaign payload as submitted by the promotion dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub name: Option<String>,
    /// Decimal magnitude: percent for PERCENTAGE, major units for FIXED_AMOUNT.
    pub discount_value: Option<f64>,
    /// `PERCENTAGE` or `FIXED_AMOUNT`.
    pub discount_type: Option<String>,
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    /// `GLOBAL`, `PRODUCT` or `CATEGORY`.
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub active: Option<bool>,
}

// =============================================================================
// Resolution Output
// =============================================================================

/// The effective price of one item at one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceResolution {
    /// Resolved selling price, never negative.
    pub price: Money,

    /// `price != base price`, compared exactly.
    pub discounted: bool,

    /// The single campaign whose formula produced `price`.
    pub applied_campaign_id: Option<String>,
}

/// An item paired with its resolution, for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    pub item: Item,
    pub resolution: PriceResolution,
}

// =============================================================================
// Unit Tests
// =============================================================================
