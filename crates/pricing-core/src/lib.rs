//! # pricing-core: Campaign Price Resolution
//!
//! Determines the single effective selling price of a catalog item given the
//! promotional campaigns known to the store. Pure functions, zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Campaign Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (HTTP handler, CLI, job)                 │   │
//! │  │         reads the clock once, passes `today` down               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        pricing-db  (ItemRepository, CampaignRepository)         │   │
//! │  │            fetches snapshots, calls the resolver                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricing-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐          │   │
//! │  │   │ eligibility │──►│  selector   │──►│ calculator  │          │   │
//! │  │   │ stable      │   │ PRODUCT >   │   │ % / fixed   │          │   │
//! │  │   │ filter      │   │ CATEGORY >  │   │ floor at 0  │          │   │
//! │  │   │             │   │ GLOBAL      │   │             │          │   │
//! │  │   └─────────────┘   └─────────────┘   └─────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, Campaign, PriceResolution and friends
//! - [`money`] - Integer money (no floating point)
//! - [`eligibility`] - Which campaigns may apply today
//! - [`selector`] - Which single campaign governs the price
//! - [`calculator`] - Discount formulas with the zero floor
//! - [`resolver`] - The whole pipeline
//! - [`validation`] - Input shape checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricing_core::{resolve_price, Campaign, CampaignScope, DiscountKind, Item};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let item = Item {
//!     id: "7".into(), name: "Impact Drill".into(), description: None,
//!     base_price_cents: 100_000, stock_quantity: 4,
//!     category: Some("Power Tools".into()), image_url: None,
//! };
//! let campaign = Campaign {
//!     id: "c1".into(), name: "Store-wide 20%".into(),
//!     discount_kind: DiscountKind::Percentage, discount_value: 2000,
//!     start_date: NaiveDate::from_ymd_opt(2026, 10, 1),
//!     end_date: NaiveDate::from_ymd_opt(2026, 10, 31),
//!     scope: CampaignScope::Global, target_id: None, enabled: true,
//! };
//!
//! let resolution = resolve_price(&item, &[campaign], today).unwrap();
//! assert_eq!(resolution.price.cents(), 80_000);
//! assert!(resolution.discounted);
//! assert_eq!(resolution.applied_campaign_id.as_deref(), Some("c1"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod eligibility;
pub mod error;
pub mod money;
pub mod resolver;
pub mod selector;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use resolver::{resolve_price, PriceResolver};
pub use selector::{ScopePrecedence, SelectionPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// 100% in basis points. Store writes reject percentages above this; the
/// resolver accepts them and floors the price at zero.
pub const MAX_PERCENTAGE_BPS: i64 = 10_000;

/// Maximum length of item and campaign names.
pub const MAX_NAME_LENGTH: usize = 200;
