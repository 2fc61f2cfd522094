//! # Campaign Eligibility Filter
//!
//! Selects the campaigns that may apply to one item on one date.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A campaign is eligible for `item` on `today` iff ALL hold:             │
//! │                                                                         │
//! │  1. enabled == true                                                     │
//! │  2. start_date <= today <= end_date   (both ends inclusive)             │
//! │       missing date         → ineligible                                 │
//! │       end_date < start_date → ineligible (no day satisfies both)        │
//! │  3. scope matches                                                       │
//! │       GLOBAL   → always                                                 │
//! │       PRODUCT  → target_id == item.id                                   │
//! │       CATEGORY → target_id == item.category                             │
//! │       missing target → ineligible                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The output keeps the input order. The selector breaks ties by position, so
//! the filter must never reorder.

use chrono::NaiveDate;

use crate::types::{Campaign, CampaignScope, Item};

/// Whether `today` falls inside the campaign window, both ends inclusive.
pub fn is_within_window(campaign: &Campaign, today: NaiveDate) -> bool {
    match (campaign.start_date, campaign.end_date) {
        (Some(start), Some(end)) => start <= today && today <= end,
        _ => false,
    }
}

/// Whether the campaign's scope targets this item.
pub fn scope_matches(campaign: &Campaign, item: &Item) -> bool {
    match campaign.scope {
        CampaignScope::Global => true,
        CampaignScope::Product => campaign.target_id.as_deref() == Some(item.id.as_str()),
        CampaignScope::Category => match (&campaign.target_id, &item.category) {
            (Some(target), Some(category)) => target == category,
            _ => false,
        },
    }
}

/// Full eligibility check for a single campaign.
pub fn is_eligible(campaign: &Campaign, item: &Item, today: NaiveDate) -> bool {
    campaign.enabled && is_within_window(campaign, today) && scope_matches(campaign, item)
}

/// Stable filter over the campaign collection.
///
/// ```rust
/// use chrono::NaiveDate;
/// use pricing_core::eligibility::eligible;
/// use pricing_core::types::{Campaign, CampaignScope, DiscountKind, Item};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let item = Item {
///     id: "7".into(), name: "Drill".into(), description: None,
///     base_price_cents: 100_000, stock_quantity: 3, category: None, image_url: None,
/// };
/// let campaign = Campaign {
///     id: "c1".into(), name: "Week".into(),
///     discount_kind: DiscountKind::Percentage, discount_value: 2000,
///     start_date: Some(today), end_date: Some(today),
///     scope: CampaignScope::Global, target_id: None, enabled: true,
/// };
///
/// let campaigns = [campaign];
/// assert_eq!(eligible(&item, &campaigns, today).len(), 1);
/// ```
pub fn eligible<'a>(item: &Item, campaigns: &'a [Campaign], today: NaiveDate) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|c| is_eligible(c, item, today))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
