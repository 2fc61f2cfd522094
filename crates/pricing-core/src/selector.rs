//! # Campaign Selector
//!
//! Picks the ONE campaign that governs an item's price.
//!
//! ## Precedence (ScopePrecedence)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  eligible campaigns (filter order)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  any PRODUCT?  ── yes ──► first PRODUCT in order                        │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  any CATEGORY? ── yes ──► first CATEGORY in order                       │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  any GLOBAL?   ── yes ──► first GLOBAL in order                         │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  none → caller keeps the base price                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Magnitudes are never compared: within a tier the first eligible campaign
//! wins even if a later one is deeper. Discounts are never blended.
//!
//! The policy lives behind [`SelectionPolicy`] so it can be replaced without
//! touching the eligibility filter or the calculator.

use crate::types::{Campaign, CampaignScope};

/// Strategy for choosing the governing campaign among eligible ones.
pub trait SelectionPolicy: Send + Sync {
    /// Returns the campaign to apply, or `None` to keep the base price.
    ///
    /// `eligible` is in the store's order; implementations must be
    /// deterministic for a given order.
    fn select<'a>(&self, eligible: &[&'a Campaign]) -> Option<&'a Campaign>;
}

/// Most specific scope wins, first match within a scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopePrecedence;

impl ScopePrecedence {
    /// Lower rank wins.
    pub const fn rank(scope: CampaignScope) -> u8 {
        match scope {
            CampaignScope::Product => 0,
            CampaignScope::Category => 1,
            CampaignScope::Global => 2,
        }
    }
}

impl SelectionPolicy for ScopePrecedence {
    fn select<'a>(&self, eligible: &[&'a Campaign]) -> Option<&'a Campaign> {
        // min_by_key returns the FIRST minimum, which gives first-match within a tier
        eligible
            .iter()
            .copied()
            .min_by_key(|c| Self::rank(c.scope))
    }
}

/// Selects with the default [`ScopePrecedence`] policy.
pub fn select<'a>(eligible: &[&'a Campaign]) -> Option<&'a Campaign> {
    ScopePrecedence.select(eligible)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountKind;

    fn campaign(id: &str, scope: CampaignScope, value: i64) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: id.to_string(),
            discount_kind: DiscountKind::Percentage,
            discount_value: value,
            start_date: None,
            end_date: None,
            scope,
            target_id: Some("7".to_string()),
            enabled: true,
        }
    }

    fn selected_id(campaigns: &[Campaign]) -> Option<String> {
        let refs: Vec<&Campaign> = campaigns.iter().collect();
        select(&refs).map(|c| c.id.clone())
    }

    #[test]
    fn test_empty_selects_none() {
        assert_eq!(select(&[]), None);
    }

    #[test]
    fn test_product_beats_global_regardless_of_order() {
        let campaigns = vec![
            campaign("g", CampaignScope::Global, 5000),
            campaign("p", CampaignScope::Product, 100),
        ];
        assert_eq!(selected_id(&campaigns).as_deref(), Some("p"));
    }

    #[test]
    fn test_first_product_wins_not_deepest() {
        let campaigns = vec![
            campaign("p1", CampaignScope::Product, 500),
            campaign("p2", CampaignScope::Product, 9000),
        ];
        assert_eq!(selected_id(&campaigns).as_deref(), Some("p1"));
    }

    #[test]
    fn test_falls_back_to_first_global() {
        let campaigns = vec![
            campaign("g1", CampaignScope::Global, 100),
            campaign("g2", CampaignScope::Global, 9000),
        ];
        assert_eq!(selected_id(&campaigns).as_deref(), Some("g1"));
    }

    #[test]
    fn test_category_between_product_and_global() {
        let campaigns = vec![
            campaign("g", CampaignScope::Global, 100),
            campaign("k", CampaignScope::Category, 100),
        ];
        assert_eq!(selected_id(&campaigns).as_deref(), Some("k"));

        let campaigns = vec![
            campaign("k", CampaignScope::Category, 100),
            campaign("p", CampaignScope::Product, 100),
            campaign("g", CampaignScope::Global, 100),
        ];
        assert_eq!(selected_id(&campaigns).as_deref(), Some("p"));
    }

    #[test]
    fn test_custom_policy_plugs_in() {
        struct LastWins;
        impl SelectionPolicy for LastWins {
            fn select<'a>(&self, eligible: &[&'a Campaign]) -> Option<&'a Campaign> {
                eligible.last().copied()
            }
        }

        let campaigns = [
            campaign("a", CampaignScope::Product, 100),
            campaign("b", CampaignScope::Global, 100),
        ];
        let refs: Vec<&Campaign> = campaigns.iter().collect();
        assert_eq!(LastWins.select(&refs).map(|c| c.id.as_str()), Some("b"));
    }
}
