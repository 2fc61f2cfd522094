//! # Price Calculator
//!
//! Applies the selected campaign's formula to a base price.
//!
//! | Kind           | Formula                          |
//! |----------------|----------------------------------|
//! | `PERCENTAGE`   | `max(0, base × (1 − value/100))` |
//! | `FIXED_AMOUNT` | `max(0, base − value)`           |
//! | no campaign    | `base`                           |

use crate::money::Money;
use crate::types::{Campaign, DiscountKind, PriceResolution};

/// Resolved price for `base` under `campaign`. Never negative.
///
/// For `PERCENTAGE` the discount amount is rounded half-up to the cent and
/// then subtracted, so the price is `base − round(base × value/100)`, not
/// `round(base × (1 − value/100))`. The two differ on exact half cents:
/// 0.05 at 10% resolves to 0.04, not 0.05.
pub fn apply_discount(base: Money, campaign: Option<&Campaign>) -> Money {
    let Some(campaign) = campaign else {
        return base;
    };

    match campaign.discount_kind {
        DiscountKind::Percentage => base.apply_percentage_discount(campaign.percentage()),
        DiscountKind::FixedAmount => base.apply_fixed_discount(campaign.fixed_amount()),
    }
}

/// Runs [`apply_discount`] and packages the outcome.
///
/// `discounted` is exact integer inequality, so a campaign that changes
/// nothing (e.g. 20% off a free item) reports `false` while still naming the
/// campaign that was applied.
pub fn price_with(base: Money, campaign: Option<&Campaign>) -> PriceResolution {
    let price = apply_discount(base, campaign);

    PriceResolution {
        price,
        discounted: price != base,
        applied_campaign_id: campaign.map(|c| c.id.clone()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
