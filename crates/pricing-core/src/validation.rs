//! # Validation Module
//!
//! Input validation for items and campaigns.
//!
//! ## Two Levels of Strictness
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Store write (item_from_input / campaign_from_input)          │
//! │  ├── Required fields present                                           │
//! │  ├── Value positive, percentage ≤ 100                                  │
//! │  ├── end_date ≥ start_date                                             │
//! │  └── Target present for PRODUCT / CATEGORY                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Resolution (validate_item / validate_campaign)               │
//! │  ├── Base price and magnitude not negative                             │
//! │  └── Everything else is tolerated: inverted windows, missing dates,    │
//! │      missing targets and >100% just make a campaign ineligible or      │
//! │      floor the price at zero                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::validate_price_cents;
//!
//! assert!(validate_price_cents(1099).is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Campaign, CampaignInput, CampaignScope, DiscountKind, Item, ItemInput};
use crate::{MAX_NAME_LENGTH, MAX_PERCENTAGE_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name: present and at most [`MAX_NAME_LENGTH`] chars.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required(field));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "base_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a campaign magnitude at write time.
///
/// ## Rules
/// - Must be positive (> 0)
/// - `Percentage` must not exceed 100% (10000 bps)
pub fn validate_discount_value(kind: DiscountKind, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "discount_value".to_string(),
        });
    }

    if kind == DiscountKind::Percentage && value > MAX_PERCENTAGE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount_value".to_string(),
            min: 0,
            max: MAX_PERCENTAGE_BPS,
        });
    }

    Ok(())
}

/// Validates a campaign window at write time: both ends present, end ≥ start.
pub fn validate_date_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ValidationResult<(NaiveDate, NaiveDate)> {
    let start = start.ok_or_else(|| ValidationError::required("start_date"))?;
    let end = end.ok_or_else(|| ValidationError::required("end_date"))?;

    if end < start {
        return Err(ValidationError::InvertedRange {
            start_field: "start_date".to_string(),
            end_field: "end_date".to_string(),
        });
    }

    Ok((start, end))
}

/// Normalizes a campaign target.
///
/// Blank targets count as absent. `Global` drops the target entirely; other
/// scopes require one.
pub fn validate_target(
    scope: CampaignScope,
    target_id: Option<&str>,
) -> ValidationResult<Option<String>> {
    let target = target_id.map(str::trim).filter(|t| !t.is_empty());

    match (scope.requires_target(), target) {
        (false, _) => Ok(None),
        (true, Some(t)) => Ok(Some(t.to_string())),
        (true, None) => Err(ValidationError::required("target_id")),
    }
}

/// Converts a decimal form value to hundredths (cents or basis points).
fn to_hundredths(field: &str, value: f64) -> ValidationResult<i64> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    let scaled = (value * 100.0).round();
    if scaled.abs() > i64::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: i64::MIN,
            max: i64::MAX,
        });
    }

    Ok(scaled as i64)
}

// =============================================================================
// Resolution-Time Checks
// =============================================================================

/// Checks the shape of an item before resolving its price.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    if item.id.trim().is_empty() {
        return Err(ValidationError::required("item.id"));
    }

    validate_price_cents(item.base_price_cents)
}

/// Checks the shape of a campaign before resolving with it.
///
/// Only a negative magnitude is rejected; the dashboard rules live in
/// [`campaign_from_input`].
pub fn validate_campaign(campaign: &Campaign) -> ValidationResult<()> {
    if campaign.discount_value < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "discount_value".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Input Conversion
// =============================================================================

/// Builds an [`Item`] record from a form payload.
pub fn item_from_input(id: impl Into<String>, input: ItemInput) -> CoreResult<Item> {
    let name = input.name.unwrap_or_default();
    validate_name("name", &name)?;

    let base_price = input
        .base_price
        .ok_or_else(|| ValidationError::required("base_price"))?;
    let base_price_cents = to_hundredths("base_price", base_price)?;
    validate_price_cents(base_price_cents)?;

    let stock_quantity = input.stock_quantity.unwrap_or(0);
    if stock_quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock_quantity".to_string(),
        }
        .into());
    }

    Ok(Item {
        id: id.into(),
        name: name.trim().to_string(),
        description: input.description,
        base_price_cents,
        stock_quantity,
        category: input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        image_url: input.image_url,
    })
}

/// Builds a [`Campaign`] record from a dashboard payload.
///
/// ## Order of Checks
/// ```text
/// name → discount_type → discount_value → dates → target_type → target_id
/// ```
/// The first failure is returned. An unknown `discount_type` is
/// `CoreError::UnsupportedDiscountKind`, not a validation error.
///
/// `active` defaults to `true`: new campaigns start enabled.
pub fn campaign_from_input(id: impl Into<String>, input: CampaignInput) -> CoreResult<Campaign> {
    let name = input.name.unwrap_or_default();
    validate_name("name", &name)?;

    let discount_kind: DiscountKind = input
        .discount_type
        .as_deref()
        .ok_or_else(|| ValidationError::required("discount_type"))?
        .parse()?;

    let raw_value = input
        .discount_value
        .ok_or_else(|| ValidationError::required("discount_value"))?;
    let discount_value = to_hundredths("discount_value", raw_value)?;
    validate_discount_value(discount_kind, discount_value)?;

    let (start_date, end_date) = validate_date_window(input.start_date, input.end_date)?;

    let scope: CampaignScope = input
        .target_type
        .as_deref()
        .ok_or_else(|| ValidationError::required("target_type"))?
        .parse()?;
    let target_id = validate_target(scope, input.target_id.as_deref())?;

    Ok(Campaign {
        id: id.into(),
        name: name.trim().to_string(),
        discount_kind,
        discount_value,
        start_date: Some(start_date),
        end_date: Some(end_date),
        scope,
        target_id,
        enabled: input.active.unwrap_or(true),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
