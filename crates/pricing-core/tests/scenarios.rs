//! End-to-end resolution scenarios through the public API.

use chrono::{Days, NaiveDate};
use pricing_core::{resolve_price, Campaign, CampaignScope, DiscountKind, Item, Money};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn item(id: &str, base_price_cents: i64) -> Item {
    Item {
        id: id.to_string(),
        name: "Angle Grinder".to_string(),
        description: Some("115mm, 850W".to_string()),
        base_price_cents,
        stock_quantity: 12,
        category: Some("Power Tools".to_string()),
        image_url: None,
    }
}

fn covering_today(
    id: &str,
    kind: DiscountKind,
    value: i64,
    scope: CampaignScope,
    target: Option<&str>,
) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: format!("Campaign {}", id),
        discount_kind: kind,
        discount_value: value,
        start_date: today().checked_sub_days(Days::new(3)),
        end_date: today().checked_add_days(Days::new(3)),
        scope,
        target_id: target.map(str::to_string),
        enabled: true,
    }
}

#[test]
fn global_percentage_campaign_discounts_price() {
    // base 1000.00, 20% store-wide
    let campaigns = vec![covering_today(
        "c1",
        DiscountKind::Percentage,
        2000,
        CampaignScope::Global,
        None,
    )];

    let resolution = resolve_price(&item("7", 100_000), &campaigns, today()).unwrap();

    assert_eq!(resolution.price, Money::from_major_minor(800, 0));
    assert!(resolution.discounted);
    assert_eq!(resolution.applied_campaign_id.as_deref(), Some("c1"));
}

#[test]
fn product_campaign_beats_global_and_floors_at_zero() {
    // base 1000.00; fixed 1500.00 on item 7, plus 10% store-wide
    let campaigns = vec![
        covering_today(
            "campaign1",
            DiscountKind::FixedAmount,
            150_000,
            CampaignScope::Product,
            Some("7"),
        ),
        covering_today(
            "campaign2",
            DiscountKind::Percentage,
            1000,
            CampaignScope::Global,
            None,
        ),
    ];

    let resolution = resolve_price(&item("7", 100_000), &campaigns, today()).unwrap();

    assert_eq!(resolution.applied_campaign_id.as_deref(), Some("campaign1"));
    assert_eq!(resolution.price, Money::zero());
    assert!(resolution.discounted);
}

#[test]
fn product_campaign_wins_even_when_listed_after_global() {
    let campaigns = vec![
        covering_today("g", DiscountKind::Percentage, 5000, CampaignScope::Global, None),
        covering_today("p", DiscountKind::FixedAmount, 100, CampaignScope::Product, Some("7")),
    ];

    let resolution = resolve_price(&item("7", 10_000), &campaigns, today()).unwrap();

    assert_eq!(resolution.applied_campaign_id.as_deref(), Some("p"));
    assert_eq!(resolution.price.cents(), 9_900);
}

#[test]
fn disabled_campaign_is_ignored() {
    let mut campaign = covering_today(
        "off",
        DiscountKind::Percentage,
        5000,
        CampaignScope::Product,
        Some("7"),
    );
    campaign.enabled = false;

    let resolution = resolve_price(&item("7", 100_000), &[campaign], today()).unwrap();

    assert_eq!(resolution.price.cents(), 100_000);
    assert!(!resolution.discounted);
    assert_eq!(resolution.applied_campaign_id, None);
}

#[test]
fn campaign_for_another_product_is_ignored() {
    let campaigns = vec![covering_today(
        "p8",
        DiscountKind::FixedAmount,
        500,
        CampaignScope::Product,
        Some("8"),
    )];

    let resolution = resolve_price(&item("7", 10_000), &campaigns, today()).unwrap();

    assert_eq!(resolution.price.cents(), 10_000);
    assert_eq!(resolution.applied_campaign_id, None);
}

#[test]
fn window_boundaries_are_inclusive() {
    let mut campaign = covering_today("c", DiscountKind::FixedAmount, 100, CampaignScope::Global, None);
    campaign.start_date = Some(today());
    campaign.end_date = NaiveDate::from_ymd_opt(2026, 10, 20);
    let campaigns = vec![campaign];
    let drill = item("7", 1_000);

    let on_start = resolve_price(&drill, &campaigns, today()).unwrap();
    let on_end = resolve_price(&drill, &campaigns, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()).unwrap();
    let after_end = resolve_price(&drill, &campaigns, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()).unwrap();
    let before_start = resolve_price(&drill, &campaigns, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()).unwrap();

    assert!(on_start.discounted);
    assert!(on_end.discounted);
    assert!(!after_end.discounted);
    assert!(!before_start.discounted);
}

#[test]
fn resolution_is_thread_safe() {
    let campaigns = std::sync::Arc::new(vec![covering_today(
        "g",
        DiscountKind::Percentage,
        2500,
        CampaignScope::Global,
        None,
    )]);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let campaigns = campaigns.clone();
            std::thread::spawn(move || {
                resolve_price(&item(&i.to_string(), 4_000), &campaigns, today()).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let resolution = handle.join().unwrap();
        assert_eq!(resolution.price.cents(), 3_000);
    }
}
