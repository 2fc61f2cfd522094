//! # Campaign Repository
//!
//! Campaign store: database operations for discount campaigns.
//!
//! ## Row Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    campaigns row → Campaign                             │
//! │                                                                         │
//! │  discount_kind TEXT  ──FromStr──▶  DiscountKind   (else Unsupported…)  │
//! │  scope         TEXT  ──FromStr──▶  CampaignScope  (else Unsupported…)  │
//! │  start_date    TEXT  ──parse────▶  Option<NaiveDate> (bad text → None) │
//! │  end_date      TEXT  ──parse────▶  Option<NaiveDate> (bad text → None) │
//! │                                                                         │
//! │  A missing or unreadable date leaves the campaign ineligible; an       │
//! │  unknown tag is an error, never a default.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use pricing_core::validation::{campaign_from_input, validate_campaign};
use pricing_core::{Campaign, CampaignInput, CoreError};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info, warn};

use super::generate_id;
use crate::error::{DbError, DbResult};

const SELECT_CAMPAIGNS: &str = r#"
    SELECT
        id,
        name,
        discount_kind,
        discount_value,
        start_date,
        end_date,
        scope,
        target_id,
        enabled
    FROM campaigns
"#;

// =============================================================================
// Row Mapping
// =============================================================================

/// A campaigns row exactly as SQLite returns it.
#[derive(Debug, Clone, FromRow)]
struct CampaignRow {
    id: String,
    name: String,
    discount_kind: String,
    discount_value: i64,
    start_date: Option<String>,
    end_date: Option<String>,
    scope: String,
    target_id: Option<String>,
    enabled: bool,
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = CoreError;

    fn try_from(row: CampaignRow) -> Result<Self, Self::Error> {
        let start_date = parse_stored_date(&row.id, "start_date", row.start_date.as_deref());
        let end_date = parse_stored_date(&row.id, "end_date", row.end_date.as_deref());

        Ok(Campaign {
            discount_kind: row.discount_kind.parse()?,
            scope: row.scope.parse()?,
            id: row.id,
            name: row.name,
            discount_value: row.discount_value,
            start_date,
            end_date,
            target_id: row.target_id,
            enabled: row.enabled,
        })
    }
}

fn parse_stored_date(campaign_id: &str, column: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(
                campaign_id = %campaign_id,
                column,
                value = %raw,
                error = %e,
                "Unreadable campaign date; campaign will never be eligible"
            );
            None
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for campaign database operations.
///
/// ## Usage
/// ```rust,ignore
/// let campaigns = db.campaigns();
///
/// let c = campaigns.create(input).await?;   // validated, starts enabled
/// campaigns.set_enabled(&c.id, false).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CampaignRepository {
    pool: SqlitePool,
}

impl CampaignRepository {
    /// Creates a new CampaignRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CampaignRepository { pool }
    }

    /// Returns every campaign in store order, enabled or not.
    ///
    /// ## Errors
    /// * `DbError::Core(UnsupportedDiscountKind | UnsupportedScope)` - A row
    ///   carries a tag this build doesn't know
    pub async fn get_all(&self) -> DbResult<Vec<Campaign>> {
        let query = format!("{SELECT_CAMPAIGNS} ORDER BY rowid");
        let rows = sqlx::query_as::<_, CampaignRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        let campaigns = rows
            .into_iter()
            .map(Campaign::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = campaigns.len(), "Loaded campaigns");
        Ok(campaigns)
    }

    /// Gets a campaign by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Campaign>> {
        let query = format!("{SELECT_CAMPAIGNS} WHERE id = ?1");
        let row = sqlx::query_as::<_, CampaignRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Campaign::try_from).transpose()?)
    }

    /// Validates a dashboard payload and stores it under a fresh id.
    ///
    /// New campaigns always start enabled, whatever `active` says.
    pub async fn create(&self, input: CampaignInput) -> DbResult<Campaign> {
        let input = CampaignInput {
            active: Some(true),
            ..input
        };
        let campaign = campaign_from_input(generate_id(), input)?;

        info!(
            id = %campaign.id,
            kind = %campaign.discount_kind,
            scope = %campaign.scope,
            "Creating campaign"
        );
        self.save(&campaign).await
    }

    /// Replaces every editable field of an existing campaign.
    ///
    /// The payload's `active` is taken as given; when it is missing the
    /// campaign is stored enabled, like a new one.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No campaign with that id
    pub async fn update(&self, id: &str, input: CampaignInput) -> DbResult<Campaign> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Campaign", id))?;

        let campaign = campaign_from_input(existing.id, input)?;

        debug!(
            id = %campaign.id,
            was_enabled = existing.enabled,
            enabled = campaign.enabled,
            "Updating campaign"
        );
        self.save(&campaign).await
    }

    /// Inserts the campaign, or replaces the row with the same id in place.
    pub async fn save(&self, campaign: &Campaign) -> DbResult<Campaign> {
        validate_campaign(campaign).map_err(CoreError::from)?;

        sqlx::query(
            r#"
            INSERT INTO campaigns (
                id, name, discount_kind, discount_value,
                start_date, end_date, scope, target_id, enabled
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                discount_kind = excluded.discount_kind,
                discount_value = excluded.discount_value,
                start_date = excluded.start_date,
                end_date = excluded.end_date,
                scope = excluded.scope,
                target_id = excluded.target_id,
                enabled = excluded.enabled
            "#,
        )
        .bind(&campaign.id)
        .bind(&campaign.name)
        .bind(campaign.discount_kind.as_str())
        .bind(campaign.discount_value)
        .bind(campaign.start_date)
        .bind(campaign.end_date)
        .bind(campaign.scope.as_str())
        .bind(&campaign.target_id)
        .bind(campaign.enabled)
        .execute(&self.pool)
        .await?;

        Ok(campaign.clone())
    }

    /// Turns a campaign on or off.
    pub async fn set_enabled(&self, id: &str, enabled: bool) -> DbResult<()> {
        info!(id = %id, enabled, "Setting campaign activation");

        let result = sqlx::query("UPDATE campaigns SET enabled = ?2 WHERE id = ?1")
            .bind(id)
            .bind(enabled)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Campaign", id));
        }

        Ok(())
    }

    /// Deletes a campaign.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting campaign");

        let result = sqlx::query("DELETE FROM campaigns WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Campaign", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use pricing_core::{CampaignScope, DiscountKind, ValidationError};

    async fn setup() -> (Database, CampaignRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.campaigns();
        (db, repo)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> CampaignInput {
        CampaignInput {
            name: Some("Autumn Sale".to_string()),
            discount_value: Some(15.0),
            discount_type: Some("PERCENTAGE".to_string()),
            start_date: Some(date(2026, 10, 1)),
            end_date: Some(date(2026, 10, 31)),
            target_type: Some("GLOBAL".to_string()),
            target_id: None,
            active: None,
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_through_row_mapping() {
        let (_db, repo) = setup().await;

        let created = repo.create(input()).await.unwrap();
        assert_eq!(created.discount_kind, DiscountKind::Percentage);
        assert_eq!(created.discount_value, 1500);
        assert!(created.enabled);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_always_enables() {
        let (_db, repo) = setup().await;
        let created = repo
            .create(CampaignInput {
                active: Some(false),
                ..input()
            })
            .await
            .unwrap();

        assert!(created.enabled);
    }

    #[tokio::test]
    async fn test_create_rejects_percentage_over_hundred() {
        let (_db, repo) = setup().await;
        let err = repo
            .create(CampaignInput {
                discount_value: Some(120.0),
                ..input()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_kind() {
        let (_db, repo) = setup().await;
        let err = repo
            .create(CampaignInput {
                discount_type: Some("BOGO".to_string()),
                ..input()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Core(CoreError::UnsupportedDiscountKind(ref k)) if k == "BOGO"
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (_db, repo) = setup().await;
        let created = repo.create(input()).await.unwrap();
        repo.set_enabled(&created.id, false).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                CampaignInput {
                    name: Some("Drill Deal".to_string()),
                    discount_value: Some(25.0),
                    discount_type: Some("FIXED_AMOUNT".to_string()),
                    target_type: Some("PRODUCT".to_string()),
                    target_id: Some("drill-1".to_string()),
                    active: Some(false),
                    ..input()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.discount_kind, DiscountKind::FixedAmount);
        assert_eq!(updated.discount_value, 2500);
        assert_eq!(updated.scope, CampaignScope::Product);
        assert!(!updated.enabled);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_active_reenables() {
        let (_db, repo) = setup().await;
        let created = repo.create(input()).await.unwrap();
        repo.set_enabled(&created.id, false).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                CampaignInput {
                    name: Some("Autumn Sale (extended)".to_string()),
                    active: None,
                    ..input()
                },
            )
            .await
            .unwrap();

        assert!(updated.enabled);
        assert!(repo.get_by_id(&created.id).await.unwrap().unwrap().enabled);
    }

    #[tokio::test]
    async fn test_update_can_disable() {
        let (_db, repo) = setup().await;
        let created = repo.create(input()).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                CampaignInput {
                    active: Some(false),
                    ..input()
                },
            )
            .await
            .unwrap();

        assert!(!updated.enabled);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_db, repo) = setup().await;
        assert!(matches!(
            repo.update("ghost", input()).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_set_enabled_and_delete() {
        let (_db, repo) = setup().await;
        let created = repo.create(input()).await.unwrap();

        repo.set_enabled(&created.id, false).await.unwrap();
        assert!(!repo.get_by_id(&created.id).await.unwrap().unwrap().enabled);

        repo.delete_by_id(&created.id).await.unwrap();
        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());

        assert!(matches!(
            repo.set_enabled(&created.id, true).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete_by_id(&created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_all_keeps_store_order() {
        let (_db, repo) = setup().await;
        let first = repo.create(input()).await.unwrap();
        let second = repo.create(input()).await.unwrap();
        repo.update(&first.id, input()).await.unwrap();

        let ids: Vec<String> = repo.get_all().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_unknown_stored_tag_is_reported() {
        let (db, repo) = setup().await;
        sqlx::query(
            "INSERT INTO campaigns (id, name, discount_kind, discount_value, scope) \
             VALUES ('c1', 'Legacy', 'BUY_ONE_GET_ONE', 100, 'GLOBAL')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        assert!(matches!(
            repo.get_all().await,
            Err(DbError::Core(CoreError::UnsupportedDiscountKind(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_stored_date_reads_as_missing() {
        let (db, repo) = setup().await;
        sqlx::query(
            "INSERT INTO campaigns (id, name, discount_kind, discount_value, start_date, end_date, scope) \
             VALUES ('c1', 'Typo', 'PERCENTAGE', 1000, '2026-13-45', '2026-10-31', 'GLOBAL')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let campaign = repo.get_by_id("c1").await.unwrap().unwrap();
        assert_eq!(campaign.start_date, None);
        assert_eq!(campaign.end_date, Some(date(2026, 10, 31)));
        assert!(campaign.enabled);
    }
}
