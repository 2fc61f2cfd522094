//! # Item Repository
//!
//! Catalog store: database operations for items.
//!
//! Every write goes through the core's validation first, so a stored item
//! always has a name and a non-negative base price.

use pricing_core::validation::{item_from_input, validate_item};
use pricing_core::{CoreError, Item, ItemInput};
use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::{DbError, DbResult};

const SELECT_ITEMS: &str = r#"
    SELECT
        id,
        name,
        description,
        base_price_cents,
        stock_quantity,
        category,
        image_url
    FROM items
"#;

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let items = db.items();
///
/// let drill = items.create(ItemInput { .. }).await?;
/// let all = items.get_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Returns every item in store order.
    pub async fn get_all(&self) -> DbResult<Vec<Item>> {
        let query = format!("{SELECT_ITEMS} ORDER BY rowid");
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Item>> {
        let query = format!("{SELECT_ITEMS} WHERE id = ?1");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Validates a catalog form payload and inserts it under a fresh id.
    pub async fn create(&self, input: ItemInput) -> DbResult<Item> {
        let item = item_from_input(generate_id(), input)?;
        self.save(&item).await
    }

    /// Inserts the item, or replaces every field of the existing row with the
    /// same id. The row keeps its position in store order.
    pub async fn save(&self, item: &Item) -> DbResult<Item> {
        validate_item(item).map_err(CoreError::from)?;

        debug!(id = %item.id, price_cents = item.base_price_cents, "Saving item");

        sqlx::query(
            r#"
            INSERT INTO items (
                id, name, description, base_price_cents,
                stock_quantity, category, image_url
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                base_price_cents = excluded.base_price_cents,
                stock_quantity = excluded.stock_quantity,
                category = excluded.category,
                image_url = excluded.image_url
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.base_price_cents)
        .bind(item.stock_quantity)
        .bind(&item.category)
        .bind(&item.image_url)
        .execute(&self.pool)
        .await?;

        Ok(item.clone())
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with that id
    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Counts stored items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
