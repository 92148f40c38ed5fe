use async_trait::async_trait;
use perfdash_core::{Item, ItemKey};

use crate::{DbPool, DbResult, ItemStore};

/// [`ItemStore`] backed by the Postgres `items` table.
///
/// The whole item is kept in the `data` JSONB column; `pk`, `sk` and
/// `item_type` are duplicated into columns for keyed lookups.
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn get(&self, key: &ItemKey) -> DbResult<Option<Item>> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM items WHERE pk = $1 AND sk = $2")
                .bind(&key.pk)
                .bind(&key.sk)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(data,)| serde_json::from_value(data).map_err(Into::into))
            .transpose()
    }

    async fn put(&self, item: Item) -> DbResult<()> {
        let data = serde_json::to_value(&item)?;
        sqlx::query(
            "INSERT INTO items (pk, sk, item_type, data) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (pk, sk) DO UPDATE \
             SET item_type = EXCLUDED.item_type, \
                 data = EXCLUDED.data, \
                 updated_at = NOW()",
        )
        .bind(&item.pk)
        .bind(&item.sk)
        .bind(&item.item_type)
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, key: &ItemKey) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE pk = $1 AND sk = $2")
            .bind(&key.pk)
            .bind(&key.sk)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn query(&self, pk: &str) -> DbResult<Vec<Item>> {
        let rows: Vec<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM items WHERE pk = $1 ORDER BY sk")
                .bind(pk)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(data,)| serde_json::from_value(data).map_err(Into::into))
            .collect()
    }
}
