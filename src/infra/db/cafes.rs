use async_trait::async_trait;

use crate::{
    application::repos::{CafesRepo, CreateCafeParams, RepoError},
    domain::entities::CafeRecord,
};

use super::{SqliteRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct CafeRow {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl From<CafeRow> for CafeRecord {
    fn from(row: CafeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            map_url: row.map_url,
            img_url: row.img_url,
            location: row.location,
            seats: row.seats,
            has_toilet: row.has_toilet,
            has_wifi: row.has_wifi,
            has_sockets: row.has_sockets,
            can_take_calls: row.can_take_calls,
            coffee_price: row.coffee_price,
        }
    }
}

#[async_trait]
impl CafesRepo for SqliteRepositories {
    async fn insert(&self, params: CreateCafeParams) -> Result<CafeRecord, RepoError> {
        let CreateCafeParams {
            name,
            map_url,
            img_url,
            location,
            seats,
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price,
        } = params;

        let row = sqlx::query_as::<_, CafeRow>(
            r#"
            INSERT INTO cafes (
                name, map_url, img_url, location, seats,
                has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, map_url, img_url, location, seats,
                      has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            "#,
        )
        .bind(name)
        .bind(map_url)
        .bind(img_url)
        .bind(location)
        .bind(seats)
        .bind(has_toilet)
        .bind(has_wifi)
        .bind(has_sockets)
        .bind(can_take_calls)
        .bind(coffee_price)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(CafeRecord::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CafeRecord>, RepoError> {
        let row = sqlx::query_as::<_, CafeRow>(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CafeRecord::from))
    }

    async fn list_all(&self) -> Result<Vec<CafeRecord>, RepoError> {
        let rows = sqlx::query_as::<_, CafeRow>(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CafeRecord::from).collect())
    }

    async fn random(&self) -> Result<Option<CafeRecord>, RepoError> {
        let row = sqlx::query_as::<_, CafeRow>(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CafeRecord::from))
    }

    async fn filter_by_location(&self, location: &str) -> Result<Vec<CafeRecord>, RepoError> {
        let rows = sqlx::query_as::<_, CafeRow>(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            WHERE location = ?
            ORDER BY id
            "#,
        )
        .bind(location)
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CafeRecord::from).collect())
    }

    async fn update_price(
        &self,
        id: i64,
        new_price: &str,
    ) -> Result<Option<CafeRecord>, RepoError> {
        let row = sqlx::query_as::<_, CafeRow>(
            r#"
            UPDATE cafes
            SET coffee_price = ?
            WHERE id = ?
            RETURNING id, name, map_url, img_url, location, seats,
                      has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            "#,
        )
        .bind(new_price)
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CafeRecord::from))
    }
}
