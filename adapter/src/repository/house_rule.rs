use super::check::ensure_property_exists;
use crate::database::{model::house_rule::HouseRuleRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    house_rule::{
        event::{CreateHouseRule, UpdateHouseRule},
        HouseRule,
    },
    id::{HouseRuleId, PropertyId},
    list::ListOptions,
};
use kernel::repository::house_rule::HouseRuleRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const SELECT_RULE: &str = "SELECT rule_id, property_id, rule_text, created_at FROM house_rules";

#[derive(new)]
pub struct HouseRuleRepositoryImpl {
    db: ConnectionPool,
}

impl HouseRuleRepositoryImpl {
    async fn fetch(conn: &mut PgConnection, rule_id: HouseRuleId) -> AppResult<Option<HouseRule>> {
        let row = sqlx::query_as::<_, HouseRuleRow>(&format!("{SELECT_RULE} WHERE rule_id = $1"))
            .bind(rule_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(HouseRule::from))
    }

    // The rule must exist and still belong to an existing property.
    async fn fetch_owned(conn: &mut PgConnection, rule_id: HouseRuleId) -> AppResult<HouseRule> {
        let rule = Self::fetch(conn, rule_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("House rule not found".into()))?;
        ensure_property_exists(conn, rule.property_id).await?;
        Ok(rule)
    }
}

#[async_trait]
impl HouseRuleRepository for HouseRuleRepositoryImpl {
    async fn create(&self, event: CreateHouseRule) -> AppResult<HouseRule> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;

        let rule_id = sqlx::query_scalar::<_, HouseRuleId>(
            "INSERT INTO house_rules (property_id, rule_text) VALUES ($1, $2) RETURNING rule_id",
        )
        .bind(event.property_id)
        .bind(&event.rule_text)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let rule = Self::fetch(&mut tx, rule_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No house rule record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(rule.id = %rule_id, property.id = %rule.property_id, "house rule created");
        Ok(rule)
    }

    async fn find_by_property_id(
        &self,
        property_id: PropertyId,
        options: ListOptions,
    ) -> AppResult<Vec<HouseRule>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;

        ensure_property_exists(&mut conn, property_id).await?;

        let rows = sqlx::query_as::<_, HouseRuleRow>(&format!(
            "{SELECT_RULE} WHERE property_id = $1 ORDER BY created_at DESC, rule_id DESC LIMIT $2 OFFSET $3"
        ))
        .bind(property_id)
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(&mut *conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(HouseRule::from).collect())
    }

    async fn find_by_id(&self, rule_id: HouseRuleId) -> AppResult<Option<HouseRule>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, rule_id).await
    }

    async fn update(&self, event: UpdateHouseRule) -> AppResult<HouseRule> {
        let rule_text = event.rule_text.ok_or(AppError::NoFieldsToUpdate)?;
        let mut tx = self.db.begin().await?;

        Self::fetch_owned(&mut tx, event.rule_id).await?;

        sqlx::query("UPDATE house_rules SET rule_text = $1 WHERE rule_id = $2")
            .bind(rule_text)
            .bind(event.rule_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let rule = Self::fetch(&mut tx, event.rule_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("House rule not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(rule)
    }

    async fn delete(&self, rule_id: HouseRuleId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        Self::fetch_owned(&mut tx, rule_id).await?;

        sqlx::query("DELETE FROM house_rules WHERE rule_id = $1")
            .bind(rule_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_property(pool: &sqlx::PgPool) -> anyhow::Result<PropertyId> {
        let property_id = sqlx::query_scalar::<_, PropertyId>(
            r#"
                WITH host AS (
                    INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                    VALUES ('rules@example.com', 'x', 'Emi', 'Sato', TRUE)
                    RETURNING user_id
                ), category AS (
                    INSERT INTO property_categories (category_name) VALUES ('Townhouse')
                    RETURNING category_id
                )
                INSERT INTO properties (host_id, category_id, title, description, property_type, price_per_night)
                SELECT host.user_id, category.category_id, 'Townhouse', 'Central', 'entire_place', 90
                FROM host, category
                RETURNING property_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        Ok(property_id)
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn rules_are_listed_newest_first(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let property_id = seed_property(&pool).await?;
        let repo = HouseRuleRepositoryImpl::new(ConnectionPool::new(pool));

        let first = repo
            .create(CreateHouseRule::new(property_id, "No smoking".into()))
            .await?;
        let second = repo
            .create(CreateHouseRule::new(property_id, "No parties".into()))
            .await?;

        let rules = repo
            .find_by_property_id(property_id, ListOptions::default())
            .await?;
        let ids: Vec<_> = rules.iter().map(|r| r.rule_id).collect();
        assert_eq!(ids, vec![second.rule_id, first.rule_id]);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn unknown_property_has_no_rule_list(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = HouseRuleRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo
            .find_by_property_id(PropertyId::new(404), ListOptions::default())
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
