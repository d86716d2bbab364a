//! Reward-points balance per account.

use sea_orm::DatabaseConnection;
use tracing::info;

use models::account;
use crate::errors::ServiceError;

/// Points added by one grant.
pub const REWARD_GRANT_POINTS: i32 = 10;

/// Add [`REWARD_GRANT_POINTS`] to the account and return the new total.
pub async fn grant_reward(db: &DatabaseConnection, user_id: i32) -> Result<i32, ServiceError> {
    let updated = account::add_rewards(db, user_id, REWARD_GRANT_POINTS)
        .await?
        .ok_or_else(|| ServiceError::not_found("user"))?;
    info!(user_id, total = updated.rewards, "reward_granted");
    Ok(updated.rewards)
}

pub async fn get_rewards(db: &DatabaseConnection, user_id: i32) -> Result<i32, ServiceError> {
    let found = account::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("user"))?;
    Ok(found.rewards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn three_grants_total_thirty() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let a = account::create(&t.db, "frank", "$argon2id$x").await?;
        assert_eq!(get_rewards(&t.db, a.id).await?, 0);

        assert_eq!(grant_reward(&t.db, a.id).await?, 10);
        assert_eq!(grant_reward(&t.db, a.id).await?, 20);
        assert_eq!(grant_reward(&t.db, a.id).await?, 30);
        assert_eq!(get_rewards(&t.db, a.id).await?, 30);
        Ok(())
    }

    #[tokio::test]
    async fn grants_do_not_leak_between_accounts() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let a = account::create(&t.db, "gina", "$argon2id$x").await?;
        let b = account::create(&t.db, "hank", "$argon2id$x").await?;
        grant_reward(&t.db, a.id).await?;
        assert_eq!(get_rewards(&t.db, a.id).await?, 10);
        assert_eq!(get_rewards(&t.db, b.id).await?, 0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_grants_are_all_counted() -> Result<(), anyhow::Error> {
        const GRANTS: i32 = 8;
        let t = get_db().await?;
        let id = account::create(&t.db, "jules", "$argon2id$x").await?.id;

        let handles: Vec<_> = (0..GRANTS)
            .map(|_| {
                let db = t.db.clone();
                tokio::spawn(async move { grant_reward(&db, id).await })
            })
            .collect();
        let mut totals = Vec::with_capacity(handles.len());
        for handle in handles {
            totals.push(handle.await??);
        }

        assert_eq!(get_rewards(&t.db, id).await?, REWARD_GRANT_POINTS * GRANTS);
        // every grant saw its own increment
        totals.sort_unstable();
        let expected: Vec<i32> = (1..=GRANTS).map(|n| n * REWARD_GRANT_POINTS).collect();
        assert_eq!(totals, expected);
        Ok(())
    }

    #[tokio::test]
    async fn grant_on_full_balance_is_rejected_and_balance_stays_readable() -> Result<(), anyhow::Error> {
        use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};

        let t = get_db().await?;
        let a = account::create(&t.db, "kim", "$argon2id$x").await?;
        account::Entity::update_many()
            .col_expr(account::Column::Rewards, Expr::value(i32::MAX - 5))
            .filter(account::Column::Id.eq(a.id))
            .exec(&t.db)
            .await?;

        assert!(matches!(grant_reward(&t.db, a.id).await, Err(ServiceError::Validation(_))));
        assert_eq!(get_rewards(&t.db, a.id).await?, i32::MAX - 5);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        account::create(&t.db, "ivy", "$argon2id$x").await?;
        assert!(matches!(get_rewards(&t.db, 999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(grant_reward(&t.db, 999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(get_rewards(&t.db, -1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
