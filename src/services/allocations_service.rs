// ==================== ALLOCATIONS DAO ====================
// Upsert por userId e leitura filtrada, sempre enriquecida com os dados do usuário

use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    database::{AllocationFilter, AllocationStore, MongoAllocationStore, MongoDB},
    models::{Allocation, UserAllocation},
    services::user_service::{UserDao, UserLookup},
    utils::{parse_threshold, parse_user_id, AppError},
};

#[derive(Clone)]
pub struct AllocationsDao {
    store: Arc<dyn AllocationStore>,
    users: Arc<dyn UserLookup>,
}

impl AllocationsDao {
    /// Builds the DAO on top of a connected database.
    pub fn new(db: &MongoDB) -> Self {
        Self::with_backends(
            Arc::new(MongoAllocationStore::new(db)),
            Arc::new(UserDao::new(db)),
        )
    }

    pub fn with_backends(store: Arc<dyn AllocationStore>, users: Arc<dyn UserLookup>) -> Self {
        Self { store, users }
    }

    /// Upserts the user's allocation and returns it with the user's identity.
    ///
    /// Storage errors return before the user lookup is attempted.
    pub async fn update(
        &self,
        user_id: &str,
        stocks: f64,
        funds: f64,
        bonds: f64,
    ) -> Result<UserAllocation, AppError> {
        let user_id = parse_user_id(user_id)?;
        let allocation = Allocation::new(user_id, stocks, funds, bonds);

        self.store.upsert(&allocation).await?;
        log::info!("💾 Updated allocations for user {}", user_id);

        let user = self.users.get_user_by_id(user_id).await?;
        Ok(UserAllocation::enrich(allocation, &user))
    }

    /// Reads the user's allocations, optionally only those with
    /// `stocks > threshold`, each enriched with the owner's identity.
    ///
    /// An empty match is a `NotFound` error. Lookups run concurrently and
    /// the first failing one becomes the result; no partial list is returned.
    /// Output keeps the store's order.
    pub async fn get_by_user_id_and_threshold(
        &self,
        user_id: &str,
        threshold: Option<&str>,
    ) -> Result<Vec<UserAllocation>, AppError> {
        let user_id = parse_user_id(user_id)?;
        let stocks_above = parse_threshold(threshold)?;

        let filter = AllocationFilter { user_id, stocks_above };
        let allocations = self.store.find(&filter).await?;

        if allocations.is_empty() {
            return Err(AppError::NotFound("No allocations found for the user".to_string()));
        }

        let lookups = allocations.into_iter().map(|allocation| async move {
            let user = self.users.get_user_by_id(allocation.user_id).await?;
            Ok::<_, AppError>(UserAllocation::enrich(allocation, &user))
        });

        try_join_all(lookups).await
    }
}
