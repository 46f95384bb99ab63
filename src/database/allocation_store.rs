// ==================== ALLOCATIONS STORAGE ====================
// Acesso à collection "allocations": find filtrado e upsert por userId

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use super::MongoDB;
use crate::{models::Allocation, utils::AppError};

pub const ALLOCATIONS_COLLECTION: &str = "allocations";

/// Filtro de leitura: sempre por userId, opcionalmente stocks > threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationFilter {
    pub user_id: i64,
    pub stocks_above: Option<i64>,
}

impl AllocationFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = doc! { "userId": self.user_id };
        if let Some(threshold) = self.stocks_above {
            filter.insert("stocks", doc! { "$gt": threshold });
        }
        filter
    }

    pub fn matches(&self, allocation: &Allocation) -> bool {
        allocation.user_id == self.user_id
            && self
                .stocks_above
                .map_or(true, |threshold| allocation.stocks > threshold as f64)
    }
}

/// The `$set` body of an upsert: only the four allocation fields.
pub fn upsert_fields(allocation: &Allocation) -> Document {
    doc! {
        "userId": allocation.user_id,
        "stocks": allocation.stocks,
        "funds": allocation.funds,
        "bonds": allocation.bonds,
    }
}

#[async_trait]
pub trait AllocationStore: Send + Sync {
    /// Insert or merge the allocation for `allocation.user_id`.
    async fn upsert(&self, allocation: &Allocation) -> Result<(), AppError>;

    async fn find(&self, filter: &AllocationFilter) -> Result<Vec<Allocation>, AppError>;
}

pub struct MongoAllocationStore {
    collection: Collection<Allocation>,
}

impl MongoAllocationStore {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection::<Allocation>(ALLOCATIONS_COLLECTION),
        }
    }
}

#[async_trait]
impl AllocationStore for MongoAllocationStore {
    async fn upsert(&self, allocation: &Allocation) -> Result<(), AppError> {
        // $set + upsert: nunca substitui o documento inteiro
        self.collection
            .update_one(
                doc! { "userId": allocation.user_id },
                doc! { "$set": upsert_fields(allocation) },
            )
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn find(&self, filter: &AllocationFilter) -> Result<Vec<Allocation>, AppError> {
        let cursor = self.collection.find(filter.to_document()).await?;
        let allocations: Vec<Allocation> = cursor.try_collect().await?;
        log::debug!("🔎 {} allocations matched {:?}", allocations.len(), filter);
        Ok(allocations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_without_threshold() {
        let filter = AllocationFilter { user_id: 5, stocks_above: None };
        assert_eq!(filter.to_document(), doc! { "userId": 5_i64 });
    }

    #[test]
    fn test_filter_with_threshold() {
        let filter = AllocationFilter { user_id: 5, stocks_above: Some(100) };
        assert_eq!(
            filter.to_document(),
            doc! { "userId": 5_i64, "stocks": { "$gt": 100_i64 } }
        );
    }

    #[test]
    fn test_filter_threshold_is_strict() {
        let filter = AllocationFilter { user_id: 1, stocks_above: Some(100) };
        assert!(!filter.matches(&Allocation::new(1, 100.0, 0.0, 0.0)));
        assert!(filter.matches(&Allocation::new(1, 100.5, 0.0, 0.0)));
        assert!(!filter.matches(&Allocation::new(2, 500.0, 0.0, 0.0)));
    }

    #[test]
    fn test_upsert_fields_only_touch_allocation_keys() {
        let fields = upsert_fields(&Allocation::new(9, 1.0, 2.0, 3.0));
        let keys: Vec<&str> = fields.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["userId", "stocks", "funds", "bonds"]);
    }
}
