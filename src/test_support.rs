//! In-memory doubles for the storage and user seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{from_document, Document};

use crate::{
    database::{upsert_fields, AllocationFilter, AllocationStore},
    models::{Allocation, User},
    services::user_service::UserLookup,
    utils::AppError,
};

/// Keeps raw documents so `$set` merge semantics can be observed.
#[derive(Default)]
pub struct MemoryAllocationStore {
    documents: Mutex<Vec<Document>>,
    failure: Option<String>,
}

impl MemoryAllocationStore {
    pub fn failing(message: &str) -> Self {
        Self {
            documents: Mutex::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn seed(&self, document: Document) {
        self.documents.lock().unwrap().push(document);
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AllocationStore for MemoryAllocationStore {
    async fn upsert(&self, allocation: &Allocation) -> Result<(), AppError> {
        self.check()?;
        let mut documents = self.documents.lock().unwrap();
        let fields = upsert_fields(allocation);

        match documents
            .iter_mut()
            .find(|d| matches!(d.get_i64("userId"), Ok(id) if id == allocation.user_id))
        {
            Some(existing) => {
                for (key, value) in fields {
                    existing.insert(key, value);
                }
            }
            None => documents.push(fields),
        }
        Ok(())
    }

    async fn find(&self, filter: &AllocationFilter) -> Result<Vec<Allocation>, AppError> {
        self.check()?;
        let documents = self.documents();
        let mut allocations = Vec::new();
        for document in documents {
            let allocation: Allocation = from_document(document)?;
            if filter.matches(&allocation) {
                allocations.push(allocation);
            }
        }
        Ok(allocations)
    }
}

#[derive(Clone, Default)]
pub struct StaticUsers {
    users: HashMap<i64, User>,
    failure: Option<AppError>,
    lookups: Arc<AtomicUsize>,
}

impl StaticUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            ..Self::default()
        }
    }

    pub fn fail_with(mut self, error: AppError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserLookup for StaticUsers {
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}

pub fn fixture_user(id: i64) -> User {
    User {
        id,
        user_name: format!("user{}", id),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
    }
}
