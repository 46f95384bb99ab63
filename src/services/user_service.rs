// Leitura de usuários para enriquecer as allocations (userName/firstName/lastName)

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::{database::MongoDB, models::User, utils::AppError};

const USERS_COLLECTION: &str = "users";

#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, AppError>;
}

pub struct UserDao {
    collection: Collection<User>,
}

impl UserDao {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection::<User>(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserLookup for UserDao {
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, AppError> {
        log::debug!("👤 Looking up user {}", user_id);

        self.collection
            .find_one(doc! { "_id": user_id })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
