use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

use super::User;

/// Documento da collection "allocations" - um por userId
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub user_id: i64,
    pub stocks: f64,
    pub funds: f64,
    pub bonds: f64,
}

impl Allocation {
    pub fn new(user_id: i64, stocks: f64, funds: f64, bonds: f64) -> Self {
        Self {
            id: None,
            user_id,
            stocks,
            funds,
            bonds,
        }
    }
}

/// Allocation com os dados de identidade do usuário (nunca persistido)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAllocation {
    pub user_id: i64,
    pub stocks: f64,
    pub funds: f64,
    pub bonds: f64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserAllocation {
    pub fn enrich(allocation: Allocation, user: &User) -> Self {
        Self {
            user_id: allocation.user_id,
            stocks: allocation.stocks,
            funds: allocation.funds,
            bonds: allocation.bonds,
            user_name: user.user_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateAllocationRequest {
    pub stocks: f64,
    pub funds: f64,
    pub bonds: f64,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AllocationResponse {
    pub success: bool,
    pub allocation: UserAllocation,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AllocationListResponse {
    pub success: bool,
    pub allocations: Vec<UserAllocation>,
    pub count: usize,
}
