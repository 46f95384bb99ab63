use serde::{Deserialize, Serialize};

/// Documento da collection "users" (somente leitura neste serviço)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,  // PRIMARY IDENTIFIER - inteiro, igual ao userId das allocations
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}
