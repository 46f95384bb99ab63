use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    models::{AllocationListResponse, AllocationResponse, UpdateAllocationRequest},
    services::AllocationsDao,
    utils::AppError,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThresholdQuery {
    /// Only return allocations with stocks strictly above this value
    pub threshold: Option<String>,
}

fn error_response(e: &AppError) -> HttpResponse {
    let body = serde_json::json!({
        "success": false,
        "error": e.to_string()
    });

    match e {
        AppError::InvalidRequest(_) => {
            log::warn!("⚠️ {}", e);
            HttpResponse::BadRequest().json(body)
        }
        AppError::NotFound(_) => {
            log::warn!("⚠️ {}", e);
            HttpResponse::NotFound().json(body)
        }
        AppError::DatabaseError(_) => {
            log::error!("❌ {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// GET /api/v1/allocations/{user_id} - Allocations do usuário, com threshold opcional
#[utoipa::path(
    get,
    path = "/api/v1/allocations/{user_id}",
    tag = "Allocations",
    params(
        ("user_id" = String, Path, description = "Integer user id"),
        ThresholdQuery
    ),
    responses(
        (status = 200, description = "Matching allocations", body = AllocationListResponse),
        (status = 400, description = "Invalid user id or threshold"),
        (status = 404, description = "No allocations found for the user"),
        (status = 500, description = "Database error")
    )
)]
#[get("/{user_id}")]
pub async fn get_allocations(
    dao: web::Data<AllocationsDao>,
    user_id: web::Path<String>,
    query: web::Query<ThresholdQuery>,
) -> impl Responder {
    log::info!("📋 GET /allocations/{} (threshold: {:?})", user_id, query.threshold);

    match dao
        .get_by_user_id_and_threshold(&user_id, query.threshold.as_deref())
        .await
    {
        Ok(allocations) => HttpResponse::Ok().json(AllocationListResponse {
            success: true,
            count: allocations.len(),
            allocations,
        }),
        Err(e) => error_response(&e),
    }
}

/// PUT /api/v1/allocations/{user_id} - Cria ou atualiza a allocation do usuário
#[utoipa::path(
    put,
    path = "/api/v1/allocations/{user_id}",
    tag = "Allocations",
    params(("user_id" = String, Path, description = "Integer user id")),
    request_body = UpdateAllocationRequest,
    responses(
        (status = 200, description = "Allocation stored", body = AllocationResponse),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
#[put("/{user_id}")]
pub async fn update_allocation(
    dao: web::Data<AllocationsDao>,
    user_id: web::Path<String>,
    request: web::Json<UpdateAllocationRequest>,
) -> impl Responder {
    log::info!("🔧 PUT /allocations/{}", user_id);

    match dao
        .update(&user_id, request.stocks, request.funds, request.bonds)
        .await
    {
        Ok(allocation) => HttpResponse::Ok().json(AllocationResponse {
            success: true,
            allocation,
        }),
        Err(e) => error_response(&e),
    }
}
