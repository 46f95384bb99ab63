use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allocations Service API",
        version = "1.0.0",
        description = "Per-user portfolio allocations (stocks/funds/bonds) stored in MongoDB.\n\n**Features:**\n- Upsert allocations by user id\n- Read allocations with an optional stocks threshold\n- Results enriched with the user's name fields\n- Health monitoring",
        contact(
            name = "Allocations Service Team"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Allocations
        crate::api::allocations::get_allocations,
        crate::api::allocations::update_allocation,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::UserAllocation,
            crate::models::UpdateAllocationRequest,
            crate::models::AllocationResponse,
            crate::models::AllocationListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint, including database reachability."),
        (name = "Allocations", description = "Read and upsert per-user portfolio allocations."),
    )
)]
pub struct ApiDoc;
