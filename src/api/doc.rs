use utoipa::OpenApi;

pub const USER_TAG: &str = "Users";
pub const TODO_TAG: &str = "Todos";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "todos-rs",
        description = "A two-resource CRUD API for users and their todos",
    ),
    paths(
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::list_user_todos,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::delete_user,
        crate::api::handlers::todos::list_todos,
        crate::api::handlers::todos::get_todo,
        crate::api::handlers::todos::create_todo,
        crate::api::handlers::todos::update_todo,
        crate::api::handlers::todos::delete_todo,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::ValidationErrorResponse,
            crate::models::TodoStage,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
        (name = TODO_TAG, description = "Todo management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
