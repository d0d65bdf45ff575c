//! User CRUD handlers.
//!
//! ```text
//! GET    /users
//! POST   /users        {"name":"Alice"}
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Alicia"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserId};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, json_config, parse_user_id, path_config, require,
};

const NAME: FieldName = FieldName::new("name");
const USER_NOT_FOUND: &str = "User not found";

/// Request body for create and update.
///
/// `name` is optional at the serde level so a missing or `null` name is
/// reported as a field error rather than a generic body error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
}

/// User representation returned by every read and write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_i32(),
            name: user.name().as_str().to_owned(),
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    pub success: bool,
}

fn not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

/// Resolve the `{id}` segment; integers no user can carry are not found.
fn user_id(path: web::Path<String>) -> Result<UserId, Error> {
    parse_user_id(&path.into_inner())?.ok_or_else(not_found)
}

/// Register the user routes and the extractor configuration they rely on.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

#[utoipa::path(
    get,
    path = "/users",
    summary = "List users",
    description = "Return every user in store order. An empty store yields `[]`.",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "User store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/users",
    summary = "Create a user",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or empty name", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let name = require(payload.into_inner().name, NAME)?;
    let user = state.users_command.create_user(&name).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    summary = "Fetch a user",
    params(("id" = i64, Path, description = "User identifier; integers outside the 32-bit range are never found")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = user_id(path)?;
    let user = state.users.get_user(id).await?.ok_or_else(not_found)?;
    Ok(web::Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    summary = "Rename a user",
    description = "Replace the user's name. The identifier never changes. \
        An unknown identifier is reported as not found even when the new name is blank.",
    params(("id" = i64, Path, description = "User identifier; integers outside the 32-bit range are never found")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing or empty name, or non-integer identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = user_id(path)?;
    let name = require(payload.into_inner().name, NAME)?;
    let user = state
        .users_command
        .update_user(id, &name)
        .await?
        .ok_or_else(not_found)?;
    Ok(web::Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    summary = "Delete a user",
    params(("id" = i64, Path, description = "User identifier; integers outside the 32-bit range are never found")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = user_id(path)?;
    if !state.users_command.delete_user(id).await? {
        return Err(not_found());
    }
    Ok(web::Json(DeleteUserResponse { success: true }))
}
