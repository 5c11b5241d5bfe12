//! User endpoints.
//!
//! ```text
//! GET    /users
//! GET    /user?id=1
//! POST   /user       {"name":"Alice","email":"a@x.com"}
//! PUT    /user/{id}  {"name":"Alice B"}
//! DELETE /user/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::{ApiError, ApiResult};
use super::response::ApiResponse;
use crate::clients::UserClient;
use crate::domain::{UserCreate, UserPatch};

/// Body for `POST /user`. Missing fields decode as empty and fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body for `PUT /user/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: String,
}

/// Query string for `GET /user`.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl From<CreateUserRequest> for UserCreate {
    fn from(value: CreateUserRequest) -> Self {
        Self::new(value.name, value.email)
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        Self { name: value.name }
    }
}

/// Parse a user id taken from the query string or the path.
pub fn parse_id(raw: Option<&str>) -> ApiResult<u64> {
    match raw {
        None | Some("") => Err(ApiError::invalid_query()),
        Some(raw) => raw.parse().map_err(|_| ApiError::invalid_id()),
    }
}

#[get("/users")]
#[instrument(skip(users))]
pub async fn list_users(users: web::Data<UserClient>) -> ApiResult<HttpResponse> {
    let data = users.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_data("Success get users", data)))
}

#[get("/user")]
#[instrument(skip(users))]
pub async fn get_user(
    users: web::Data<UserClient>,
    query: web::Query<IdQuery>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(query.id.as_deref())?;
    let user = users.get_user(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_data("Success get user", user)))
}

#[post("/user")]
#[instrument(skip(users))]
pub async fn create_user(
    users: web::Data<UserClient>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = users.create_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_data("Success create user", user)))
}

/// The body is decoded by hand so a bad id is reported before a bad body.
#[put("/user/{id}")]
#[instrument(skip(users, body))]
pub async fn update_user(
    users: web::Data<UserClient>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_id(Some(path.as_str()))?;
    let payload: UpdateUserRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, "Rejected request body");
        ApiError::invalid_payload()
    })?;
    users.update_user(id, payload.into()).await?;
    Ok(HttpResponse::Accepted().json(ApiResponse::message("Success update user")))
}

#[delete("/user/{id}")]
#[instrument(skip(users))]
pub async fn delete_user(
    users: web::Data<UserClient>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(Some(path.as_str()))?;
    users.delete_user(id).await?;
    Ok(HttpResponse::Accepted().json(ApiResponse::message("Success delete user")))
}
