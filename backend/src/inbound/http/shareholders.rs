//! Shareholder API handlers.
//!
//! ```text
//! GET    /shareholders/
//! GET    /shareholders/{id}
//! POST   /shareholders/ {"name":"Alice","shares":100,"transactions":[100]}
//! PUT    /shareholders/{id} {"shares":80}
//! PUT    /shareholders/{id}/transactions?transaction=-20
//! DELETE /shareholders/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, ErrorCode, NewShareholder, Shareholder, ShareholderId, ShareholderName,
    ShareholderPatch, ShareholderValidationError, shareholder_not_found,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /shareholders/`.
///
/// Any `id`/`_id` supplied by the client is ignored; the store assigns one.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateShareholderRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 100)]
    pub shares: i64,
    #[schema(example = json!([100]))]
    pub transactions: Vec<i64>,
}

impl TryFrom<CreateShareholderRequest> for NewShareholder {
    type Error = ShareholderValidationError;

    fn try_from(value: CreateShareholderRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ShareholderName::new(value.name)?,
            shares: value.shares,
            transactions: value.transactions,
        })
    }
}

/// Request body for `PUT /shareholders/{id}`.
///
/// Absent and `null` fields are both left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateShareholderRequest {
    pub name: Option<String>,
    pub shares: Option<i64>,
    pub transactions: Option<Vec<i64>>,
}

impl TryFrom<UpdateShareholderRequest> for ShareholderPatch {
    type Error = ShareholderValidationError;

    fn try_from(value: UpdateShareholderRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name.map(ShareholderName::new).transpose()?,
            shares: value.shares,
            transactions: value.transactions,
        })
    }
}

/// Shareholder record as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ShareholderResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 80)]
    pub shares: i64,
    #[schema(example = json!([100, -20]))]
    pub transactions: Vec<i64>,
}

impl From<Shareholder> for ShareholderResponse {
    fn from(value: Shareholder) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().as_ref().to_owned(),
            shares: value.shares(),
            transactions: value.transactions().to_vec(),
        }
    }
}

/// Query string for `PUT /shareholders/{id}/transactions`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppendTransactionQuery {
    /// Signed amount added to `shares` and appended to `transactions`.
    pub transaction: i64,
}

/// Malformed ids can never match a record, so they read as missing.
fn parse_id(raw: &str) -> Result<ShareholderId, Error> {
    ShareholderId::new(raw).map_err(|_| shareholder_not_found(raw))
}

/// Name the id in a not-found error exactly as the client sent it.
///
/// Parsed ids are normalised to lowercase; the client should see its own
/// spelling back whether or not the id was well formed.
fn echo_requested_id(raw: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |err| {
        if err.code() != ErrorCode::NotFound {
            return err;
        }
        let echoed = shareholder_not_found(raw);
        match err.trace_id() {
            Some(id) => echoed.with_trace_id(id),
            None => echoed,
        }
    }
}

fn map_validation_error(err: ShareholderValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Fetch one shareholder.
#[utoipa::path(
    get,
    path = "/shareholders/{id}",
    params(("id" = String, Path, description = "Shareholder identifier")),
    responses(
        (status = 200, description = "Shareholder", body = ShareholderResponse),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "getShareholder"
)]
#[get("/shareholders/{id}")]
pub async fn get_shareholder(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ShareholderResponse>> {
    let id = parse_id(path.as_str())?;
    let shareholder = state
        .shareholders_query
        .get_shareholder(&id)
        .await
        .map_err(echo_requested_id(path.as_str()))?;
    Ok(web::Json(shareholder.into()))
}

/// List every shareholder. Unbounded; the response may be empty.
#[utoipa::path(
    get,
    path = "/shareholders/",
    responses(
        (status = 200, description = "All shareholders", body = [ShareholderResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "listShareholders"
)]
#[get("/shareholders/")]
pub async fn list_shareholders(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ShareholderResponse>>> {
    let shareholders = state.shareholders_query.list_shareholders().await?;
    Ok(web::Json(
        shareholders
            .into_iter()
            .map(ShareholderResponse::from)
            .collect(),
    ))
}

/// Create a shareholder. The response carries the store-assigned id.
#[utoipa::path(
    post,
    path = "/shareholders/",
    request_body = CreateShareholderRequest,
    responses(
        (status = 201, description = "Created", body = ShareholderResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "createShareholder"
)]
#[post("/shareholders/")]
pub async fn create_shareholder(
    state: web::Data<HttpState>,
    payload: web::Json<CreateShareholderRequest>,
) -> ApiResult<HttpResponse> {
    let fields = NewShareholder::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let created = state.shareholders.create_shareholder(fields).await?;
    Ok(HttpResponse::Created().json(ShareholderResponse::from(created)))
}

/// Delete a shareholder.
#[utoipa::path(
    delete,
    path = "/shareholders/{id}",
    params(("id" = String, Path, description = "Shareholder identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "deleteShareholder"
)]
#[delete("/shareholders/{id}")]
pub async fn delete_shareholder(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(path.as_str())?;
    state
        .shareholders
        .delete_shareholder(&id)
        .await
        .map_err(echo_requested_id(path.as_str()))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Update any subset of `name`, `shares` and `transactions`.
///
/// An update with no effective fields returns the record unchanged.
#[utoipa::path(
    put,
    path = "/shareholders/{id}",
    params(("id" = String, Path, description = "Shareholder identifier")),
    request_body = UpdateShareholderRequest,
    responses(
        (status = 200, description = "Post-update record", body = ShareholderResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "updateShareholder"
)]
#[put("/shareholders/{id}")]
pub async fn update_shareholder(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateShareholderRequest>,
) -> ApiResult<web::Json<ShareholderResponse>> {
    let id = parse_id(path.as_str())?;
    let patch = ShareholderPatch::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let updated = state
        .shareholders
        .update_shareholder(&id, patch)
        .await
        .map_err(echo_requested_id(path.as_str()))?;
    Ok(web::Json(updated.into()))
}

/// Append a transaction and adjust `shares` by the same amount.
#[utoipa::path(
    put,
    path = "/shareholders/{id}/transactions",
    params(
        ("id" = String, Path, description = "Shareholder identifier"),
        AppendTransactionQuery
    ),
    responses(
        (status = 200, description = "Post-update record", body = ShareholderResponse),
        (status = 400, description = "Invalid or overflowing transaction", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["shareholders"],
    operation_id = "appendTransaction"
)]
#[put("/shareholders/{id}/transactions")]
pub async fn append_transaction(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<AppendTransactionQuery>,
) -> ApiResult<web::Json<ShareholderResponse>> {
    let id = parse_id(path.as_str())?;
    let updated = state
        .shareholders
        .append_transaction(&id, query.transaction)
        .await
        .map_err(echo_requested_id(path.as_str()))?;
    Ok(web::Json(updated.into()))
}

#[cfg(test)]
#[path = "shareholders_tests.rs"]
mod tests;
