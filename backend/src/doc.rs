//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer plus the
//! schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that document
//! domain errors without coupling domain types to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::health::Greeting;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::shareholders::{
    CreateShareholderRequest, ShareholderResponse, UpdateShareholderRequest,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shareholders API",
        description = "CRUD access to shareholder records and their share transactions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::shareholders::list_shareholders,
        crate::inbound::http::shareholders::create_shareholder,
        crate::inbound::http::shareholders::get_shareholder,
        crate::inbound::http::shareholders::update_shareholder,
        crate::inbound::http::shareholders::delete_shareholder,
        crate::inbound::http::shareholders::append_transaction,
    ),
    components(schemas(
        Greeting,
        ShareholderResponse,
        CreateShareholderRequest,
        UpdateShareholderRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "shareholders", description = "Shareholder records and transactions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
