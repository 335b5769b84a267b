use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use apikit_config::Settings;
use apikit_core::{ErrorResponse, InternalErrorResponse};

use crate::modules::auth::model::VerifyResponse;
use crate::modules::system::model::{HealthResponse, InfoResponse};

pub const OPENAPI_PATH: &str = "/api/openapi.json";
pub const SWAGGER_PATH: &str = "/api/docs";
pub const REDOC_PATH: &str = "/api/redoc";
pub const SCALAR_PATH: &str = "/api/scalar";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::system::controller::health,
        crate::modules::system::controller::info,
        crate::modules::auth::controller::verify_token,
    ),
    components(
        schemas(
            HealthResponse,
            InfoResponse,
            VerifyResponse,
            ErrorResponse,
            InternalErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Health and project metadata"),
        (name = "Authentication", description = "Shared-secret token checks")
    ),
    info(
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with title, description and version taken from `settings`.
pub fn openapi(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.project_name.clone();
    doc.info.description = Some(settings.project_description.clone());
    doc.info.version = settings.project_version.clone();
    doc
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            )
        }
    }
}
