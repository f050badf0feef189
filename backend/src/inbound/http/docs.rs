//! OpenAPI documents and the Swagger UI page.
//!
//! Each service publishes its own document: [`OrderApiDoc`] and
//! [`UserApiDoc`]. The document is rendered to YAML once at startup and
//! served from `/swagger/openapi.yaml`; `/swagger` serves a Swagger UI page
//! pointed at it.

use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::domain::{Order, User};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the order service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        description = "Create and fetch orders for users registered with the user service."
    ),
    paths(
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::health::healthz,
        crate::inbound::http::health::readyz,
        crate::inbound::http::metrics::scrape_metrics,
    ),
    components(schemas(Order, ErrorBody)),
    tags(
        (name = "orders", description = "Order creation and lookup"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "observability", description = "Prometheus metrics")
    )
)]
pub struct OrderApiDoc;

/// OpenAPI document for the user service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        description = "Register and fetch users."
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::healthz,
        crate::inbound::http::health::readyz,
        crate::inbound::http::metrics::scrape_metrics,
    ),
    components(schemas(User, ErrorBody)),
    tags(
        (name = "users", description = "User registration and lookup"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "observability", description = "Prometheus metrics")
    )
)]
pub struct UserApiDoc;

/// Failure to render an OpenAPI document.
#[derive(Debug, thiserror::Error)]
#[error("failed to render OpenAPI document: {0}")]
pub struct DocsRenderError(String);

/// Pre-rendered documentation served by the `/swagger` routes.
#[derive(Debug, Clone)]
pub struct ApiDocs {
    title: String,
    yaml: String,
}

impl ApiDocs {
    /// Render `openapi` to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`DocsRenderError`] when YAML serialisation fails.
    pub fn render(openapi: &utoipa::openapi::OpenApi) -> Result<Self, DocsRenderError> {
        let yaml = openapi
            .to_yaml()
            .map_err(|err| DocsRenderError(err.to_string()))?;
        Ok(Self {
            title: openapi.info.title.clone(),
            yaml,
        })
    }

    /// Documentation for the order service.
    ///
    /// # Errors
    ///
    /// Returns [`DocsRenderError`] when YAML serialisation fails.
    pub fn orders() -> Result<Self, DocsRenderError> {
        Self::render(&OrderApiDoc::openapi())
    }

    /// Documentation for the user service.
    ///
    /// # Errors
    ///
    /// Returns [`DocsRenderError`] when YAML serialisation fails.
    pub fn users() -> Result<Self, DocsRenderError> {
        Self::render(&UserApiDoc::openapi())
    }

    /// Rendered YAML document.
    pub fn yaml(&self) -> &str {
        &self.yaml
    }

    fn swagger_page(&self) -> String {
        format!(
            r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>{title} Docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>window.ui = SwaggerUIBundle({{url: '/swagger/openapi.yaml', dom_id: '#swagger-ui'}});</script>
</body>
</html>"#,
            title = self.title
        )
    }
}

/// Swagger UI page.
#[get("/swagger")]
pub async fn swagger_ui(docs: web::Data<ApiDocs>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(docs.swagger_page())
}

/// OpenAPI document as YAML.
#[get("/swagger/openapi.yaml")]
pub async fn openapi_yaml(docs: web::Data<ApiDocs>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/yaml")
        .body(docs.yaml().to_owned())
}

/// Register both documentation routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(swagger_ui).service(openapi_yaml);
}
