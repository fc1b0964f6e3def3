//! Endpoint handlers and the route table that wires them.
//!
//! # Data Flow
//! ```text
//! AppConfig ([app] section)
//!     → RouteSettings (profile defaults + overrides)
//!     → build_router(settings, RuntimeInfo)
//!     → Router { read_root, read_item, health_check, [get_info] }
//! ```
//!
//! # Design Decisions
//! - Handlers are plain functions of their inputs; no globals, no I/O
//! - Environment-derived values arrive pre-resolved in `RuntimeInfo`
//! - Profile-specific fields are additive; the base fields never change

mod health;
mod info;
mod items;
mod root;

pub use health::health_check;
pub use info::get_info;
pub use items::{item_response, read_item, ITEM_PARAM};
pub use root::read_root;

use crate::config::schema::{AppConfig, AppProfile};
use crate::http::request::QueryParams;
use crate::lambda::RuntimeInfo;
use crate::routing::{PathParams, Route, RouteError, Router};

pub const STANDARD_GREETING: &str = "Hello from FastAPI!";
pub const LAMBDA_GREETING: &str = "Hello from FastAPI running on AWS Lambda!";
pub const DEFAULT_SERVICE_NAME: &str = "fastapi-lambda";

/// Pattern for the item lookup route.
pub const ITEM_PATTERN: &str = "/items/{item_id:int}";

/// What the route table exposes and which extra fields it adds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub greeting: String,
    /// Add `"status": "success"` to the greeting.
    pub root_status: bool,
    /// Value of the `source` field on item lookups.
    pub item_source: Option<String>,
    /// Value of the `service` field on health checks.
    pub health_service: Option<String>,
    /// Register `GET /info`.
    pub expose_info: bool,
}

impl RouteSettings {
    /// Defaults for a deployment profile.
    pub fn for_profile(profile: AppProfile) -> Self {
        match profile {
            AppProfile::Standard => Self {
                greeting: STANDARD_GREETING.to_string(),
                root_status: false,
                item_source: None,
                health_service: None,
                expose_info: false,
            },
            AppProfile::Lambda => Self {
                greeting: LAMBDA_GREETING.to_string(),
                root_status: true,
                item_source: Some("lambda".to_string()),
                health_service: Some(DEFAULT_SERVICE_NAME.to_string()),
                expose_info: true,
            },
        }
    }

    /// Profile defaults with the config overrides applied.
    pub fn from_config(app: &AppConfig) -> Self {
        let mut settings = Self::for_profile(app.profile);
        if let Some(greeting) = &app.greeting {
            settings.greeting = greeting.clone();
        }
        if settings.health_service.is_some() {
            settings.health_service = Some(app.service_name.clone());
        }
        if let Some(expose) = app.expose_info {
            settings.expose_info = expose;
        }
        settings
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self::for_profile(AppProfile::Standard)
    }
}

/// Declare the route table.
pub fn build_router(settings: &RouteSettings, info: RuntimeInfo) -> Result<Router, RouteError> {
    let greeting = settings.greeting.clone();
    let root_status = settings.root_status;
    let item_source = settings.item_source.clone();
    let health_service = settings.health_service.clone();

    let mut routes = vec![
        Route::get("read_root", "/", move |_: &PathParams, _: &QueryParams| {
            read_root(&greeting, root_status)
        })?,
        Route::get("read_item", ITEM_PATTERN, move |params: &PathParams, query: &QueryParams| {
            item_response(params, query, item_source.as_deref())
        })?,
        Route::get("health_check", "/health", move |_: &PathParams, _: &QueryParams| {
            health_check(health_service.as_deref())
        })?,
    ];

    if settings.expose_info {
        routes.push(Route::get(
            "get_info",
            "/info",
            move |_: &PathParams, _: &QueryParams| get_info(&info),
        )?);
    }

    tracing::debug!(routes = routes.len(), "Route table declared");
    Ok(Router::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    fn info() -> RuntimeInfo {
        RuntimeInfo {
            runtime: "AWS Lambda".into(),
            framework: "FastAPI".into(),
            region: "eu-west-1".into(),
            function_name: "items-fn".into(),
        }
    }

    fn get(router: &Router, target: &str) -> (StatusCode, Value) {
        let request = crate::http::request::Request::from_target(Method::GET, target);
        let response = router.handle(&request);
        (response.status(), Value::Object(response.body().clone()))
    }

    #[test]
    fn test_standard_table() {
        let router = build_router(&RouteSettings::default(), info()).unwrap();
        let names: Vec<_> = router.routes().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["read_root", "read_item", "health_check"]);

        assert_eq!(get(&router, "/"), (StatusCode::OK, json!({"message": STANDARD_GREETING})));
        assert_eq!(
            get(&router, "/items/42?q=hello"),
            (StatusCode::OK, json!({"item_id": 42, "q": "hello"}))
        );
        assert_eq!(get(&router, "/health"), (StatusCode::OK, json!({"status": "healthy"})));
        assert_eq!(get(&router, "/info").0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lambda_table() {
        let settings = RouteSettings::for_profile(AppProfile::Lambda);
        let router = build_router(&settings, info()).unwrap();

        assert_eq!(
            get(&router, "/"),
            (StatusCode::OK, json!({"message": LAMBDA_GREETING, "status": "success"}))
        );
        assert_eq!(
            get(&router, "/items/5"),
            (StatusCode::OK, json!({"item_id": 5, "q": null, "source": "lambda"}))
        );
        assert_eq!(
            get(&router, "/health"),
            (StatusCode::OK, json!({"status": "healthy", "service": "fastapi-lambda"}))
        );
        assert_eq!(
            get(&router, "/info"),
            (
                StatusCode::OK,
                json!({
                    "runtime": "AWS Lambda",
                    "framework": "FastAPI",
                    "region": "eu-west-1",
                    "function_name": "items-fn",
                })
            )
        );
    }

    #[test]
    fn test_config_overrides() {
        let app = AppConfig {
            profile: AppProfile::Lambda,
            greeting: Some("hey".into()),
            service_name: "orders".into(),
            expose_info: Some(false),
            ..AppConfig::default()
        };
        let settings = RouteSettings::from_config(&app);
        assert_eq!(settings.greeting, "hey");
        assert_eq!(settings.health_service.as_deref(), Some("orders"));
        assert!(!settings.expose_info);

        // The standard profile never grows a service field.
        let app = AppConfig {
            service_name: "orders".into(),
            ..AppConfig::default()
        };
        assert_eq!(RouteSettings::from_config(&app).health_service, None);
    }

    #[test]
    fn test_invalid_item_id() {
        let router = build_router(&RouteSettings::default(), info()).unwrap();
        let (status, body) = get(&router, "/items/abc");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["param"], "item_id");
        assert_eq!(body["input"], "abc");
    }

    #[test]
    fn test_item_id_past_i64() {
        let router = build_router(&RouteSettings::default(), info()).unwrap();
        let (status, body) = get(&router, "/items/9223372036854775808");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["item_id"], json!(9223372036854775808u64));

        let (status, body) = get(&router, "/items/18446744073709551616");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["input"], "18446744073709551616");
    }
}
