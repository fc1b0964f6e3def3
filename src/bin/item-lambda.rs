//! Serverless entrypoint: serves the route table through the Lambda runtime.
//!
//! Configuration comes from the TOML file named by `ITEM_SERVICE_CONFIG`,
//! if set; otherwise the lambda profile defaults apply.

use std::path::PathBuf;
use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};

use item_service::config::{load_config, AppProfile, ServiceConfig};
use item_service::handlers::{build_router, RouteSettings};
use item_service::lambda::{self, RuntimeInfo};
use item_service::observability::logging;

/// Environment variable naming the configuration file.
const CONFIG_VAR: &str = "ITEM_SERVICE_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = match std::env::var_os(CONFIG_VAR) {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => {
            let mut config = ServiceConfig::default();
            config.app.profile = AppProfile::Lambda;
            config
        }
    };

    logging::init_logging(&config.observability).map_err(|e| e.to_string())?;

    let info = RuntimeInfo::from_env(
        config.app.runtime_label.clone(),
        config.app.framework_label.clone(),
    );
    tracing::info!(
        region = %info.region,
        function_name = %info.function_name,
        profile = ?config.app.profile,
        "item-lambda v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let routes = Arc::new(build_router(&RouteSettings::from_config(&config.app), info)?);

    run(service_fn(move |event: Request| {
        let routes = Arc::clone(&routes);
        async move { Ok::<_, Error>(lambda::handle_event(&routes, &event)) }
    }))
    .await
}
