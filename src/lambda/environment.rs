//! Runtime environment resolution.
//!
//! # Responsibilities
//! - Read the region and function name the Lambda runtime exports
//! - Substitute `"unknown"` for anything missing
//!
//! # Design Decisions
//! - Resolved once at startup and handed to the route table as plain strings
//! - Lookup is injectable so resolution is testable without touching the
//!   process environment

pub const REGION_VAR: &str = "AWS_REGION";
pub const FUNCTION_NAME_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";
pub const UNKNOWN: &str = "unknown";

/// Values reported by `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub runtime: String,
    pub framework: String,
    pub region: String,
    pub function_name: String,
}

impl RuntimeInfo {
    /// Resolve using an arbitrary variable lookup.
    pub fn from_lookup<F>(runtime: impl Into<String>, framework: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        Self {
            runtime: runtime.into(),
            framework: framework.into(),
            region: resolve(REGION_VAR),
            function_name: resolve(FUNCTION_NAME_VAR),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env(runtime: impl Into<String>, framework: impl Into<String>) -> Self {
        let info = Self::from_lookup(runtime, framework, |key| std::env::var(key).ok());
        tracing::debug!(
            region = %info.region,
            function_name = %info.function_name,
            "Runtime environment resolved"
        );
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_resolves_present_values() {
        let vars = HashMap::from([
            (REGION_VAR, "us-east-1"),
            (FUNCTION_NAME_VAR, "items"),
        ]);
        let info = RuntimeInfo::from_lookup("AWS Lambda", "FastAPI", |k| {
            vars.get(k).map(|v| v.to_string())
        });
        assert_eq!(info.region, "us-east-1");
        assert_eq!(info.function_name, "items");
        assert_eq!(info.runtime, "AWS Lambda");
        assert_eq!(info.framework, "FastAPI");
    }

    #[test]
    fn test_missing_or_empty_values_are_unknown() {
        let info = RuntimeInfo::from_lookup("r", "f", |k| {
            (k == REGION_VAR).then(String::new)
        });
        assert_eq!(info.region, UNKNOWN);
        assert_eq!(info.function_name, UNKNOWN);
    }
}
