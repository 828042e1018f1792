pub mod errors;
pub mod logger;
pub mod query;
pub mod record;
pub mod utils;

pub use errors::QueryError;
pub use query::{
    Formatter, Op, Order, and, filter_in, format, limit, or, parse_pipeline_json, query, select,
    sort_by,
};
pub use record::Record;

/// Returns whether the union/intersection combinators (`or`/`and`) are
/// enabled.
#[must_use]
pub fn combinators_enabled() -> bool {
    utils::feature_flags::get("combinators").is_some_and(|f| f.enabled)
}

/// Enables a runtime feature flag by name.
///
/// # Errors
/// Returns an error if the flag is not registered.
pub fn feature_enable(name: &str) -> Result<(), QueryError> {
    if utils::feature_flags::set(name, true) {
        Ok(())
    } else {
        Err(QueryError::UnknownFeatureFlag(name.to_string()))
    }
}

/// Disables a runtime feature flag by name.
///
/// # Errors
/// Returns an error if the flag is not registered.
pub fn feature_disable(name: &str) -> Result<(), QueryError> {
    if utils::feature_flags::set(name, false) {
        Ok(())
    } else {
        Err(QueryError::UnknownFeatureFlag(name.to_string()))
    }
}

/// Initializes the library.
///
/// Sets up the logger and reads runtime feature flags from the environment.
/// Calling it is optional; `query` itself needs no global setup.
///
/// # Errors
/// Returns an error if the logger fails to initialize.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    utils::feature_flags::init_from_env();
    Ok(())
}
