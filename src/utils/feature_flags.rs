//! Runtime feature flags registry.
//!
//! Provides a simple global registry of feature switches that can be toggled
//! at runtime. These are independent of Cargo compile-time features.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Clone, Debug)]
pub struct FeatureFlag {
    pub name: String,
    pub enabled: bool,
    pub description: String,
}

static FLAGS: LazyLock<RwLock<HashMap<String, FeatureFlag>>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    // Register default flags here.
    map.insert(
        "combinators".to_string(),
        FeatureFlag {
            name: "combinators".to_string(),
            enabled: true,
            description: "Union/intersection pipeline combinators (or/and).".to_string(),
        },
    );
    map.insert(
        "json-pipelines".to_string(),
        FeatureFlag {
            name: "json-pipelines".to_string(),
            enabled: true,
            description: "Parsing pipelines from their JSON form.".to_string(),
        },
    );
    RwLock::new(map)
});

#[must_use]
pub fn list() -> Vec<FeatureFlag> {
    let mut flags: Vec<FeatureFlag> = FLAGS.read().values().cloned().collect();
    flags.sort_by(|a, b| a.name.cmp(&b.name));
    flags
}

#[must_use]
pub fn get(name: &str) -> Option<FeatureFlag> {
    FLAGS.read().get(name).cloned()
}

/// Returns false if the flag is not registered.
pub fn set(name: &str, enabled: bool) -> bool {
    match FLAGS.write().get_mut(name) {
        Some(flag) => {
            flag.enabled = enabled;
            true
        }
        None => false,
    }
}

/// Initialize runtime feature flags from environment variables of the form
/// `QUERYLITE_FEATURE_<NAME>=0|1` (dashes become underscores).
pub fn init_from_env() {
    for flag in list() {
        let key = format!("QUERYLITE_FEATURE_{}", flag.name.to_ascii_uppercase().replace('-', "_"));
        if let Ok(v) = std::env::var(key) {
            let on = matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
            let _ = set(&flag.name, on);
        }
    }
}
