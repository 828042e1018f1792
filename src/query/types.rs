use bson::Bson;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// Safety limits to prevent resource abuse
pub(crate) const MAX_IN_SET: usize = 1000;
pub(crate) const MAX_PROJECTION_FIELDS: usize = 64;
pub(crate) const MAX_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl From<&str> for Order {
    /// `"asc"` sorts ascending; any other value sorts descending.
    fn from(s: &str) -> Self {
        if s == "asc" { Self::Asc } else { Self::Desc }
    }
}

/// Caller-supplied reformat callback. Receives the text form of the current
/// field value; its return value overwrites the field.
#[derive(Clone)]
pub struct Formatter(Arc<dyn Fn(&str) -> Bson + Send + Sync>);

impl Formatter {
    pub fn new(f: impl Fn(&str) -> Bson + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> Bson {
        (self.0)(text)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// One pipeline operation. The engine matches exhaustively over this, so an
/// unknown operation is unrepresentable in the typed API.
#[derive(Debug, Clone)]
pub enum Op {
    Select(Vec<String>),
    FilterIn { field: String, values: Vec<Bson> },
    SortBy { field: String, order: Order },
    Format { field: String, formatter: Formatter },
    Limit(usize),
    Or(Vec<Op>),
    And(Vec<Op>),
}
