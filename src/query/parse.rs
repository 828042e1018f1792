use bson::Bson;
use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

use super::types::{MAX_IN_SET, MAX_LIMIT, Op, Order};

// Serde-facing structures for safe JSON parsing of pipelines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpSerde {
    And {
        #[serde(rename = "$and")]
        and: Vec<OpSerde>,
    },
    Or {
        #[serde(rename = "$or")]
        or: Vec<OpSerde>,
    },
    Select {
        #[serde(rename = "$select")]
        select: Vec<String>,
    },
    FilterIn {
        field: String,
        #[serde(rename = "$in")]
        in_vals: Vec<Bson>,
    },
    SortBy {
        field: String,
        #[serde(rename = "$sortBy")]
        order: String,
    },
    Limit {
        #[serde(rename = "$limit")]
        limit: usize,
    },
    // `format` takes a callback and has no JSON form; reject it explicitly.
    Format {
        field: String,
        #[serde(rename = "$format")]
        format: String,
    },
}

impl TryFrom<OpSerde> for Op {
    type Error = QueryError;
    fn try_from(os: OpSerde) -> Result<Self, Self::Error> {
        use OpSerde as OS;
        Ok(match os {
            OS::And { and } => {
                Self::And(and.into_iter().map(Self::try_from).collect::<Result<_, _>>()?)
            }
            OS::Or { or } => {
                Self::Or(or.into_iter().map(Self::try_from).collect::<Result<_, _>>()?)
            }
            OS::Select { select } => Self::Select(select),
            OS::FilterIn { field, in_vals } => {
                Self::FilterIn { field, values: in_vals.into_iter().take(MAX_IN_SET).collect() }
            }
            OS::SortBy { field, order } => {
                Self::SortBy { field, order: Order::from(order.as_str()) }
            }
            OS::Limit { limit } => Self::Limit(limit.min(MAX_LIMIT)),
            OS::Format { .. } => {
                return Err(QueryError::UnsupportedOperation(
                    "$format requires a formatter callback".into(),
                ));
            }
        })
    }
}

/// # Errors
/// Returns an error if the JSON string cannot be parsed into a pipeline.
pub fn parse_pipeline_json(json: &str) -> Result<Vec<Op>, QueryError> {
    let ops: Vec<OpSerde> = serde_json::from_str(json)?;
    ops.into_iter().map(Op::try_from).collect()
}
