use bson::Bson;

use super::types::{Formatter, MAX_LIMIT, Op, Order};

// Builder notices are advisory (log-only) and not part of the contract.

/// Field projection. Only fields present on the first working-set record are
/// kept; repeated `select` calls in one pipeline are cumulative and
/// deduplicating.
#[must_use]
pub fn select<I, S>(fields: I) -> Op
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    log::debug!("select: {fields:?}");
    Op::Select(fields)
}

/// Keeps only records whose `field` value equals any element of `values`.
#[must_use]
pub fn filter_in<I, V>(field: &str, values: I) -> Op
where
    I: IntoIterator<Item = V>,
    V: Into<Bson>,
{
    let values: Vec<Bson> = values.into_iter().map(Into::into).collect();
    log::debug!("filter_in: {field} in {values:?}");
    Op::FilterIn { field: field.to_string(), values }
}

/// Stable in-place sort of the working set by `field`.
#[must_use]
pub fn sort_by(field: &str, order: impl Into<Order>) -> Op {
    let order = order.into();
    log::debug!("sort_by: {field} {order:?}");
    Op::SortBy { field: field.to_string(), order }
}

/// Rewrites `field` on every working-set record through `formatter`, which
/// receives the text form of the current value.
#[must_use]
pub fn format(field: &str, formatter: impl Fn(&str) -> Bson + Send + Sync + 'static) -> Op {
    log::debug!("format: {field}");
    Op::Format { field: field.to_string(), formatter: Formatter::new(formatter) }
}

/// Caps the number of records emitted by the final projection. The working
/// set itself is not truncated; later operations still see all records.
#[must_use]
pub fn limit(count: usize) -> Op {
    log::debug!("limit: {count}");
    Op::Limit(count.min(MAX_LIMIT))
}

/// Set union of the inner operations' results, evaluated against the current
/// working set. Duplicates are suppressed by whole-record equality.
#[must_use]
pub fn or(ops: Vec<Op>) -> Op {
    log::debug!("or: {} inner ops", ops.len());
    Op::Or(ops)
}

/// Intersection by narrowing: resets the working set to the baseline copy,
/// then applies each inner operation to the previous one's output.
#[must_use]
pub fn and(ops: Vec<Op>) -> Op {
    log::debug!("and: {} inner ops", ops.len());
    Op::And(ops)
}
