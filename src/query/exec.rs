use crate::record::{Record, copy_collection};

use super::eval::{compare_records, is_in_set, project_fields, value_text};
use super::types::{MAX_LIMIT, Op};

/// Per-call pipeline state. A fresh context is built for every top-level
/// `query` call, so calls are independent and safe to interleave.
#[derive(Debug, Clone)]
struct QueryContext {
    working: Vec<Record>,
    baseline: Vec<Record>,
    selected: Vec<String>,
    cap: usize,
}

impl QueryContext {
    fn new(collection: &[Record]) -> Self {
        let working = copy_collection(collection);
        let cap = working.len();
        Self { working, baseline: copy_collection(collection), selected: Vec::new(), cap }
    }
}

/// Runs a pipeline of operations over `collection` and returns the projected
/// result.
///
/// With no operations this returns a field-level copy of the collection,
/// unfiltered and unprojected. Otherwise operations are applied in the order
/// given, then up to the recorded cap of records are projected over the
/// selected fields in selection order. An empty selection projects empty
/// records, one per emitted row.
#[must_use]
pub fn query(collection: &[Record], ops: Vec<Op>) -> Vec<Record> {
    if ops.is_empty() {
        return copy_collection(collection);
    }
    let mut ctx = QueryContext::new(collection);
    for op in ops {
        apply(&mut ctx, op);
    }
    let cap = ctx.cap.min(ctx.working.len());
    ctx.working.iter().take(cap).map(|rec| project_fields(rec, &ctx.selected)).collect()
}

fn apply(ctx: &mut QueryContext, op: Op) {
    match op {
        Op::Select(fields) => {
            // Existence probe uses the first working-set record only; an
            // empty working set selects nothing.
            let Some(first) = ctx.working.first() else { return };
            for field in fields {
                if first.contains(&field) && !ctx.selected.contains(&field) {
                    ctx.selected.push(field);
                }
            }
        }
        Op::FilterIn { field, values } => {
            ctx.working.retain(|rec| rec.get(&field).is_some_and(|v| is_in_set(v, &values)));
        }
        Op::SortBy { field, order } => {
            ctx.working.sort_by(|a, b| compare_records(a, b, &field, order));
        }
        Op::Format { field, formatter } => {
            for rec in &mut ctx.working {
                // Records lacking the field are left untouched.
                let text = match rec.get(&field) {
                    Some(v) => value_text(v),
                    None => continue,
                };
                rec.set(&field, formatter.apply(&text));
            }
        }
        Op::Limit(count) => {
            ctx.cap = count.min(MAX_LIMIT);
        }
        Op::Or(ops) => {
            // Every branch sees the same snapshot of the working set; novel
            // matches are appended in branch order.
            let snapshot = ctx.working.clone();
            let mut merged: Vec<Record> = Vec::new();
            for op in ops {
                let mut branch = ctx.clone();
                branch.working = snapshot.clone();
                apply(&mut branch, op);
                for rec in branch.working {
                    if !merged.contains(&rec) {
                        merged.push(rec);
                    }
                }
            }
            ctx.working = merged;
        }
        Op::And(ops) => {
            // Narrowing restarts from the baseline; each inner operation
            // filters the previous one's output.
            ctx.working = ctx.baseline.clone();
            for op in ops {
                apply(ctx, op);
            }
        }
    }
}
