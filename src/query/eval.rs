use bson::Bson;
use std::cmp::Ordering;

use crate::record::Record;

use super::types::{MAX_IN_SET, MAX_PROJECTION_FIELDS, Order};

pub(crate) fn is_in_set(v: &Bson, set: &[Bson]) -> bool {
    set.iter().take(MAX_IN_SET).any(|x| x == v)
}

/// Three-way comparison for one sort key. A record missing the field ties
/// with anything; the stable sort then keeps its relative position.
pub(crate) fn compare_records(a: &Record, b: &Record, field: &str, order: Order) -> Ordering {
    let ord = match (a.get(field), b.get(field)) {
        (Some(x), Some(y)) => compare_bson(x, y),
        _ => Ordering::Equal,
    };
    match order {
        Order::Asc => ord,
        Order::Desc => ord.reverse(),
    }
}

pub fn compare_bson(a: &Bson, b: &Bson) -> Ordering {
    use bson::Bson as T;
    fn is_num(x: &T) -> bool {
        matches!(x, T::Int32(_) | T::Int64(_) | T::Double(_))
    }
    fn as_f64_num(x: &T) -> f64 {
        match x {
            T::Int32(i) => f64::from(*i),
            T::Int64(i) => *i as f64,
            T::Double(f) => *f,
            _ => f64::NAN,
        }
    }
    if is_num(a) && is_num(b) {
        return as_f64_num(a).total_cmp(&as_f64_num(b));
    }
    match (a, b) {
        (T::String(x), T::String(y)) => x.cmp(y),
        (T::Boolean(x), T::Boolean(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(v: &Bson) -> u8 {
    use bson::Bson as T;
    match v {
        T::Null => 0,
        T::Boolean(_) => 1,
        T::Int32(_) => 2,
        T::Int64(_) => 3,
        T::Double(_) => 4,
        T::String(_) => 5,
        _ => 255,
    }
}

/// Builds one output row: the selected fields, in selection order, copied
/// into a fresh record. Fields missing on the source record are dropped.
pub(crate) fn project_fields(rec: &Record, fields: &[String]) -> Record {
    let mut out = bson::Document::new();
    for f in fields.iter().take(MAX_PROJECTION_FIELDS) {
        if let Some(v) = rec.get(f) {
            out.insert(f.clone(), v.clone());
        }
    }
    Record::new(out)
}

/// Text form handed to `format` callbacks.
pub(crate) fn value_text(v: &Bson) -> String {
    match v {
        Bson::String(s) => s.clone(),
        Bson::Int32(i) => i.to_string(),
        Bson::Int64(i) => i.to_string(),
        Bson::Double(d) => d.to_string(),
        Bson::Boolean(b) => b.to_string(),
        Bson::Null => "null".to_string(),
        other => other.to_string(),
    }
}
