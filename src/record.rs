use bson::{Bson, Document as BsonDocument};
use serde::{Deserialize, Serialize};

/// One entity of a queried collection: a flat field-to-value mapping.
///
/// Equality is structural over the full field set, which is also what the
/// `or` combinator uses for duplicate suppression.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Record(pub BsonDocument);

impl Record {
    #[must_use]
    pub fn new(data: BsonDocument) -> Self {
        Self(data)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Bson> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: Bson) {
        self.0.insert(field.to_string(), value);
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl From<BsonDocument> for Record {
    fn from(data: BsonDocument) -> Self {
        Self(data)
    }
}

/// Field-level defensive copy of a caller-owned collection. The engine never
/// holds aliases into the caller's records.
#[must_use]
pub fn copy_collection(collection: &[Record]) -> Vec<Record> {
    collection.to_vec()
}
