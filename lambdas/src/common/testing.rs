//! In-process `CrewStore` doubles for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::common::config::{NAMES_ATTRIBUTE_DEFAULT, ROLE_ATTRIBUTE_DEFAULT};
use crate::common::errors::Error;
use crate::common::store::{CrewQuery, CrewRecord, CrewStore};

/// Holds items for a single table and answers queries the way dynamodb does:
/// exact partition key, `begins_with` on the role, `contains` on the names.
pub struct InMemoryCrewStore {
    items: Vec<CrewRecord>,
    calls: AtomicUsize,
}

impl InMemoryCrewStore {
    pub fn new(items: Vec<Value>) -> Self {
        let mut items: Vec<CrewRecord> = items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => map,
                other => panic!("crew item must be an object, got {other}"),
            })
            .collect();
        items.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));

        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn sort_key(item: &CrewRecord) -> &str {
    item.get(ROLE_ATTRIBUTE_DEFAULT)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Key equality is typed: only string keys can match the string `movieId` the query sends.
fn partition_key(item: &CrewRecord) -> Option<&str> {
    item.get("movieId").and_then(Value::as_str)
}

fn names_contain(item: &CrewRecord, name: &str) -> bool {
    match item.get(NAMES_ATTRIBUTE_DEFAULT) {
        Some(Value::String(names)) => names.contains(name),
        Some(Value::Array(names)) => names.iter().any(|val| val.as_str() == Some(name)),
        _ => false,
    }
}

#[async_trait]
impl CrewStore for InMemoryCrewStore {
    async fn query_crew(&self, query: &CrewQuery) -> Result<Vec<CrewRecord>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .items
            .iter()
            .filter(|item| partition_key(item) == Some(query.movie_id.as_str()))
            .filter(|item| sort_key(item).starts_with(&query.role))
            .filter(|item| match &query.name {
                Some(name) => names_contain(item, name),
                None => true,
            })
            .cloned()
            .collect())
    }
}

/// Fails every query, like a store that is unreachable or denies access.
pub struct FailingCrewStore;

#[async_trait]
impl CrewStore for FailingCrewStore {
    async fn query_crew(&self, _query: &CrewQuery) -> Result<Vec<CrewRecord>, Error> {
        Err(Error::MissingTableName)
    }
}
