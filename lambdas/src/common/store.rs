use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};
use tracing::info;

use crate::common::attributes::item_to_json;
use crate::common::config::CrewTableConfig;
use crate::common::errors::Error;

/// A stored crew item with all of its attributes.
pub type CrewRecord = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewQuery {
    pub movie_id: String,
    /// Matched as a prefix of the stored role.
    pub role: String,
    /// Post-filter on the names attribute, applied after the key range is read.
    pub name: Option<String>,
}

/// Range lookup of crew items for one movie.
#[async_trait]
pub trait CrewStore: Send + Sync {
    /// Returns the matching items in sort key order, or an empty list.
    async fn query_crew(&self, query: &CrewQuery) -> Result<Vec<CrewRecord>, Error>;
}

pub struct DynamoCrewStore {
    client: aws_sdk_dynamodb::Client,
    table_name: Option<String>,
    role_attribute: String,
    names_attribute: String,
}

impl DynamoCrewStore {
    pub fn new(client: aws_sdk_dynamodb::Client, config: &CrewTableConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
            role_attribute: config.role_attribute.clone(),
            names_attribute: config.names_attribute.clone(),
        }
    }
}

#[async_trait]
impl CrewStore for DynamoCrewStore {
    async fn query_crew(&self, query: &CrewQuery) -> Result<Vec<CrewRecord>, Error> {
        let table_name = self.table_name.as_deref().ok_or(Error::MissingTableName)?;

        // `role` and `name` are reserved words, so every attribute goes through a placeholder.
        let mut request = self
            .client
            .query()
            .table_name(table_name)
            .key_condition_expression("#movieId = :movieId AND begins_with(#role, :role)")
            .expression_attribute_names("#movieId", "movieId")
            .expression_attribute_names("#role", &self.role_attribute)
            .expression_attribute_values(":movieId", AttributeValue::S(query.movie_id.clone()))
            .expression_attribute_values(":role", AttributeValue::S(query.role.clone()));

        if let Some(name) = &query.name {
            request = request
                .filter_expression("contains(#names, :name)")
                .expression_attribute_names("#names", &self.names_attribute)
                .expression_attribute_values(":name", AttributeValue::S(name.clone()));
        }

        let output = request.send().await.map_err(Box::new)?;
        info!(
            "Query returned {} of {} scanned items",
            output.count, output.scanned_count
        );

        output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(item_to_json)
            .collect()
    }
}
