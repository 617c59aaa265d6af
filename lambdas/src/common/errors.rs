use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;
use lambda_http::Response;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Finished response for the caller, returned early instead of the regular result.
    #[error("request rejected with status {}", .0.status())]
    HttpError(Response<String>),

    #[error("crew table name is not configured")]
    MissingTableName,

    #[error("dynamodb query failed: {0}")]
    Query(#[from] Box<SdkError<QueryError>>),

    #[error("attribute `{0}` has a type that can't be converted to json")]
    UnsupportedAttribute(String),

    #[error("attribute `{attribute}` holds a number json can't represent: {value}")]
    InvalidNumber { attribute: String, value: String },

    #[error(transparent)]
    Http(#[from] lambda_http::http::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
