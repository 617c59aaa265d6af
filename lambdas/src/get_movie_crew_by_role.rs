use lambda_http::http::StatusCode;
use lambda_http::{
    run, service_fn, Error as LambdaError, Request as LambdaRequest, Response as LambdaResponse,
};
use serde::Serialize;
use tracing::{error, info};

mod common;
use crate::common::config::CrewTableConfig;
use crate::common::errors::Error;
use crate::common::store::DynamoCrewStore;
use crate::common::utils::{json_response, path_parameter, query_parameter};
use crate::common::{CrewQuery, CrewRecord, CrewStore};

const MISSING_PARAMETERS_ERROR: &str = "Missing or invalid movieId or role";
const NO_CREW_FOUND: &str = "No crew found for this movie in the specified role";
const NO_CREW_FOUND_WITH_NAME: &str =
    "No crew found for this movie in the specified role with the provided name filter";
const RETRIEVAL_FAILED_ERROR: &str = "Failed to retrieve crew information";

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct CrewBody {
    crew: Vec<CrewRecord>,
}

fn extract_query(request: &LambdaRequest) -> Result<CrewQuery, Error> {
    let movie_id = path_parameter(request, "movieId");
    let role = path_parameter(request, "role");

    match (movie_id, role) {
        (Some(movie_id), Some(role)) => Ok(CrewQuery {
            movie_id,
            role,
            name: query_parameter(request, "name"),
        }),
        _ => {
            let body = MessageBody {
                message: MISSING_PARAMETERS_ERROR,
            };
            Err(Error::HttpError(json_response(StatusCode::BAD_REQUEST, &body)?))
        }
    }
}

#[tracing::instrument(skip(request, store))]
async fn process_request(
    request: LambdaRequest,
    store: &dyn CrewStore,
) -> Result<LambdaResponse<String>, Error> {
    info!("Event: {:?}", request);
    let query = extract_query(&request)?;

    info!("Querying crew for movie {} with role prefix {}", query.movie_id, query.role);
    let crew = store.query_crew(&query).await?;

    if crew.is_empty() {
        let message = match query.name {
            Some(_) => NO_CREW_FOUND_WITH_NAME,
            None => NO_CREW_FOUND,
        };
        return json_response(StatusCode::NOT_FOUND, &MessageBody { message });
    }

    info!("Found {} crew records", crew.len());
    json_response(StatusCode::OK, &CrewBody { crew })
}

/// Turns every outcome into a response; only a failure to build the 500 itself escapes.
async fn handle_request(
    request: LambdaRequest,
    store: &dyn CrewStore,
) -> Result<LambdaResponse<String>, LambdaError> {
    match process_request(request, store).await {
        Ok(val) => Ok(val),
        Err(Error::HttpError(val)) => Ok(val),
        Err(err) => {
            error!("Failed to retrieve crew: {:?}", err);
            let body = ErrorBody {
                error: RETRIEVAL_FAILED_ERROR,
            };
            Ok(json_response(StatusCode::INTERNAL_SERVER_ERROR, &body)?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = CrewTableConfig::from_env();
    let aws_config = config.load_aws_config().await;
    let store = DynamoCrewStore::new(config.dynamo_client(&aws_config), &config);
    let store = &store;

    run(service_fn(move |request: LambdaRequest| async move {
        handle_request(request, store).await
    }))
    .await
}
