use aws_config::{BehaviorVersion, Region, SdkConfig};

pub const ROLE_ATTRIBUTE_DEFAULT: &str = "role";
pub const NAMES_ATTRIBUTE_DEFAULT: &str = "names";

/// Settings for the crew table, read once when the function starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewTableConfig {
    pub table_name: Option<String>,
    pub role_attribute: String,
    pub names_attribute: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl CrewTableConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `CREW_TABLE_NAME` wins over the older `TABLE_NAME`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        Self {
            table_name: get("CREW_TABLE_NAME").or_else(|| get("TABLE_NAME")),
            role_attribute: get("CREW_ROLE_ATTRIBUTE").unwrap_or(ROLE_ATTRIBUTE_DEFAULT.into()),
            names_attribute: get("CREW_NAMES_ATTRIBUTE").unwrap_or(NAMES_ATTRIBUTE_DEFAULT.into()),
            region: get("REGION"),
            endpoint_url: get("DYNAMODB_ENDPOINT"),
        }
    }

    pub async fn load_aws_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }

        loader.load().await
    }

    /// Builds the dynamodb client, pointed at a local endpoint when one is configured.
    pub fn dynamo_client(&self, sdk_config: &SdkConfig) -> aws_sdk_dynamodb::Client {
        match &self.endpoint_url {
            Some(url) => {
                let config = aws_sdk_dynamodb::config::Builder::from(sdk_config)
                    .endpoint_url(url)
                    .build();
                aws_sdk_dynamodb::Client::from_conf(config)
            }
            None => aws_sdk_dynamodb::Client::new(sdk_config),
        }
    }
}
