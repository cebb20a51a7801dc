use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum CatalogError {
    #[error("unknown destination `{0}`")]
    UnknownDestination(String),
    #[error("unknown service topic `{0}`")]
    UnknownServiceTopic(String),
}
