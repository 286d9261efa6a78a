//! Assemble document use case.

use oapub_domain::metadata::BASE_URL_KEY;
use oapub_domain::{Collection, Environment, OpenApiDocument, Server};
use serde_json::Value;

use crate::error::PublishResult;
use crate::metadata::split_metadata;
use crate::traversal::traverse;
use crate::validation::{
    InfoSectionValidator, SemverNormalizer, VersionNormalizer, is_valid_server_url,
};

/// Description given to the collection-level server.
pub const DEFAULT_SERVER_DESCRIPTION: &str = "Default";

/// Use case for building an OpenAPI document from a collection.
#[derive(Debug, Clone, Default)]
pub struct AssembleDocument<N = SemverNormalizer> {
    validator: InfoSectionValidator<N>,
}

impl AssembleDocument<SemverNormalizer> {
    /// Creates a new `AssembleDocument` use case with semver normalization.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: InfoSectionValidator::new(),
        }
    }
}

impl<N: VersionNormalizer> AssembleDocument<N> {
    /// Creates the use case around a specific metadata validator.
    #[must_use]
    pub const fn with_validator(validator: InfoSectionValidator<N>) -> Self {
        Self { validator }
    }

    /// Builds the document.
    ///
    /// Returns `Ok(None)` when the collection carries no `oa__*` metadata.
    ///
    /// # Errors
    /// - Returns a validation error if the metadata breaks a rule
    /// - Returns an invalid-URL error if a request URL cannot be parsed
    pub fn execute(&self, collection: &Collection) -> PublishResult<Option<OpenApiDocument>> {
        let metadata = split_metadata(&collection.collection_variables);

        let Some(openapi) = metadata.openapi else {
            tracing::debug!(collection = %collection.name, "no OpenAPI metadata configured");
            return Ok(None);
        };

        let validated = self.validator.validate(&openapi)?;
        let mut document = OpenApiDocument::new(validated.info);
        document.external_docs = validated.external_docs;
        document.servers = collect_servers(metadata.base_url.as_ref(), &collection.environments);

        let traversal = traverse(&collection.items)?;
        document.paths = traversal.paths;
        document.tags = traversal.tags;

        Ok(Some(document))
    }
}

fn collect_servers(base_url: Option<&Value>, environments: &[Environment]) -> Vec<Server> {
    let mut servers = Vec::new();

    match base_url {
        Some(Value::String(url)) if is_valid_server_url(url) => {
            servers.push(Server::new(url.as_str(), DEFAULT_SERVER_DESCRIPTION));
        }
        Some(other) => {
            tracing::debug!(base_url = %other, "collection base_url is not a usable server");
        }
        None => {}
    }

    for environment in environments {
        let Some(variable) = environment.get_variable(BASE_URL_KEY) else {
            continue;
        };
        if is_valid_server_url(&variable.value) {
            servers.push(Server::new(variable.value.as_str(), environment.name.as_str()));
        } else {
            tracing::debug!(
                environment = %environment.name,
                base_url = %variable.value,
                "environment base_url is not a usable server"
            );
        }
    }

    servers
}
