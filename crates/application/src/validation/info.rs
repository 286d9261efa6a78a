//! Validation of the `oa` metadata sub-tree into `info` and `externalDocs`.

use oapub_domain::{Contact, ExternalDocs, Info, License};
use serde_json::{Map, Value};

use super::error::{ValidationError, Violation};
use super::rules::{is_absolute_url, is_email};
use super::version::{SemverNormalizer, VersionNormalizer};

const KNOWN_KEYS: &[&str] = &[
    "title",
    "description",
    "termsOfService",
    "contact",
    "license",
    "externalDocs",
    "version",
];

/// A validated metadata record, split into its two document sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInfo {
    /// The `info` section
    pub info: Info,
    /// The `externalDocs` section, when configured
    pub external_docs: Option<ExternalDocs>,
}

/// Validates and normalizes the OpenAPI metadata record.
///
/// Rules, checked in field order with the first violation returned:
/// - `title` is required
/// - `license.name` is required when `license` is present
/// - URL fields must be absolute URLs when non-empty
/// - `contact.email` must be an email address when non-empty
/// - `version` goes through the [`VersionNormalizer`] and is nulled, never
///   rejected, when the normalizer refuses it
#[derive(Debug, Clone, Default)]
pub struct InfoSectionValidator<N = SemverNormalizer> {
    version: N,
}

impl InfoSectionValidator<SemverNormalizer> {
    /// Creates a validator using [`SemverNormalizer`] for `version`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: SemverNormalizer,
        }
    }
}

impl<N: VersionNormalizer> InfoSectionValidator<N> {
    /// Creates a validator with a custom version normalizer.
    #[must_use]
    pub const fn with_normalizer(version: N) -> Self {
        Self { version }
    }

    /// Validates the `oa` sub-tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, section: &Value) -> Result<ValidatedInfo, ValidationError> {
        let Value::Object(map) = section else {
            return Err(ValidationError::new("info", Violation::NotAnObject));
        };

        for key in map.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            tracing::debug!(key = %key, "unknown OpenAPI metadata field ignored");
        }

        let fields = Fields::root(map);
        let title = fields.required("title")?;
        let description = fields.string("description")?;
        let terms_of_service = fields.url("termsOfService")?;

        let contact = fields
            .object("contact")?
            .map(|c| -> Result<Contact, ValidationError> {
                Ok(Contact {
                    name: c.string("name")?,
                    url: c.url("url")?,
                    email: c.email("email")?,
                })
            })
            .transpose()?;

        let license = fields
            .object("license")?
            .map(|l| -> Result<License, ValidationError> {
                Ok(License {
                    name: l.required("name")?,
                    url: l.url("url")?,
                })
            })
            .transpose()?;

        let external_docs = fields
            .object("externalDocs")?
            .map(|d| -> Result<ExternalDocs, ValidationError> {
                Ok(ExternalDocs {
                    description: d.string("description")?,
                    url: d.url("url")?,
                })
            })
            .transpose()?;

        let version = fields
            .string("version")?
            .and_then(|v| self.version.normalize(&v));

        Ok(ValidatedInfo {
            info: Info {
                title,
                description,
                terms_of_service,
                contact,
                license,
                version,
            },
            external_docs,
        })
    }
}

/// Typed accessors over one object of the metadata tree.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    prefix: Option<&'static str>,
}

impl<'a> Fields<'a> {
    const fn root(map: &'a Map<String, Value>) -> Self {
        Self { map, prefix: None }
    }

    fn path(&self, key: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_string(),
        }
    }

    /// Scalar cast to a string; missing and null are `None`.
    fn string(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(Value::Array(_) | Value::Object(_)) => {
                Err(ValidationError::new(self.path(key), Violation::NotAString))
            }
        }
    }

    fn required(&self, key: &str) -> Result<String, ValidationError> {
        match self.string(key)? {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ValidationError::new(self.path(key), Violation::Required)),
        }
    }

    fn url(&self, key: &str) -> Result<Option<String>, ValidationError> {
        let value = self.string(key)?;
        match value.as_deref() {
            Some(url) if !url.is_empty() && !is_absolute_url(url) => {
                Err(ValidationError::new(self.path(key), Violation::InvalidUrl))
            }
            _ => Ok(value),
        }
    }

    fn email(&self, key: &str) -> Result<Option<String>, ValidationError> {
        let value = self.string(key)?;
        match value.as_deref() {
            Some(email) if !email.is_empty() && !is_email(email) => {
                Err(ValidationError::new(self.path(key), Violation::InvalidEmail))
            }
            _ => Ok(value),
        }
    }

    fn object(&self, key: &'static str) -> Result<Option<Self>, ValidationError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Self {
                map,
                prefix: Some(key),
            })),
            Some(_) => Err(ValidationError::new(self.path(key), Violation::NotAnObject)),
        }
    }
}
