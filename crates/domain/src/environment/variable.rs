//! Environment variable types

use serde::{Deserialize, Serialize};

/// A single named variable of an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name
    pub name: String,
    /// Variable value
    #[serde(default)]
    pub value: String,
}

impl EnvironmentVariable {
    /// Creates a new variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An environment containing an ordered list of variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment name (e.g., "Development", "Production")
    pub name: String,
    /// Variables in declaration order
    #[serde(default)]
    pub variables: Vec<EnvironmentVariable>,
}

impl Environment {
    /// Creates a new environment with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Adds a variable, builder style.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push(EnvironmentVariable::new(name, value));
        self
    }

    /// Gets the first variable with the given name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&EnvironmentVariable> {
        self.variables.iter().find(|v| v.name == name)
    }
}
