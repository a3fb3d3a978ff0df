use std::str::FromStr;

use thiserror::Error;

use super::state::Resource;

const MODULE_PREFIX: &str = "module.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The offending input is kept for logging, never shown in the message.
    #[error("filter must conform to pattern: type.name or module.module_name.type.name")]
    InvalidFormat { input: String },
}

/// Exact-match criteria narrowing which resources are selected.
///
/// A criterion that is `None` or blank acts as a wildcard for its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub resource_type: Option<String>,
    pub mode: Option<String>,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub module: Option<String>,
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn matches_field(expected: &Option<String>, actual: &str) -> bool {
    criterion(expected).is_none_or(|expected| expected == actual)
}

impl ResourceFilter {
    /// Builds a filter from `type.name` or `module.module_name.type.name`.
    ///
    /// Blank input yields the match-all filter.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let invalid = || FilterError::InvalidFormat {
            input: input.to_string(),
        };
        let fields: Vec<&str> = input.split('.').collect();

        let (module, fields) = if input.starts_with(MODULE_PREFIX) {
            if fields.len() != 4 {
                return Err(invalid());
            }
            if fields[1].trim().is_empty() {
                return Err(invalid());
            }
            (Some(format!("{}.{}", fields[0], fields[1])), &fields[2..])
        } else {
            if fields.len() != 2 {
                return Err(invalid());
            }
            (None, &fields[..])
        };

        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(invalid());
        }

        Ok(Self {
            resource_type: Some(fields[0].to_string()),
            name: Some(fields[1].to_string()),
            module,
            ..Self::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.resource_type,
            &self.mode,
            &self.name,
            &self.provider,
            &self.module,
        ]
        .into_iter()
        .all(|value| criterion(value).is_none())
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        if self.is_empty() {
            return true;
        }

        matches_field(&self.resource_type, &resource.resource_type)
            && matches_field(&self.mode, &resource.mode)
            && matches_field(&self.module, &resource.module)
            && matches_field(&self.provider, &resource.provider)
            && matches_field(&self.name, &resource.name)
    }
}

impl FromStr for ResourceFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
