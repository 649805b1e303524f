use crate::location::{DEFAULT_SCHEME_PREFIX, LocationOptions};
use crate::pattern::DEFAULT_PARAM_MARKER;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a location compatible with several routes picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchOrder {
    /// Most fixed segments first, then earliest registration.
    #[default]
    SpecificFirst,
    /// Earliest registration only.
    DefinedFirst,
}

/// When `RouterEvent::Ready` is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReadyPolicy {
    /// After every successful registration and on `Router::initialize`.
    #[default]
    OnRegister,
    /// Only on `Router::initialize`.
    OnInitialize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    pub scheme_prefix: String,
    pub param_marker: char,
    pub match_order: MatchOrder,
    pub ready_policy: ReadyPolicy,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            scheme_prefix: DEFAULT_SCHEME_PREFIX.to_string(),
            param_marker: DEFAULT_PARAM_MARKER,
            match_order: MatchOrder::default(),
            ready_policy: ReadyPolicy::default(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if let Some(invalid) = self.scheme_prefix.chars().find(|c| matches!(c, '/' | '?')) {
            return Err(RouterOptionsError::SchemePrefixInvalid {
                prefix: self.scheme_prefix.clone(),
                invalid,
            });
        }
        let marker = self.param_marker;
        if marker.is_ascii_alphanumeric() || matches!(marker, '/' | '?') {
            return Err(RouterOptionsError::ParamMarkerInvalid { marker });
        }
        Ok(())
    }

    pub fn location_options(&self) -> LocationOptions {
        LocationOptions {
            scheme_prefix: self.scheme_prefix.clone(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn scheme_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.options.scheme_prefix = prefix.into();
        self
    }

    pub fn param_marker(mut self, marker: char) -> Self {
        self.options.param_marker = marker;
        self
    }

    pub fn match_order(mut self, value: MatchOrder) -> Self {
        self.options.match_order = value;
        self
    }

    pub fn ready_policy(mut self, value: ReadyPolicy) -> Self {
        self.options.ready_policy = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("scheme prefix '{prefix}' contains reserved character '{invalid}'")]
    SchemePrefixInvalid { prefix: String, invalid: char },
    #[error("parameter marker '{marker}' must not be alphanumeric, '/' or '?'")]
    ParamMarkerInvalid { marker: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_hashbang_conventions() {
        let options = RouterOptions::default();
        assert_eq!(options.scheme_prefix, "#!");
        assert_eq!(options.param_marker, ':');
        assert_eq!(options.match_order, MatchOrder::SpecificFirst);
        assert_eq!(options.ready_policy, ReadyPolicy::OnRegister);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let options = RouterOptions::builder().scheme_prefix("").build().unwrap();
        assert_eq!(options.location_options().scheme_prefix, "");
    }
}
