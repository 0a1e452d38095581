//! Fluent assertions on a dependency configuration.
//!
//! - `expect_configuration()` - Entry point for creating a configuration assertion
//! - `ConfigurationAssert` - Predicates over state, flags, and collections

use super::failure::FailureSink;
use crate::model::{Configuration, ConfigurationState, Dependency, ExcludeRule, PublishArtifact};

/// Create an assertion wrapper around a dependency configuration.
///
/// # Example
///
/// ```rust
/// use buildcheck::{expect_configuration, Configuration};
///
/// let configuration = Configuration::builder("implementation")
///     .visible(false)
///     .build();
///
/// expect_configuration(&configuration)
///     .has_name("implementation")
///     .has_unresolved_state()
///     .is_not_visible();
/// ```
pub fn expect_configuration<'a>(
    configuration: impl Into<Option<&'a Configuration>>,
) -> ConfigurationAssert<'a> {
    ConfigurationAssert {
        subject: configuration.into(),
        sink: FailureSink::default(),
    }
}

/// Chainable assertions on one [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationAssert<'a> {
    subject: Option<&'a Configuration>,
    sink: FailureSink,
}

impl<'a> ConfigurationAssert<'a> {
    pub(crate) fn with_sink(subject: Option<&'a Configuration>, sink: FailureSink) -> Self {
        Self { subject, sink }
    }

    /// Assert the subject is absent.
    pub fn is_null(self) -> Self {
        if let Some(configuration) = self.subject {
            self.sink.report(format!(
                "expected configuration to be null but was configuration '{}'",
                configuration.name
            ));
        }
        self
    }

    /// Assert the subject is present.
    pub fn is_not_null(self) -> Self {
        if self.subject.is_none() {
            self.sink
                .report("expected configuration to be non-null but was null".to_string());
        }
        self
    }

    fn subject(&self) -> Option<&'a Configuration> {
        if self.subject.is_none() {
            self.sink
                .report("expected configuration to be non-null but was null".to_string());
        }
        self.subject
    }

    // =========================================================================
    // State predicates
    // =========================================================================

    /// Assert the resolution state equals `state`.
    pub fn has_state(self, state: ConfigurationState) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.state != state {
                self.sink.report(format!(
                    "expected configuration '{}' to have state {} but was {}",
                    configuration.name, state, configuration.state
                ));
            }
        }
        self
    }

    /// Assert the state is [`ConfigurationState::Unresolved`].
    pub fn has_unresolved_state(self) -> Self {
        self.has_state(ConfigurationState::Unresolved)
    }

    /// Assert the state is [`ConfigurationState::Resolved`].
    pub fn has_resolved_state(self) -> Self {
        self.has_state(ConfigurationState::Resolved)
    }

    /// Assert the state is [`ConfigurationState::ResolvedWithFailures`].
    pub fn has_resolved_with_failures_state(self) -> Self {
        self.has_state(ConfigurationState::ResolvedWithFailures)
    }

    // =========================================================================
    // Identity and flags
    // =========================================================================

    /// Assert the configuration name equals `name`.
    pub fn has_name(self, name: &str) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.name != name {
                self.sink.report(format!(
                    "expected configuration name to equal '{}' but was '{}'",
                    name, configuration.name
                ));
            }
        }
        self
    }

    /// Assert the description equals `description` (`None` for unset).
    pub fn has_description<'d>(self, description: impl Into<Option<&'d str>>) -> Self {
        if let Some(configuration) = self.subject() {
            let expected = description.into();
            if configuration.description.as_deref() != expected {
                self.sink.report(format!(
                    "expected configuration '{}' to have description {:?} but was {:?}",
                    configuration.name, expected, configuration.description
                ));
            }
        }
        self
    }

    /// Assert the configuration is visible.
    pub fn is_visible(self) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.visible {
                self.sink.report(format!(
                    "expected configuration '{}' to be visible but was not",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration is not visible.
    pub fn is_not_visible(self) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.visible {
                self.sink.report(format!(
                    "expected configuration '{}' to not be visible but was",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration resolves dependencies transitively.
    pub fn is_transitive(self) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.transitive {
                self.sink.report(format!(
                    "expected configuration '{}' to be transitive but was not",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration is not transitive.
    pub fn is_not_transitive(self) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.transitive {
                self.sink.report(format!(
                    "expected configuration '{}' to not be transitive but was",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration can be consumed by other projects.
    pub fn can_be_consumed(self) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.can_be_consumed {
                self.sink.report(format!(
                    "expected configuration '{}' to be consumable but was not",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration cannot be consumed.
    pub fn cannot_be_consumed(self) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.can_be_consumed {
                self.sink.report(format!(
                    "expected configuration '{}' to not be consumable but was",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration can be resolved.
    pub fn can_be_resolved(self) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.can_be_resolved {
                self.sink.report(format!(
                    "expected configuration '{}' to be resolvable but was not",
                    configuration.name
                ));
            }
        }
        self
    }

    /// Assert the configuration cannot be resolved.
    pub fn cannot_be_resolved(self) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.can_be_resolved {
                self.sink.report(format!(
                    "expected configuration '{}' to not be resolvable but was",
                    configuration.name
                ));
            }
        }
        self
    }

    // =========================================================================
    // Set membership
    // =========================================================================

    /// Assert the extends-from set contains the configuration named `name`.
    pub fn extends_from_contains(self, name: &str) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.extends_from.contains(name) {
                self.sink.report(format!(
                    "expected configuration '{}' extends-from to contain '{}' but did not (was {:?})",
                    configuration.name, name, configuration.extends_from
                ));
            }
        }
        self
    }

    /// Assert the extends-from set does not contain `name`.
    pub fn extends_from_does_not_contain(self, name: &str) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.extends_from.contains(name) {
                self.sink.report(format!(
                    "expected configuration '{}' extends-from to not contain '{}' but did",
                    configuration.name, name
                ));
            }
        }
        self
    }

    /// Assert the hierarchy contains the configuration named `name`.
    pub fn hierarchy_contains(self, name: &str) -> Self {
        if let Some(configuration) = self.subject() {
            if !configuration.hierarchy.contains(name) {
                self.sink.report(format!(
                    "expected configuration '{}' hierarchy to contain '{}' but did not (was {:?})",
                    configuration.name, name, configuration.hierarchy
                ));
            }
        }
        self
    }

    /// Assert the hierarchy does not contain `name`.
    pub fn hierarchy_does_not_contain(self, name: &str) -> Self {
        if let Some(configuration) = self.subject() {
            if configuration.hierarchy.contains(name) {
                self.sink.report(format!(
                    "expected configuration '{}' hierarchy to not contain '{}' but did",
                    configuration.name, name
                ));
            }
        }
        self
    }

    // =========================================================================
    // Consumer delegation
    // =========================================================================

    /// Hand the extends-from names to caller-supplied verification logic.
    ///
    /// The consumer is invoked exactly once, synchronously; no further
    /// assertion is made here.
    pub fn extends_from_satisfies(
        self,
        requirements: impl FnOnce(&std::collections::BTreeSet<String>),
    ) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.extends_from);
        }
        self
    }

    /// Hand the hierarchy names to caller-supplied verification logic.
    pub fn hierarchy_satisfies(
        self,
        requirements: impl FnOnce(&std::collections::BTreeSet<String>),
    ) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.hierarchy);
        }
        self
    }

    /// Hand the declared dependencies to caller-supplied verification logic.
    pub fn dependencies_satisfy(self, requirements: impl FnOnce(&[Dependency])) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.dependencies);
        }
        self
    }

    /// Hand the declared plus inherited dependencies to caller-supplied
    /// verification logic.
    pub fn all_dependencies_satisfy(self, requirements: impl FnOnce(&[Dependency])) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.all_dependencies);
        }
        self
    }

    /// Hand the published artifacts to caller-supplied verification logic.
    pub fn artifacts_satisfy(self, requirements: impl FnOnce(&[PublishArtifact])) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.artifacts);
        }
        self
    }

    /// Hand the published plus inherited artifacts to caller-supplied
    /// verification logic.
    pub fn all_artifacts_satisfy(self, requirements: impl FnOnce(&[PublishArtifact])) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.all_artifacts);
        }
        self
    }

    /// Hand the exclusion rules to caller-supplied verification logic.
    pub fn exclude_rules_satisfy(self, requirements: impl FnOnce(&[ExcludeRule])) -> Self {
        if let Some(configuration) = self.subject() {
            requirements(&configuration.exclude_rules);
        }
        self
    }
}
