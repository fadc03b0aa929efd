//! This module implements the calendar profile registry.
//!
//! The registry is an explicitly constructed, explicitly passed instance
//! owned by the application; there is no global state and construction
//! order is deterministic.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::profiles;
use crate::rules::CalendarRules;
use crate::{CalendarError, CalendarResult};

/// A name-keyed registry of shared [`CalendarRules`] values.
#[derive(Debug, Default, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, Arc<CalendarRules>>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in profiles.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(profiles::gregorian());
        registry.register(profiles::faerun());
        registry.register(profiles::golarion());
        registry.register(profiles::dsa());
        registry.register(profiles::eberron());
        registry.register(profiles::dragonlance());
        registry.register(profiles::greyhawk());
        registry
    }

    /// Registers a rule set under its own name, replacing any previous
    /// entry.
    pub fn register(&mut self, rules: CalendarRules) {
        #[cfg(feature = "log")]
        log::debug!("registering calendar profile '{}'", rules.name());
        self.profiles
            .insert(rules.name().to_string(), Arc::new(rules));
    }

    /// Returns whether a profile is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Looks up a profile by name; the error of a failed lookup lists the
    /// available profiles.
    pub fn get(&self, name: &str) -> CalendarResult<Arc<CalendarRules>> {
        self.profiles.get(name).cloned().ok_or_else(|| {
            let available: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
            CalendarError::invalid_config().with_message(format!(
                "Unknown calendar profile: '{name}'. Available profiles: {}",
                available.join(", ")
            ))
        })
    }

    /// Returns the registered profile names in order.
    pub fn available_profiles(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn builtins_are_registered() {
        let registry = ProfileRegistry::with_builtins();
        let names: Vec<&str> = registry.available_profiles().collect();
        assert_eq!(
            names,
            [
                "dragonlance",
                "dsa",
                "eberron",
                "faerun",
                "golarion",
                "gregorian",
                "greyhawk"
            ]
        );
        assert!(registry.contains("faerun"));
        assert!(registry.get("gregorian").is_ok());
    }

    #[test]
    fn unknown_profile_lists_available_names() {
        let registry = ProfileRegistry::with_builtins();
        let err = registry.get("klingon").unwrap_err();
        assert!(err.message().contains("Unknown calendar profile: 'klingon'"));
        assert!(err.message().contains("gregorian"));
    }

    #[test]
    fn registration_replaces_previous_entry() {
        use crate::rules::MonthLengths;
        let mut registry = ProfileRegistry::new();
        let months = alloc::vec![alloc::string::String::from("Only")];
        registry.register(CalendarRules::new(
            "custom",
            "First",
            months.clone(),
            MonthLengths::Uniform(10),
        ));
        registry.register(CalendarRules::new(
            "custom",
            "Second",
            months,
            MonthLengths::Uniform(20),
        ));
        let rules = registry.get("custom").unwrap();
        assert_eq!(rules.display_name(), "Second");
        assert_eq!(registry.available_profiles().count(), 1);
    }
}
