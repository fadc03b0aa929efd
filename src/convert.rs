//! This module implements `DateConverter`, the mapping registry.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::calendar::Calendar;
use crate::mapping::CalendarMapping;
use crate::point::TimePoint;
use crate::{CalendarError, CalendarResult};

/// A registry of [`CalendarMapping`]s keyed by (source, target) calendar
/// name, converting dates between any registered pair without the caller
/// tracking individual mappings.
///
/// Registration is the only mutation; concurrent registration and lookup
/// require external serialization.
#[derive(Debug, Default, Clone)]
pub struct DateConverter {
    mappings: BTreeMap<(String, String), Arc<CalendarMapping>>,
}

impl DateConverter {
    /// Creates an empty converter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mapping under its (source, target) pair; a
    /// bidirectional mapping is also registered under (target, source),
    /// sharing the same mapping object.
    pub fn register_mapping(&mut self, mapping: CalendarMapping) {
        let source = mapping.source_calendar().name().to_string();
        let target = mapping.target_calendar().name().to_string();
        #[cfg(feature = "log")]
        log::debug!(
            "registering mapping '{source}' -> '{target}' (bidirectional: {})",
            mapping.configuration().is_bidirectional()
        );
        let mapping = Arc::new(mapping);
        if mapping.configuration().is_bidirectional() {
            self.mappings
                .insert((target.clone(), source.clone()), Arc::clone(&mapping));
        }
        self.mappings.insert((source, target), mapping);
    }

    /// Returns whether a conversion is possible between two calendars.
    #[must_use]
    pub fn can_convert(&self, source: &str, target: &str) -> bool {
        self.get_mapping(source, target).is_some()
    }

    /// Returns the mapping registered for a calendar pair, if any.
    #[must_use]
    pub fn get_mapping(&self, source: &str, target: &str) -> Option<&CalendarMapping> {
        self.mappings
            .get(&(source.to_string(), target.to_string()))
            .map(Arc::as_ref)
    }

    /// Returns the registered (source, target) pairs in order.
    pub fn registered_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings
            .keys()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    /// Converts a date into the target calendar via the registered
    /// mapping, dispatching to forward or reverse conversion depending on
    /// which side of the mapping the date's calendar is.
    pub fn convert(&self, date: &TimePoint, target: &Calendar) -> CalendarResult<TimePoint> {
        let source_name = date.calendar().name();
        let target_name = target.name();
        let Some(mapping) = self.get_mapping(source_name, target_name) else {
            return Err(CalendarError::incompatible().with_message(format!(
                "No mapping found between '{source_name}' and '{target_name}'"
            )));
        };

        if mapping.source_calendar().name() == source_name {
            mapping.convert(date)
        } else {
            mapping.reverse_convert(date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{CalendarMappingConfiguration, CorrelationPair, DateRecord};
    use crate::registry::ProfileRegistry;

    fn converter() -> (DateConverter, Calendar, Calendar) {
        let registry = ProfileRegistry::with_builtins();
        let gregorian = Calendar::from_profile(&registry, "gregorian").unwrap();
        let faerun = Calendar::from_profile(&registry, "faerun").unwrap();
        let config = CalendarMappingConfiguration::new(
            "gregorian",
            "faerun",
            CorrelationPair {
                source: DateRecord::new(2024, 1, 1),
                target: DateRecord::new(1492, 1, 1),
            },
        );
        let mapping =
            CalendarMapping::try_new(config, gregorian.clone(), faerun.clone()).unwrap();
        let mut converter = DateConverter::new();
        converter.register_mapping(mapping);
        (converter, gregorian, faerun)
    }

    #[test]
    fn bidirectional_mapping_registers_both_keys() {
        let (converter, _, _) = converter();
        assert!(converter.can_convert("gregorian", "faerun"));
        assert!(converter.can_convert("faerun", "gregorian"));
        assert!(!converter.can_convert("gregorian", "dsa"));
        assert_eq!(converter.registered_pairs().count(), 2);
    }

    #[test]
    fn converts_in_both_directions() {
        let (converter, gregorian, faerun) = converter();
        let date = TimePoint::try_ymd(&gregorian, 2024, 12, 25).unwrap();
        let projected = converter.convert(&date, &faerun).unwrap();
        assert_eq!(projected.calendar().name(), "faerun");
        assert_eq!(projected.year(), 1492);

        let back = converter.convert(&projected, &gregorian).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn missing_mapping_names_the_pair() {
        let (converter, gregorian, _) = converter();
        let registry = ProfileRegistry::with_builtins();
        let dsa = Calendar::from_profile(&registry, "dsa").unwrap();
        let date = TimePoint::try_ymd(&gregorian, 2024, 1, 1).unwrap();
        let err = converter.convert(&date, &dsa).unwrap_err();
        assert!(err
            .message()
            .contains("No mapping found between 'gregorian' and 'dsa'"));
    }

    #[test]
    fn one_way_mapping_registers_single_key() {
        let registry = ProfileRegistry::with_builtins();
        let gregorian = Calendar::from_profile(&registry, "gregorian").unwrap();
        let golarion = Calendar::from_profile(&registry, "golarion").unwrap();
        let config = CalendarMappingConfiguration::new(
            "gregorian",
            "golarion",
            CorrelationPair {
                source: DateRecord::new(2024, 1, 1),
                target: DateRecord::new(4724, 1, 1),
            },
        )
        .one_way();
        let mapping =
            CalendarMapping::try_new(config, gregorian, golarion).unwrap();
        let mut converter = DateConverter::new();
        converter.register_mapping(mapping);
        assert!(converter.can_convert("gregorian", "golarion"));
        assert!(!converter.can_convert("golarion", "gregorian"));
    }
}
