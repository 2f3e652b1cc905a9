// @generated by units-from-xls. DO NOT EDIT.

//! Units of measure.
//!
//! THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT.
//!
//! Units are identified by UNECE Recommendation 20 common codes and can be
//! retrieved by constant, by name, or by suffix:
//!
//! ```ignore
//! // The following three lines are equivalent:
//! let speed = units::METRE_PER_SECOND;
//! let speed = *units::unit("m/s").unwrap();
//! let speed = *units::unit("metre per second").unwrap();
//! ```
//!
//! Regenerate with `units-from-xls <rec20 spreadsheet>` when UNECE publishes
//! a new revision.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A unit of measure: display name, UNECE common code and symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitDescriptor {
    pub name: &'static str,
    pub code: Option<&'static str>,
    pub suffix: Option<&'static str>,
}

// NO_DIMENSION means that there are units set, but they cannot be expressed
// by a known dimension (such as a ratio)
pub const NO_DIMENSION: UnitDescriptor = UnitDescriptor { name: "No dimension", code: Some("NDL"), suffix: None };
pub const NONE: UnitDescriptor = UnitDescriptor { name: "None", code: None, suffix: None };

pub const KILOGRAM: UnitDescriptor = UnitDescriptor { name: "kilogram", code: Some("KGM"), suffix: Some("kg") };
pub const METRE: UnitDescriptor = UnitDescriptor { name: "metre", code: Some("MTR"), suffix: Some("m") };
pub const MINUTE_UNIT_OF_TIME: UnitDescriptor = UnitDescriptor { name: "minute [unit of time]", code: Some("MIN"), suffix: Some("min") };
pub const DEGREE_CELSIUS_DEG_C: UnitDescriptor = UnitDescriptor { name: "degree Celsius [°C]", code: Some("CEL"), suffix: Some("°C") };

static ALL_UNITS: &[UnitDescriptor] = &[
    NO_DIMENSION,
    NONE,
    KILOGRAM,
    METRE,
    MINUTE_UNIT_OF_TIME,
    DEGREE_CELSIUS_DEG_C,
];

// Convenience aliases.
pub const MINUTE: UnitDescriptor = MINUTE_UNIT_OF_TIME;

/// Units keyed by display name
pub static UNITS_BY_NAME: LazyLock<HashMap<&'static str, &'static UnitDescriptor>> =
    LazyLock::new(|| ALL_UNITS.iter().map(|u| (u.name, u)).collect());

/// Units keyed by symbol; units without a symbol are absent
pub static UNITS_BY_SUFFIX: LazyLock<HashMap<&'static str, &'static UnitDescriptor>> =
    LazyLock::new(|| {
        ALL_UNITS
            .iter()
            .filter_map(|u| u.suffix.map(|s| (s, u)))
            .collect()
    });

/// Names and symbols together; a symbol shadows an identical name
pub static UNITS_BY_ALL: LazyLock<HashMap<&'static str, &'static UnitDescriptor>> =
    LazyLock::new(|| {
        let mut all = UNITS_BY_NAME.clone();
        all.extend(UNITS_BY_SUFFIX.iter().map(|(k, v)| (*k, *v)));
        all
    });

/// Look up a unit by name or suffix, e.g. `unit("m/s")` or `unit("metre per second")`.
pub fn unit(name_or_suffix: &str) -> Option<&'static UnitDescriptor> {
    UNITS_BY_ALL.get(name_or_suffix).copied()
}
