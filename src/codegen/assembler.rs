use crate::codegen::emitter::{declaration, registration, EmittedUnit, UnitEmitter, SENTINEL_UNITS};
use crate::config::Alias;
use std::collections::HashSet;

const PREAMBLE: &str = r#"// @generated by units-from-xls. DO NOT EDIT.

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

"#;

const SENTINEL_COMMENT: &str = "\
// NO_DIMENSION means that there are units set, but they cannot be expressed
// by a known dimension (such as a ratio)
";

const POSTAMBLE: &str = r#"
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
"#;

/// Aliases that can be emitted without breaking the generated module.
///
/// An alias is dropped when its target is not a declared unit, or when its
/// name is already taken by a unit, a lookup table or an earlier alias.
pub fn usable_aliases<'a>(aliases: &'a [Alias], emitter: &UnitEmitter) -> Vec<&'a Alias> {
    let mut taken = HashSet::new();
    let mut usable = Vec::new();

    for alias in aliases {
        if !emitter.is_declared(&alias.target) {
            tracing::warn!(alias = %alias.alias, target = %alias.target, "alias target not generated, skipping");
            continue;
        }
        if emitter.is_taken(&alias.alias) || !taken.insert(alias.alias.as_str()) {
            tracing::warn!(alias = %alias.alias, "alias name already in use, skipping");
            continue;
        }
        usable.push(alias);
    }

    usable
}

/// Concatenate preamble, unit declarations, the registration array and the
/// lookup postamble into the text of the generated module.
pub fn assemble_module(units: &[EmittedUnit], aliases: &[&Alias]) -> String {
    let mut out = String::from(PREAMBLE);

    out.push_str(SENTINEL_COMMENT);
    for (ident, name, code) in SENTINEL_UNITS {
        out.push_str(&declaration(ident, name, *code, None));
    }
    out.push('\n');

    for unit in units {
        out.push_str(&unit.declaration);
    }

    out.push_str("\nstatic ALL_UNITS: &[UnitDescriptor] = &[\n");
    for (ident, _, _) in SENTINEL_UNITS {
        out.push_str(&registration(ident));
    }
    for unit in units {
        out.push_str(&unit.registration);
    }
    out.push_str("];\n");

    if !aliases.is_empty() {
        out.push_str("\n// Convenience aliases.\n");
        for alias in aliases {
            out.push_str(&format!(
                "pub const {}: UnitDescriptor = {};\n",
                alias.alias, alias.target
            ));
        }
    }

    out.push_str(POSTAMBLE);
    out
}
