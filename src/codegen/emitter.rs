use crate::codegen::sanitizer::unit_key_from_name;
use crate::sheet::models::UnitRow;
use std::collections::HashMap;

/// Units written into every generated module ahead of the sheet rows:
/// (identifier, name, code)
pub const SENTINEL_UNITS: &[(&str, &str, Option<&str>)] = &[
    ("NO_DIMENSION", "No dimension", Some("NDL")),
    ("NONE", "None", None),
];

/// Items the generated module declares after the units
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    "ALL_UNITS",
    "UNITS_BY_NAME",
    "UNITS_BY_SUFFIX",
    "UNITS_BY_ALL",
];

/// Generated text for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedUnit {
    pub identifier: String,
    pub name: String,
    /// `pub const X: UnitDescriptor = ...;`
    pub declaration: String,
    /// Entry in the `ALL_UNITS` array
    pub registration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Emitted(String),
    /// The identifier was already taken by `kept`; the row is dropped
    Duplicate { identifier: String, kept: String },
    /// The row has no name
    Blank,
    /// The name sanitizes to nothing but underscores
    Unusable(String),
}

/// Accumulates unit declarations in row order, keeping the first row for
/// each identifier.
pub struct UnitEmitter {
    units: Vec<EmittedUnit>,
    seen: HashMap<String, String>, // identifier -> name that claimed it
}

impl UnitEmitter {
    pub fn new() -> Self {
        let seen = SENTINEL_UNITS
            .iter()
            .map(|(ident, name, _)| (ident.to_string(), name.to_string()))
            .chain(
                RESERVED_IDENTIFIERS
                    .iter()
                    .map(|ident| (ident.to_string(), "generated lookup table".to_string())),
            )
            .collect();
        Self {
            units: Vec::new(),
            seen,
        }
    }

    pub fn push(&mut self, row: &UnitRow) -> EmitOutcome {
        let identifier = unit_key_from_name(&row.name);
        if identifier.is_empty() {
            return EmitOutcome::Blank;
        }
        if identifier.chars().all(|c| c == '_') {
            tracing::warn!(name = %row.name, "unit name has no usable identifier, skipping");
            return EmitOutcome::Unusable(row.name.clone());
        }

        if let Some(kept) = self.seen.get(&identifier) {
            tracing::warn!(
                identifier = %identifier,
                kept = %kept,
                dropped = %row.name,
                "duplicate unit identifier, keeping first occurrence"
            );
            return EmitOutcome::Duplicate {
                identifier,
                kept: kept.clone(),
            };
        }

        self.seen.insert(identifier.clone(), row.name.clone());
        self.units.push(EmittedUnit {
            declaration: declaration(
                &identifier,
                &row.name,
                row.code.as_deref(),
                row.suffix.as_deref(),
            ),
            registration: registration(&identifier),
            identifier: identifier.clone(),
            name: row.name.clone(),
        });

        EmitOutcome::Emitted(identifier)
    }

    /// Whether `identifier` names a sentinel or an emitted unit
    pub fn is_declared(&self, identifier: &str) -> bool {
        self.is_taken(identifier) && !RESERVED_IDENTIFIERS.contains(&identifier)
    }

    /// Whether `identifier` is already used by any item of the module
    pub fn is_taken(&self, identifier: &str) -> bool {
        self.seen.contains_key(identifier)
    }

    pub fn units(&self) -> &[EmittedUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<EmittedUnit> {
        self.units
    }
}

impl Default for UnitEmitter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn declaration(identifier: &str, name: &str, code: Option<&str>, suffix: Option<&str>) -> String {
    format!(
        "pub const {}: UnitDescriptor = UnitDescriptor {{ name: {}, code: {}, suffix: {} }};\n",
        identifier,
        string_literal(name),
        optional_literal(code),
        optional_literal(suffix),
    )
}

pub fn registration(identifier: &str) -> String {
    format!("    {},\n", identifier)
}

/// Quote `s` as a Rust string literal
pub fn string_literal(s: &str) -> String {
    format!("\"{}\"", s.escape_debug())
}

fn optional_literal(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("Some({})", string_literal(v)),
        None => "None".to_string(),
    }
}
