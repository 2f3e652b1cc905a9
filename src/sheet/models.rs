/// One data row of the unit sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRow {
    /// Display name, e.g. "metre per second"
    pub name: String,
    /// UNECE common code, e.g. "MTS"
    pub code: Option<String>,
    /// Symbol, e.g. "m/s"
    pub suffix: Option<String>,
}

impl UnitRow {
    pub fn new(name: &str, code: Option<&str>, suffix: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            code: code.map(str::to_string),
            suffix: suffix.map(str::to_string),
        }
    }
}

/// Zero-based positions of the three columns we read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub code: usize,
    pub suffix: usize,
}
