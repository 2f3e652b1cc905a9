use crate::codegen::{assemble_module, usable_aliases, EmitOutcome, UnitEmitter};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::output::write_atomically;
use crate::sheet::{open_sheet, unit_rows, UnitRow};
use std::path::Path;

/// Counts for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub units: usize,
    pub duplicates: usize,
    pub blank_rows: usize,
    pub unusable_rows: usize,
    pub aliases: usize,
}

pub struct RenderedModule {
    pub text: String,
    pub report: GenerationReport,
}

/// Build the generated module text from unit rows in sheet order
pub fn render_module<I>(rows: I, config: &GeneratorConfig) -> RenderedModule
where
    I: IntoIterator<Item = UnitRow>,
{
    let mut emitter = UnitEmitter::new();
    let mut report = GenerationReport::default();

    for (idx, row) in rows.into_iter().enumerate() {
        match emitter.push(&row) {
            EmitOutcome::Emitted(_) => report.units += 1,
            EmitOutcome::Duplicate { .. } => report.duplicates += 1,
            EmitOutcome::Blank => {
                // +2: one-based, after the header
                tracing::debug!(row = idx + 2, "skipping row without a name");
                report.blank_rows += 1;
            }
            EmitOutcome::Unusable(_) => report.unusable_rows += 1,
        }
    }

    let aliases = usable_aliases(&config.aliases, &emitter);
    report.aliases = aliases.len();
    let text = assemble_module(emitter.units(), &aliases);

    RenderedModule { text, report }
}

/// Read `xlsfile`, generate the units module and replace `outfile` with it.
///
/// Nothing is written if the input is missing or the workbook, sheet or
/// header row cannot be used.
pub fn generate(
    xlsfile: &Path,
    outfile: &Path,
    config: &GeneratorConfig,
) -> Result<GenerationReport, GenerateError> {
    if !xlsfile.exists() {
        return Err(GenerateError::InputNotFound(xlsfile.to_path_buf()));
    }

    let range = open_sheet(xlsfile, &config.sheet_name)?;
    let rows = unit_rows(range.rows(), &config.columns)?;

    let rendered = render_module(rows, config);
    write_atomically(outfile, rendered.text.as_bytes())?;

    tracing::info!(
        units = rendered.report.units,
        duplicates = rendered.report.duplicates,
        unusable = rendered.report.unusable_rows,
        aliases = rendered.report.aliases,
        outfile = %outfile.display(),
        "generated units module"
    );

    Ok(rendered.report)
}
