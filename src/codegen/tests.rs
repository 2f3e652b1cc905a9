#[cfg(test)]
mod tests {
    use super::super::units_sample as units;
    use crate::config::GeneratorConfig;
    use crate::pipeline::render_module;
    use crate::sheet::models::UnitRow;
    use crate::sheet::unit_rows;
    use calamine::{Data, Range};

    fn sample_rows() -> Vec<UnitRow> {
        vec![
            UnitRow::new("kilogram", Some("KGM"), Some("kg")),
            UnitRow::new("metre", Some("MTR"), Some("m")),
            UnitRow::new("metre", Some("MTR"), Some("m")),
            UnitRow::new("minute [unit of time]", Some("MIN"), Some("min")),
            UnitRow::new("degree Celsius [°C]", Some("CEL"), Some("°C")),
        ]
    }

    fn declared_identifiers(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|line| line.strip_prefix("pub const "))
            .filter_map(|rest| rest.split(':').next())
            .collect()
    }

    fn registered_identifiers(text: &str) -> Vec<&str> {
        let start = text
            .find("static ALL_UNITS: &[UnitDescriptor] = &[\n")
            .expect("registration array present");
        text[start..]
            .lines()
            .skip(1)
            .take_while(|line| *line != "];")
            .map(|line| line.trim().trim_end_matches(','))
            .collect()
    }

    #[test]
    fn test_output_matches_checked_in_sample() {
        let rendered = render_module(sample_rows(), &GeneratorConfig::default());
        assert_eq!(rendered.text, include_str!("testdata/units_sample.rs"));
        assert_eq!(rendered.report.units, 4);
        assert_eq!(rendered.report.duplicates, 1);
        assert_eq!(rendered.report.aliases, 1);
    }

    #[test]
    fn test_duplicate_row_emitted_once() {
        let rows = vec![
            UnitRow::new("kilogram", Some("KGM"), Some("kg")),
            UnitRow::new("metre", Some("MTR"), Some("m")),
            UnitRow::new("metre", Some("MTR"), Some("m")),
        ];
        let text = render_module(rows, &GeneratorConfig::default()).text;

        assert_eq!(
            declared_identifiers(&text),
            vec!["NO_DIMENSION", "NONE", "KILOGRAM", "METRE"]
        );
    }

    #[test]
    fn test_first_name_kept_for_colliding_identifiers() {
        let rows = vec![
            UnitRow::new("ton (US)", Some("STN"), Some("ton (US)")),
            UnitRow::new("ton US", Some("XXX"), None),
        ];
        let text = render_module(rows, &GeneratorConfig::default()).text;

        assert_eq!(text.matches("pub const TON_US:").count(), 1);
        assert!(text.contains("name: \"ton (US)\", code: Some(\"STN\")"));
        assert!(!text.contains("XXX"));
    }

    #[test]
    fn test_every_registration_declared_earlier() {
        let rows = vec![
            UnitRow::new("metre per second", Some("MTS"), Some("m/s")),
            UnitRow::new("percent", Some("P1"), Some("%")),
            UnitRow::new("Gunter's chain", None, Some("ch (UK)")),
            UnitRow::new("Percent", Some("P1"), Some("%")),
        ];
        let text = render_module(rows, &GeneratorConfig::default()).text;
        let registry_at = text.find("static ALL_UNITS").unwrap();

        let registered = registered_identifiers(&text);
        assert_eq!(
            registered,
            vec!["NO_DIMENSION", "NONE", "METRE_PER_SECOND", "PERCENT", "GUNTERS_CHAIN"]
        );
        for ident in registered {
            let decl = format!("pub const {}: UnitDescriptor = UnitDescriptor {{", ident);
            assert_eq!(text.matches(&decl).count(), 1, "{} declared once", ident);
            assert!(text.find(&decl).unwrap() < registry_at);
        }
    }

    #[test]
    fn test_names_without_usable_identifier_not_declared() {
        let rows = vec![
            UnitRow::new("-", None, Some("-")),
            UnitRow::new("units by name", None, None),
            UnitRow::new("metre", Some("MTR"), Some("m")),
        ];
        let rendered = render_module(rows, &GeneratorConfig::default());
        let text = &rendered.text;

        assert_eq!(
            declared_identifiers(text),
            vec!["NO_DIMENSION", "NONE", "METRE"]
        );
        assert_eq!(
            registered_identifiers(text),
            vec!["NO_DIMENSION", "NONE", "METRE"]
        );
        assert_eq!(text.matches("UNITS_BY_NAME:").count(), 1);
        assert_eq!(rendered.report.unusable_rows, 1);
        assert_eq!(rendered.report.duplicates, 1);
    }

    #[test]
    fn test_sheet_to_module() {
        let cells: [[&str; 3]; 4] = [
            ["Common\nCode", "Name", "Symbol"],
            ["KGM", "kilogram", "kg"],
            ["MTR", "metre", "m"],
            ["MTR", "metre", "m"],
        ];
        let mut range: Range<Data> = Range::new((0, 0), (3, 2));
        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), Data::String(value.to_string()));
            }
        }

        let config = GeneratorConfig::default();
        let rows = unit_rows(range.rows(), &config.columns).unwrap();
        let rendered = render_module(rows, &config);

        assert_eq!(rendered.report.units, 2);
        assert!(rendered.text.contains(
            "pub const KILOGRAM: UnitDescriptor = UnitDescriptor { name: \"kilogram\", code: Some(\"KGM\"), suffix: Some(\"kg\") };"
        ));
        assert!(rendered.text.contains(
            "pub const METRE: UnitDescriptor = UnitDescriptor { name: \"metre\", code: Some(\"MTR\"), suffix: Some(\"m\") };"
        ));
    }

    #[test]
    fn test_generated_lookup_by_name_and_suffix() {
        assert_eq!(units::unit("kilogram"), Some(&units::KILOGRAM));
        assert_eq!(units::unit("kg"), Some(&units::KILOGRAM));
        assert_eq!(units::unit("metre"), Some(&units::METRE));
        assert_eq!(units::unit("m"), Some(&units::METRE));
        assert_eq!(units::unit("°C"), Some(&units::DEGREE_CELSIUS_DEG_C));
        assert_eq!(units::unit("No dimension"), Some(&units::NO_DIMENSION));
        assert_eq!(units::unit("furlong"), None);
    }

    #[test]
    fn test_generated_tables() {
        // Sentinels have no suffix
        assert_eq!(units::UNITS_BY_SUFFIX.len(), 4);
        assert_eq!(units::UNITS_BY_NAME.len(), 6);
        assert_eq!(units::UNITS_BY_ALL.len(), 10);
        assert_eq!(units::MINUTE, units::MINUTE_UNIT_OF_TIME);
        assert_eq!(units::KILOGRAM.code, Some("KGM"));
        assert_eq!(units::NONE.code, None);
    }
}
