use crate::models::InvalidEntry;

/// Column alignment in the rendered markdown separator row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Fixed-schema markdown table builder.
///
/// Output is deterministic: a header row, an alignment separator row,
/// then one row per call to [`MarkdownTable::push_row`], joined with
/// `\n` and without a trailing newline.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header = self
            .columns
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("| {} |", header));

        let separator = self
            .columns
            .iter()
            .map(|(_, align)| match align {
                Align::Left => "---",
                Align::Right => "---:",
            })
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("| {} |", separator));

        for row in &self.rows {
            lines.push(format!("| {} |", row.join(" | ")));
        }

        lines.join("\n")
    }
}

/// Two-column point table used by the format parsers
pub fn point_table() -> MarkdownTable {
    MarkdownTable::new(&[("Latitude", Align::Right), ("Longitude", Align::Right)])
}

/// Four-column DD/DMS conversion table
pub fn dms_table() -> MarkdownTable {
    MarkdownTable::new(&[
        ("Latitude (DD)", Align::Right),
        ("Longitude (DD)", Align::Right),
        ("Latitude (DMS)", Align::Left),
        ("Longitude (DMS)", Align::Left),
    ])
}

/// Six-column pairwise distance table
pub fn distance_table() -> MarkdownTable {
    MarkdownTable::new(&[
        ("Point A Lat", Align::Right),
        ("Point A Lon", Align::Right),
        ("Point B Lat", Align::Right),
        ("Point B Lon", Align::Right),
        ("Distance (km)", Align::Right),
        ("Distance (mi)", Align::Right),
    ])
}

/// Footer listing skipped inputs; empty when there is nothing to report
pub fn invalid_footer(entries: &[InvalidEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut footer = String::from("\n\n_Skipped invalid inputs:_");
    for entry in entries {
        footer.push_str(&format!("\n- `{}` ({})", entry.raw, entry.reason));
    }
    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_table_render() {
        let mut table = point_table();
        table.push_row(vec!["45".to_string(), "-93".to_string()]);
        assert_eq!(
            table.render(),
            "| Latitude | Longitude |\n\
             | ---: | ---: |\n\
             | 45 | -93 |"
        );
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = point_table();
        assert!(table.is_empty());
        assert_eq!(table.render(), "| Latitude | Longitude |\n| ---: | ---: |");
    }

    #[test]
    fn test_dms_table_columns() {
        let rendered = dms_table().render();
        assert!(rendered.starts_with(
            "| Latitude (DD) | Longitude (DD) | Latitude (DMS) | Longitude (DMS) |"
        ));
        assert_eq!(rendered.lines().nth(1), Some("| ---: | ---: | --- | --- |"));
    }

    #[test]
    fn test_distance_table_columns() {
        let rendered = distance_table().render();
        assert!(rendered.starts_with(
            "| Point A Lat | Point A Lon | Point B Lat | Point B Lon | Distance (km) | Distance (mi) |"
        ));
    }

    #[test]
    fn test_invalid_footer() {
        let entries = vec![
            InvalidEntry::new("abc", "Not a number"),
            InvalidEntry::new("91,0", "Out of range (-90 <= lat <= 90, -180 <= lon <= 180)"),
        ];
        assert_eq!(
            invalid_footer(&entries),
            "\n\n_Skipped invalid inputs:_\n\
             - `abc` (Not a number)\n\
             - `91,0` (Out of range (-90 <= lat <= 90, -180 <= lon <= 180))"
        );
    }

    #[test]
    fn test_empty_footer() {
        assert_eq!(invalid_footer(&[]), "");
    }
}
