use tabled::{settings::Style, Table, Tabled};

/// Tab-separated rendering: a header line, a dashed underline of matching
/// widths, then one line per row.
pub fn tsv<T: Tabled>(rows: &[T]) -> String {
    let headers = T::headers();
    let mut out = String::new();

    out.push_str(&headers.join("\t"));
    out.push('\n');
    let underline: Vec<String> = headers.iter().map(|h| "-".repeat(h.chars().count())).collect();
    out.push_str(&underline.join("\t"));
    out.push('\n');

    for row in rows {
        out.push_str(&row.fields().join("\t"));
        out.push('\n');
    }
    out
}

/// Boxed rendering with rounded borders
pub fn boxed<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Nike".into() },
            Row { id: 2, name: "Adidas".into() },
        ]
    }

    #[test]
    fn test_tsv_layout() {
        assert_eq!(tsv(&rows()), "ID\tName\n--\t----\n1\tNike\n2\tAdidas\n");
    }

    #[test]
    fn test_tsv_headers_only_when_empty() {
        assert_eq!(tsv::<Row>(&[]), "ID\tName\n--\t----\n");
    }

    #[test]
    fn test_boxed_contains_cells() {
        let rendered = boxed(&rows());
        assert!(rendered.contains("Adidas"));
        assert!(rendered.contains('╭'));
    }
}
