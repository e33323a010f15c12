//! Catalog parsing and year filtering.
//!
//! The catalog is a flat text file listing one project per line, grouped
//! under `#` year headers:
//!
//! ```text
//! # 2024
//! spiking-attention
//! cortical-maps
//!
//! # 2023
//! retina-sim
//! ```
//!
//! Lines before the first header belong to no year.

/// One project listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Project name exactly as written (trimmed).
    pub name: String,
    /// Most recent year header above this entry, if any.
    pub year: Option<String>,
}

/// Ordered list of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parses catalog source text. Never fails.
    pub fn parse(source: &str) -> Self {
        Self {
            entries: parse_catalog(source),
        }
    }

    /// Entries whose year equals `subset` exactly.
    ///
    /// `None` or an empty subset keeps everything. Order is preserved.
    pub fn filter(&self, subset: Option<&str>) -> Vec<&CatalogEntry> {
        match subset {
            None | Some("") => self.entries.iter().collect(),
            Some(year) => self
                .entries
                .iter()
                .filter(|e| e.year.as_deref() == Some(year))
                .collect(),
        }
    }
}

/// Parses catalog text into entries in order of appearance.
pub fn parse_catalog(source: &str) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    let mut current_year: Option<String> = None;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(header) = trimmed.strip_prefix('#') {
            current_year = Some(header.trim().to_string());
        } else {
            entries.push(CatalogEntry {
                name: trimmed.to_string(),
                year: current_year.clone(),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, year: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            year: year.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_groups_entries_under_year_headers() {
        let entries = parse_catalog("# 2023\nfoo\nbar\n# 2024\nbaz\n");
        assert_eq!(
            entries,
            vec![
                entry("foo", Some("2023")),
                entry("bar", Some("2023")),
                entry("baz", Some("2024")),
            ]
        );
    }

    #[test]
    fn test_entries_before_first_header_have_no_year() {
        let entries = parse_catalog("early\n#2022\nlate\n");
        assert_eq!(entries, vec![entry("early", None), entry("late", Some("2022"))]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let entries = parse_catalog("\n   \n  #   2021  \n\t padded-name \r\n\n");
        assert_eq!(entries, vec![entry("padded-name", Some("2021"))]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let entries = parse_catalog("dup\ndup\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_header_sets_empty_year() {
        let entries = parse_catalog("#\nx\n");
        assert_eq!(entries, vec![entry("x", Some(""))]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "a\n# 1\nb\n# 2\nc\n";
        assert_eq!(parse_catalog(source), parse_catalog(source));
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let catalog = Catalog::parse("# Spring\na\n# spring\nb\n# 2023\nc\n");
        let names: Vec<_> = catalog
            .filter(Some("spring"))
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["b"]);
        assert!(catalog.filter(Some("2023 ")).is_empty());
    }

    #[test]
    fn test_unset_or_empty_filter_keeps_all_in_order() {
        let catalog = Catalog::parse("x\n# 2023\ny\n# 2024\nz\n");
        for subset in [None, Some("")] {
            let names: Vec<_> = catalog
                .filter(subset)
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            assert_eq!(names, vec!["x", "y", "z"]);
        }
    }

    // -----------------------------------------------------------------------
    // Generated catalogs
    // -----------------------------------------------------------------------

    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Line {
        Blank(String),
        Header(String),
        Name(String),
    }

    impl Line {
        fn render(&self) -> String {
            match self {
                Line::Blank(ws) => ws.clone(),
                Line::Header(year) => format!("  #{year}"),
                Line::Name(name) => format!(" {name}\t"),
            }
        }
    }

    fn line() -> impl Strategy<Value = Line> {
        prop_oneof![
            "[ \t]{0,3}".prop_map(Line::Blank),
            "[0-9a-zA-Z ]{0,6}".prop_map(Line::Header),
            "[a-z0-9][a-z0-9_.-]{0,12}".prop_map(Line::Name),
        ]
    }

    fn catalog_lines() -> impl Strategy<Value = Vec<Line>> {
        prop::collection::vec(line(), 0..40)
    }

    fn render(lines: &[Line]) -> String {
        lines.iter().map(Line::render).collect::<Vec<_>>().join("\n")
    }

    /// Entries the catalog should produce, computed line by line.
    fn expected(lines: &[Line]) -> Vec<CatalogEntry> {
        let mut year = None;
        let mut out = Vec::new();
        for line in lines {
            match line {
                Line::Blank(_) => {}
                Line::Header(y) => year = Some(y.trim().to_string()),
                Line::Name(name) => out.push(entry(name, year.as_deref())),
            }
        }
        out
    }

    proptest! {
        #[test]
        fn prop_one_entry_per_name_line(lines in catalog_lines()) {
            let entries = parse_catalog(&render(&lines));
            let name_lines = lines.iter().filter(|l| matches!(l, Line::Name(_))).count();
            prop_assert_eq!(entries.len(), name_lines);
            prop_assert_eq!(entries, expected(&lines));
        }

        #[test]
        fn prop_names_before_first_header_have_no_year(lines in catalog_lines()) {
            let leading = lines
                .iter()
                .take_while(|l| !matches!(l, Line::Header(_)))
                .filter(|l| matches!(l, Line::Name(_)))
                .count();
            let entries = parse_catalog(&render(&lines));
            prop_assert!(entries[..leading].iter().all(|e| e.year.is_none()));
            if leading < entries.len() {
                prop_assert!(entries[leading].year.is_some());
            }
        }

        #[test]
        fn prop_filter_is_exact_and_order_preserving(
            lines in catalog_lines(),
            subset in prop::option::of("[0-9a-zA-Z]{0,4}"),
        ) {
            let catalog = Catalog::parse(&render(&lines));
            let all = expected(&lines);
            let want: Vec<&CatalogEntry> = match subset.as_deref() {
                None | Some("") => all.iter().collect(),
                Some(year) => all.iter().filter(|e| e.year.as_deref() == Some(year)).collect(),
            };
            prop_assert_eq!(catalog.filter(subset.as_deref()), want);
        }

        #[test]
        fn prop_parse_is_idempotent(lines in catalog_lines()) {
            let source = render(&lines);
            prop_assert_eq!(parse_catalog(&source), parse_catalog(&source));
        }
    }
}
