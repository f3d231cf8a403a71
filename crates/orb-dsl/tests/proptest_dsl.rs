use orb_dsl::{parse, print, DiagnosticKind};
use proptest::prelude::*;

/// Strategy for horizontal whitespace of any width, including none.
fn spacing() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

/// Strategy for identifiers usable as table, column, and type names.
fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("not the using keyword", |s| s != "using")
}

/// Strategy for constraint names, possibly multi-word, never mentioning alias.
fn constraint_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8})?".prop_filter("not routed to alias", |s| !s.contains("alias"))
}

/// Strategy for constraint values, never mentioning alias.
fn constraint_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_']{1,8}".prop_filter("not routed to alias", |s| !s.contains("alias"))
}

proptest! {
    /// Directives parse regardless of the whitespace around their tokens.
    #[test]
    fn directives_accept_arbitrary_spacing(
        name in "[-A-Za-z_]{1,12}",
        value in "[A-Za-z0-9_]{1,12}",
        a in spacing(), b in spacing(), c in spacing(), d in spacing(),
    ) {
        let source = format!("#{a}{name}{b}={c}{value}{d}");
        let parsed = parse(&source);
        prop_assert!(parsed.is_clean());
        prop_assert_eq!(parsed.tree.directive(&name), Some(value.as_str()));
    }

    /// `#` lines with a space inside the value are comments: no directive, no diagnostic.
    #[test]
    fn non_directive_hash_lines_are_silent(text in "[a-z]{1,8} [a-z ]{1,20}") {
        let parsed = parse(&format!("#{text}"));
        prop_assert!(parsed.is_clean());
        prop_assert!(parsed.tree.is_empty());
    }

    /// The parser never panics on arbitrary input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
    }

    /// Every diagnostic points at a real line of the input.
    #[test]
    fn diagnostics_point_into_the_input(input in "([-#\\[\\]a-z :]{0,12}\n){0,12}") {
        let parsed = parse(&input);
        let line_count = input.lines().count();
        for d in &parsed.diagnostics {
            prop_assert!(d.line >= 1 && d.line <= line_count, "line {} of {}", d.line, line_count);
        }
    }

    /// Column order always equals input order.
    #[test]
    fn columns_keep_input_order(names in prop::collection::vec(ident(), 1..8)) {
        let mut source = String::from("[t]\n");
        for name in &names {
            source.push_str(&format!("{name} int\n"));
        }
        let parsed = parse(&source);
        prop_assert!(parsed.is_clean());
        let parsed_names: Vec<String> = parsed.tree.tables[0]
            .columns
            .iter()
            .map(|c| c.name.to_string())
            .collect();
        prop_assert_eq!(parsed_names, names);
    }

    /// Stray lines outside tables are reported one by one.
    #[test]
    fn stray_lines_each_get_a_diagnostic(count in 1usize..6) {
        let source = "junk\n".repeat(count);
        let parsed = parse(&source);
        prop_assert_eq!(parsed.diagnostics.len(), count);
        prop_assert!(parsed
            .diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::InvalidTokenOutsideTable));
    }

    /// print then parse reproduces the tree.
    #[test]
    fn round_trip_property(
        directives in prop::collection::btree_map("[a-z_]{1,8}", "[A-Za-z0-9_]{1,8}", 0..3),
        tables in prop::collection::vec(
            (
                ident(),
                prop::collection::vec(
                    (
                        ident(),
                        ident(),
                        prop::option::of("[A-Z][A-Za-z0-9]{0,6}( [a-z]{1,6})?"),
                        prop::option::of("[a-z_]{1,8}"),
                        prop::collection::vec(
                            (constraint_name(), prop::option::of(constraint_value())),
                            0..3,
                        ),
                    ),
                    0..4,
                ),
            ),
            0..3,
        ),
    ) {
        let mut source = String::new();
        for (k, v) in &directives {
            source.push_str(&format!("#{k}={v}\n"));
        }
        for (table, columns) in &tables {
            source.push_str(&format!("[{table}]\n"));
            for (name, ty, requested, alias, constraints) in columns {
                source.push_str(&format!("{name} {ty}"));
                if let Some(r) = requested {
                    source.push_str(&format!(" using {r}"));
                }
                source.push('\n');
                if let Some(a) = alias {
                    source.push_str(&format!("-alias: {a}\n"));
                }
                for (cname, cvalue) in constraints {
                    match cvalue {
                        Some(v) => source.push_str(&format!("-{cname}: {v}\n")),
                        None => source.push_str(&format!("-{cname}\n")),
                    }
                }
            }
            source.push('\n');
        }

        let first = parse(&source);
        prop_assert!(first.is_clean(), "diagnostics {:?} for:\n{}", first.diagnostics, source);
        prop_assert_eq!(first.tree.tables.len(), tables.len());

        let second = parse(&print(&first.tree));
        prop_assert!(second.is_clean());
        prop_assert_eq!(first.tree, second.tree);
    }
}
