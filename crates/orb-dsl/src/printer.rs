use orb_core::types::{Column, Table, Tree};

/// Render a tree back to source text.
///
/// Directives come first, one per line in key order, followed by each table
/// preceded by a blank line. For documents whose free-text values contain
/// no `#`, `[`, `]` or `-`, parsing the output yields an equal tree.
pub fn print(tree: &Tree) -> String {
    let mut output = String::new();
    for (name, value) in &tree.directives {
        output.push('#');
        output.push_str(name);
        output.push('=');
        output.push_str(value);
        output.push('\n');
    }

    for table in &tree.tables {
        output.push('\n');
        print_table_into(table, &mut output);
    }
    output
}

/// Render a single table: its header, then each column with its sub-lines.
pub fn print_table(table: &Table) -> String {
    let mut output = String::new();
    print_table_into(table, &mut output);
    output
}

fn print_table_into(table: &Table, output: &mut String) {
    output.push_str(&table.to_string());
    output.push('\n');
    for column in &table.columns {
        print_column(column, output);
    }
}

fn print_column(column: &Column, output: &mut String) {
    output.push_str(&column.to_string());
    output.push('\n');

    if let Some(alias) = &column.alias {
        output.push_str("-alias: ");
        output.push_str(alias);
        output.push('\n');
    }

    for constraint in &column.constraints {
        output.push('-');
        output.push_str(&constraint.to_string());
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use orb_core::types::{ColumnName, Constraint, TableName};

    use super::*;

    fn users() -> Table {
        Table::with_columns(
            TableName::new("users").unwrap(),
            vec![
                Column::new(ColumnName::new("uid").unwrap(), "int")
                    .with_requested_type("SERIAL")
                    .with_alias("id")
                    .with_constraint(Constraint::new("primary key")),
                Column::new(ColumnName::new("name").unwrap(), "string")
                    .with_constraint(Constraint::with_value("default", "'anon'")),
            ],
        )
    }

    #[test]
    fn print_table_layout() {
        assert_eq!(
            print_table(&users()),
            "[users]\nuid int using SERIAL\n-alias: id\n-primary key\nname string\n-default: 'anon'\n"
        );
    }

    #[test]
    fn print_empty_tree() {
        assert_eq!(print(&Tree::new()), "");
    }

    #[test]
    fn print_directives_in_key_order_then_tables() {
        let mut tree = Tree::new();
        tree.set_directive("language", "go");
        tree.set_directive("database", "postgres");
        tree.tables.push(Table::new(TableName::new("a").unwrap()));
        tree.tables.push(Table::new(TableName::new("b").unwrap()));
        assert_eq!(
            print(&tree),
            "#database=postgres\n#language=go\n\n[a]\n\n[b]\n"
        );
    }
}
