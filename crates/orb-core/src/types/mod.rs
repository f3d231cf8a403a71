mod column;
mod column_name;
mod constraint;
mod table;
mod table_name;
mod tree;

pub use column::Column;
pub use column_name::ColumnName;
pub use constraint::Constraint;
pub use table::Table;
pub use table_name::TableName;
pub use tree::Tree;
