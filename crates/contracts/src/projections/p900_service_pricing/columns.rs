//! Column layout of the pricing table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlignment {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub label: &'static str,
    /// Field of [`super::TableRow`] shown in the column
    pub field_name: &'static str,
    pub column_type: ColumnType,
    pub alignment: CellAlignment,
    /// Hides sorting/resizing actions in the header
    pub hide_default_actions: bool,
}

pub fn table_columns() -> [TableColumn; 2] {
    [
        TableColumn {
            label: "Type",
            field_name: "serviceType",
            column_type: ColumnType::Text,
            alignment: CellAlignment::Left,
            hide_default_actions: true,
        },
        TableColumn {
            label: "Value",
            field_name: "formattedAmount",
            column_type: ColumnType::Text,
            alignment: CellAlignment::Center,
            hide_default_actions: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        let [type_col, value_col] = table_columns();
        assert_eq!(type_col.label, "Type");
        assert_eq!(type_col.alignment, CellAlignment::Left);
        assert_eq!(value_col.label, "Value");
        assert_eq!(value_col.field_name, "formattedAmount");
        assert_eq!(value_col.alignment, CellAlignment::Center);
        assert!(table_columns().iter().all(|c| c.hide_default_actions));
        assert!(table_columns()
            .iter()
            .all(|c| c.column_type == ColumnType::Text));
    }
}
