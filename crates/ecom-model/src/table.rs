//! Named sub-table frames.

use polars::prelude::DataFrame;

/// A projection of the source table, ready to be written.
///
/// `name` is the output file stem, normally derived from the first column via
/// [`derive_table_name`].
#[derive(Debug, Clone)]
pub struct SubTable {
    pub name: String,
    pub data: DataFrame,
}

impl SubTable {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Wrap a frame, naming it after its first column.
    ///
    /// Returns `None` for a frame without columns.
    pub fn from_frame(data: DataFrame) -> Option<Self> {
        let name = data
            .get_column_names()
            .first()
            .map(|column| derive_table_name(column.as_str()).to_string())?;
        Some(Self::new(name, data))
    }

    /// Returns the number of records in the table.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}

/// Table name for a frame whose first column is `first_column`.
///
/// The part before the first underscore, case preserved.
///
/// ```
/// use ecom_model::derive_table_name;
///
/// assert_eq!(derive_table_name("Customer_ID"), "Customer");
/// assert_eq!(derive_table_name("Shipping_ID"), "Shipping");
/// assert_eq!(derive_table_name("City"), "City");
/// ```
pub fn derive_table_name(first_column: &str) -> &str {
    first_column
        .split('_')
        .next()
        .unwrap_or(first_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SubTableKind;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn frame(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec![1i64, 2]).into_column())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn from_frame_uses_first_column_prefix() {
        let table = SubTable::from_frame(frame(&["Product_ID", "Price"])).unwrap();
        assert_eq!(table.name, "Product");
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.column_names(), vec!["Product_ID", "Price"]);
    }

    #[test]
    fn from_frame_without_columns() {
        assert!(SubTable::from_frame(DataFrame::empty()).is_none());
    }

    #[test]
    fn derive_table_name_keeps_case() {
        assert_eq!(derive_table_name("order_id"), "order");
        assert_eq!(derive_table_name("_leading"), "");
    }

    #[test]
    fn kind_names_do_not_collide() {
        let names: std::collections::BTreeSet<_> =
            SubTableKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), 5);
        // First-column derivation would map both of these to "Order".
        assert_eq!(
            derive_table_name(SubTableKind::Orders.columns()[0]),
            derive_table_name(SubTableKind::Payment.columns()[0])
        );
    }
}
