//! Decomposition of the normalized order table into sub-tables.
//!
//! Each sub-table is a projection onto a fixed column list followed by removal
//! of exact duplicate rows. Deduplication runs after projection, so two orders
//! by the same customer collapse to one customer row but stay two order rows.

use std::collections::HashSet;

use ecom_common::cell_key;
use ecom_model::{SubTable, SubTableKind};
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use crate::error::{Result, TransformError};

/// The five sub-tables, in decomposition order.
#[derive(Debug, Clone)]
pub struct DecomposedTables {
    pub customer: SubTable,
    pub product: SubTable,
    pub orders: SubTable,
    pub payment: SubTable,
    pub shipping: SubTable,
}

impl DecomposedTables {
    pub fn get(&self, kind: SubTableKind) -> &SubTable {
        match kind {
            SubTableKind::Customer => &self.customer,
            SubTableKind::Product => &self.product,
            SubTableKind::Orders => &self.orders,
            SubTableKind::Payment => &self.payment,
            SubTableKind::Shipping => &self.shipping,
        }
    }

    /// Tables in fixed order: customer, product, orders, payment, shipping.
    pub fn iter(&self) -> impl Iterator<Item = &SubTable> {
        SubTableKind::ALL.into_iter().map(|kind| self.get(kind))
    }

    pub fn into_array(self) -> [SubTable; 5] {
        [
            self.customer,
            self.product,
            self.orders,
            self.payment,
            self.shipping,
        ]
    }
}

/// Select exactly `columns`, in the given order, and drop duplicate rows.
pub fn project(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    if let Some(missing) = columns.iter().find(|name| df.column(name).is_err()) {
        return Err(TransformError::ColumnNotFound {
            column: (*missing).to_string(),
        });
    }
    let selected = df.select(columns.iter().copied())?;
    dedupe_rows(&selected)
}

/// Drop rows equal to an earlier row across every column.
///
/// The first occurrence is kept and relative order is preserved. Nulls compare
/// equal to nulls but not to empty strings. Applying this to its own output
/// returns the same table.
pub fn dedupe_rows(df: &DataFrame) -> Result<DataFrame> {
    let columns = df.get_columns();
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::with_capacity(df.height());
    let keep: Vec<bool> = (0..df.height())
        .map(|idx| {
            let key: Vec<Option<String>> = columns
                .iter()
                .map(|column| cell_key(column.get(idx).unwrap_or(AnyValue::Null)))
                .collect();
            seen.insert(key)
        })
        .collect();

    if keep.iter().all(|kept| *kept) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Insert `name` as the first column, holding the 1-based row position.
pub fn assign_synthetic_key(df: &DataFrame, name: &str) -> Result<DataFrame> {
    let height = i64::try_from(df.height()).map_err(|_| TransformError::DataFrame {
        message: format!("too many rows for synthetic key '{name}'"),
    })?;
    let ids: Vec<i64> = (1..=height).collect();
    let mut out = df.clone();
    out.insert_column(0, Series::new(name.into(), ids))?;
    Ok(out)
}

/// Build one sub-table from the normalized source table.
pub fn decompose_table(df: &DataFrame, kind: SubTableKind) -> Result<SubTable> {
    let mut data = project(df, kind.columns())?;
    if let Some(key) = kind.synthetic_key() {
        data = assign_synthetic_key(&data, key)?;
    }
    debug!(
        table = kind.name(),
        source_rows = df.height(),
        records = data.height(),
        "sub-table built"
    );
    SubTable::from_frame(data).ok_or_else(|| TransformError::DataFrame {
        message: format!("sub-table '{}' has no columns", kind.name()),
    })
}

/// Keep `table.name` unless an earlier table already took it (ignoring case),
/// in which case append the kind name: `Order` becomes `Order_payment`.
fn claim_name(table: &mut SubTable, kind: SubTableKind, taken: &mut HashSet<String>) {
    if !taken.insert(table.name.to_lowercase()) {
        table.name = format!("{}_{}", table.name, kind.name());
        taken.insert(table.name.to_lowercase());
    }
}

/// Split the normalized source table into its five sub-tables.
///
/// Each table is named after its first column. Orders and payment both start
/// with `Order_ID`, so payment is written as `Order_payment`.
pub fn decompose(df: &DataFrame) -> Result<DecomposedTables> {
    let mut taken = HashSet::new();
    let mut build = |kind: SubTableKind| -> Result<SubTable> {
        let mut table = decompose_table(df, kind)?;
        claim_name(&mut table, kind, &mut taken);
        Ok(table)
    };
    Ok(DecomposedTables {
        customer: build(SubTableKind::Customer)?,
        product: build(SubTableKind::Product)?,
        orders: build(SubTableKind::Orders)?,
        payment: build(SubTableKind::Payment)?,
        shipping: build(SubTableKind::Shipping)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn};

    fn frame() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("a".into(), vec![Some(1i64), Some(1), Some(2), None, None]).into_column(),
            Series::new("b".into(), vec![Some("x"), Some("x"), Some("x"), None, Some("")])
                .into_column(),
            Series::new("c".into(), vec![10i64, 20, 30, 40, 50]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn project_keeps_requested_order() {
        let out = project(&frame(), &["b", "a"]).unwrap();
        let names: Vec<&str> = out.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn project_dedupes_after_selection() {
        let out = project(&frame(), &["a", "b"]).unwrap();
        // (1,x) twice collapses; (null,null) and (null,"") stay distinct
        assert_eq!(out.height(), 4);
        let full = project(&frame(), &["a", "b", "c"]).unwrap();
        assert_eq!(full.height(), 5);
    }

    #[test]
    fn project_missing_column() {
        let result = project(&frame(), &["a", "zzz"]);
        assert!(matches!(
            result,
            Err(TransformError::ColumnNotFound { column }) if column == "zzz"
        ));
    }

    #[test]
    fn synthetic_key_is_first_and_one_based() {
        let out = assign_synthetic_key(&frame(), "Row_ID").unwrap();
        assert_eq!(out.get_column_names()[0].as_str(), "Row_ID");
        let ids: Vec<Option<i64>> = out.column("Row_ID").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }

    #[test]
    fn synthetic_key_on_empty_table() {
        let empty = frame().head(Some(0));
        let out = assign_synthetic_key(&empty, "Row_ID").unwrap();
        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), 4);
    }

    #[test]
    fn repeated_name_gets_kind_suffix() {
        let mut taken = HashSet::new();
        let mut orders = SubTable::new("Order", frame());
        let mut payment = SubTable::new("Order", frame());
        let mut shipping = SubTable::new("order", frame());
        claim_name(&mut orders, SubTableKind::Orders, &mut taken);
        claim_name(&mut payment, SubTableKind::Payment, &mut taken);
        claim_name(&mut shipping, SubTableKind::Shipping, &mut taken);
        assert_eq!(orders.name, "Order");
        assert_eq!(payment.name, "Order_payment");
        assert_eq!(shipping.name, "order_shipping");
    }
}
