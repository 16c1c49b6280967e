use ecom_common::is_blank;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::{Result, TransformError};

/// Remove rows where any of `keys` is null or blank.
///
/// Returns the kept rows, in their original order, and the number of rows removed.
pub fn drop_missing_keys(df: &DataFrame, keys: &[&str]) -> Result<(DataFrame, usize)> {
    let columns = keys
        .iter()
        .map(|key| {
            df.column(key).map_err(|_| TransformError::ColumnNotFound {
                column: (*key).to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let keep: Vec<bool> = (0..df.height())
        .map(|idx| {
            columns
                .iter()
                .all(|column| !is_blank(&column.get(idx).unwrap_or(AnyValue::Null)))
        })
        .collect();
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped == 0 {
        return Ok((df.clone(), 0));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok((df.filter(&mask)?, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn orders() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new(
                "Order_ID".into(),
                vec![Some("A1"), None, Some("A3"), Some("  ")],
            )
            .into_column(),
            Series::new("Customer_ID".into(), vec![Some(1i64), Some(2), None, Some(4)])
                .into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn drops_null_and_blank_keys() {
        let (cleaned, dropped) = drop_missing_keys(&orders(), &["Order_ID", "Customer_ID"]).unwrap();
        assert_eq!(dropped, 3);
        assert_eq!(cleaned.height(), 1);
        let ids = cleaned.column("Order_ID").unwrap().str().unwrap();
        assert_eq!(ids.get(0), Some("A1"));
    }

    #[test]
    fn single_key() {
        let (cleaned, dropped) = drop_missing_keys(&orders(), &["Customer_ID"]).unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(cleaned.height(), 3);
    }

    #[test]
    fn missing_key_column() {
        let result = drop_missing_keys(&orders(), &["Order_ID", "Email"]);
        assert!(matches!(
            result,
            Err(TransformError::ColumnNotFound { column }) if column == "Email"
        ));
    }
}
