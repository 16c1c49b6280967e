//! Source column names and the fixed sub-table projections.

use serde::{Deserialize, Serialize};

pub const ORDER_ID: &str = "Order_ID";
pub const CUSTOMER_ID: &str = "Customer_ID";
pub const CUSTOMER_NAME: &str = "Customer_Name";
pub const EMAIL: &str = "Email";
pub const PHONE_NUMBER: &str = "Phone_Number";
pub const PRODUCT_ID: &str = "Product_ID";
pub const PRODUCT_NAME: &str = "Product_Name";
pub const BRAND: &str = "Brand";
pub const CATEGORY: &str = "Category";
pub const PRICE: &str = "Price";
pub const QUANTITY: &str = "Quantity";
pub const ORDER_DATE: &str = "Order_Date";
pub const PAYMENT_METHOD: &str = "Payment_Method";
pub const TRANSACTION_STATUS: &str = "Transaction_Status";
pub const TOTAL_PRICE: &str = "Total_Price";
pub const SHIPPING_ADDRESS: &str = "Shipping_Address";
pub const CITY: &str = "City";
pub const STATE: &str = "State";
pub const COUNTRY: &str = "Country";
pub const POSTAL_CODE: &str = "Postal_Code";

/// Synthetic key generated for the shipping sub-table.
pub const SHIPPING_ID: &str = "Shipping_ID";

/// Every column the source file is expected to carry.
pub const SOURCE_COLUMNS: [&str; 20] = [
    ORDER_ID,
    CUSTOMER_ID,
    CUSTOMER_NAME,
    EMAIL,
    PHONE_NUMBER,
    PRODUCT_ID,
    PRODUCT_NAME,
    BRAND,
    CATEGORY,
    PRICE,
    QUANTITY,
    ORDER_DATE,
    PAYMENT_METHOD,
    TRANSACTION_STATUS,
    TOTAL_PRICE,
    SHIPPING_ADDRESS,
    CITY,
    STATE,
    COUNTRY,
    POSTAL_CODE,
];

/// Rows missing any of these are dropped before decomposition.
pub const REQUIRED_KEYS: [&str; 2] = [ORDER_ID, CUSTOMER_ID];

/// Columns that may hold personal data and are redacted in logs.
pub const PERSONAL_COLUMNS: [&str; 8] = [
    CUSTOMER_NAME,
    EMAIL,
    PHONE_NUMBER,
    SHIPPING_ADDRESS,
    CITY,
    STATE,
    COUNTRY,
    POSTAL_CODE,
];

/// The five sub-tables the source table is decomposed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTableKind {
    Customer,
    Product,
    Orders,
    Payment,
    Shipping,
}

impl SubTableKind {
    /// Decomposition order.
    pub const ALL: [SubTableKind; 5] = [
        Self::Customer,
        Self::Product,
        Self::Orders,
        Self::Payment,
        Self::Shipping,
    ];

    /// Short kind name. Suffixed onto an output name that repeats an earlier one.
    pub fn name(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Product => "product",
            Self::Orders => "orders",
            Self::Payment => "payment",
            Self::Shipping => "shipping",
        }
    }

    /// Source columns projected into this sub-table, in output order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Customer => &[CUSTOMER_ID, CUSTOMER_NAME, EMAIL, PHONE_NUMBER],
            Self::Product => &[PRODUCT_ID, PRODUCT_NAME, BRAND, CATEGORY, PRICE],
            Self::Orders => &[ORDER_ID, CUSTOMER_ID, PRODUCT_ID, QUANTITY, ORDER_DATE],
            Self::Payment => &[ORDER_ID, PAYMENT_METHOD, TRANSACTION_STATUS, TOTAL_PRICE],
            Self::Shipping => &[SHIPPING_ADDRESS, CITY, STATE, COUNTRY, POSTAL_CODE],
        }
    }

    /// Generated key column placed first, for sub-tables without a natural id.
    pub fn synthetic_key(self) -> Option<&'static str> {
        match self {
            Self::Shipping => Some(SHIPPING_ID),
            _ => None,
        }
    }

    /// Final column layout: synthetic key (if any) followed by the projection.
    pub fn output_columns(self) -> Vec<&'static str> {
        self.synthetic_key()
            .into_iter()
            .chain(self.columns().iter().copied())
            .collect()
    }
}
