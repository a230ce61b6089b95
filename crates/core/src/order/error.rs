use thiserror::Error;

/// Errors produced when validating an incoming order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        value: i64,
    },
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Order must contain at least one item")]
    NoItems,
    #[error("Goods total mismatch: goods_total={goods_total}, items total={items_total}")]
    GoodsTotalMismatch { goods_total: i64, items_total: i64 },
    #[error("Sum of item totals overflows")]
    ItemsTotalOverflow,
    #[error("Order creation date is in the future: {0}")]
    CreatedInFuture(String),
}
