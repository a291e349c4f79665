//! Early-return macro for `HPlotError`

/// Return a validation error naming `field` unless `cond` holds
///
/// ```
/// use hplot_common::{ensure_field, Result};
///
/// fn check_order(order: u32) -> Result<u32> {
///     ensure_field!(order > 0, "order", "Hilbert order must be at least 1");
///     Ok(order)
/// }
/// assert!(check_order(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_field {
    ($cond:expr, $field:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::HPlotError::validation_field(format!($($arg)+), $field));
        }
    };
}
