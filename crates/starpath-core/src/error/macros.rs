//! Error macros for starpath

/// Return `InvalidIndex` unless `$index < $len`
#[macro_export]
macro_rules! ensure_index {
    ($index:expr, $len:expr) => {
        if $index >= $len {
            return Err($crate::error::StarpathError::invalid_index($index, $len));
        }
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::StarpathError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::StarpathError::unsupported(
            $context, $value, $supported,
        ))
    };
}
