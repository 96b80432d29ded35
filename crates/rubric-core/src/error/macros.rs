//! Error macros for rubric tooling

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RubricError::UsageError($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::RubricError::UsageError(format!($fmt, $($arg)*)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RubricError::invalid_value($context, $value))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::RubricError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for creating decode errors tied to a document path
#[macro_export]
macro_rules! bail_decode {
    ($path:expr, $($arg:tt)+) => {
        return Err($crate::error::RubricError::decode($path, format!($($arg)+)))
    };
}
