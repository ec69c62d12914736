//! 日志宏：启用 `logging` 特性时转发到 tracing，否则为空操作

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::tracing::warn!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::tracing::trace!($($arg)*);
    }};
}
