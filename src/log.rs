#![allow(unused, reason = "logger")]
//! Logging is compiled in only with the `log` feature.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "generic_uri", $($tt)*);
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "generic_uri", $($tt)*);
    };
}

pub(crate) use {debug, trace};
