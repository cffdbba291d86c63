#![allow(unused)]

// Thin wrappers over the `log` facade which vanish entirely when the `log`
// feature is disabled.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

pub(crate) use {debug, trace};
