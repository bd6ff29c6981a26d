#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "game")]
pub mod game;

#[cfg(feature = "balance")]
pub mod balance;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "search")]
pub mod search;

/// Forwards to `tracing::trace!` when the `tracing` feature is on, otherwise expands to nothing.
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

#[allow(unused_imports)]
pub(crate) use trace;
