//! # Dispatcher configuration.
//!
//! Provides [`Config`], the settings a [`Dispatcher`](crate::Dispatcher) is
//! constructed with. There is no environment or file layer: embedding
//! applications build a `Config` in code, usually from `Config::default()`.

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
///
/// ## Field semantics
/// - `capacity`: Expected number of distinct event names (pre-sizes the registry)
/// - `catch_panics`: Capture handler panics and report them via `tracing`
#[derive(Clone, Debug)]
pub struct Config {
    /// Expected number of distinct event names.
    ///
    /// Only a sizing hint; the registry grows past it as needed.
    pub capacity: usize,

    /// Capture panics raised inside handler bodies.
    ///
    /// - `true`: the panic is caught in the handler's task and logged with `warn!`
    /// - `false`: the panic reaches the runtime's panic hook (task aborts)
    ///
    /// The handler's completion signal fires in both cases, and
    /// [`dispatch`](crate::Dispatcher::dispatch) never reports the failure.
    pub catch_panics: bool,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `capacity = 64`
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            capacity: 64,
            catch_panics: true,
        }
    }
}
