//! Logging facilities for slidein.
//!
//! The library is instrumented with the `tracing` crate. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The library itself never installs a subscriber.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=slidein::engine=trace`.
pub mod targets {
    /// Foundation crate target.
    pub const CORE: &str = "slidein_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "slidein_core::signal";
    /// Transition engine target.
    pub const ENGINE: &str = "slidein::engine";
    /// Gesture interaction controller target.
    pub const INTERACTION: &str = "slidein::interaction";
    /// Presenter composition layer target.
    pub const PRESENTER: &str = "slidein::presenter";
}
