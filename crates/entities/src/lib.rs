//! In-memory entities with validated state: a 2D point, a car with a fuel tank,
//! and a combat unit.
//!
//! Conventions
//! - Every fallible operation returns `Result<_, EntityError>` and checks all of
//!   its preconditions before touching state.
//! - `Display` output is the stable textual form callers (the CLI, tests) rely on;
//!   numbers render as in [`num::Num`].
//! - State changes emit `tracing` events at `debug`, rejected operations at `warn`.

pub mod car;
pub mod error;
pub mod num;
pub mod point;
pub mod route;
pub mod unit;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use car::{Car, CarCfg, Refill, Trip};
pub use error::{EntityError, ErrorKind};
pub use point::{Axis, Point};
pub use unit::{exchange, Strike, StrikeKind, Unit};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::car::{Car, CarCfg, Refill, Trip};
    pub use crate::error::{EntityError, ErrorKind};
    pub use crate::point::{Axis, Point};
    pub use crate::route::{draw_route, route_length, ReplayToken, RouteCfg};
    pub use crate::unit::{exchange, Strike, StrikeKind, Unit};
}
