//! Immigration point calculators: CLB conversion plus the CRS, BC PNP and
//! FSW scoring engines, with the service facade and HTTP router that expose
//! them.
//!
//! Every engine is a pure function of its input record: no I/O, no shared
//! mutable state, no failure modes. Lookup tables are total over their
//! domains, so malformed or partial profiles degrade to lower scores instead
//! of erroring; only the service boundary validates.

pub mod bcpnp;
pub mod breakdown;
pub mod crs;
pub mod fsw;
pub mod language;
pub mod router;
pub mod service;

pub use breakdown::{BreakdownEntry, CategoryBreakdown, FlatBreakdown, ScoreBreakdown};
pub use router::calculator_router;
pub use service::{CalculatorError, CalculatorService};
