//! Constant tables behind the static views and the demo catalog.
//!
//! DESIGN
//! ======
//! Nothing here is computed at runtime beyond indexing and the rank-to-badge
//! lookup, so views can render straight from `&'static` data.

pub mod impact;
pub mod listings;
pub mod partners;
