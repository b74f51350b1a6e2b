//! # Market List Core
//!
//! Headless state machine behind the Home screen's market table. Everything
//! in this module is pure: no locks, no rendering, no I/O. The egui layer
//! feeds it discrete events (keystroke, submit, sentinel visibility, data
//! refresh) and reads back which rows to draw.
//!
//! ## Components
//!
//! - [`search`]: substring matching for the live suggestion overlay and the
//!   committed name filter
//! - [`pagination`]: visible-row accounting for infinite scroll / "Load More"
//! - [`list`]: the [`list::MarketList`] orchestrator combining both with the
//!   upstream coin data
//!
//! ## Data flow
//!
//! ```text
//! upstream refresh ──► MarketList::set_source ──► committed list re-derived,
//!                                                 pagination reset
//! keystroke        ──► MarketList::edit_query ──► suggestion overlay updated
//! submit           ──► MarketList::commit     ──► name filter applied,
//!                                                 scroll-to-results signal
//! scroll sentinel  ──► MarketList::sentinel_reached ──► next page revealed
//!                                                       (browse mode only)
//! ```

pub mod list;
pub mod pagination;
pub mod search;

pub use list::{ListStatus, MarketList, ViewMode};
pub use pagination::PaginationController;
