//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌─────────────┐      ┌──────────────┐      ┌──────────────┐
//!   │  CLI / CSV  │ ───► │ Application  │ ───► │ SQLite store │
//!   │  adapters   │      │ roster/load  │      │   adapter    │
//!   └─────────────┘      └──────────────┘      └──────────────┘
//!         ▲                     │
//!         │                     ▼
//!  port::RosterOperator   port::RosterStore
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::operator::{DatasetSources, OpenRequest, OpenedRoster, RosterOperator};
pub use outbound::store::RosterStore;
