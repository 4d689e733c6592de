//! Team assembly and persistence.
//!
//! - `TeamBuilder`: toggles characters into a provisional trio
//! - `TeamSelection`: a confirmed, validated list of three IDs
//! - `TeamStore`: where the confirmed team is kept between sessions
//!
//! Battle setup takes a `TeamSelection` explicitly; nothing reads the
//! store behind the caller's back.

pub mod builder;
pub mod store;

pub use builder::{TeamBuilder, TeamSelection, Toggle};
pub use store::{FileTeamStore, MemoryTeamStore, TeamStore, TEAM_STORAGE_KEY};
