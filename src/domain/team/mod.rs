//! Team module - Roster members and the admin dashboard summary.

mod summary;

pub use summary::{ColorCount, MemberSummary, TeamMember, TeamSummary};
