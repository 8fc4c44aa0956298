//! Reusable UI components.

mod confirm_dialog;
mod header;
mod notice;
mod sidebar;
mod stat_card;
mod status_badge;

pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use notice::Notice;
pub use sidebar::Sidebar;
pub use stat_card::{StatAccent, StatCard};
pub use status_badge::StatusBadge;
