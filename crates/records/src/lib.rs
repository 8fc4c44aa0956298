//! Core types for the Pet Manager admin interface.
//!
//! This crate holds everything the screens share: the entity types
//! (users and sales), the generic in-memory record store with its
//! search filter, pagination helpers, form drafts with validation,
//! and the seed data shown on first load.

mod error;
mod page;
mod sale;
mod seed;
mod store;
mod user;

pub use error::{FieldError, StoreError, ValidationErrors};
pub use page::{clamp_page, page_count, slice, DEFAULT_PAGE_SIZE};
pub use sale::{Sale, SaleDraft, SaleStatus};
pub use seed::{sample_sales, sample_users};
pub use store::{Record, RecordStore};
pub use user::{Role, User, UserDraft};
