//! Session-scoped record stores shared across routes.
//!
//! Each entity kind gets one reducer-backed store provided as a Yew
//! context, so the New User route can append to the same collection
//! the Users table renders.

use std::rc::Rc;

use records::{Record, RecordStore, Sale, User};
use yew::prelude::*;

/// Store plus the dismissible notice raised by failed mutations.
#[derive(Clone, PartialEq)]
pub struct StoreState<R: Record + Clone + PartialEq> {
    pub store: RecordStore<R>,
    pub notice: Option<String>,
}

impl<R: Record + Clone + PartialEq> StoreState<R> {
    pub fn seeded(rows: Vec<R>) -> Self {
        Self {
            store: RecordStore::seeded(rows),
            notice: None,
        }
    }
}

/// Mutations dispatched against a [`StoreState`].
pub enum StoreAction<R> {
    /// Append an already-validated record.
    Insert(R),
    /// Delete the record with the given id.
    Remove(String),
    /// Clear the current notice.
    DismissNotice,
}

impl<R: Record + Clone + PartialEq> Reducible for StoreState<R> {
    type Action = StoreAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::Insert(record) => {
                if let Err(err) = next.store.add(record) {
                    next.notice = Some(err.to_string());
                }
            }
            StoreAction::Remove(id) => {
                if next.store.remove(&id).is_none() {
                    next.notice = Some(format!("No se encontró el registro con id {id}"));
                }
            }
            StoreAction::DismissNotice => next.notice = None,
        }
        Rc::new(next)
    }
}

/// Context handle for the users collection.
pub type UsersStore = UseReducerHandle<StoreState<User>>;

/// Context handle for the sales collection.
pub type SalesStore = UseReducerHandle<StoreState<Sale>>;
