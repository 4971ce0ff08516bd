//! Reactive key to integer coordination store.
//!
//! A small piece of process-wide shared state that request handlers can set,
//! read, watch and block against:
//! - [`CoordinationStore::add`] / [`CoordinationStore::subtract`] mutate a key and
//!   notify that key's watchers, then wake every blocked waiter
//! - [`CoordinationStore::watch`] registers a live, best-effort subscription that
//!   unregisters itself when dropped
//! - [`CoordinationStore::observe`] takes a one-shot snapshot
//! - [`CoordinationStore::wait_for_condition`] blocks until a predicate holds

pub mod store;

pub use store::{CoordinationStore, StoreView, Watcher, REMOVED_SENTINEL};
