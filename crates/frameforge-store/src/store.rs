use std::collections::HashMap;
use std::ops::Deref;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

/// Value delivered to watchers when their key is removed.
pub const REMOVED_SENTINEL: i64 = 0;

#[derive(Debug, Default)]
struct StoreState {
    values: HashMap<String, i64>,
    watchers: HashMap<String, Vec<WatcherSlot>>,
    next_watcher_id: u64,
}

#[derive(Debug)]
struct WatcherSlot {
    id: u64,
    tx: SyncSender<i64>,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<StoreState>,
    changed: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Live subscription to one key, returned by [`CoordinationStore::watch`].
///
/// Derefs to the underlying [`Receiver`]. Dropping it unregisters the
/// subscription.
#[derive(Debug)]
pub struct Watcher {
    rx: Receiver<i64>,
    key: String,
    id: u64,
    shared: Weak<Shared>,
}

impl Watcher {
    /// Key this watcher is registered for.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Deref for Watcher {
    type Target = Receiver<i64>;

    fn deref(&self) -> &Self::Target {
        &self.rx
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let mut state = shared.lock();
        if let Some(slots) = state.watchers.get_mut(&self.key) {
            slots.retain(|slot| slot.id != self.id);
            if slots.is_empty() {
                state.watchers.remove(&self.key);
            }
        }
    }
}

/// Read-only view of the store contents, handed to wait predicates.
///
/// The view is only valid while the store lock is held, so predicates must
/// not call back into the store.
#[derive(Debug, Clone, Copy)]
pub struct StoreView<'a> {
    values: &'a HashMap<String, i64>,
}

impl StoreView<'_> {
    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Concurrency-safe map from string keys to integers.
///
/// One mutex guards both the values and the watcher lists, and a condition
/// variable on that mutex backs the blocking waits. Every mutation wakes all
/// waiters; each waiter re-checks its own predicate.
#[derive(Debug, Default)]
pub struct CoordinationStore {
    shared: Arc<Shared>,
}

impl CoordinationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.shared.lock()
    }

    /// Insert or replace the value for `key`.
    ///
    /// Watchers of `key` get the new value if their slot is free; a watcher
    /// that has not consumed the previous notification misses this one.
    pub fn add(&self, key: &str, value: i64) {
        let mut state = self.lock();
        state.values.insert(key.to_string(), value);
        notify_watchers(&mut state, key, value);
        tracing::trace!(key, value, "store value set");
        drop(state);
        self.shared.changed.notify_all();
    }

    /// Remove the value for `key`, notifying watchers with `0` first.
    pub fn subtract(&self, key: &str) {
        let mut state = self.lock();
        notify_watchers(&mut state, key, REMOVED_SENTINEL);
        let removed = state.values.remove(key);
        tracing::trace!(key, existed = removed.is_some(), "store value removed");
        drop(state);
        self.shared.changed.notify_all();
    }

    /// Current value for `key`.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.lock().values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    /// Number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().values.is_empty()
    }

    /// One-shot snapshot of `key`.
    ///
    /// The receiver yields the current value if one is present and is then
    /// disconnected. It is not registered for later changes; use
    /// [`watch`](Self::watch) for that.
    pub fn observe(&self, key: &str) -> Receiver<i64> {
        let (tx, rx) = mpsc::sync_channel(1);
        if let Some(value) = self.get(key) {
            let _ = tx.try_send(value);
        }
        rx
    }

    /// Subscribe to future changes of `key`.
    ///
    /// The channel holds one pending value; notifications that arrive while
    /// it is full are dropped. Dropping the [`Watcher`] unregisters it.
    pub fn watch(&self, key: &str) -> Watcher {
        let (tx, rx) = mpsc::sync_channel(1);
        let mut state = self.lock();
        let id = state.next_watcher_id;
        state.next_watcher_id += 1;
        state
            .watchers
            .entry(key.to_string())
            .or_default()
            .push(WatcherSlot { id, tx });
        Watcher {
            rx,
            key: key.to_string(),
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Number of live watchers registered for `key`.
    pub fn watcher_count(&self, key: &str) -> usize {
        self.lock().watchers.get(key).map_or(0, Vec::len)
    }

    /// Block until `predicate` returns true.
    ///
    /// The predicate is evaluated under the store lock, once on entry and
    /// again after every wake-up. There is no timeout; see
    /// [`wait_for_condition_timeout`](Self::wait_for_condition_timeout).
    pub fn wait_for_condition<F>(&self, mut predicate: F)
    where
        F: FnMut(StoreView<'_>) -> bool,
    {
        let guard = self.lock();
        let _guard = self
            .shared
            .changed
            .wait_while(guard, |state| {
                !predicate(StoreView {
                    values: &state.values,
                })
            })
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Block until `predicate` returns true or `timeout` elapses.
    ///
    /// Returns true when the predicate was satisfied.
    pub fn wait_for_condition_timeout<F>(&self, mut predicate: F, timeout: Duration) -> bool
    where
        F: FnMut(StoreView<'_>) -> bool,
    {
        let guard = self.lock();
        let (_guard, result) = self
            .shared
            .changed
            .wait_timeout_while(guard, timeout, |state| {
                !predicate(StoreView {
                    values: &state.values,
                })
            })
            .unwrap_or_else(PoisonError::into_inner);
        !result.timed_out()
    }

    /// Wake one blocked waiter without changing any value.
    pub fn signal_one(&self) {
        let _state = self.lock();
        self.shared.changed.notify_one();
    }

    /// Wake every blocked waiter without changing any value.
    pub fn broadcast_all(&self) {
        let _state = self.lock();
        self.shared.changed.notify_all();
    }
}

fn notify_watchers(state: &mut StoreState, key: &str, value: i64) {
    let Some(watchers) = state.watchers.get_mut(key) else {
        return;
    };
    watchers.retain(|slot| {
        !matches!(
            slot.tx.try_send(value),
            Err(TrySendError::Disconnected(_))
        )
    });
    if watchers.is_empty() {
        state.watchers.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    use super::*;

    const BOUND: Duration = Duration::from_secs(5);

    #[test]
    fn add_get_subtract() {
        let store = CoordinationStore::new();
        assert!(store.is_empty());
        store.add("k", 3);
        store.add("k", 4);
        assert_eq!(store.get("k"), Some(4));
        assert_eq!(store.len(), 1);
        store.subtract("k");
        assert_eq!(store.get("k"), None);
        assert!(!store.contains("k"));
    }

    #[test]
    fn observe_is_a_snapshot() {
        let store = CoordinationStore::new();
        store.add("k", 9);
        let rx = store.observe("k");
        store.add("k", 10);
        assert_eq!(rx.recv_timeout(BOUND), Ok(9));
        assert!(rx.recv_timeout(Duration::from_millis(20)).is_err());
    }

    #[test]
    fn observe_missing_key_is_empty() {
        let store = CoordinationStore::new();
        let rx = store.observe("missing");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn watchers_receive_updates() {
        let store = CoordinationStore::new();
        let first = store.watch("k");
        let second = store.watch("k");
        store.add("k", 1);
        assert_eq!(first.try_recv(), Ok(1));
        assert_eq!(second.try_recv(), Ok(1));
    }

    #[test]
    fn slow_watcher_misses_notification() {
        let store = CoordinationStore::new();
        let rx = store.watch("k");
        store.add("k", 1);
        store.add("k", 2);
        assert_eq!(rx.try_recv(), Ok(1));
        assert!(rx.try_recv().is_err());
        assert_eq!(store.get("k"), Some(2));
    }

    #[test]
    fn deletion_notifies_with_sentinel() {
        let store = CoordinationStore::new();
        let rx = store.watch("k");
        store.add("k", 7);
        assert_eq!(rx.try_recv(), Ok(7));
        store.subtract("k");
        assert_eq!(rx.try_recv(), Ok(REMOVED_SENTINEL));
        assert!(!store.contains("k"));
    }

    #[test]
    fn dropped_watchers_unregister_immediately() {
        let store = CoordinationStore::new();
        let kept = store.watch("k");
        drop(store.watch("k"));
        assert_eq!(store.watcher_count("k"), 1);
        store.add("k", 1);
        assert_eq!(kept.try_recv(), Ok(1));
        drop(kept);
        assert_eq!(store.watcher_count("k"), 0);
    }

    #[test]
    fn watch_churn_on_unwritten_key_does_not_grow() {
        let store = CoordinationStore::new();
        for _ in 0..10_000 {
            drop(store.watch("quiet"));
        }
        assert_eq!(store.watcher_count("quiet"), 0);

        let live: Vec<Watcher> = (0..3).map(|_| store.watch("quiet")).collect();
        assert_eq!(store.watcher_count("quiet"), 3);
        drop(live);
        assert_eq!(store.watcher_count("quiet"), 0);
    }

    #[test]
    fn watcher_outliving_store_drops_cleanly() {
        let store = CoordinationStore::new();
        let watcher = store.watch("k");
        assert_eq!(watcher.key(), "k");
        drop(store);
        assert!(watcher.try_recv().is_err());
    }

    #[test]
    fn waiter_wakes_on_matching_add_only() {
        let store = Arc::new(CoordinationStore::new());
        let (done_tx, done_rx) = mpsc::channel();

        let waiter = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.wait_for_condition(|view| view.get("k") == Some(5));
                done_tx.send(()).expect("test receiver should be alive");
            })
        };

        store.add("other", 1);
        store.add("k", 4);
        assert!(done_rx.recv_timeout(Duration::from_millis(100)).is_err());

        store.add("k", 5);
        done_rx
            .recv_timeout(BOUND)
            .expect("waiter should wake after matching add");
        waiter.join().expect("waiter thread should finish");
    }

    #[test]
    fn wait_returns_immediately_when_already_true() {
        let store = CoordinationStore::new();
        store.add("ready", 1);
        store.wait_for_condition(|view| view.contains("ready"));
    }

    #[test]
    fn wait_with_timeout_expires() {
        let store = CoordinationStore::new();
        let satisfied =
            store.wait_for_condition_timeout(|view| view.contains("never"), Duration::from_millis(30));
        assert!(!satisfied);
    }

    #[test]
    fn wait_with_timeout_succeeds() {
        let store = Arc::new(CoordinationStore::new());
        let setter = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                store.add("k", 1);
            })
        };
        assert!(store.wait_for_condition_timeout(|view| view.get("k") == Some(1), BOUND));
        setter.join().expect("setter thread should finish");
    }

    #[test]
    fn broadcast_forces_re_evaluation() {
        let store = Arc::new(CoordinationStore::new());
        let stop = Arc::new(AtomicBool::new(false));
        let (done_tx, done_rx) = mpsc::channel();

        let waiter = {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                store.wait_for_condition(|_| stop.load(Ordering::SeqCst));
                done_tx.send(()).expect("test receiver should be alive");
            })
        };

        assert!(done_rx.recv_timeout(Duration::from_millis(50)).is_err());
        stop.store(true, Ordering::SeqCst);
        // The waiter may not have parked yet; keep broadcasting until it sees the flag.
        let mut woke = false;
        for _ in 0..100 {
            store.broadcast_all();
            if done_rx.recv_timeout(Duration::from_millis(50)).is_ok() {
                woke = true;
                break;
            }
        }
        assert!(woke, "waiter should observe the stop flag");
        waiter.join().expect("waiter thread should finish");
    }

    #[test]
    fn signal_one_wakes_a_waiter() {
        let store = Arc::new(CoordinationStore::new());
        let stop = Arc::new(AtomicBool::new(false));
        let (done_tx, done_rx) = mpsc::channel();

        let waiter = {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                store.wait_for_condition(|_| stop.load(Ordering::SeqCst));
                done_tx.send(()).expect("test receiver should be alive");
            })
        };

        stop.store(true, Ordering::SeqCst);
        let mut woke = false;
        for _ in 0..100 {
            store.signal_one();
            if done_rx.recv_timeout(Duration::from_millis(50)).is_ok() {
                woke = true;
                break;
            }
        }
        assert!(woke);
        waiter.join().expect("waiter thread should finish");
    }
}
