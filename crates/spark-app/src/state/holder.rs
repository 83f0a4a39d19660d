//! Observable state holder.
//!
//! Each presenter owns one [`StateHolder`]. Consumers read immutable
//! snapshots or subscribe to change notifications; they never mutate the
//! holder directly. Every mutation replaces the whole snapshot.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Current value plus change notification, backed by a `watch` channel.
///
/// Cloning the holder yields another handle onto the same value.
pub struct StateHolder<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for StateHolder<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateHolder")
            .field(&*self.sender.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq> StateHolder<T> {
    /// Create a holder with an initial snapshot.
    pub fn new(initial: T) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Clone of the current snapshot.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Read the current snapshot without cloning it.
    ///
    /// The closure must not mutate this holder.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Replace the snapshot. Returns `true` if the value changed.
    pub fn replace(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }

    /// Derive a new snapshot from the current one.
    ///
    /// Subscribers are only notified when the derived value differs.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        self.sender.send_if_modified(|current| {
            let next = f(current);
            if next == *current {
                return false;
            }
            *current = next;
            true
        })
    }

    /// Derive a new snapshot only if `guard` accepts the current one.
    ///
    /// Check and replacement happen under the same lock. Returns `true` if
    /// the guard passed.
    pub fn update_if(&self, guard: impl FnOnce(&T) -> bool, f: impl FnOnce(&T) -> T) -> bool {
        let mut applied = false;
        self.sender.send_if_modified(|current| {
            if !guard(current) {
                return false;
            }
            applied = true;
            let next = f(current);
            if next == *current {
                return false;
            }
            *current = next;
            true
        });
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_value() {
        let holder = StateHolder::new(1);
        let other = holder.clone();
        holder.replace(2);
        assert_eq!(other.get(), 2);
    }

    #[test]
    fn update_reports_whether_value_changed() {
        let holder = StateHolder::new(String::from("a"));
        assert!(holder.update(|s| format!("{s}b")));
        assert!(!holder.update(Clone::clone));
        assert_eq!(holder.get(), "ab");
    }

    #[test]
    fn update_if_respects_guard() {
        let holder = StateHolder::new(false);
        assert!(holder.update_if(|busy| !busy, |_| true));
        assert!(!holder.update_if(|busy| !busy, |_| true));
        assert!(holder.get());
    }

    #[tokio::test]
    async fn subscribers_only_see_real_changes() {
        let holder = StateHolder::new(0u32);
        let mut receiver = holder.subscribe();

        holder.replace(0);
        assert!(!receiver.has_changed().unwrap());

        holder.replace(5);
        assert!(receiver.has_changed().unwrap());
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), 5);
    }
}
