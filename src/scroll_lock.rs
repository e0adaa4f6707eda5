use std::sync::{Arc, Mutex, PoisonError};

/// The page-level scroll state a lock freezes and restores.
pub trait ScrollHost: Send + Sync + 'static {
    fn scroll_offset(&self) -> f64;
    /// Stop background scrolling, keeping the page visually at `offset`.
    fn lock(&self, offset: f64);
    /// Re-enable scrolling and jump back to `offset`. The jump is immediate:
    /// `scroll_offset` reads `offset` as soon as this returns.
    fn unlock(&self, offset: f64);
}

#[derive(Debug, Default)]
struct LockState {
    holders: usize,
    saved_offset: f64,
}

/// Reference-counted page scroll lock.
///
/// The host is locked when the first guard is taken and unlocked when the last
/// one is dropped, restoring the offset recorded at the first acquisition.
pub struct ScrollLock<H: ScrollHost> {
    host: Arc<H>,
    state: Arc<Mutex<LockState>>,
}

impl<H: ScrollHost> Clone for ScrollLock<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            state: Arc::clone(&self.state),
        }
    }
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Arc::new(host),
            state: Arc::new(Mutex::new(LockState::default())),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard<H> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.holders == 0 {
            state.saved_offset = self.host.scroll_offset();
            self.host.lock(state.saved_offset);
        }
        state.holders += 1;
        ScrollLockGuard { lock: self.clone() }
    }

    pub fn holders(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    fn release(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            self.host.unlock(state.saved_offset);
        }
    }
}

/// Releases its hold on the lock when dropped.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<H: ScrollHost> {
    lock: ScrollLock<H>,
}

impl<H: ScrollHost> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum HostEvent {
        Lock(f64),
        Unlock(f64),
    }

    #[derive(Default)]
    struct FakeHost {
        offset: Mutex<f64>,
        events: Mutex<Vec<HostEvent>>,
    }

    impl ScrollHost for Arc<FakeHost> {
        fn scroll_offset(&self) -> f64 {
            *self.offset.lock().unwrap()
        }

        fn lock(&self, offset: f64) {
            // a locked body reports no scroll of its own
            *self.offset.lock().unwrap() = 0.0;
            self.events.lock().unwrap().push(HostEvent::Lock(offset));
        }

        fn unlock(&self, offset: f64) {
            *self.offset.lock().unwrap() = offset;
            self.events.lock().unwrap().push(HostEvent::Unlock(offset));
        }
    }

    fn host_at(offset: f64) -> Arc<FakeHost> {
        let host = Arc::new(FakeHost::default());
        *host.offset.lock().unwrap() = offset;
        host
    }

    fn counts(host: &FakeHost) -> (usize, usize) {
        let events = host.events.lock().unwrap();
        let locks = events
            .iter()
            .filter(|e| matches!(e, HostEvent::Lock(_)))
            .count();
        (locks, events.len() - locks)
    }

    #[test]
    fn test_guard_restores_offset_on_drop() {
        let host = host_at(640.0);
        let lock = ScrollLock::new(Arc::clone(&host));
        {
            let _guard = lock.acquire();
            assert!(lock.is_locked());
            assert_eq!(host.scroll_offset(), 0.0);
        }
        assert!(!lock.is_locked());
        assert_eq!(host.scroll_offset(), 640.0);
        assert_eq!(
            *host.events.lock().unwrap(),
            vec![HostEvent::Lock(640.0), HostEvent::Unlock(640.0)]
        );
    }

    #[test]
    fn test_rapid_toggling_is_symmetric() {
        let host = host_at(300.0);
        let lock = ScrollLock::new(Arc::clone(&host));
        for _ in 0..25 {
            let guard = lock.acquire();
            drop(guard);
        }
        assert_eq!(counts(&host), (25, 25));
        assert_eq!(host.scroll_offset(), 300.0);
    }

    #[test]
    fn test_overlapping_guards_restore_first_offset() {
        let host = host_at(1200.0);
        let lock = ScrollLock::new(Arc::clone(&host));

        // switching the selected skill mounts the new modal before the old one is torn down
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(first);
        assert!(lock.is_locked());
        drop(second);

        assert_eq!(counts(&host), (1, 1));
        assert_eq!(host.scroll_offset(), 1200.0);
    }

    #[test]
    fn test_reopen_right_after_close_records_restored_offset() {
        let host = host_at(1200.0);
        let lock = ScrollLock::new(Arc::clone(&host));

        drop(lock.acquire());
        assert_eq!(host.scroll_offset(), 1200.0);
        drop(lock.acquire());

        assert_eq!(
            *host.events.lock().unwrap(),
            vec![
                HostEvent::Lock(1200.0),
                HostEvent::Unlock(1200.0),
                HostEvent::Lock(1200.0),
                HostEvent::Unlock(1200.0),
            ]
        );
        assert_eq!(host.scroll_offset(), 1200.0);
    }

    #[test]
    fn test_guard_released_when_owner_is_torn_down() {
        struct Modal {
            _guard: ScrollLockGuard<Arc<FakeHost>>,
        }

        let host = host_at(50.0);
        let lock = ScrollLock::new(Arc::clone(&host));
        let modal = Modal {
            _guard: lock.acquire(),
        };
        assert!(lock.is_locked());
        drop(modal);
        assert!(!lock.is_locked());
        assert_eq!(counts(&host), (1, 1));
    }
}
