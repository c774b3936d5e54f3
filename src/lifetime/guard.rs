// Thu Oct 15 2026 - Alex

use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot flag: exactly one caller ever wins [`ReleaseGuard::try_release`].
#[derive(Debug, Default)]
pub struct ReleaseGuard {
    released: AtomicBool,
}

impl ReleaseGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_release(&self) -> bool {
        self.released
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_single_winner() {
        let guard = ReleaseGuard::new();
        assert!(!guard.is_released());
        assert!(guard.try_release());
        assert!(!guard.try_release());
        assert!(guard.is_released());
    }

    #[test]
    fn test_single_winner_across_threads() {
        let guard = Arc::new(ReleaseGuard::new());
        let wins = Arc::new(AtomicUsize::new(0));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let guard = guard.clone();
                let wins = wins.clone();
                std::thread::spawn(move || {
                    if guard.try_release() {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(wins.load(Ordering::SeqCst), 1);
    }
}
