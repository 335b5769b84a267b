//! Deferred, initialize-once values.
//!
//! [`Lazy<T>`] is either uninitialized (holding the initializer) or
//! initialized (holding the value). The first call to [`Lazy::get`] runs the
//! initializer; every later call, from any thread, sees the same value.
//! Clones share the cell, so the initializer runs at most once across all of them.

use std::fmt;
use std::sync::{Arc, OnceLock};

type Initializer<T> = Arc<dyn Fn() -> T + Send + Sync>;

pub struct Lazy<T> {
    cell: Arc<OnceLock<T>>,
    init: Initializer<T>,
}

impl<T> Lazy<T> {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            cell: Arc::new(OnceLock::new()),
            init: Arc::new(init),
        }
    }

    /// The value, running the initializer on first access.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.init)())
    }

    /// The value if it has already been initialized.
    pub fn get_if_initialized(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Lazy<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// An already-initialized cell.
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value.clone());
        Self {
            cell: Arc::new(cell),
            init: Arc::new(move || value.clone()),
        }
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
            init: Arc::clone(&self.init),
        }
    }
}

// Never prints the value: lazies hold secrets.
impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_initialized() {
            "<initialized>"
        } else {
            "<uninitialized>"
        };
        f.debug_tuple("Lazy").field(&format_args!("{state}")).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_initializer_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "value".to_string()
        });

        assert!(!lazy.is_initialized());
        assert_eq!(lazy.get(), "value");
        assert_eq!(lazy.get(), "value");
        assert!(lazy.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_access_initializes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Arc::new(Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                std::thread::spawn(move || *lazy.get())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_initialization() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "value".to_string()
        });
        let copy = lazy.clone();

        assert_eq!(copy.get(), "value");
        assert!(lazy.is_initialized());
        assert_eq!(lazy.get(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ready_is_initialized() {
        let lazy = Lazy::ready(7u32);
        assert!(lazy.is_initialized());
        assert_eq!(lazy.get_if_initialized(), Some(&7));
    }

    #[test]
    fn test_debug_hides_value() {
        let lazy = Lazy::ready("hunter2".to_string());
        let debug = format!("{lazy:?}");
        assert_eq!(debug, "Lazy(<initialized>)");
        assert!(!debug.contains("hunter2"));
    }
}
