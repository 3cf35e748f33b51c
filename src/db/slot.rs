//! Named, process-wide storage for a shared value.

use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};

/// A process-wide slot holding at most one shared value.
///
/// The slot is either empty or bound. Reads never construct anything.
pub struct ProcessSlot<T> {
    name: &'static str,
    value: RwLock<Option<Arc<T>>>,
}

impl<T> ProcessSlot<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            value: const_rwlock(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current value, if bound.
    #[allow(dead_code)]
    pub fn get(&self) -> Option<Arc<T>> {
        self.value.read().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.value.read().is_some()
    }

    /// Return the bound value, or construct a new one.
    ///
    /// A freshly constructed value is bound only when `persist` is set. The
    /// boolean is true when `construct` ran.
    pub fn get_or_construct<F>(&self, construct: F, persist: bool) -> (Arc<T>, bool)
    where
        F: FnOnce() -> T,
    {
        let mut value = self.value.write();
        if let Some(existing) = value.as_ref() {
            return (Arc::clone(existing), false);
        }

        let fresh = Arc::new(construct());
        if persist {
            *value = Some(Arc::clone(&fresh));
        }
        (fresh, true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot: ProcessSlot<u32> = ProcessSlot::new("empty");
        assert_eq!(slot.name(), "empty");
        assert!(!slot.is_bound());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_persisting_binds_once() {
        let slot = ProcessSlot::new("counter");

        let (first, constructed) = slot.get_or_construct(|| 1u32, true);
        assert!(constructed);
        assert!(slot.is_bound());

        let (second, constructed) = slot.get_or_construct(|| 2u32, true);
        assert!(!constructed);
        assert_eq!(*second, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_without_persist_stays_empty() {
        let slot = ProcessSlot::new("transient");

        let (first, constructed) = slot.get_or_construct(|| "a".to_string(), false);
        assert!(constructed);
        assert!(!slot.is_bound());

        let (second, constructed) = slot.get_or_construct(|| "b".to_string(), false);
        assert!(constructed);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_static_slot() {
        static SLOT: ProcessSlot<&str> = ProcessSlot::new("static");

        let (value, _) = SLOT.get_or_construct(|| "bound", true);
        assert!(Arc::ptr_eq(&value, &SLOT.get().unwrap()));
    }

    #[test]
    fn test_concurrent_initializers_construct_once() {
        const THREADS: usize = 16;

        let slot = ProcessSlot::new("concurrent");
        let constructions = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let values: Vec<Arc<usize>> = thread::scope(|scope| {
            let workers: Vec<_> = (0..THREADS)
                .map(|i| {
                    let (slot, constructions, barrier) = (&slot, &constructions, &barrier);
                    scope.spawn(move || {
                        barrier.wait();
                        let (value, _) = slot.get_or_construct(
                            || {
                                constructions.fetch_add(1, Ordering::SeqCst);
                                i
                            },
                            true,
                        );
                        value
                    })
                })
                .collect();

            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(constructions.load(Ordering::SeqCst), 1);
        let bound = slot.get().unwrap();
        assert!(values.iter().all(|value| Arc::ptr_eq(value, &bound)));
    }
}
