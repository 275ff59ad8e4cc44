#![forbid(unsafe_code)]

//! Ordered observer registry with synchronous broadcast.
//!
//! # Design
//!
//! [`Subject<V>`] stores registrations as `Weak` references in insertion
//! order. Whoever created an observer keeps the owning
//! [`SharedObserver`] handle; the subject can always tell that an observer
//! has been destroyed (the weak reference no longer upgrades) and has no way
//! to dereference freed memory.
//!
//! Dispatch works on a snapshot: a broadcast first upgrades every live
//! registration to a strong reference, then runs the updates outside the
//! registry. Registry mutations performed while a broadcast is in flight
//! therefore take effect on the next broadcast, never the current one.
//!
//! # Performance
//!
//! | Operation      | Complexity                      |
//! |----------------|---------------------------------|
//! | `register()`   | O(1) amortized                  |
//! | `unregister()` | O(R) where R = registrations    |
//! | `notify()`     | O(R) plus the observers' updates|
//!
//! # Failure Modes
//!
//! - **Destroyed observer**: a registration whose owner dropped the handle
//!   is pruned by `notify` (reported at WARN with its position) or reported
//!   as [`DispatchError::DanglingObserver`] by `try_notify` before anyone
//!   is dispatched to.
//! - **Observer panic**: propagates to the caller of `notify`; later
//!   observers in the snapshot are not reached.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

use crate::observer::{Observer, SharedObserver};

/// Errors from the strict dispatch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// A registration points at an observer its owner has destroyed.
    DanglingObserver {
        /// Position of the stale registration, in insertion order.
        index: usize,
    },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingObserver { index } => {
                write!(f, "registration {index} points at a destroyed observer")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Ordered collection of non-owning observer registrations plus the
/// broadcast that drives them.
///
/// # Invariants
///
/// 1. Observers are notified in insertion order.
/// 2. Duplicate registrations are legal; each occurrence is notified once
///    per broadcast.
/// 3. `unregister` removes every occurrence of the given identity; removing
///    an absent identity is a no-op.
/// 4. A broadcast dispatches to the registrations as they existed when it
///    began.
/// 5. A registration never extends its observer's lifetime.
pub struct Subject<V: 'static> {
    registrations: Vec<Weak<RefCell<dyn Observer<V>>>>,
}

impl<V: 'static> Default for Subject<V> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }
}

impl<V: 'static> std::fmt::Debug for Subject<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("observer_count", &self.registrations.len())
            .finish()
    }
}

impl<V: 'static> Subject<V> {
    /// Create a subject with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-owning registration for `observer`.
    ///
    /// No uniqueness constraint: registering the same handle twice means two
    /// updates per broadcast.
    pub fn register(&mut self, observer: &SharedObserver<V>) {
        self.registrations.push(Rc::downgrade(observer));
    }

    /// Register each observer in slice order.
    ///
    /// Equivalent to calling [`register`](Self::register) once per element.
    pub fn register_all(&mut self, observers: &[SharedObserver<V>]) {
        for observer in observers {
            self.register(observer);
        }
    }

    /// Remove **all** occurrences of the registration identical to
    /// `observer`.
    ///
    /// Identity is allocation identity: the argument matches exactly the
    /// registrations created from clones of the same shared handle.
    /// Unregistering a handle that was never registered is a no-op.
    pub fn unregister(&mut self, observer: &SharedObserver<V>) {
        let target = Rc::downgrade(observer);
        self.registrations.retain(|weak| !weak.ptr_eq(&target));
    }

    /// Unregister each observer in turn.
    ///
    /// Removal order does not affect the final set.
    pub fn unregister_all(&mut self, observers: &[SharedObserver<V>]) {
        for observer in observers {
            self.unregister(observer);
        }
    }

    /// Number of registrations, including stale ones not yet pruned.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the subject has no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Broadcast `view` to every currently-registered observer, in
    /// insertion order. Returns the number of observers notified.
    ///
    /// The registration list is snapshotted before the first update runs;
    /// registrations whose observer has been destroyed are pruned and each
    /// pruned entry is reported at WARN. This path never fails.
    pub fn notify(&mut self, view: &V) -> usize {
        let mut snapshot: Vec<Rc<RefCell<dyn Observer<V>>>> =
            Vec::with_capacity(self.registrations.len());
        let mut index = 0usize;
        self.registrations.retain(|weak| {
            let live = match weak.upgrade() {
                Some(strong) => {
                    snapshot.push(strong);
                    true
                }
                None => {
                    warn!(index, "pruning registration for a destroyed observer");
                    false
                }
            };
            index += 1;
            live
        });

        for observer in &snapshot {
            observer.borrow_mut().update(view);
        }
        trace!(delivered = snapshot.len(), "broadcast complete");
        snapshot.len()
    }

    /// Strict broadcast: refuse to dispatch if any registration points at a
    /// destroyed observer.
    ///
    /// Checks every registration before running any update, so an error
    /// means no observer saw this view. On success behaves exactly like
    /// [`notify`](Self::notify).
    pub fn try_notify(&mut self, view: &V) -> Result<usize, DispatchError> {
        let mut snapshot: Vec<Rc<RefCell<dyn Observer<V>>>> =
            Vec::with_capacity(self.registrations.len());
        for (index, weak) in self.registrations.iter().enumerate() {
            match weak.upgrade() {
                Some(strong) => snapshot.push(strong),
                None => return Err(DispatchError::DanglingObserver { index }),
            }
        }

        for observer in &snapshot {
            observer.borrow_mut().update(view);
        }
        trace!(delivered = snapshot.len(), "strict broadcast complete");
        Ok(snapshot.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
