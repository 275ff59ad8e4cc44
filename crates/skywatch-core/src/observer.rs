#![forbid(unsafe_code)]

//! The observer capability and the shared handle registrants keep.

use std::cell::RefCell;
use std::rc::Rc;

/// A reaction to a subject's broadcast.
///
/// `update` receives a borrowed view of the publisher's fully-settled state,
/// valid only for the duration of the call. Implementations recompute and
/// overwrite their own cached derivation; an observer that needs history must
/// copy scalars out of the view rather than retain it.
pub trait Observer<V> {
    /// React to a broadcast of the subject's current state.
    fn update(&mut self, view: &V);
}

/// Owning handle to an observer, as kept by whoever created it.
///
/// A [`Subject`](crate::Subject) only ever stores the downgraded (`Weak`)
/// form of this handle, so registration never extends an observer's
/// lifetime. Two handles are the same registration identity exactly when
/// they point at the same allocation.
pub type SharedObserver<V> = Rc<RefCell<dyn Observer<V>>>;
