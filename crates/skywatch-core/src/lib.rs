#![forbid(unsafe_code)]

//! Subject/observer broadcast engine for skywatch.
//!
//! # Role in skywatch
//! `skywatch-core` is the registration and dispatch kernel. A [`Subject`]
//! holds an ordered list of non-owning observer registrations and, when told
//! to, broadcasts a borrowed view of the publisher's state to every observer
//! currently registered.
//!
//! # Primary responsibilities
//! - **Observer**: the single-capability `update(view)` trait observers
//!   implement.
//! - **Subject**: ordered registry plus synchronous broadcaster, with
//!   identity-based removal and snapshot dispatch.
//! - **DispatchError**: the explicit failure surface for registrations whose
//!   observer has been destroyed.
//!
//! # How it fits in the system
//! `skywatch-station` embeds a `Subject<Readings>` and broadcasts after each
//! mutation; display devices own the observers and hand the subject shared
//! handles to register. The subject never owns an observer and an observer
//! never retains the view past an `update` call.

pub mod observer;
pub mod subject;

pub use observer::{Observer, SharedObserver};
pub use subject::{DispatchError, Subject};
