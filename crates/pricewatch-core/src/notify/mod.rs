//! Product alerts and their subscribers.
//!
//! The [`NotificationHub`] owns the list of active observers. Callers only
//! touch it through [`NotificationHub::subscribe`], the returned
//! [`Subscription`] handle, and the broadcast methods. Subscriptions live in
//! memory only and are lost when the process exits.

mod alert;
mod client;
mod hub;
mod observer;
mod subscription;

pub use alert::{Alert, AlertKind};
pub use client::ClientObserver;
pub use hub::NotificationHub;
pub use observer::{AlertObserver, NoticeSink, RecordingSink, StdoutSink};
pub use subscription::Subscription;
