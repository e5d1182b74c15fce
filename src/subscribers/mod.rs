//! # Event subscribers.
//!
//! Provides the [`Subscribe`] trait and [`SubscriberSet`], the fan-out used
//! to deliver [`Event`](crate::events::Event)s broadcast through the
//! [`Bus`](crate::events::Bus) without blocking the publishers.
//!
//! ```text
//! Supervisor/Scheduler ── publish(Event) ──► Bus ──► attach() listener
//!                                                        │
//!                                             ┌──────────┼──────────┐
//!                                             ▼          ▼          ▼
//!                                        [queue S1] [queue S2]  [queue SN]
//!                                             │          │          │
//!                                        worker S1  worker S2  worker SN
//!                                             ▼          ▼          ▼
//!                                        on_event() on_event() on_event()
//! ```

mod set;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
