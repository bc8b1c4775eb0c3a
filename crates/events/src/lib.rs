//! `ripple-events` — hierarchical, synchronous publish/subscribe.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use ripple_events::create_event_bus;
//!
//! let bus = create_event_bus::<&'static str>();
//! let hits = Rc::new(Cell::new(0));
//!
//! let h = Rc::clone(&hits);
//! bus.on("job", "watcher", move |_| {
//!     h.set(h.get() + 1);
//!     Ok(())
//! });
//!
//! // "job" subscribers also hear about every "job.*" emission.
//! bus.emit("job.done")?.emit("job")?;
//! assert_eq!(hits.get(), 2);
//!
//! bus.off("job", &"watcher");
//! assert!(bus.is_empty());
//! # Ok::<(), ripple_events::BusError>(())
//! ```

pub mod bus;
pub mod config;
mod modifiers;
pub mod subscription;

pub use bus::{EventBus, create_event_bus};
pub use config::BusConfig;
pub use ripple_core::{BusError, BusId, BusResult};
pub use subscription::Handler;
