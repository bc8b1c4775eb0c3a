//! Hierarchical, synchronous event bus.
//!
//! [`EventBus`] keeps one ordered registry of subscriptions and delivers
//! events to them inline, on the caller's stack.
//!
//! ## Delivery model
//!
//! Emitting `"a.b.c"` delivers to exact-match subscribers of `"a.b.c"`, then
//! `"a.b"`, then `"a"`. Within one level, records run in registration order.
//!
//! ```text
//! emit("a.b.c")
//!   ├─► "a.b.c" subscribers (registry order)
//!   ├─► "a.b"   subscribers
//!   └─► "a"     subscribers
//! ```
//!
//! ## Reentrancy
//!
//! The bus is a cheap cloneable handle and every operation takes `&self`, so a
//! handler may capture a clone and call `on`, `off` or `emit` while it runs.
//! Each level's batch is selected before any of its handlers runs:
//!
//! - changes made by a handler never alter the batch already being delivered;
//! - the next (shorter) level is selected from the live registry and sees them.
//!
//! ## Failures
//!
//! A handler returning `Err` aborts the rest of that `emit` call, including all
//! shorter levels. The error reaches the caller as
//! [`BusError::HandlerFailed`].

use std::cell::RefCell;
use std::rc::Rc;

use ripple_core::{BusError, BusId, BusResult, ancestors, is_qualifying_descendant};

use crate::config::BusConfig;
use crate::modifiers;
use crate::subscription::{Handler, Subscription};

struct Inner<C> {
    id: BusId,
    config: BusConfig,
    registry: RefCell<Vec<Rc<Subscription<C>>>>,
}

/// In-memory pub/sub bus over dot-delimited event names.
///
/// - No IO / no async / single thread
/// - Delivery is synchronous and in registration order
/// - `C` is the context handed to handlers and compared by `off`
///
/// Clones share the same registry. Use [`EventBus::new`] (or
/// [`create_event_bus`]) for an independent bus.
pub struct EventBus<C> {
    inner: Rc<Inner<C>>,
}

/// Build a fresh bus with an empty registry.
pub fn create_event_bus<C: 'static>() -> EventBus<C> {
    EventBus::new()
}

impl<C: 'static> EventBus<C> {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                id: BusId::new(),
                config,
                registry: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> BusId {
        self.inner.id
    }

    pub fn config(&self) -> &BusConfig {
        &self.inner.config
    }

    /// Number of records in the registry, spent ones included.
    pub fn len(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records registered under exactly `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.inner
            .registry
            .borrow()
            .iter()
            .filter(|sub| sub.event() == event)
            .count()
    }

    /// Subscribe `handler` to `event`.
    ///
    /// Always appends a new record, even if an identical one exists. The name
    /// is not validated.
    pub fn on<F>(&self, event: impl Into<String>, context: C, handler: F) -> &Self
    where
        F: Fn(&C) -> anyhow::Result<()> + 'static,
    {
        self.register(event.into(), context, Rc::new(handler))
    }

    /// Subscribe `handler` for the first `times` deliveries only.
    ///
    /// `times <= 0` subscribes without a limit. The record stays registered
    /// after the limit is reached.
    #[doc(alias = "several")]
    pub fn subscribe_limited<F>(
        &self,
        event: impl Into<String>,
        context: C,
        handler: F,
        times: i64,
    ) -> &Self
    where
        F: Fn(&C) -> anyhow::Result<()> + 'static,
    {
        self.register(event.into(), context, modifiers::limited(handler, times))
    }

    /// Subscribe `handler` for every `frequency`-th delivery, starting with
    /// the first.
    ///
    /// `frequency <= 0` subscribes without throttling.
    #[doc(alias = "through")]
    pub fn subscribe_throttled<F>(
        &self,
        event: impl Into<String>,
        context: C,
        handler: F,
        frequency: i64,
    ) -> &Self
    where
        F: Fn(&C) -> anyhow::Result<()> + 'static,
    {
        self.register(event.into(), context, modifiers::throttled(handler, frequency))
    }

    fn register(&self, event: String, context: C, handler: Handler<C>) -> &Self {
        tracing::debug!(
            bus = %self.inner.id,
            label = %self.inner.config.label,
            event = %event,
            "subscribe"
        );

        self.inner
            .registry
            .borrow_mut()
            .push(Rc::new(Subscription::new(event, context, handler)));
        self
    }

    /// Deliver `event` to its subscribers and to those of every ancestor name.
    ///
    /// Returns the first handler error; nothing after it runs.
    pub fn emit(&self, event: &str) -> BusResult<&Self> {
        let span = tracing::debug_span!(
            "emit",
            bus = %self.inner.id,
            label = %self.inner.config.label,
            event = %event
        );
        let _enter = span.enter();

        for candidate in ancestors(event) {
            let batch: Vec<Rc<Subscription<C>>> = self
                .inner
                .registry
                .borrow()
                .iter()
                .filter(|sub| sub.event() == candidate)
                .cloned()
                .collect();

            tracing::trace!(candidate, matched = batch.len(), "deliver");

            for sub in batch {
                if let Err(source) = sub.invoke() {
                    tracing::warn!(candidate, error = %source, "handler failed; aborting emit");
                    return Err(BusError::handler_failed(event, candidate, source));
                }
            }
        }

        Ok(self)
    }
}

impl<C: PartialEq + 'static> EventBus<C> {
    /// Remove every record for `context` on `event` or on a descendant of it.
    ///
    /// Descendants are matched by [`is_qualifying_descendant`], so a
    /// subscription on `"a.1"` survives `off("a", ..)`.
    pub fn off(&self, event: &str, context: &C) -> &Self {
        let mut registry = self.inner.registry.borrow_mut();
        let before = registry.len();

        registry.retain(|sub| {
            let name_matches =
                sub.event() == event || is_qualifying_descendant(sub.event(), event);
            !(name_matches && sub.context() == context)
        });

        tracing::debug!(
            bus = %self.inner.id,
            label = %self.inner.config.label,
            event = %event,
            removed = before - registry.len(),
            "unsubscribe"
        );
        self
    }
}

impl<C> Clone for EventBus<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: 'static> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> core::fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBus")
            .field("id", &self.inner.id)
            .field("label", &self.inner.config.label)
            .field("subscriptions", &self.inner.registry.borrow().len())
            .finish()
    }
}
