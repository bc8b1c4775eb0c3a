//! Subscription records.

use std::rc::Rc;

/// A subscription callback.
///
/// Receives the context it was registered with. State lives inside the closure
/// (interior mutability), so the same handler may run reentrantly.
pub type Handler<C> = Rc<dyn Fn(&C) -> anyhow::Result<()>>;

/// One registered `(event name, context, handler)` triple.
///
/// Records have no identity beyond their slot in the registry: registering the
/// same triple twice yields two independent records.
pub(crate) struct Subscription<C> {
    event: String,
    context: C,
    handler: Handler<C>,
}

impl<C> Subscription<C> {
    pub(crate) fn new(event: String, context: C, handler: Handler<C>) -> Self {
        Self {
            event,
            context,
            handler,
        }
    }

    pub(crate) fn event(&self) -> &str {
        &self.event
    }

    pub(crate) fn context(&self) -> &C {
        &self.context
    }

    /// Run the handler bound to this record's context.
    pub(crate) fn invoke(&self) -> anyhow::Result<()> {
        (self.handler)(&self.context)
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for Subscription<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
