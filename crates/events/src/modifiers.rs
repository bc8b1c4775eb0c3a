//! Delivery modifiers.
//!
//! Both wrappers turn a user handler into a [`Handler`] with private counting
//! state. The bus registers the result through the same path as a plain
//! subscription. Wrapped handlers never unsubscribe themselves: once a limited
//! handler is spent it stays in the registry and keeps counting.

use std::cell::Cell;
use std::rc::Rc;

use crate::subscription::Handler;

/// Fire on the first `times` deliveries only. `times <= 0` means unlimited.
pub(crate) fn limited<C, F>(handler: F, times: i64) -> Handler<C>
where
    C: 'static,
    F: Fn(&C) -> anyhow::Result<()> + 'static,
{
    if times <= 0 {
        return Rc::new(handler);
    }

    let remaining = Cell::new(times);
    Rc::new(move |context: &C| {
        let left = remaining.get();
        // Counted before the call: reentrant deliveries see the new value.
        remaining.set(left.saturating_sub(1));
        if left <= 0 {
            return Ok(());
        }
        // A failed delivery does not use up the budget.
        handler(context).inspect_err(|_| remaining.set(left))
    })
}

/// Fire on deliveries 1, `frequency + 1`, `2 * frequency + 1`, ...
/// `frequency <= 0` means every delivery.
pub(crate) fn throttled<C, F>(handler: F, frequency: i64) -> Handler<C>
where
    C: 'static,
    F: Fn(&C) -> anyhow::Result<()> + 'static,
{
    if frequency <= 0 {
        return Rc::new(handler);
    }

    let frequency = frequency.unsigned_abs();
    let seen = Cell::new(0u64);
    Rc::new(move |context: &C| {
        let n = seen.get();
        seen.set(n.wrapping_add(1));
        if n % frequency != 0 {
            return Ok(());
        }
        handler(context).inspect_err(|_| seen.set(n))
    })
}
