//! Small synchronous publish-subscribe primitive.
//!
//! Menu entries notify their subscribers (the owning menu) of blur and
//! activate events through an `Emitter` they carry by composition. Handlers
//! run in subscription order on the emitting thread; nothing is queued.

pub struct Emitter<E> {
    handlers: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Emitter<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Subscribe a handler to every event this emitter fires.
    pub fn on<F>(&mut self, handler: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Fire an event to all handlers in subscription order.
    pub fn emit(&mut self, event: &E) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn handlers_fire_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter: Emitter<u32> = Emitter::new();

        let a = Rc::clone(&seen);
        emitter.on(move |n| a.borrow_mut().push(("first", *n)));
        let b = Rc::clone(&seen);
        emitter.on(move |n| b.borrow_mut().push(("second", *n)));

        emitter.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn emit_with_no_handlers_is_a_no_op() {
        let mut emitter: Emitter<()> = Emitter::new();
        emitter.emit(&());
        assert_eq!(emitter.handler_count(), 0);
    }
}
