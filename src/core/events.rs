use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A callback registered with a [`Listeners`] registry.
pub type Listener<T> = Rc<dyn Fn(T)>;

// Listeners keeps subscriber callbacks in registration order. There is no
// unsubscribe and no dedup: adding the same callback twice notifies it twice.
pub struct Listeners<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(vec![]),
        }
    }

    pub fn add(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every listener with its own payload built by `payload`.
    ///
    /// The registry is copied before the fan-out, so listeners may register
    /// more listeners or trigger nested notifications; listeners added during
    /// a notification are only called from the next one.
    pub fn notify(&self, payload: impl Fn() -> T) -> usize {
        let listeners: Vec<Listener<T>> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(payload());
        }
        listeners.len()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::core::events::Listeners;

    #[tokio::test]
    async fn test_should_notify_in_registration_order() {
        let seen = Rc::new(RefCell::new(vec![]));
        let listeners: Listeners<i32> = Listeners::new();
        for name in ["a", "b", "c"] {
            let seen = seen.clone();
            listeners.add(Rc::new(move |v: i32| seen.borrow_mut().push(format!("{}{}", name, v))));
        }
        assert_eq!(3, listeners.notify(|| 1));
        assert_eq!(vec!["a1", "b1", "c1"], *seen.borrow());
    }

    #[tokio::test]
    async fn test_should_not_dedup_listeners() {
        let calls = Rc::new(RefCell::new(0));
        let listeners: Listeners<()> = Listeners::new();
        let counter = calls.clone();
        let listener: Rc<dyn Fn(())> = Rc::new(move |_: ()| *counter.borrow_mut() += 1);
        listeners.add(listener.clone());
        listeners.add(listener);
        listeners.notify(|| ());
        assert_eq!(2, *calls.borrow());
    }

    #[tokio::test]
    async fn test_should_defer_listeners_added_while_notifying() {
        let listeners: Rc<Listeners<()>> = Rc::new(Listeners::new());
        let registry = listeners.clone();
        listeners.add(Rc::new(move |_: ()| registry.add(Rc::new(|_: ()| {}))));
        assert_eq!(1, listeners.notify(|| ()));
        assert_eq!(2, listeners.len());
    }
}
