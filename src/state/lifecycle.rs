use std::cell::Cell;
use std::rc::Rc;

/// Liveness of a browser registration.
///
/// The owning guard holds the `Scope`; every callback handed to the browser
/// holds a `ScopeHandle` and checks it before touching component state. Once
/// the scope is closed, late or already-queued callbacks become no-ops.
#[derive(Debug)]
pub struct Scope {
    live: Rc<Cell<bool>>,
}

#[derive(Clone, Debug)]
pub struct ScopeHandle {
    live: Rc<Cell<bool>>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            live: self.live.clone(),
        }
    }

    /// Returns true only on the call that actually closed the scope.
    pub fn close(&self) -> bool {
        self.live.replace(false)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.close();
    }
}

impl ScopeHandle {
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_live() {
            Some(f())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_run_while_live() {
        let scope = Scope::new();
        let handle = scope.handle();
        assert_eq!(handle.run(|| 7), Some(7));
    }

    #[test]
    fn no_callbacks_after_close() {
        let calls = Rc::new(Cell::new(0));
        let scope = Scope::new();
        let handle = scope.handle();

        let counter = calls.clone();
        handle.run(|| counter.set(counter.get() + 1));
        assert!(scope.close());

        for _ in 0..5 {
            let counter = calls.clone();
            assert_eq!(handle.run(|| counter.set(counter.get() + 1)), None);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let scope = Scope::new();
        let handle = scope.handle();
        assert!(scope.close());
        assert!(!scope.close());
        assert!(!handle.is_live());
    }

    #[test]
    fn dropping_the_scope_closes_it() {
        let handle = {
            let scope = Scope::new();
            scope.handle()
        };
        assert!(!handle.is_live());
        assert_eq!(handle.run(|| ()), None);
    }
}
