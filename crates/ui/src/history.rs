use dioxus::prelude::*;
use parking_lot::Mutex;
use std::fmt::{self, Debug};
use std::rc::Rc;
use tracing::debug;

/// Called with the new path on back/forward navigation.
pub type PopListener = Box<dyn Fn(String)>;

/// Session history of the platform.
pub trait HistoryBackend: Debug {
    /// Current location (path, query and fragment).
    fn current(&self) -> String;
    fn push(&self, path: &str);
    /// Replaces the current entry; used for redirects.
    fn replace(&self, path: &str);
    fn on_pop(&self, listener: PopListener);
}

/// In-process history stack for platforms without an address bar.
pub struct MemoryHistory {
    stack: Mutex<Stack>,
    listeners: Mutex<Vec<PopListener>>,
}

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    index: usize,
}

impl Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("stack", &*self.stack.lock())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(Stack { entries: vec![initial.into()], index: 0 }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Steps back one entry. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        self.step(-1)
    }

    /// Steps forward one entry. Returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        self.step(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn step(&self, delta: isize) -> bool {
        let path = {
            let mut stack = self.stack.lock();
            let Some(index) = stack.index.checked_add_signed(delta).filter(|i| *i < stack.entries.len())
            else {
                return false;
            };
            stack.index = index;
            stack.entries[index].clone()
        };

        for listener in self.listeners.lock().iter() {
            listener(path.clone());
        }
        true
    }
}

impl HistoryBackend for MemoryHistory {
    fn current(&self) -> String {
        let stack = self.stack.lock();
        stack.entries[stack.index].clone()
    }

    fn push(&self, path: &str) {
        let mut stack = self.stack.lock();
        let next = stack.index + 1;
        stack.entries.truncate(next);
        stack.entries.push(path.to_owned());
        stack.index = next;
    }

    fn replace(&self, path: &str) {
        let mut stack = self.stack.lock();
        let index = stack.index;
        path.clone_into(&mut stack.entries[index]);
    }

    fn on_pop(&self, listener: PopListener) {
        self.listeners.lock().push(listener);
    }
}

/// Current location plus the history it writes to.
#[derive(Debug, Clone)]
pub struct Navigator {
    path: Signal<String>,
    history: Rc<dyn HistoryBackend>,
}

impl Navigator {
    #[must_use]
    pub const fn new(path: Signal<String>, history: Rc<dyn HistoryBackend>) -> Self {
        Self { path, history }
    }

    /// Reads the location and subscribes the caller to changes.
    #[must_use]
    pub fn current(&self) -> String {
        self.path.read().clone()
    }

    /// Reads the location without subscribing.
    #[must_use]
    pub fn peek(&self) -> String {
        self.path.peek().clone()
    }

    pub fn push(&self, to: &str) {
        self.history.push(to);
        self.set(to);
    }

    pub fn replace(&self, to: &str) {
        debug!(to, "Replacing location");
        self.history.replace(to);
        self.set(to);
    }

    /// Follows a location change that already happened in the history.
    pub fn sync(&self, to: String) {
        let mut path = self.path;
        path.set(to);
    }

    fn set(&self, to: &str) {
        let mut path = self.path;
        if *path.peek() != to {
            path.set(to.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn push_and_replace_edit_the_stack() {
        let history = MemoryHistory::default();
        history.push("/services");
        history.push("/jet/1");
        history.replace("/jet/2");

        assert_eq!(history.current(), "/jet/2");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn back_and_forward_notify_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let history = MemoryHistory::new("/");
        let sink = Rc::clone(&seen);
        history.on_pop(Box::new(move |path| sink.borrow_mut().push(path)));

        history.push("/chat");
        assert!(history.back());
        assert!(!history.back());
        assert!(history.forward());
        assert!(!history.forward());

        assert_eq!(*seen.borrow(), ["/", "/chat"]);
    }

    #[test]
    fn pushing_after_back_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        history.back();
        history.push("/c");

        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        assert_eq!(history.current(), "/c");
    }
}
