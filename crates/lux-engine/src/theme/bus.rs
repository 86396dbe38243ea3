//! Typed theme-change notifications.
//!
//! The bus holds the current theme and a list of listeners. Only
//! [`ThemeController`](super::controller::ThemeController) publishes; every
//! other component gets a cloned handle and subscribes.

use std::cell::RefCell;
use std::rc::Rc;

use super::kind::Theme;

/// Published after every `set_theme`, including re-applying the same theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    pub previous: Theme,
    pub current: Theme,
}

/// Returned by [`ThemeBus::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<RefCell<dyn FnMut(&ThemeChanged)>>;

struct BusInner {
    current: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Cloneable handle to the page's theme channel.
#[derive(Clone)]
pub struct ThemeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ThemeBus {
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                current: initial,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The theme most recently published.
    pub fn current(&self) -> Theme {
        self.inner.borrow().current
    }

    /// Register a listener. It runs synchronously on every publish.
    pub fn subscribe(&self, listener: impl FnMut(&ThemeChanged) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Swap in the new theme, then notify a snapshot of the listeners.
    /// Listeners may read the bus or (un)subscribe while being notified.
    pub(crate) fn publish(&self, theme: Theme) -> ThemeChanged {
        let (event, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let event = ThemeChanged {
                previous: inner.current,
                current: theme,
            };
            inner.current = theme;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (event, listeners)
        };
        for listener in listeners {
            (listener.borrow_mut())(&event);
        }
        event
    }
}

impl std::fmt::Debug for ThemeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeBus")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
