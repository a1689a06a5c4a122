//! Explicit scroll-event subscriptions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::layout_info::ScrollGeometry;

/// Handler invoked once per published geometry snapshot.
pub type ScrollHandler = Rc<dyn Fn(&ScrollGeometry)>;

struct Subscriber {
    id: u64,
    active: Arc<AtomicBool>,
    handler: ScrollHandler,
}

#[derive(Default)]
pub(crate) struct SubscriberList {
    entries: Vec<Subscriber>,
    next_id: u64,
}

impl SubscriberList {
    pub(crate) fn add(&mut self, handler: ScrollHandler) -> (u64, Arc<AtomicBool>) {
        self.next_id += 1;
        let id = self.next_id;
        let active = Arc::new(AtomicBool::new(true));
        self.entries.push(Subscriber {
            id,
            active: Arc::clone(&active),
            handler,
        });
        (id, active)
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn snapshot(&self) -> Vec<(Arc<AtomicBool>, ScrollHandler)> {
        self.entries
            .iter()
            .map(|entry| (Arc::clone(&entry.active), Rc::clone(&entry.handler)))
            .collect()
    }
}

/// Delivers `geometry` to every subscriber that is still active.
///
/// Handlers are cloned out first so a handler may subscribe or cancel
/// without hitting an outstanding borrow. The active flag is checked right
/// before each call, so a subscription cancelled mid-dispatch sees nothing
/// further.
pub(crate) fn dispatch(list: &RefCell<SubscriberList>, geometry: &ScrollGeometry) {
    let handlers = list.borrow().snapshot();
    for (active, handler) in handlers {
        if active.load(Ordering::SeqCst) {
            handler(geometry);
        }
    }
}

/// Handle for a registered scroll handler.
///
/// The handler stays registered until [`ScrollSubscription::cancel`] is
/// called or the handle is dropped.
pub struct ScrollSubscription {
    id: u64,
    active: Arc<AtomicBool>,
    registry: Weak<RefCell<SubscriberList>>,
}

impl ScrollSubscription {
    pub(crate) fn new(
        id: u64,
        active: Arc<AtomicBool>,
        registry: Weak<RefCell<SubscriberList>>,
    ) -> Self {
        Self {
            id,
            active,
            registry,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
        log::debug!("scroll subscription {} cancelled", self.id);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
