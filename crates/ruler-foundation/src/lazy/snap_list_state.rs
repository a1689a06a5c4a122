//! Snapping list state.
//!
//! Provides [`SnapListState`], a list of fixed-size items that scrolls along
//! its main axis and settles with one item centered in the viewport. Every
//! change to the scroll position or viewport publishes a fresh
//! [`ScrollGeometry`] to the registered handlers.

use std::cell::RefCell;
use std::rc::Rc;

use super::layout_info::{ScrollGeometry, VisibleItemInfo, VisibleItems};
use super::subscription::{dispatch, ScrollSubscription, SubscriberList};
use super::viewport::ViewportHandler;

/// Offsets closer than this are treated as the same position.
const POSITION_EPSILON: f32 = 0.001;

struct SnapListInner {
    item_count: usize,
    item_size: f32,
    before_content_padding: f32,
    after_content_padding: f32,
    viewport: ViewportHandler,
    /// Distance scrolled from the start of the content.
    scroll_offset: f32,
    content_generation: u64,
}

impl SnapListInner {
    fn content_size(&self) -> f32 {
        self.before_content_padding
            + self.item_count as f32 * self.item_size
            + self.after_content_padding
    }

    fn max_scroll_offset(&self) -> f32 {
        (self.content_size() - self.viewport.effective_size()).max(0.0)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Scroll offset that puts the center of `index` on the viewport center.
    fn offset_centering(&self, index: usize) -> f32 {
        let item_center =
            self.before_content_padding + index as f32 * self.item_size + self.item_size / 2.0;
        self.clamp_offset(item_center - self.viewport.effective_size() / 2.0)
    }

    fn nearest_to_center(&self) -> Option<usize> {
        if self.item_count == 0 || self.item_size <= 0.0 {
            return None;
        }
        let center = self.scroll_offset + self.viewport.effective_size() / 2.0;
        let position = (center - self.before_content_padding - self.item_size / 2.0) / self.item_size;
        let last = (self.item_count - 1) as f32;
        Some(position.round().clamp(0.0, last) as usize)
    }

    fn visible_items(&self) -> VisibleItems {
        let mut items = VisibleItems::new();
        if self.item_count == 0 || self.item_size <= 0.0 {
            return items;
        }
        let viewport = self.viewport.effective_size();
        let content_start = self.before_content_padding - self.scroll_offset;
        let first = ((-content_start) / self.item_size).floor().max(0.0) as usize;
        for index in first..self.item_count {
            let offset = content_start + index as f32 * self.item_size;
            if offset >= viewport {
                break;
            }
            if offset + self.item_size <= 0.0 {
                continue;
            }
            items.push(VisibleItemInfo::new(index, offset, self.item_size));
        }
        items
    }

    fn layout_info(&self) -> ScrollGeometry {
        ScrollGeometry {
            visible_items: self.visible_items(),
            total_items_count: self.item_count,
            content_generation: self.content_generation,
            viewport_start_offset: 0.0,
            viewport_end_offset: self.viewport.effective_size(),
        }
    }
}

/// State holder for a fixed-size snapping list.
///
/// Cloning shares the underlying state, so a host and the picker bound to it
/// observe the same scroll position.
#[derive(Clone)]
pub struct SnapListState {
    inner: Rc<RefCell<SnapListInner>>,
    subscribers: Rc<RefCell<SubscriberList>>,
}

impl SnapListState {
    pub fn new(
        item_count: usize,
        item_size: f32,
        viewport_size: f32,
        before_content_padding: f32,
        after_content_padding: f32,
    ) -> Self {
        let inner = SnapListInner {
            item_count,
            item_size,
            before_content_padding: before_content_padding.max(0.0),
            after_content_padding: after_content_padding.max(0.0),
            viewport: ViewportHandler::new(viewport_size, item_size),
            scroll_offset: 0.0,
            content_generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            subscribers: Rc::new(RefCell::new(SubscriberList::default())),
        }
    }

    /// Creates a list padded so the first and last items can both rest on the
    /// viewport center. Starts with item 0 centered.
    pub fn centered(item_count: usize, item_size: f32, viewport_size: f32) -> Self {
        let padding = centering_padding(viewport_size, item_size);
        Self::new(item_count, item_size, viewport_size, padding, padding)
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().item_count
    }

    pub fn item_size(&self) -> f32 {
        self.inner.borrow().item_size
    }

    /// Number of times the item set has been replaced through
    /// [`SnapListState::set_item_count`].
    pub fn content_generation(&self) -> u64 {
        self.inner.borrow().content_generation
    }

    pub fn viewport_size(&self) -> f32 {
        self.inner.borrow().viewport.effective_size()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.inner.borrow().max_scroll_offset()
    }

    pub fn can_scroll_forward(&self) -> bool {
        let inner = self.inner.borrow();
        inner.scroll_offset + POSITION_EPSILON < inner.max_scroll_offset()
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.inner.borrow().scroll_offset > POSITION_EPSILON
    }

    /// Takes a fresh geometry snapshot of the current position.
    pub fn layout_info(&self) -> ScrollGeometry {
        self.inner.borrow().layout_info()
    }

    /// Index of the item whose center is nearest the viewport center.
    pub fn centered_item_index(&self) -> Option<usize> {
        self.inner.borrow().nearest_to_center()
    }

    /// Scrolls by `delta` pixels (positive moves toward higher indices).
    ///
    /// Returns the distance actually consumed after clamping to the content bounds.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let (old, new) = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.scroll_offset;
            let new = inner.clamp_offset(old + delta);
            inner.scroll_offset = new;
            (old, new)
        };
        let consumed = new - old;
        if consumed.abs() > POSITION_EPSILON {
            self.publish();
        }
        consumed
    }

    /// Moves so that `index` is centered, clamped to the last item.
    pub fn scroll_to_item(&self, index: usize) {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.item_count == 0 {
                return;
            }
            let index = index.min(inner.item_count - 1);
            let target = inner.offset_centering(index);
            let moved = (target - inner.scroll_offset).abs() > POSITION_EPSILON;
            inner.scroll_offset = target;
            moved
        };
        if moved {
            self.publish();
        }
    }

    /// Snaps to the item nearest the viewport center and returns its index.
    ///
    /// This is what a snap fling does once it comes to rest.
    pub fn settle(&self) -> Option<usize> {
        let index = self.centered_item_index()?;
        self.scroll_to_item(index);
        Some(index)
    }

    /// Replaces the item set with `item_count` new items, clamping the scroll
    /// position into the new bounds.
    ///
    /// Always starts a new content generation, even when the count is unchanged.
    pub fn set_item_count(&self, item_count: usize) {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            inner.item_count = item_count;
            inner.content_generation += 1;
            let clamped = inner.clamp_offset(inner.scroll_offset);
            let moved = (clamped - inner.scroll_offset).abs() > POSITION_EPSILON;
            inner.scroll_offset = clamped;
            moved
        };
        if moved {
            self.publish();
        }
    }

    pub fn set_viewport_size(&self, viewport_size: f32) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let viewport = ViewportHandler::new(viewport_size, inner.item_size);
            let changed =
                (viewport.effective_size() - inner.viewport.effective_size()).abs() > POSITION_EPSILON;
            inner.viewport = viewport;
            inner.scroll_offset = inner.clamp_offset(inner.scroll_offset);
            changed
        };
        if changed {
            self.publish();
        }
    }

    /// Registers `handler` for every subsequent geometry snapshot.
    ///
    /// Handlers run synchronously on the thread that moved the list. A handler
    /// must not expect to be called for the position current at subscription
    /// time; read [`SnapListState::layout_info`] for that.
    pub fn subscribe(&self, handler: impl Fn(&ScrollGeometry) + 'static) -> ScrollSubscription {
        let (id, active) = self.subscribers.borrow_mut().add(Rc::new(handler));
        log::debug!("scroll subscription {} registered", id);
        ScrollSubscription::new(id, active, Rc::downgrade(&self.subscribers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn publish(&self) {
        let geometry = self.layout_info();
        dispatch(&self.subscribers, &geometry);
    }
}

/// Padding on each side that lets the outermost items reach the viewport center.
pub fn centering_padding(viewport_size: f32, item_size: f32) -> f32 {
    let viewport = ViewportHandler::new(viewport_size, item_size).effective_size();
    ((viewport - item_size) / 2.0).max(0.0)
}
