//! Virtual List
//!
//! Renders only the rows of a long, fixed-row-height list that intersect the
//! scroll viewport, plus an overscan margin on each side.
//!
//! The window math lives in plain functions so it can be tested natively;
//! [`use_virtual_list`] wires it to the container's scroll offset and the
//! window's resize events.

use std::ops::Range;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DEFAULT_OVERSCAN;

/// Vertical gap between rows, taken out of each row's height
const ROW_GAP_PX: f64 = 2.0;

/// Virtual list settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualListOptions {
    /// Fixed height of each row in pixels
    pub item_height: f64,
    /// Rows rendered outside the visible area; `None` uses [`DEFAULT_OVERSCAN`]
    pub overscan: Option<usize>,
}

impl VirtualListOptions {
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            overscan: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = Some(overscan);
        self
    }

    pub fn overscan(&self) -> usize {
        self.overscan.unwrap_or(DEFAULT_OVERSCAN)
    }

    fn has_valid_height(&self) -> bool {
        self.item_height.is_finite() && self.item_height > 0.0
    }
}

/// Half-open index range `[start, end)` of rows to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualWindow {
    pub start: usize,
    pub end: usize,
}

impl VirtualWindow {
    /// Compute the rows to render for `len` items.
    ///
    /// Always satisfies `start <= end <= len`. Empty when the list is empty,
    /// the viewport has no height, or the row height is not positive.
    pub fn compute(
        len: usize,
        scroll_top: f64,
        viewport_height: f64,
        options: &VirtualListOptions,
    ) -> Self {
        let viewport_ok = viewport_height.is_finite() && viewport_height > 0.0;
        if len == 0 || !viewport_ok || !options.has_valid_height() {
            return Self::default();
        }

        let h = options.item_height;
        let scroll = if scroll_top.is_finite() { scroll_top.max(0.0) } else { 0.0 };
        let overscan = options.overscan();

        // float -> usize casts saturate
        let first_visible = (scroll / h).floor() as usize;
        let last_visible = ((scroll + viewport_height) / h).ceil() as usize;

        let end = last_visible.saturating_add(overscan).min(len);
        let start = first_visible.saturating_sub(overscan).min(end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Height of the scrollable content for `len` rows
pub fn total_height(len: usize, options: &VirtualListOptions) -> f64 {
    if !options.has_valid_height() {
        return 0.0;
    }
    len as f64 * options.item_height
}

/// Absolute positioning for one rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub top: f64,
    pub height: f64,
}

impl ItemStyle {
    pub fn for_index(index: usize, item_height: f64) -> Self {
        Self {
            top: index as f64 * item_height,
            height: (item_height - ROW_GAP_PX).max(0.0),
        }
    }

    /// Inline CSS for the row element
    pub fn to_css(&self) -> String {
        format!(
            "position: absolute; top: {}px; height: {}px; width: 100%; margin-bottom: {}px;",
            self.top, self.height, ROW_GAP_PX
        )
    }
}

/// A row to render: the item, its index in the full list, and its placement
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem<T> {
    pub item: T,
    pub index: usize,
    pub style: ItemStyle,
}

/// Slice `items` to `window`, attaching each row's absolute position
pub fn visible_items<T: Clone>(
    items: &[T],
    window: VirtualWindow,
    options: &VirtualListOptions,
) -> Vec<VisibleItem<T>> {
    let range = window.range();
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| VisibleItem {
            item: item.clone(),
            index: start + offset,
            style: ItemStyle::for_index(start + offset, options.item_height),
        })
        .collect()
}

/// Reactive handle returned by [`use_virtual_list`]
///
/// Scroll offset and viewport height are reference-counted cells, so they stay
/// readable after the owning component is cleaned up.
pub struct VirtualList<T: Send + Sync + 'static> {
    /// Attach to the scroll container
    pub container_ref: NodeRef<html::Div>,
    pub visible_items: Memo<Vec<VisibleItem<T>>>,
    pub total_height: Memo<f64>,
    scroll_top: ArcRwSignal<f64>,
    container_height: ArcRwSignal<f64>,
}

impl<T: Send + Sync + 'static> Clone for VirtualList<T> {
    fn clone(&self) -> Self {
        Self {
            container_ref: self.container_ref,
            visible_items: self.visible_items,
            total_height: self.total_height,
            scroll_top: self.scroll_top.clone(),
            container_height: self.container_height.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> VirtualList<T> {
    /// Scroll handler for the container; records its `scrollTop`
    pub fn on_scroll(&self) -> impl Fn(web_sys::Event) + Clone + 'static {
        let scroll_top = self.scroll_top.clone();
        move |ev: web_sys::Event| {
            if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                scroll_top.set(el.scroll_top() as f64);
            }
        }
    }

    /// Last recorded `scrollTop` of the container
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    /// Last measured `clientHeight` of the container
    pub fn viewport_height(&self) -> f64 {
        self.container_height.get()
    }
}

/// Window a reactive list for virtual scrolling.
///
/// Measures the container once it mounts and again on every window resize.
/// The resize listener is attached by the mount effect and removed when that
/// effect is cleaned up with its component.
pub fn use_virtual_list<T>(items: Signal<Vec<T>>, options: VirtualListOptions) -> VirtualList<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let container_ref = NodeRef::<html::Div>::new();
    let scroll_top = ArcRwSignal::new(0.0_f64);
    let container_height = ArcRwSignal::new(0.0_f64);

    let visible_items = Memo::new({
        let scroll_top = scroll_top.clone();
        let container_height = container_height.clone();
        move |_| {
            let viewport = container_height.get();
            let top = scroll_top.get();
            items.with(|items| {
                let window = VirtualWindow::compute(items.len(), top, viewport, &options);
                visible_items(items, window, &options)
            })
        }
    });

    let total_height = Memo::new(move |_| items.with(|items| total_height(items.len(), &options)));

    Effect::new({
        let container_height = container_height.clone();
        move |_| {
            let Some(el) = container_ref.get() else { return };
            let height = el.client_height() as f64;
            web_sys::console::log_1(&format!("[VLIST] Mounted, viewport height {}px", height).into());
            container_height.set(height);

            let measured = container_height.clone();
            let handle = window_event_listener(ev::resize, move |_| {
                measured.set(el.client_height() as f64);
            });
            on_cleanup(move || handle.remove());
        }
    });

    VirtualList {
        container_ref,
        visible_items,
        total_height,
        scroll_top,
        container_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(h: f64, m: usize) -> VirtualListOptions {
        VirtualListOptions::new(h).with_overscan(m)
    }

    #[test]
    fn test_window_at_top() {
        // 300px viewport over 30px rows: rows 0..10 visible, +2 overscan below
        let w = VirtualWindow::compute(1000, 0.0, 300.0, &opts(30.0, 2));
        assert_eq!(w, VirtualWindow { start: 0, end: 12 });
    }

    #[test]
    fn test_window_scrolled() {
        // scroll 95px: first visible row 3, last boundary ceil(395/30) = 14
        let w = VirtualWindow::compute(1000, 95.0, 300.0, &opts(30.0, 2));
        assert_eq!(w, VirtualWindow { start: 1, end: 16 });
    }

    #[test]
    fn test_window_clamped_at_end() {
        let w = VirtualWindow::compute(20, 500.0, 300.0, &opts(30.0, 3));
        assert_eq!(w.end, 20);
        assert_eq!(w.start, 13);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let w = VirtualWindow::compute(10, 10_000.0, 300.0, &opts(30.0, 2));
        assert!(w.is_empty());
        assert!(w.start <= w.end && w.end <= 10);
    }

    #[test]
    fn test_empty_list_and_zero_viewport() {
        assert!(VirtualWindow::compute(0, 0.0, 300.0, &opts(30.0, 2)).is_empty());
        assert!(VirtualWindow::compute(100, 0.0, 0.0, &opts(30.0, 2)).is_empty());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(VirtualWindow::compute(100, 0.0, 300.0, &opts(0.0, 2)).is_empty());
        assert!(VirtualWindow::compute(100, 0.0, f64::NAN, &opts(30.0, 2)).is_empty());
        assert_eq!(total_height(100, &opts(-5.0, 2)), 0.0);

        // negative scroll behaves like the top
        let w = VirtualWindow::compute(100, -250.0, 300.0, &opts(30.0, 2));
        assert_eq!(w, VirtualWindow::compute(100, 0.0, 300.0, &opts(30.0, 2)));
    }

    #[test]
    fn test_default_overscan() {
        assert_eq!(VirtualListOptions::new(30.0).overscan(), DEFAULT_OVERSCAN);
        assert_eq!(VirtualListOptions::new(30.0).with_overscan(0).overscan(), 0);
    }

    #[test]
    fn test_total_height() {
        assert_eq!(total_height(1000, &opts(30.0, 2)), 30_000.0);
        assert_eq!(total_height(5, &opts(30.0, 2)), 150.0);
        assert_eq!(total_height(0, &opts(30.0, 2)), 0.0);
    }

    #[test]
    fn test_visible_items_positions() {
        let items: Vec<String> = (0..50).map(|i| format!("Item {}", i)).collect();
        let o = opts(30.0, 1);
        let window = VirtualWindow::compute(items.len(), 60.0, 90.0, &o);
        let rows = visible_items(&items, window, &o);

        assert_eq!(rows.first().map(|r| r.index), Some(1));
        assert_eq!(rows.last().map(|r| r.index), Some(5));
        for row in &rows {
            assert_eq!(row.item, format!("Item {}", row.index));
            assert_eq!(row.style.top, row.index as f64 * 30.0);
            assert_eq!(row.style.height, 28.0);
        }
    }

    #[test]
    fn test_item_style_css() {
        let css = ItemStyle::for_index(3, 30.0).to_css();
        assert_eq!(
            css,
            "position: absolute; top: 90px; height: 28px; width: 100%; margin-bottom: 2px;"
        );
    }
}
