//! Browser tests for the virtual list hook.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::Executor;
use todo_ui::virtual_list::{use_virtual_list, VirtualList, VirtualListOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const ROW_HEIGHT: f64 = 30.0;

type ListSlot = Rc<RefCell<Option<VirtualList<String>>>>;

fn setup() -> Owner {
    let _ = Executor::init_wasm_bindgen();
    Owner::new()
}

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Item {}", i)).collect()
}

fn options() -> VirtualListOptions {
    VirtualListOptions::new(ROW_HEIGHT).with_overscan(2)
}

/// Empty host element attached to the document body
fn host() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

/// A 300px scroll container over `n` rows; hands the hook back through `slot`
fn list_view(slot: ListSlot, n: usize) -> impl IntoView {
    let source = RwSignal::new(items(n));
    let list = use_virtual_list(source.into(), options());
    let total_height = list.total_height;
    let on_scroll = list.on_scroll();
    let container_ref = list.container_ref;
    slot.borrow_mut().replace(list);

    view! {
        <div node_ref=container_ref style="height: 300px; overflow-y: auto;" on:scroll=on_scroll>
            <div style=move || format!("height: {}px;", total_height.get())></div>
        </div>
    }
}

/// Let the mount effect run
async fn settle() {
    TimeoutFuture::new(50).await;
}

fn indices(list: &VirtualList<String>) -> Vec<usize> {
    list.visible_items.get_untracked().iter().map(|row| row.index).collect()
}

fn dispatch_resize() {
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
fn test_unmounted_list_renders_nothing() {
    let owner = setup();
    owner.with(|| {
        let source = RwSignal::new(items(1000));
        let list = use_virtual_list(source.into(), options());

        assert!(list.container_ref.get_untracked().is_none());
        assert!(list.visible_items.get_untracked().is_empty());
        assert_eq!(list.total_height.get_untracked(), 30_000.0);
    });
}

#[wasm_bindgen_test]
fn test_total_height_follows_list_length() {
    let owner = setup();
    owner.with(|| {
        let source = RwSignal::new(items(5));
        let list = use_virtual_list(source.into(), VirtualListOptions::new(ROW_HEIGHT));
        assert_eq!(list.total_height.get_untracked(), 150.0);

        source.update(|v| v.push("Item 5".to_string()));
        assert_eq!(list.total_height.get_untracked(), 180.0);
    });
}

#[wasm_bindgen_test]
async fn test_measures_viewport_on_mount() {
    let owner = setup();
    let slot = ListSlot::default();
    let view_slot = slot.clone();
    let _handle = owner.with(|| mount_to(host(), move || list_view(view_slot, 1000)));
    settle().await;

    let list = slot.borrow().clone().unwrap();
    assert_eq!(list.viewport_height(), 300.0);
    // rows 0..10 in view plus 2 overscan below
    assert_eq!(indices(&list), (0..12).collect::<Vec<_>>());

    let first = &list.visible_items.get_untracked()[0];
    assert_eq!(first.item, "Item 0");
    assert_eq!(first.style.top, 0.0);
}

#[wasm_bindgen_test]
async fn test_scroll_shifts_window() {
    let owner = setup();
    let slot = ListSlot::default();
    let view_slot = slot.clone();
    let _handle = owner.with(|| mount_to(host(), move || list_view(view_slot, 1000)));
    settle().await;

    let list = slot.borrow().clone().unwrap();
    let container = list.container_ref.get_untracked().unwrap();
    container.set_scroll_top(300);
    container
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();

    assert_eq!(list.scroll_top(), 300.0);
    // first visible row 10, minus 2 overscan; last boundary 20 plus 2
    assert_eq!(indices(&list), (8..22).collect::<Vec<_>>());
}

#[wasm_bindgen_test]
async fn test_resize_listener_detaches_on_cleanup() {
    let owner = setup();
    let slot = ListSlot::default();
    let view_slot = slot.clone();
    let _handle = owner.with(|| mount_to(host(), move || list_view(view_slot, 1000)));
    settle().await;

    let list = slot.borrow().clone().unwrap();
    let container = list.container_ref.get_untracked().unwrap();

    container.set_attribute("style", "height: 600px; overflow-y: auto;").unwrap();
    dispatch_resize();
    assert_eq!(list.viewport_height(), 600.0);
    assert_eq!(indices(&list).last(), Some(&21));

    owner.cleanup();

    container.set_attribute("style", "height: 150px; overflow-y: auto;").unwrap();
    dispatch_resize();
    assert_eq!(list.viewport_height(), 600.0);
}
