//! Todo UI Entry Point

use leptos::prelude::*;
use todo_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
