use crate::context::ShellContext;
use crate::history::Navigator;
use dioxus::prelude::*;
use pcx::features::routing::scroll::ScrollRestorer;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub(crate) fn ScrollToTop() -> Element {
    let ctx = use_context::<ShellContext>();
    let navigator = use_context::<Navigator>();
    let restorer = use_hook(|| Rc::new(RefCell::new(ScrollRestorer::new())));

    use_effect(move || {
        let path = navigator.current();
        restorer.borrow_mut().on_navigate(&path, ctx.env.viewport.as_ref());
    });

    rsx! {}
}
