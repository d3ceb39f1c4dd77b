// Example: deferred loading of a heavy view with a warm-up hint.
//
// The host owns the actual fetch (here: a queue of pending module loads); the
// loader only tells it when to start one and what to render each pass.
use listwindow_adapter::{DeferredLoader, ViewState};

#[derive(Debug)]
struct GlobeView {
    triangles: usize,
}

fn render(loader: &DeferredLoader<GlobeView>) {
    match loader.view_state() {
        ViewState::Hidden => println!("render: (nothing)"),
        ViewState::Placeholder => println!("render: loading..."),
        ViewState::Ready(globe) => println!("render: globe with {} triangles", globe.triangles),
        ViewState::Failed(message) => println!("render: error boundary: {message}"),
    }
}

fn main() {
    let mut loader = DeferredLoader::<GlobeView>::new();
    let mut pending_fetches = 0u32;

    // The warm-up hint: start loading the module while the user is idle,
    // before the checkbox is ever touched.
    if loader.warm() {
        pending_fetches += 1;
        println!("prefetch: module load dispatched");
    }
    render(&loader);

    // User ticks "show globe" before the module arrived.
    if loader.set_show(true) {
        pending_fetches += 1;
    }
    render(&loader);

    // The module load completes.
    if pending_fetches > 0 {
        pending_fetches -= 1;
        loader.complete(GlobeView { triangles: 120_000 });
    }
    render(&loader);

    // Toggling off and back on reuses the cached module.
    loader.set_show(false);
    render(&loader);
    if loader.set_show(true) {
        pending_fetches += 1;
    }
    render(&loader);

    println!(
        "fetches_started={} (pending={pending_fetches})",
        loader.fetches_started()
    );
}
