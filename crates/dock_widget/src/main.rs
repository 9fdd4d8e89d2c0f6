//! Binary entrypoint for the browser-hosted dock widget.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    dock_widget::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary targets the browser/WASM workflow. Build for wasm32 with the `csr` feature to produce the injectable bundle."
    );
}
