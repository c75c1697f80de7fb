//! Binary entrypoint for the browser-hosted posts application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    posts_web::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `posts_app` for wasm32 with the `csr` feature (for example with `trunk serve`)."
    );
}
