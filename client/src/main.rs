//! Browser entry point; build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    client::start();
}
