//! Trunk binary target. Built with `--features csr` for the browser.

fn main() {
    #[cfg(feature = "csr")]
    agent_chat::mount();
}
