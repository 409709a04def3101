//! Command-line interface for the `pathwise` application.
//!
//! This crate's binary delegates to the library's [`pathwise::run`].

fn main() -> anyhow::Result<()> {
    pathwise::run()
}
