//! # Observability & Tracing
//!
//! Structured logging for the whole subsystem, built on the `tracing`
//! crate.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown and final record counts
//! - **Operations**: Save, FindById, FindAll with entity type and id fields
//! - **Menu creation flow**: the wrapper logs the request once at `debug`
//!   (`debug!(?params, ...)` records the payload via its `Debug` form), the
//!   actor logs each validation step's store lookups
//! - **Errors**: rejections at `warn` with the offending field
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo test      # compact logs
//! RUST_LOG=debug cargo test     # full payloads
//! ```
//!
//! A successful creation at `debug` reads like the workflow itself:
//!
//! ```text
//! DEBUG create called params=MenuCreate { name: "Two Fried Chickens", .. }
//! INFO  Sending menu creation to store
//! DEBUG FindById menu_group_1 found=true
//! DEBUG FindById product_1 found=true
//! INFO  Saved menu_product_1 size=1
//! INFO  Saved menu_1 size=1
//! ```

/// Initializes the tracing subscriber. Call once, from the consuming
/// boundary, before any store actor is spawned.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; entity_type fields carry the context
        .compact()
        .init();
}
