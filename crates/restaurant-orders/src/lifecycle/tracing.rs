//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module targets are hidden; actor events carry an `entity_type` field
//! instead, and client methods open spans named after the operation.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and state changes
//! RUST_LOG=debug cargo run    # request payloads and reads
//! ```
//!
//! A checkout at `info` reads roughly:
//!
//! ```text
//! INFO checkout:checkout: Action ok entity_type="Cart" id=user_3
//! INFO checkout:checkout: Cart checked out order_id=order_1 user_id=user_3 cleared=1
//! INFO checkout:checkout: Created entity_type="Order" id=order_1 size=1
//! INFO checkout:checkout: Checkout complete order_id=order_1
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
