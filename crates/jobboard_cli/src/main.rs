//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jobboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("jobboard_core ping={}", jobboard_core::ping());
    println!("jobboard_core version={}", jobboard_core::core_version());
}
