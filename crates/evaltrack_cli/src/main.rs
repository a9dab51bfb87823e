//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `evaltrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("evaltrack_core ping={}", evaltrack_core::ping());
    println!("evaltrack_core version={}", evaltrack_core::core_version());

    // Opening an in-memory database exercises the whole migration path.
    match evaltrack_core::db::open_db_in_memory() {
        Ok(_conn) => println!(
            "schema_version={}",
            evaltrack_core::db::migrations::latest_version()
        ),
        Err(err) => println!("schema_error={err}"),
    }
}
