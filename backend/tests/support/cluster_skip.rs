//! Opt-in and skip policy for suites that need embedded PostgreSQL.
//!
//! Suites only run when `RUN_PG_EMBEDDED=1`. When the cluster then fails to
//! start, `SKIP_TEST_CLUSTER` decides between skipping and failing.

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// True when embedded PostgreSQL suites were requested.
pub fn embedded_postgres_enabled() -> bool {
    is_truthy("RUN_PG_EMBEDDED")
}

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" (any case).
pub fn should_skip_test_cluster() -> bool {
    is_truthy("SKIP_TEST_CLUSTER")
}

/// Skip (returning `None`) or panic after a cluster setup failure.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
