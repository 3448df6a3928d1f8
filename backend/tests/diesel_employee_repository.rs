//! Integration tests for `DieselEmployeeRepository` against embedded PostgreSQL.
//!
//! Opt-in: run with `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

use employee_backend::domain::ports::EmployeeRepository;
use employee_backend::domain::{EmployeeId, EmployeeRecord};
use employee_backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{
    embedded_postgres_enabled, handle_cluster_setup_failure, migrate_schema, reset_database,
};

const TEST_DB: &str = "diesel_employee_repository_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    repository: DieselEmployeeRepository,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);
    migrate_schema(&database_url)?;

    let config = PoolConfig::new(&database_url).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        repository: DieselEmployeeRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    if !embedded_postgres_enabled() {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return None;
    }
    match setup_context() {
        Ok(context) => Some(context),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn save_assigns_id_and_lists_in_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = &context.repository;

    let (first, second, listed) = context.runtime.block_on(async {
        let first = repository
            .save(&EmployeeRecord::new(None, "Ann", 30))
            .await
            .expect("save first");
        let second = repository
            .save(&EmployeeRecord::new(None, "Bo", 41))
            .await
            .expect("save second");
        let listed = repository.find_all().await.expect("list");
        (first, second, listed)
    });

    assert!(first.id() < second.id());
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn save_with_existing_id_replaces_record(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = &context.repository;

    let (created, replaced, fetched) = context.runtime.block_on(async {
        let created = repository
            .save(&EmployeeRecord::new(None, "Ann", 30))
            .await
            .expect("create");
        let replaced = repository
            .save(&EmployeeRecord::new(Some(created.id()), "Ann Lee", 31))
            .await
            .expect("replace");
        let fetched = repository
            .find_by_id(created.id())
            .await
            .expect("fetch")
            .expect("present");
        (created, replaced, fetched)
    });

    assert_eq!(replaced.id(), created.id());
    assert_eq!(fetched.name(), "Ann Lee");
    assert_eq!(fetched.age(), 31);
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn explicit_id_advances_generated_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = &context.repository;

    let (explicit, generated, lower, after_lower) = context.runtime.block_on(async {
        let explicit = repository
            .save(&EmployeeRecord::new(Some(EmployeeId::new(500)), "Ann", 30))
            .await
            .expect("explicit save");
        let generated = repository
            .save(&EmployeeRecord::new(None, "Bo", 41))
            .await
            .expect("generated save");
        let lower = repository
            .save(&EmployeeRecord::new(Some(EmployeeId::new(7)), "Cy", 52))
            .await
            .expect("lower explicit save");
        let after_lower = repository
            .save(&EmployeeRecord::new(None, "Di", 23))
            .await
            .expect("second generated save");
        (explicit, generated, lower, after_lower)
    });

    assert_eq!(explicit.id(), EmployeeId::new(500));
    assert_eq!(generated.id(), EmployeeId::new(501));
    assert_eq!(lower.id(), EmployeeId::new(7));
    assert_eq!(after_lower.id(), EmployeeId::new(502));
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn delete_removes_record(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = &context.repository;

    let (existed, exists_after, found_after) = context.runtime.block_on(async {
        let saved = repository
            .save(&EmployeeRecord::new(None, "Cy", 52))
            .await
            .expect("save");
        let existed = repository.exists_by_id(saved.id()).await.expect("exists");
        repository.delete_by_id(saved.id()).await.expect("delete");
        let exists_after = repository.exists_by_id(saved.id()).await.expect("exists");
        let found_after = repository.find_by_id(saved.id()).await.expect("fetch");
        (existed, exists_after, found_after)
    });

    assert!(existed);
    assert!(!exists_after);
    assert!(found_after.is_none());
}

#[rstest]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn unknown_id_is_absent(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = &context.repository;

    let (found, exists) = context.runtime.block_on(async {
        let id = EmployeeId::new(987_654);
        (
            repository.find_by_id(id).await.expect("fetch"),
            repository.exists_by_id(id).await.expect("exists"),
        )
    });

    assert!(found.is_none());
    assert!(!exists);
}
