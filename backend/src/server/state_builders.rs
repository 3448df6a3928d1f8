//! Builds the HTTP state from the configured employee store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use employee_backend::domain::EmployeeService;
use employee_backend::domain::ports::EmployeeDirectory;
use employee_backend::inbound::http::state::HttpState;
use employee_backend::outbound::memory::InMemoryEmployeeRepository;
use employee_backend::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

fn build_employee_directory(config: &ServerConfig) -> Arc<dyn EmployeeDirectory> {
    match &config.db_pool {
        Some(pool) => {
            info!("employee store: postgres");
            let repository = Arc::new(DieselEmployeeRepository::new(pool.clone()));
            Arc::new(EmployeeService::new(repository))
        }
        None => {
            info!("employee store: in-memory");
            Arc::new(EmployeeService::new(Arc::new(
                InMemoryEmployeeRepository::default(),
            )))
        }
    }
}

/// Shared handler state for every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_employee_directory(config)))
}
