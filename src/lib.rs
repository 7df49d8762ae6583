pub mod config;
pub mod domain {
    pub mod affordability;
    pub mod assessment;
    pub mod badge;
    pub mod error;
    pub mod report;
    pub mod reputation;
}
pub mod http {
    pub mod handlers {
        pub mod affordability;
        pub mod ops;
        pub mod risk;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
    pub mod routes;
}
pub mod repo {
    pub mod affordability_repo;
    pub mod loans_repo;
    pub mod reputation_repo;
}
pub mod scoring;
pub mod service {
    pub mod risk_service;
}
pub mod store;

#[derive(Clone)]
pub struct AppState {
    pub risk_service: service::risk_service::RiskService,
    pub pool: sqlx::PgPool,
}
