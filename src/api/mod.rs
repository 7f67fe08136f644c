// API module organization
pub mod messages;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
