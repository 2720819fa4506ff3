pub mod middleware;

pub use middleware::ApiTokenMiddleware;
