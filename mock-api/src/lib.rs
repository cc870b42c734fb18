//! In-memory implementation of the coworking dashboard's REST API.
//!
//! Serves the same `/api` contract the dashboard talks to, backed by a
//! [`store::Store`] held in memory. Used by the integration tests and the
//! dev server; nothing is persisted.

pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_web::dev::{Server, Service};
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::Store;
use crate::time::TimeSource;

/// Handles shared between the server workers and whoever built the server.
#[derive(Clone)]
pub struct AppState {
    pub store: web::Data<Mutex<Store>>,
    requests: web::Data<AtomicU64>,
}

impl AppState {
    pub fn new(time_source: TimeSource) -> Self {
        Self {
            store: web::Data::new(Mutex::new(Store::new(time_source))),
            requests: web::Data::new(AtomicU64::new(0)),
        }
    }

    /// Number of HTTP requests received so far, of any kind.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, state: AppState) -> std::io::Result<Server> {
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let requests = state.requests.clone();
        App::new()
            .wrap(cors)
            .wrap_fn(move |req, srv| {
                requests.fetch_add(1, Ordering::SeqCst);
                srv.call(req)
            })
            .service(routes::api_services())
            .app_data(state.store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a port number")?,
            allowed_origins,
        })
    }
}
