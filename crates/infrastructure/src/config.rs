//! Service configuration loaded from environment variables.

use std::str::FromStr;

/// Runtime settings with defaults for local development.
///
/// Reads from environment variables:
/// - `DATABASE_DSN` (default: `""`)
/// - `DATABASE_CONNECTION_RETRIES` (default: `3`)
/// - `HTTP_PORT` (default: `8082`)
/// - `KAFKA_BOOTSTRAP_SERVERS` (default: `"localhost:9092"`)
/// - `KAFKA_CONSUMER_GROUP` (default: `"delivery-group"`)
/// - `KAFKA_BASKETS_EVENTS_TOPIC` (default: `"baskets.events"`)
/// - `KAFKA_ORDERS_EVENTS_TOPIC` (default: `"orders.events"`)
/// - `GEO_SERVICE_GRPC_HOST` (default: `"0.0.0.0"`)
/// - `GEO_SERVICE_GRPC_PORT` (default: `5004`)
/// - `RUST_LOG` (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_dsn: String,
    pub database_connection_retries: u32,
    pub http_port: u16,
    pub kafka_bootstrap_servers: String,
    pub kafka_consumer_group: String,
    pub kafka_baskets_events_topic: String,
    pub kafka_orders_events_topic: String,
    pub geo_service_grpc_host: String,
    pub geo_service_grpc_port: u16,
    pub log_level: String,
}

impl Settings {
    /// Loads settings from the environment, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_dsn: string_var("DATABASE_DSN", defaults.database_dsn),
            database_connection_retries: parsed_var(
                "DATABASE_CONNECTION_RETRIES",
                defaults.database_connection_retries,
            ),
            http_port: parsed_var("HTTP_PORT", defaults.http_port),
            kafka_bootstrap_servers: string_var(
                "KAFKA_BOOTSTRAP_SERVERS",
                defaults.kafka_bootstrap_servers,
            ),
            kafka_consumer_group: string_var("KAFKA_CONSUMER_GROUP", defaults.kafka_consumer_group),
            kafka_baskets_events_topic: string_var(
                "KAFKA_BASKETS_EVENTS_TOPIC",
                defaults.kafka_baskets_events_topic,
            ),
            kafka_orders_events_topic: string_var(
                "KAFKA_ORDERS_EVENTS_TOPIC",
                defaults.kafka_orders_events_topic,
            ),
            geo_service_grpc_host: string_var(
                "GEO_SERVICE_GRPC_HOST",
                defaults.geo_service_grpc_host,
            ),
            geo_service_grpc_port: parsed_var(
                "GEO_SERVICE_GRPC_PORT",
                defaults.geo_service_grpc_port,
            ),
            log_level: string_var("RUST_LOG", defaults.log_level),
        }
    }

    /// Returns the `"0.0.0.0:port"` address the HTTP listener binds to.
    pub fn http_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }

    /// Returns the `"host:port"` address of the geo service.
    pub fn geo_service_addr(&self) -> String {
        format!("{}:{}", self.geo_service_grpc_host, self.geo_service_grpc_port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_dsn: String::new(),
            database_connection_retries: 3,
            http_port: 8082,
            kafka_bootstrap_servers: "localhost:9092".to_string(),
            kafka_consumer_group: "delivery-group".to_string(),
            kafka_baskets_events_topic: "baskets.events".to_string(),
            kafka_orders_events_topic: "orders.events".to_string(),
            geo_service_grpc_host: "0.0.0.0".to_string(),
            geo_service_grpc_port: 5004,
            log_level: "info".to_string(),
        }
    }
}

fn string_var(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
