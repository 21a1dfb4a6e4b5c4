use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Dashboard client configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    pub page_size: u32,
}

impl DashboardConfig {
    /// Load dashboard configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCTS_API_URL: Base URL of the product API (default: "http://localhost:3000/api")
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("PRODUCTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
