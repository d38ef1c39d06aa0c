/// Base URL of the backend REST API.
pub const API_BASE: &str = "http://localhost:8000/api";
