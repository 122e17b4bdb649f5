use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ClientConfig::default().api_base_url, "http://127.0.0.1:5000/api");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let config = ClientConfig::new("  https://events.example.com/api//  ");
    assert_eq!(config.api_base_url, "https://events.example.com/api");
}

#[test]
fn new_falls_back_to_default_for_blank_input() {
    assert_eq!(ClientConfig::new("   ").api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn endpoint_appends_path() {
    let config = ClientConfig::new("http://localhost:8080/api/");
    assert_eq!(config.endpoint("/events/3"), "http://localhost:8080/api/events/3");
}
