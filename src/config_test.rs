use super::*;

#[test]
fn default_uses_site_routes() {
    let config = EndpointConfig::default();
    assert_eq!(config.chat, "/api/chat");
    assert_eq!(config.leads, "/api/leads");
    assert_eq!(config.news, "/api/news-query");
}

#[test]
fn resolve_reads_each_global() {
    let config = EndpointConfig::resolve(|name| match name {
        "API_CHAT" => Some("https://api.example.com/chat".to_owned()),
        "API_NEWS" => Some("https://api.example.com/news".to_owned()),
        _ => None,
    });
    assert_eq!(config.chat, "https://api.example.com/chat");
    assert_eq!(config.news, "https://api.example.com/news");
    assert_eq!(config.leads, DEFAULT_LEADS_ENDPOINT);
}

#[test]
fn resolve_ignores_blank_values() {
    let config = EndpointConfig::resolve(|_| Some("   ".to_owned()));
    assert_eq!(config, EndpointConfig::default());
}

#[test]
fn from_window_outside_browser_is_default() {
    assert_eq!(EndpointConfig::from_window(), EndpointConfig::default());
}
