use super::*;

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url("test-client-id", "test-token", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn search_url_appends_trademarks_endpoint_and_params() {
    let client = test_client("https://api-sandbox.euipo.europa.eu/trademark-search");
    let url = client.search_url("status==REGISTERED", 0);
    assert_eq!(
        url.as_str(),
        "https://api-sandbox.euipo.europa.eu/trademark-search/trademarks\
         ?query=status%3D%3DREGISTERED&size=100&page=0"
    );
}

#[test]
fn search_url_strips_trailing_slash() {
    let client = test_client("https://api-sandbox.euipo.europa.eu/trademark-search/");
    let url = client.search_url("a", 2);
    assert!(url
        .as_str()
        .starts_with("https://api-sandbox.euipo.europa.eu/trademark-search/trademarks?"));
    assert!(url.as_str().ends_with("page=2"));
}

#[test]
fn search_url_encodes_wildcards_and_quotes() {
    let client = test_client("http://localhost:8080");
    let url = client.search_url(r#"wordMarkSpecification.verbalElement=="PAXON""#, 0);
    let encoded = url.as_str();
    assert!(
        encoded.contains("query=wordMarkSpecification.verbalElement%3D%3D%22PAXON%22"),
        "query param should be percent-encoded: {encoded}"
    );
}

#[test]
fn with_base_url_rejects_invalid_url() {
    let result = RegistryClient::with_base_url("id", "token", 30, "not a url");
    assert!(
        matches!(result, Err(RegistryError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
