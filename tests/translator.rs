mod helpers;

use helpers::{TRANSLATE_KEY, mount_translator};
use newsdesk::translate::{GoogleTranslator, Translator};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

#[tokio::test]
async fn test_translates_to_somali() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", TRANSLATE_KEY))
        .and(body_json(json!({"q": "Good morning", "target": "so", "format": "text"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"translations": [{"translatedText": "Subax wanaagsan"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let translator = GoogleTranslator::new(server.uri(), Some(TRANSLATE_KEY.to_string()));

    assert_eq!(
        translator.translate_to_somali("  Good morning ").await,
        "Subax wanaagsan"
    );
}

#[tokio::test]
async fn test_blank_input_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let translator = GoogleTranslator::new(server.uri(), Some(TRANSLATE_KEY.to_string()));

    assert_eq!(translator.translate_to_somali("").await, "");
    assert_eq!(translator.translate_to_somali(" \n ").await, "");
}

#[tokio::test]
async fn test_provider_failure_passes_text_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid"}
        })))
        .mount(&server)
        .await;

    let translator = GoogleTranslator::new(server.uri(), Some(TRANSLATE_KEY.to_string()));

    assert_eq!(translator.translate_to_somali("Hello").await, "Hello");
}

#[tokio::test]
async fn test_empty_translation_keeps_source_text() {
    let server = MockServer::start().await;
    mount_translator(&server, "  ").await;

    let translator = GoogleTranslator::new(server.uri(), Some(TRANSLATE_KEY.to_string()));

    assert_eq!(translator.translate_to_somali("Hello").await, "Hello");
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let translator = GoogleTranslator::new(server.uri(), None);

    assert_eq!(translator.translate_to_somali("Hello").await, "Hello");
}
