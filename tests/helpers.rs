#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const NEWS_KEY: &str = "news-key";
pub const TRANSLATE_KEY: &str = "translate-key";

/// A body long and complete enough to pass the publishing check.
pub fn complete_body(topic: &str) -> String {
    format!("{topic}: ")
        + &"Officials confirmed the plan on Monday after weeks of talks with local groups. "
            .repeat(4)
}

pub fn newsapi_article(title: &str, content: &str) -> Value {
    json!({
        "source": {"id": null, "name": "Wire"},
        "title": title,
        "description": "Short description",
        "url": format!("https://publisher.example/{}", title.to_lowercase().replace(' ', "-")),
        "urlToImage": "https://publisher.example/image.jpg",
        "publishedAt": "2024-05-01T10:00:00Z",
        "content": content
    })
}

pub async fn mount_newsapi(server: &MockServer, world: Vec<Value>, football: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("apiKey", NEWS_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "totalResults": world.len(), "articles": world})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("apiKey", NEWS_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"status": "ok", "totalResults": football.len(), "articles": football}),
        ))
        .mount(server)
        .await;
}

/// Translation stub answering every request with `translation`.
pub async fn mount_translator(server: &MockServer, translation: &str) {
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", TRANSLATE_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"translations": [{"translatedText": translation}]}
        })))
        .mount(server)
        .await;
}
