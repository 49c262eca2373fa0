//! End-to-end runs against mock PokeAPI and translation servers.

use std::sync::Arc;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokereport::{ReportRequest, ReportWorkflow};
use pokereport_clients::{CloudTranslator, HttpTranslationClient, PokeApiClient};
use pokereport_core::Error;
use pokereport_render::PdfReportGenerator;

use crate::common::{FakePdfConverter, pikachu_json};

async fn mount_pokeapi(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_json()))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_translate(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v3/projects/your-project-id/locations/global:translateText"))
        .and(body_json(serde_json::json!({
            "contents": ["pikachu"],
            "targetLanguageCode": "fr",
            "mimeType": "text/plain"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translations": [{"translatedText": "Pikachu (FR)", "detectedLanguageCode": "en"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_writes_pdf_and_removes_html() {
    let server = MockServer::start().await;
    mount_pokeapi(&server).await;
    mount_translate(&server).await;

    let dir = tempfile::TempDir::new().unwrap();
    let html_path = dir.path().join("report_template.html");
    let output = dir.path().join("pokemon_report.pdf");

    let converter = FakePdfConverter::default();
    let generator = Arc::new(PdfReportGenerator::new(converter, &html_path));
    let workflow = ReportWorkflow::new(
        Arc::new(PokeApiClient::new(format!("{}/api/v2", server.uri()))),
        Arc::new(CloudTranslator::new(
            HttpTranslationClient::new(format!("{}/v3", server.uri())),
            "your-project-id",
        )),
        generator.clone(),
    );

    let outcome = workflow
        .run(ReportRequest::new("pikachu", "fr", &output))
        .await
        .expect("End-to-end run should succeed");

    assert_eq!(outcome.translated_name, "Pikachu (FR)");
    assert_eq!(outcome.creature.height, 4);
    assert!(output.exists(), "PDF should be written");
    assert!(!html_path.exists(), "HTML intermediate should be removed");

    let calls = generator.converter().calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (seen_html, seen_output, content) = &calls[0];
    assert_eq!(seen_html, &html_path);
    assert_eq!(seen_output, &output);
    assert!(content.contains("<strong>Name:</strong> Pikachu (FR)"));
    assert!(content.contains("<strong>Height:</strong> 4 decimetres"));
    assert!(content.contains("<strong>Weight:</strong> 60 hectograms"));
    assert!(content.contains("<strong>Abilities:</strong> static, lightning-rod"));
}

#[tokio::test]
async fn test_unknown_creature_never_reaches_translation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let workflow = ReportWorkflow::new(
        Arc::new(PokeApiClient::new(format!("{}/api/v2", server.uri()))),
        Arc::new(CloudTranslator::new(
            HttpTranslationClient::new(format!("{}/v3", server.uri())),
            "your-project-id",
        )),
        Arc::new(PdfReportGenerator::new(
            FakePdfConverter::default(),
            dir.path().join("report_template.html"),
        )),
    );

    let err = workflow
        .run(ReportRequest::new("missingno", "fr", dir.path().join("out.pdf")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CreatureNotFound { .. }));
    assert!(!dir.path().join("report_template.html").exists());
}
