//! Integration tests for the report workflow against recording doubles.

use std::path::PathBuf;

use pokereport::ReportRequest;
use pokereport_core::Error;
use pokereport_core::mock::{
    MockCreatureLookup, MockNameTranslator, MockReportGenerator, TranslateCall,
};

use crate::common::{TestHarness, pikachu_full, pikachu_stub};

#[tokio::test]
async fn test_default_run_passes_values_between_stages() {
    let harness = TestHarness::new(pikachu_stub(), "pikachu (FR)");
    let workflow = harness.workflow();

    workflow
        .run(ReportRequest::default())
        .await
        .expect("Workflow should complete successfully");

    assert_eq!(harness.lookup.calls(), vec!["pikachu".to_string()]);
    assert_eq!(
        harness.translator.calls(),
        vec![TranslateCall {
            text: "pikachu".to_string(),
            target_language: "fr".to_string(),
        }]
    );

    let generated = harness.generator.calls();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].creature, pikachu_stub());
    assert_eq!(generated[0].translated_name, "pikachu (FR)");
    assert_eq!(generated[0].output, PathBuf::from("pokemon_report.pdf"));
}

#[tokio::test]
async fn test_translator_receives_fetched_name() {
    // The fetched record's name is translated, not the raw request string.
    let harness = TestHarness::new(pikachu_full(), "Pikachu (DE)");
    let workflow = harness.workflow();

    workflow
        .run(ReportRequest::new("PIKACHU", "de", "out.pdf"))
        .await
        .expect("Workflow should complete successfully");

    assert_eq!(harness.lookup.calls(), vec!["PIKACHU".to_string()]);
    assert_eq!(harness.translator.calls()[0].text, "pikachu");
    assert_eq!(harness.translator.calls()[0].target_language, "de");
}

#[tokio::test]
async fn test_outcome_reports_every_stage() {
    let harness = TestHarness::new(pikachu_full(), "Pikachu (FR)");
    let workflow = harness.workflow();
    let request = ReportRequest::new("pikachu", "fr", "custom.pdf");

    let outcome = workflow.run(request.clone()).await.unwrap();

    assert_eq!(outcome.run_id, request.run_id);
    assert_eq!(outcome.creature, pikachu_full());
    assert_eq!(outcome.translated_name, "Pikachu (FR)");
    assert_eq!(outcome.output, PathBuf::from("custom.pdf"));
}

#[tokio::test]
async fn test_lookup_failure_stops_the_run() {
    let harness = TestHarness::new(pikachu_stub(), "unused")
        .with_lookup(MockCreatureLookup::not_found());
    let workflow = harness.workflow();

    let err = workflow
        .run(ReportRequest::new("missingno", "fr", "out.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CreatureNotFound { ref name } if name == "missingno"));
    assert!(harness.translator.calls().is_empty());
    assert!(harness.generator.calls().is_empty());
}

#[tokio::test]
async fn test_translation_failure_stops_the_run() {
    let harness =
        TestHarness::new(pikachu_stub(), "unused").with_translator(MockNameTranslator::failing());
    let workflow = harness.workflow();

    let err = workflow.run(ReportRequest::default()).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert_eq!(harness.translator.calls().len(), 1);
    assert!(harness.generator.calls().is_empty());
}

#[tokio::test]
async fn test_render_failure_is_surfaced() {
    let harness = TestHarness::new(pikachu_stub(), "pikachu (FR)")
        .with_generator(MockReportGenerator::failing());
    let workflow = harness.workflow();

    let err = workflow.run(ReportRequest::default()).await.unwrap_err();

    assert!(matches!(err, Error::Render { .. }));
    assert_eq!(harness.generator.calls().len(), 1);
}

#[tokio::test]
async fn test_each_run_gets_its_own_id() {
    let first = ReportRequest::default();
    let second = ReportRequest::default();
    assert_ne!(first.run_id, second.run_id);

    let harness = TestHarness::new(pikachu_stub(), "pikachu (FR)");
    let workflow = harness.workflow();
    let a = workflow.run(first).await.unwrap();
    let b = workflow.run(second).await.unwrap();
    assert_ne!(a.run_id, b.run_id);
    assert_eq!(harness.generator.calls().len(), 2);
}
