use std::sync::Arc;

use services::SurveyController;
use survey_core::model::{ComparisonResponse, ItemId, Side};
use survey_core::{FoolRate, SurveyConfigDraft};

use super::test_harness::{ViewKind, sample_prompts, setup_view_harness, small_controller};

fn default_controller() -> Arc<SurveyController> {
    let config = SurveyConfigDraft::new().validate().expect("default config");
    Arc::new(SurveyController::new(config))
}

#[test]
fn survey_view_smoke_renders_intro() {
    let mut harness = setup_view_harness(ViewKind::Survey, default_controller());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Visual Turing Test"), "missing title in {html}");
    assert!(html.contains("Start Test"), "missing start button in {html}");
    assert!(
        html.contains("Phase 1: 20 image pairs"),
        "missing comparison total in {html}"
    );
    assert!(
        html.contains("Phase 2: 10 image pairs"),
        "missing preservation total in {html}"
    );
    assert!(!html.contains("<script"), "intro must be sanitized: {html}");
}

#[test]
fn comparison_panel_shows_counter_images_and_selection() {
    let (prompt, _) = sample_prompts();
    let mut harness = setup_view_harness(ViewKind::Comparison(prompt), small_controller());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1/2"), "missing counter in {html}");
    assert!(html.contains("Image A"), "missing caption in {html}");
    assert!(html.contains("Image B"), "missing caption in {html}");
    assert!(
        html.contains("oct_high_quality_1.jpeg"),
        "missing reference image in {html}"
    );
    assert!(
        html.contains("real OCT image"),
        "missing question text in {html}"
    );
    assert!(html.contains("checked"), "selected side not rendered in {html}");
}

#[test]
fn comparison_complete_panel_shows_fool_rate() {
    let responses = [
        ComparisonResponse::new(ItemId::new(1), Side::A, Side::B),
        ComparisonResponse::new(ItemId::new(2), Side::A, Side::A),
    ];
    let rate = FoolRate::from_responses(&responses).expect("non-empty");
    let mut harness =
        setup_view_harness(ViewKind::ComparisonComplete(Some(rate)), small_controller());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("50.00%"), "missing fool rate in {html}");
    assert!(
        html.contains("Continue to Phase 2"),
        "missing continue button in {html}"
    );
}

#[test]
fn comparison_complete_panel_without_answers_shows_not_applicable() {
    let mut harness = setup_view_harness(ViewKind::ComparisonComplete(None), small_controller());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Your fool rate is: N/A"), "missing N/A in {html}");
}

#[test]
fn preservation_panel_shows_source_and_generated_images() {
    let (_, prompt) = sample_prompts();
    let mut harness = setup_view_harness(ViewKind::Preservation(prompt), small_controller());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1/1"), "missing counter in {html}");
    assert!(html.contains("ART10"), "missing source caption in {html}");
    assert!(
        html.contains("Generated enhanced version"),
        "missing output caption in {html}"
    );
    assert!(
        html.contains("oct_low_quality_3.jpeg"),
        "missing source image in {html}"
    );
    assert!(
        html.contains("oct_output_diffusion_3.jpeg"),
        "missing generated image in {html}"
    );
    assert!(html.contains("halo around vessels"), "missing problems text in {html}");
    assert!(html.contains("disabled"), "next should be disabled in {html}");
}
