use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, ExportService, NOT_APPLICABLE, ResultExporter,
    SurveyAction, SurveyController, SurveyOutcome, SurveyScreen, SurveySession,
};
use storage::repository::InMemoryExportSink;
use survey_core::SurveyConfigDraft;
use survey_core::model::{Phase, PreservationJudgment};

fn controller() -> SurveyController {
    SurveyController::new(SurveyConfigDraft::new().validate().unwrap())
}

/// Runs a full session, answering every comparison question correctly.
fn complete_session(ctrl: &SurveyController, rng: &mut StdRng) -> SurveySession {
    let mut session = ctrl.new_session();
    ctrl.dispatch_with_rng(&mut session, SurveyAction::Start, rng)
        .unwrap();

    while let Some(question) = session.current_comparison() {
        let side = question.correct_side();
        assert_eq!(session.comparison_responses().len(), session.question_index());
        ctrl.dispatch_with_rng(&mut session, SurveyAction::SubmitComparison(Some(side)), rng)
            .unwrap();
    }
    ctrl.dispatch_with_rng(&mut session, SurveyAction::Continue, rng)
        .unwrap();

    let mut n = 0;
    while session.current_preservation().is_some() {
        assert_eq!(session.preservation_responses().len(), session.question_index());
        let judgment = if n % 2 == 0 {
            PreservationJudgment::Yes
        } else {
            PreservationJudgment::No
        };
        ctrl.dispatch_with_rng(
            &mut session,
            SurveyAction::SubmitPreservation {
                judgment: Some(judgment),
                problems: format!("note {n}"),
            },
            rng,
        )
        .unwrap();
        n += 1;
    }
    let outcome = ctrl
        .dispatch_with_rng(&mut session, SurveyAction::Continue, rng)
        .unwrap();
    assert_eq!(outcome, SurveyOutcome::Entered(Phase::Results));
    session
}

#[test]
fn full_session_exports_thirty_contiguous_rows() {
    let ctrl = controller();
    let mut rng = StdRng::seed_from_u64(99);
    let session = complete_session(&ctrl, &mut rng);

    assert_eq!(session.fool_rate().unwrap().percent(), 0.0);
    assert_eq!(ctrl.screen(&session), SurveyScreen::Results { answered: 30 });

    let table = ResultExporter::export(&session);
    assert_eq!(table.len(), 30);
    for (idx, row) in table.rows().iter().enumerate() {
        assert_eq!(row.question, idx + 1);
        if idx < 20 {
            assert_eq!(row.phase, Phase::Comparison);
            assert!(row.correct_answer == "A" || row.correct_answer == "B");
            assert_eq!(row.fool_rate, "0.00");
            assert!(row.problems.is_empty());
        } else {
            assert_eq!(row.phase, Phase::Preservation);
            assert_eq!(row.correct_answer, NOT_APPLICABLE);
            assert_eq!(row.fool_rate, NOT_APPLICABLE);
            assert_eq!(row.problems, format!("note {}", idx - 20));
        }
    }
}

#[test]
fn partial_export_is_allowed_before_results() {
    let ctrl = controller();
    let mut session = ctrl.new_session();
    ctrl.dispatch(&mut session, SurveyAction::Start).unwrap();
    for _ in 0..3 {
        let side = session.current_comparison().unwrap().correct_side().other();
        ctrl.dispatch(&mut session, SurveyAction::SubmitComparison(Some(side)))
            .unwrap();
    }

    let table = ResultExporter::export(&session);
    assert_eq!(table.len(), 3);
    assert!(table.rows().iter().all(|row| row.fool_rate == "100.00"));
}

#[tokio::test]
async fn export_service_saves_csv_artifact() {
    let ctrl = controller();
    let mut rng = StdRng::seed_from_u64(7);
    let session = complete_session(&ctrl, &mut rng);
    let sink = InMemoryExportSink::new();
    let exports = ExportService::new(Arc::new(sink.clone()));

    let receipt = exports.export_session(&session).await.unwrap();

    assert_eq!(receipt.file_name, EXPORT_FILE_NAME);
    assert_eq!(receipt.content_type, EXPORT_CONTENT_TYPE);
    let artifact = sink.get(EXPORT_FILE_NAME).unwrap().expect("artifact stored");
    let csv = String::from_utf8(artifact.contents).unwrap();
    assert!(csv.starts_with("question,phase,image_index,response,correct_answer,fool_rate,problems\n"));
    assert_eq!(csv.lines().count(), 31);
    assert_eq!(receipt.bytes, csv.len());
}
