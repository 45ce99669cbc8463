use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{
    ComparisonPrompt, ExportService, PreservationPrompt, SurveyAction, SurveyController,
    SurveyScreen,
};
use storage::repository::InMemoryExportSink;
use survey_core::FoolRate;
use survey_core::model::{ItemPool, Side};
use survey_core::{ItemSelection, SurveyConfigDraft};

use crate::context::{UiApp, build_app_context};
use crate::views::SurveyView;
use crate::views::survey::{ComparisonCompletePanel, ComparisonPanel, PreservationPanel};

#[derive(Clone)]
struct TestApp {
    controller: Arc<SurveyController>,
    exports: Arc<ExportService>,
}

impl UiApp for TestApp {
    fn controller(&self) -> Arc<SurveyController> {
        Arc::clone(&self.controller)
    }

    fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Survey,
    Comparison(ComparisonPrompt),
    ComparisonComplete(Option<FoolRate>),
    Preservation(PreservationPrompt),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Survey => rsx! { SurveyView {} },
        ViewKind::Comparison(prompt) => rsx! {
            ComparisonPanel { prompt, selected: Some(Side::B), can_submit: true, on_intent: move |_| {} }
        },
        ViewKind::ComparisonComplete(fool_rate) => rsx! {
            ComparisonCompletePanel { fool_rate, on_intent: move |_| {} }
        },
        ViewKind::Preservation(prompt) => rsx! {
            PreservationPanel {
                prompt,
                judgment: None,
                problems: "halo around vessels".to_string(),
                can_submit: false,
                on_intent: move |_| {},
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sink: InMemoryExportSink,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Controller over a small fixed selection: two comparison items, one preservation item.
pub fn small_controller() -> Arc<SurveyController> {
    let config = SurveyConfigDraft {
        asset_root: Some("assets/oct".into()),
        selection: Some(ItemSelection::Fixed {
            comparison: ItemPool::range(1..=2),
            preservation: ItemPool::range(3..=3),
        }),
    }
    .validate()
    .expect("valid config");
    Arc::new(SurveyController::new(config))
}

/// The first comparison and preservation prompts of a session on `small_controller`.
pub fn sample_prompts() -> (ComparisonPrompt, PreservationPrompt) {
    let controller = small_controller();
    let mut session = controller.new_session();
    controller
        .dispatch(&mut session, SurveyAction::Start)
        .expect("start");
    let SurveyScreen::Comparison(comparison) = controller.screen(&session) else {
        panic!("expected comparison screen");
    };
    for _ in 0..2 {
        controller
            .dispatch(&mut session, SurveyAction::SubmitComparison(Some(Side::A)))
            .expect("answer");
    }
    controller
        .dispatch(&mut session, SurveyAction::Continue)
        .expect("continue");
    let SurveyScreen::Preservation(preservation) = controller.screen(&session) else {
        panic!("expected preservation screen");
    };
    (comparison, preservation)
}

pub fn setup_view_harness(view: ViewKind, controller: Arc<SurveyController>) -> ViewHarness {
    let sink = InMemoryExportSink::new();
    let exports = Arc::new(ExportService::new(Arc::new(sink.clone())));
    let app = Arc::new(TestApp {
        controller,
        exports,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, sink }
}
