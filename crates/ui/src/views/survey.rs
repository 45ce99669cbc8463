use dioxus::prelude::*;

use services::{
    COMPARISON_QUESTION_TEXT, ComparisonPrompt, ImagePanel, PRESERVATION_PROBLEMS_TEXT,
    PRESERVATION_QUESTION_TEXT, PreservationPrompt, SurveyScreen,
};
use storage::repository::ExportReceipt;
use survey_core::FoolRate;
use survey_core::model::{PreservationJudgment, Side};

use crate::context::AppContext;
use crate::views::{INTRO_MARKDOWN, ViewError};
use crate::vm::{SurveyIntent, SurveyVm, export_results, markdown_to_html};

#[derive(Clone, Debug, PartialEq)]
enum ExportState {
    Idle,
    Saving,
    Saved(ExportReceipt),
    Failed(ViewError),
}

#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = ctx.controller();
    let exports = ctx.exports();

    let vm = use_signal(move || SurveyVm::new(controller));
    let export_state = use_signal(|| ExportState::Idle);

    let dispatch_intent = use_callback(move |intent: SurveyIntent| {
        let mut vm = vm;
        // Rejections are kept on the vm as a notice and rendered below.
        let _ = vm.write().apply(intent);
    });

    let on_download = move |_| {
        let exports = exports.clone();
        let session = vm.read().session().clone();
        let mut export_state = export_state;
        spawn(async move {
            export_state.set(ExportState::Saving);
            match export_results(&exports, &session).await {
                Ok(receipt) => export_state.set(ExportState::Saved(receipt)),
                Err(err) => export_state.set(ExportState::Failed(err)),
            }
        });
    };

    let vm_guard = vm.read();
    let screen = vm_guard.screen();
    let notice = vm_guard.notice();
    let selected_side = vm_guard.selected_side();
    let judgment = vm_guard.judgment();
    let problems = vm_guard.problems().to_string();
    let can_submit = vm_guard.can_submit();
    drop(vm_guard);
    let export_state_value = export_state.read().clone();
    let saving = export_state_value == ExportState::Saving;

    rsx! {
        div { class: "page survey-page",
            h1 { "Visual Turing Test for Vitreous OCT Images" }
            if let Some(err) = notice {
                p { class: "survey-notice", role: "alert", "{err.message()}" }
            }
            match screen {
                SurveyScreen::Intro { comparison_total, preservation_total } => rsx! {
                    IntroPanel { comparison_total, preservation_total, on_intent: dispatch_intent }
                },
                SurveyScreen::Comparison(prompt) => rsx! {
                    ComparisonPanel { prompt, selected: selected_side, can_submit, on_intent: dispatch_intent }
                },
                SurveyScreen::ComparisonComplete { fool_rate } => rsx! {
                    ComparisonCompletePanel { fool_rate, on_intent: dispatch_intent }
                },
                SurveyScreen::Preservation(prompt) => rsx! {
                    PreservationPanel { prompt, judgment, problems, can_submit, on_intent: dispatch_intent }
                },
                SurveyScreen::PreservationComplete => rsx! {
                    p { "You have completed the second phase of the test." }
                    div { class: "survey-actions",
                        button {
                            id: "survey-finish",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(SurveyIntent::Continue),
                            "Finish"
                        }
                    }
                },
                SurveyScreen::Results { answered } => rsx! {
                    p { "Thank you for completing the test!" }
                    p { "Answered questions: {answered}" }
                    div { class: "survey-actions",
                        button {
                            id: "survey-download",
                            r#type: "button",
                            disabled: saving,
                            onclick: on_download,
                            "Download Results"
                        }
                    }
                    match export_state_value {
                        ExportState::Idle | ExportState::Saving => rsx! {},
                        ExportState::Saved(receipt) => rsx! {
                            ExportSavedNote { receipt }
                        },
                        ExportState::Failed(err) => rsx! {
                            p { class: "survey-notice", "{err.message()}" }
                        },
                    }
                },
            }
        }
    }
}

#[component]
pub(crate) fn IntroPanel(
    comparison_total: usize,
    preservation_total: usize,
    on_intent: EventHandler<SurveyIntent>,
) -> Element {
    let intro_html = markdown_to_html(INTRO_MARKDOWN);
    rsx! {
        div { class: "survey-intro", dangerous_inner_html: "{intro_html}" }
        ul { class: "survey-intro__counts",
            li { "Phase 1: {comparison_total} image pairs to compare" }
            li { "Phase 2: {preservation_total} image pairs to assess" }
        }
        div { class: "survey-actions",
            button {
                id: "survey-start",
                r#type: "button",
                onclick: move |_| on_intent.call(SurveyIntent::Start),
                "Start Test"
            }
        }
    }
}

#[component]
fn ImageRow(left: ImagePanel, right: ImagePanel) -> Element {
    let left_src = left.path.display().to_string();
    let right_src = right.path.display().to_string();
    rsx! {
        div { class: "image-row",
            figure {
                img { src: left_src, alt: left.caption, width: "384" }
                figcaption { "{left.caption}" }
            }
            figure {
                img { src: right_src, alt: right.caption, width: "384" }
                figcaption { "{right.caption}" }
            }
        }
    }
}

#[component]
fn QuestionHeader(number: usize, total: usize) -> Element {
    rsx! {
        p { class: "survey-counter", "Question {number}/{total}" }
        progress { class: "survey-progress", max: "{total}", value: "{number}" }
    }
}

#[component]
pub(crate) fn ComparisonPanel(
    prompt: ComparisonPrompt,
    selected: Option<Side>,
    can_submit: bool,
    on_intent: EventHandler<SurveyIntent>,
) -> Element {
    rsx! {
        QuestionHeader { number: prompt.number, total: prompt.total }
        ImageRow { left: prompt.left.clone(), right: prompt.right.clone() }
        p { "{COMPARISON_QUESTION_TEXT}" }
        div { class: "survey-choices", role: "radiogroup",
            for side in [Side::A, Side::B] {
                label { key: "{side}",
                    input {
                        r#type: "radio",
                        name: "comparison-side",
                        checked: selected == Some(side),
                        onchange: move |_| on_intent.call(SurveyIntent::SelectSide(side)),
                    }
                    "{side.caption()}"
                }
            }
        }
        div { class: "survey-actions",
            button {
                id: "survey-next",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| on_intent.call(SurveyIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
pub(crate) fn ComparisonCompletePanel(
    fool_rate: Option<FoolRate>,
    on_intent: EventHandler<SurveyIntent>,
) -> Element {
    let rate_label = fool_rate.map_or_else(|| "N/A".to_string(), |rate| rate.to_string());
    rsx! {
        p { "You have completed the first phase of the test." }
        p { class: "survey-fool-rate", "Your fool rate is: {rate_label}" }
        div { class: "survey-actions",
            button {
                id: "survey-continue",
                r#type: "button",
                onclick: move |_| on_intent.call(SurveyIntent::Continue),
                "Continue to Phase 2"
            }
        }
    }
}

#[component]
pub(crate) fn PreservationPanel(
    prompt: PreservationPrompt,
    judgment: Option<PreservationJudgment>,
    problems: String,
    can_submit: bool,
    on_intent: EventHandler<SurveyIntent>,
) -> Element {
    rsx! {
        QuestionHeader { number: prompt.number, total: prompt.total }
        ImageRow { left: prompt.left.clone(), right: prompt.right.clone() }
        p { "Please answer the following questions about the images:" }
        p { "{PRESERVATION_QUESTION_TEXT}" }
        div { class: "survey-choices", role: "radiogroup",
            for option in [PreservationJudgment::Yes, PreservationJudgment::No] {
                label { key: "{option}",
                    input {
                        r#type: "radio",
                        name: "preservation-judgment",
                        checked: judgment == Some(option),
                        onchange: move |_| on_intent.call(SurveyIntent::SelectJudgment(option)),
                    }
                    "{option}"
                }
            }
        }
        label { r#for: "survey-problems", "{PRESERVATION_PROBLEMS_TEXT}" }
        textarea {
            id: "survey-problems",
            class: "survey-problems",
            value: "{problems}",
            oninput: move |evt: FormEvent| on_intent.call(SurveyIntent::EditProblems(evt.value())),
        }
        div { class: "survey-actions",
            button {
                id: "survey-next",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| on_intent.call(SurveyIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn ExportSavedNote(receipt: ExportReceipt) -> Element {
    let location = receipt.location.as_ref().map_or_else(
        || receipt.file_name.clone(),
        |path| path.display().to_string(),
    );
    rsx! {
        p { class: "survey-export-note", "Results saved to {location}" }
    }
}
