use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{CaseVm, OptionVm, ProgressVm, ScreenVm};

const WRONG_GUESS: &str = "Logical fallacy! Sibi does not accept this deduction.";

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut screen = use_signal({
        let ctx = ctx.clone();
        move || ctx.screen()
    });
    let mut feedback = use_signal(|| None::<&'static str>);

    let on_reset = {
        let ctx = ctx.clone();
        move |(): ()| {
            let message = ctx.restart().err().map(|err| err.message());
            feedback.set(message);
            screen.set(ctx.screen());
        }
    };

    let is_fatal = matches!(*screen.read(), ScreenVm::Fatal { .. });
    let body = match screen() {
        ScreenVm::Fatal { message } => rsx! {
            div { class: "fatal",
                h2 { "The case files could not be opened" }
                pre { "{message}" }
            }
        },
        ScreenVm::Complete { progress } => rsx! {
            ProgressLine { progress }
            div { class: "success",
                h3 { "Every mess has been explained." }
                p { "Sibi burps contentedly somewhere in the distance." }
            }
        },
        ScreenVm::Playing {
            progress,
            case,
            solved,
        } => rsx! {
            ProgressLine { progress }
            CaseSheet { case: case.clone() }
            hr {}
            if solved {
                div { class: "success",
                    h4 { "Case closed: {case.title}" }
                    p { "{case.wiki}" }
                }
                AdvanceButton { screen, feedback }
            } else {
                div { class: "options",
                    for option in case.options.iter().cloned() {
                        OptionButton { key: "{option.index}", option, screen, feedback }
                    }
                }
            }
            if let Some(message) = feedback() {
                p { class: "error", "{message}" }
            }
        },
    };

    rsx! {
        div { class: "app",
            if !is_fatal {
                Sidebar { on_reset }
            }
            main { class: "content",
                h1 { "Sibi's Fifty Messes" }
                Prologue {}
                {body}
            }
        }
    }
}

#[component]
fn OptionButton(
    option: OptionVm,
    screen: Signal<ScreenVm>,
    feedback: Signal<Option<&'static str>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let index = option.index;

    rsx! {
        button {
            onclick: move |_| match ctx.submit(index) {
                Ok(true) => {
                    feedback.set(None);
                    screen.set(ctx.screen());
                }
                Ok(false) => feedback.set(Some(WRONG_GUESS)),
                Err(err) => feedback.set(Some(err.message())),
            },
            "{option.label}"
        }
    }
}

#[component]
fn AdvanceButton(screen: Signal<ScreenVm>, feedback: Signal<Option<&'static str>>) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        button {
            class: "primary",
            onclick: move |_| {
                feedback.set(ctx.advance().err().map(|err| err.message()));
                screen.set(ctx.screen());
            },
            "Save and go to the next case"
        }
    }
}

#[component]
fn Sidebar(on_reset: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "sidebar",
            h2 { "Case archive" }
            button {
                class: "danger",
                onclick: move |_| on_reset.call(()),
                "Destroy all files (reset game)"
            }
        }
    }
}

#[component]
fn Prologue() -> Element {
    rsx! {
        details { open: true,
            summary { "Prologue" }
            div { class: "prologue",
                p {
                    "You stayed at a friend's place for five days. With an automatic water fountain "
                    "and a timed feeder, your cat Sibi should have been fine. Then you opened the door."
                }
                p { "The house is full of Sibi's work. Use the samples you find to work out what happened." }
            }
        }
    }
}

#[component]
fn ProgressLine(progress: ProgressVm) -> Element {
    rsx! {
        p { class: "progress", b { "{progress.label}" } }
    }
}

#[component]
fn CaseSheet(case: CaseVm) -> Element {
    rsx! {
        div { class: "paper-box",
            h3 { "Scene: {case.location}" }
            p { b { "Log: " } "{case.camera}" }
            p { class: "evidence", b { "Evidence: " } "{case.evidence_label}" }
        }
    }
}
