use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::{Children, Properties};
use yew::prelude::*;

const FAQ_ENTRIES: &[(&str, &str, &str)] = &[
    (
        "what-is-asset-allocation",
        "What is asset allocation?",
        "Asset allocation is how your money is split between stocks, bonds, cash and alternatives. It drives most of the long-term variation in a portfolio's returns, which is why we start every plan there.",
    ),
    (
        "minimum-investment",
        "Is there a minimum portfolio size?",
        "No. We work with first-time investors and established families alike. Fees scale with the services you use, not with a minimum balance.",
    ),
    (
        "how-often-rebalance",
        "How often do you rebalance?",
        "We review every portfolio quarterly and rebalance whenever an asset class drifts more than five percentage points from its target, or sooner after a major life event.",
    ),
    (
        "custody",
        "Who holds my money?",
        "Your assets stay with a regulated third-party custodian in your own name. We have trading authority only, never withdrawal authority.",
    ),
    (
        "corporate-clients",
        "Do you work with companies?",
        "Yes. We manage treasury reserves, design employee retirement plans and run financial wellness workshops for teams of every size.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    id: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    // Open when the URL hash points at this question, now and on later hash changes
    {
        let is_open = is_open.clone();
        let id = props.id.clone();

        use_effect_with_deps(move |_| {
            let check_hash = move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if window.location().hash().ok().as_deref() == Some(format!("#{}", id).as_str()) {
                    is_open.set(true);
                    // Let the answer expand before scrolling to it
                    let id = id.clone();
                    Timeout::new(100, move || {
                        if let Some(element) = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|doc| doc.get_element_by_id(&id))
                        {
                            element.scroll_into_view_with_bool(true);
                        }
                    })
                    .forget();
                }
            };

            check_hash();

            let listener = Closure::<dyn Fn()>::new(check_hash);
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref()) {
                    log::warn!("Could not listen for hash changes: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    if let Err(e) = window.remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref()) {
                        log::warn!("Could not stop listening for hash changes: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <style>{FAQ_CSS}</style>
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().map(|(id, question, answer)| html! {
                    <FaqItem id={id.to_string()} question={question.to_string()}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
    .faq-section {
        padding: 4rem 2rem;
        max-width: 800px;
        margin: 0 auto;
    }
    .faq-section h2 {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 2rem;
        color: #1f2937;
    }
    .faq-item {
        border-bottom: 1px solid #e5e7eb;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 0;
        background: none;
        border: none;
        font-size: 1.1rem;
        font-weight: 600;
        color: #1f2937;
        text-align: left;
        cursor: pointer;
    }
    .toggle-icon {
        font-size: 1.5rem;
        color: #2563eb;
    }
    .faq-answer {
        display: none;
        padding-bottom: 1.25rem;
        color: #4b5563;
        line-height: 1.6;
    }
    .faq-item.open .faq-answer {
        display: block;
    }
"#;
