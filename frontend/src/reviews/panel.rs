use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use super::card::{ReviewCard, SharedRegistry};
use super::fetch::fetch_reviews;
use super::models::{Review, ReviewId};
use super::playback::{self, Activation, PlayRequests};
use super::state::{is_playing, LoadStatus, PanelView, PlaybackAction, PlaybackState};

const NOTICE_TIMEOUT_MS: u32 = 6_000;

#[function_component(ReviewPanel)]
pub fn review_panel() -> Html {
    let reviews = use_state(Vec::<Review>::new);
    let load_status = use_state(|| LoadStatus::Pending);
    let player = use_reducer(PlaybackState::default);
    let requests = use_mut_ref(PlayRequests::default);
    let registry = use_state(SharedRegistry::default);

    // Fetch the listing once on mount; a late answer after unmount is dropped
    {
        let reviews = reviews.clone();
        let load_status = load_status.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                {
                    let mounted = mounted.clone();
                    spawn_local(async move {
                        let result = fetch_reviews().await;
                        if !mounted.get() {
                            log::debug!("Review panel unmounted before the listing arrived");
                            return;
                        }
                        match result {
                            Ok(list) => {
                                log::info!("Loaded {} reviews", list.len());
                                reviews.set(list);
                                load_status.set(LoadStatus::Ready);
                            }
                            Err(e) => {
                                log::error!("Fetching reviews failed: {}", e);
                                load_status.set(LoadStatus::from_error(&e));
                            }
                        }
                    });
                }
                move || mounted.set(false)
            },
            (),
        );
    }

    // Notices fade on their own; every newly raised notice gets a fresh timer
    {
        let dispatcher = player.dispatcher();
        use_effect_with_deps(
            move |&(serial, showing): &(u64, bool)| {
                let timeout = showing.then(|| {
                    Timeout::new(NOTICE_TIMEOUT_MS, move || dispatcher.dispatch(PlaybackAction::Expired(serial)))
                });
                move || drop(timeout)
            },
            (player.notice_serial, player.notice.is_some()),
        );
    }

    let on_activate = {
        let registry = registry.clone();
        let player = player.clone();
        let requests = requests.clone();
        Callback::from(move |id: ReviewId| {
            let activation = playback::activate(&*registry.0.borrow(), player.active.as_ref(), &id);
            match activation {
                Activation::Starting(start) => {
                    let ticket = requests.borrow_mut().begin(Some(&id));
                    let registry = registry.clone();
                    let requests = requests.clone();
                    let dispatcher = player.dispatcher();
                    spawn_local(async move {
                        let result = start.await;
                        let outcome = requests.borrow().settle(&*registry.0.borrow(), ticket, &id, result);
                        if let Some(action) = PlaybackAction::from_outcome(outcome) {
                            dispatcher.dispatch(action);
                        }
                    });
                }
                Activation::Stopped => {
                    requests.borrow_mut().begin(None);
                    player.dispatch(PlaybackAction::Stopped);
                }
                Activation::Unattached => {
                    requests.borrow_mut().begin(None);
                }
            }
        })
    };

    let on_ended = {
        let dispatcher = player.dispatcher();
        Callback::from(move |id: ReviewId| dispatcher.dispatch(PlaybackAction::Ended(id)))
    };

    let on_playback_error = {
        let dispatcher = player.dispatcher();
        Callback::from(move |id: ReviewId| {
            log::warn!("Playback error on review {}", id);
            dispatcher.dispatch(PlaybackAction::Faulted(id));
        })
    };

    let on_retry = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Reload failed: {:?}", e);
            }
        }
    });

    let notice_banner = match player.notice {
        Some(message) => {
            let on_dismiss = {
                let dispatcher = player.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::Dismissed))
            };
            html! {
                <div class="reviews-notice" role="status">
                    <span>{message}</span>
                    <button class="reviews-notice-dismiss" aria-label="Dismiss" onclick={on_dismiss}>{"×"}</button>
                </div>
            }
        }
        None => html! {},
    };

    let body = match load_status.view(&reviews) {
        PanelView::Loading => html! {
            <div class="reviews-loading">
                <div class="reviews-spinner"></div>
            </div>
        },
        PanelView::Failed(message) => html! {
            <div class="reviews-error">
                <p class="reviews-error-title">{"Error"}</p>
                <p>{message}</p>
                <button class="reviews-retry" onclick={on_retry}>{"Retry"}</button>
            </div>
        },
        PanelView::Empty => html! {
            <div class="reviews-empty">
                <p>{"No reviews available yet."}</p>
            </div>
        },
        PanelView::Cards(cards) => html! {
            <section class="reviews-section">
                <div class="reviews-content">
                    <h2>{"Customer Testimonials"}</h2>
                    { notice_banner }
                    <div class="reviews-grid">
                        { for cards.iter().map(|review| html! {
                            <ReviewCard
                                key={review.id.to_string()}
                                review={review.clone()}
                                playing={is_playing(player.active.as_ref(), &review.id)}
                                registry={(*registry).clone()}
                                on_activate={on_activate.clone()}
                                on_ended={on_ended.clone()}
                                on_playback_error={on_playback_error.clone()}
                            />
                        }) }
                    </div>
                </div>
            </section>
        },
    };

    html! {
        <div id="reviews" class="reviews-panel">
            <style>{REVIEWS_CSS}</style>
            { body }
        </div>
    }
}

const REVIEWS_CSS: &str = r#"
    .reviews-panel {
        position: relative;
        z-index: 2;
    }
    .reviews-section {
        padding: 4rem 2rem;
        background: #f9fafb;
    }
    .reviews-content {
        max-width: 1200px;
        margin: 0 auto;
    }
    .reviews-content h2 {
        font-size: 2rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 3rem;
        color: #1f2937;
    }
    .reviews-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .review-card {
        background: #fff;
        border-radius: 12px;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
        overflow: hidden;
        transition: box-shadow 0.3s ease;
    }
    .review-card:hover {
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
    }
    .review-card-body {
        padding: 1.5rem;
    }
    .review-card-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 1rem;
    }
    .review-card-header h3 {
        font-size: 1.25rem;
        color: #1f2937;
        margin: 0;
    }
    .review-rating {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        background: #eff6ff;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        color: #374151;
        font-weight: 500;
    }
    .review-star {
        color: #eab308;
        font-size: 1.1rem;
    }
    .review-feedback {
        color: #4b5563;
        margin-bottom: 1.25rem;
        white-space: pre-line;
    }
    .review-media {
        position: relative;
        border-radius: 8px;
        overflow: hidden;
        background: #000;
    }
    .review-thumb-wrap {
        position: relative;
        cursor: pointer;
    }
    .review-thumb {
        display: block;
        width: 100%;
        height: 12rem;
        object-fit: cover;
        opacity: 0.9;
        transition: opacity 0.2s ease;
    }
    .review-thumb:hover {
        opacity: 0.8;
    }
    .review-thumb-fallback {
        background: #e5e7eb;
        opacity: 1;
    }
    .review-play-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .review-play-button {
        background: rgba(255, 255, 255, 0.9);
        border: none;
        border-radius: 50%;
        padding: 0.75rem;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .review-play-button:hover {
        transform: scale(1.1);
    }
    .review-play-button svg {
        width: 2rem;
        height: 2rem;
        color: #2563eb;
    }
    .review-video {
        display: block;
        width: 100%;
        height: 12rem;
        object-fit: contain;
        background: #000;
    }
    .reviews-panel .hidden {
        display: none;
    }
    .reviews-notice {
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 800px;
        margin: 0 auto 2rem;
        padding: 0.75rem 1rem;
        background: #fef3c7;
        border-left: 4px solid #f59e0b;
        color: #92400e;
    }
    .reviews-notice-dismiss {
        background: none;
        border: none;
        font-size: 1.25rem;
        cursor: pointer;
        color: inherit;
    }
    .reviews-loading {
        display: flex;
        justify-content: center;
        align-items: center;
        min-height: 300px;
    }
    .reviews-spinner {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border-top: 2px solid #3b82f6;
        border-bottom: 2px solid #3b82f6;
        animation: reviews-spin 1s linear infinite;
    }
    @keyframes reviews-spin {
        to { transform: rotate(360deg); }
    }
    .reviews-error {
        max-width: 56rem;
        margin: 1.5rem auto;
        padding: 1rem;
        background: #fee2e2;
        border-left: 4px solid #ef4444;
        color: #b91c1c;
    }
    .reviews-error-title {
        font-weight: 700;
    }
    .reviews-retry {
        margin-top: 0.5rem;
        padding: 0.5rem 1rem;
        background: #ef4444;
        color: #fff;
        border: none;
        border-radius: 4px;
        cursor: pointer;
    }
    .reviews-retry:hover {
        background: #dc2626;
    }
    .reviews-empty {
        text-align: center;
        padding: 3rem 0;
        color: #6b7280;
        font-size: 1.125rem;
    }
    @media (max-width: 1024px) {
        .reviews-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .reviews-section {
            padding: 3rem 1rem;
        }
        .reviews-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
