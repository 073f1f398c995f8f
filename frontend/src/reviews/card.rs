use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use super::models::{Review, ReviewId};
use super::playback::MediaRegistry;
use super::state::Thumbnail;

/// Registry shared by the panel and its cards. Compared by identity so cards
/// don't re-render when it is mutated.
#[derive(Clone, Default)]
pub struct SharedRegistry(pub Rc<RefCell<MediaRegistry<HtmlVideoElement>>>);

impl PartialEq for SharedRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ReviewCardProps {
    pub review: Review,
    pub playing: bool,
    pub registry: SharedRegistry,
    pub on_activate: Callback<ReviewId>,
    pub on_ended: Callback<ReviewId>,
    pub on_playback_error: Callback<ReviewId>,
}

#[function_component(ReviewCard)]
pub fn review_card(props: &ReviewCardProps) -> Html {
    let video_ref = use_node_ref();
    let thumbnail_failed = use_state(|| false);

    // Keep the video element registered for as long as the card is mounted
    {
        let video_ref = video_ref.clone();
        let registry = props.registry.clone();
        use_effect_with_deps(
            move |id: &ReviewId| {
                let id = id.clone();
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    let mut registry = registry.0.borrow_mut();
                    registry.attach(id.clone(), video);
                    log::debug!("Attached video for review {} ({} mounted)", id, registry.len());
                }
                move || {
                    registry.0.borrow_mut().detach(&id);
                }
            },
            props.review.id.clone(),
        );
    }

    let review = &props.review;

    let media = review.video_url().map(|video_src| {
        let on_thumbnail_click = {
            let on_activate = props.on_activate.clone();
            let id = review.id.clone();
            Callback::from(move |_: MouseEvent| on_activate.emit(id.clone()))
        };
        let on_thumbnail_error = {
            let thumbnail_failed = thumbnail_failed.clone();
            Callback::from(move |_: Event| {
                if !*thumbnail_failed {
                    thumbnail_failed.set(true);
                }
            })
        };
        let on_ended = {
            let on_ended = props.on_ended.clone();
            let id = review.id.clone();
            Callback::from(move |_: Event| on_ended.emit(id.clone()))
        };
        let on_video_error = {
            let on_playback_error = props.on_playback_error.clone();
            let id = review.id.clone();
            Callback::from(move |_: Event| on_playback_error.emit(id.clone()))
        };
        // Clicks on the player controls must not reach the thumbnail toggle
        let on_video_click = Callback::from(|e: MouseEvent| e.stop_propagation());

        let thumbnail = Thumbnail::for_review(review, *thumbnail_failed);

        html! {
            <div class="review-media">
                <div
                    class={classes!("review-thumb-wrap", props.playing.then_some("hidden"))}
                    onclick={on_thumbnail_click}
                >
                    <img
                        src={thumbnail.src.clone()}
                        alt={format!("{}'s testimonial", review.customer_name)}
                        class={thumbnail.class()}
                        onerror={on_thumbnail_error}
                    />
                    <div class="review-play-overlay">
                        <button class="review-play-button" aria-label="Play video">
                            <svg viewBox="0 0 20 20" fill="currentColor">
                                <path d="M6.3 2.8L17.2 10l-10.9 7.2V2.8z" />
                            </svg>
                        </button>
                    </div>
                </div>
                <video
                    ref={video_ref.clone()}
                    src={video_src}
                    class={classes!("review-video", (!props.playing).then_some("hidden"))}
                    controls=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    onclick={on_video_click}
                    onended={on_ended}
                    onerror={on_video_error}
                ></video>
            </div>
        }
    });

    html! {
        <div class="review-card">
            <div class="review-card-body">
                <div class="review-card-header">
                    <h3>{&review.customer_name}</h3>
                    <div class="review-rating">
                        <span class="review-star">{"★"}</span>
                        <span>{review.rating.to_string()}</span>
                    </div>
                </div>
                <p class="review-feedback">{&review.feedback}</p>
                { media.unwrap_or_else(|| html! {}) }
            </div>
        </div>
    }
}
