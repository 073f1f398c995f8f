use std::rc::Rc;
use yew::functional::Reducible;
use crate::config;
use super::fetch::ReviewFetchError;
use super::models::{Review, ReviewId};
use super::playback::{StartOutcome, PLAYBACK_ERROR_NOTICE, PLAY_FAILED_NOTICE};

/// Fetch lifecycle of the review panel.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Pending,
    Failed(String),
    Ready,
}

/// What the panel should draw for a given status.
#[derive(Debug, PartialEq)]
pub enum PanelView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Cards(&'a [Review]),
}

impl LoadStatus {
    pub fn from_error(error: &ReviewFetchError) -> Self {
        LoadStatus::Failed(error.user_message())
    }

    pub fn view<'a>(&'a self, reviews: &'a [Review]) -> PanelView<'a> {
        match self {
            LoadStatus::Pending => PanelView::Loading,
            LoadStatus::Failed(message) => PanelView::Failed(message),
            LoadStatus::Ready if reviews.is_empty() => PanelView::Empty,
            LoadStatus::Ready => PanelView::Cards(reviews),
        }
    }
}

/// A card shows its video instead of the thumbnail only while it is the
/// active one.
pub fn is_playing(active: Option<&ReviewId>, id: &ReviewId) -> bool {
    active == Some(id)
}

/// Which card owns the screen and what the notice bar says.
///
/// `notice_serial` goes up every time a notice is raised, so raising the
/// same message twice still restarts its expiry timer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub active: Option<ReviewId>,
    pub notice: Option<&'static str>,
    pub notice_serial: u64,
}

#[derive(Debug, PartialEq)]
pub enum PlaybackAction {
    /// The latest start request is playing.
    Started(ReviewId),
    /// The latest start request was refused by the browser.
    Refused,
    /// The active video was toggled off.
    Stopped,
    /// A video reached its end.
    Ended(ReviewId),
    /// A video element reported a media error.
    Faulted(ReviewId),
    Dismissed,
    /// The expiry timer for the notice raised as `serial` fired.
    Expired(u64),
}

impl PlaybackAction {
    /// Superseded starts change nothing.
    pub fn from_outcome(outcome: StartOutcome) -> Option<Self> {
        match outcome {
            StartOutcome::Playing(id) => Some(PlaybackAction::Started(id)),
            StartOutcome::Refused => Some(PlaybackAction::Refused),
            StartOutcome::Superseded => None,
        }
    }
}

impl PlaybackState {
    fn raise(&mut self, notice: &'static str) {
        self.notice = Some(notice);
        self.notice_serial += 1;
    }
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PlaybackAction::Started(id) => {
                next.active = Some(id);
                next.notice = None;
            }
            PlaybackAction::Refused => next.raise(PLAY_FAILED_NOTICE),
            // Whichever card ended, nothing is playing any more
            PlaybackAction::Stopped | PlaybackAction::Ended(_) => next.active = None,
            PlaybackAction::Faulted(_) => next.raise(PLAYBACK_ERROR_NOTICE),
            PlaybackAction::Dismissed => next.notice = None,
            PlaybackAction::Expired(serial) if serial == self.notice_serial => next.notice = None,
            PlaybackAction::Expired(_) => return self,
        }
        Rc::new(next)
    }
}

/// Image a card's thumbnail shows.
#[derive(Debug, PartialEq)]
pub struct Thumbnail {
    pub src: String,
    pub fallback: bool,
}

impl Thumbnail {
    /// The review's own still until it fails to load once; the bundled
    /// default from then on, or from the start when the review has none.
    pub fn for_review(review: &Review, load_failed: bool) -> Self {
        match review.thumbnail_url() {
            Some(src) if !load_failed => Thumbnail { src, fallback: false },
            _ => Thumbnail {
                src: config::DEFAULT_THUMBNAIL.to_string(),
                fallback: true,
            },
        }
    }

    pub fn class(&self) -> &'static str {
        if self.fallback {
            "review-thumb review-thumb-fallback"
        } else {
            "review-thumb"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use crate::reviews::fetch::interpret_response;

    fn listing(body: &str) -> (LoadStatus, Vec<Review>) {
        match interpret_response(200, body) {
            Ok(reviews) => (LoadStatus::Ready, reviews),
            Err(e) => (LoadStatus::from_error(&e), Vec::new()),
        }
    }

    #[test]
    fn pending_shows_spinner() {
        assert_eq!(LoadStatus::Pending.view(&[]), PanelView::Loading);
    }

    #[test]
    fn one_card_per_record_in_order() {
        let (status, reviews) = listing(
            r#"{"success":true,"data":[{"id":1,"customer_name":"Ann","rating":5,"feedback":"Great","video":"a.mp4","video_thumbnail":"a.jpg"},{"id":2,"customer_name":"Ben","rating":4}]}"#,
        );
        match status.view(&reviews) {
            PanelView::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].customer_name, "Ann");
                assert_eq!(cards[0].rating.to_string(), "5");
                assert!(cards[0].thumbnail_url().unwrap().ends_with("/uploads/a.jpg"));
                assert_eq!(cards[1].customer_name, "Ben");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn rejected_listing_never_renders_cards() {
        let (status, reviews) = listing(r#"{"success":false,"data":[{"id":1,"customer_name":"Ann","rating":5}]}"#);
        assert_eq!(status.view(&reviews), PanelView::Failed("Failed to fetch reviews"));
    }

    #[test]
    fn transport_failure_shows_error() {
        let status = LoadStatus::from_error(&ReviewFetchError::Transport("Network Error".into()));
        assert_eq!(status.view(&[]), PanelView::Failed("Network Error"));
    }

    #[test]
    fn empty_listing_is_empty_state_not_error() {
        let (status, reviews) = listing(r#"{"success":true,"data":[]}"#);
        assert_eq!(status.view(&reviews), PanelView::Empty);
    }

    #[test]
    fn only_active_card_is_playing() {
        let a = ReviewId::from("a");
        let b = ReviewId::from("b");
        assert!(is_playing(Some(&a), &a));
        assert!(!is_playing(Some(&a), &b));
        assert!(!is_playing(None, &a));
    }

    fn with_active(id: &str) -> Rc<PlaybackState> {
        Rc::new(PlaybackState {
            active: Some(ReviewId::from(id)),
            ..Default::default()
        })
    }

    #[rstest]
    #[case::active_card("a")]
    #[case::other_card("b")]
    fn ended_event_clears_active_whichever_card_fired(#[case] ended: &str) {
        let next = with_active("a").reduce(PlaybackAction::Ended(ReviewId::from(ended)));
        assert_eq!(next.active, None);
    }

    #[test]
    fn playback_fault_sets_notice_and_keeps_active() {
        let next = with_active("a").reduce(PlaybackAction::Faulted(ReviewId::from("b")));
        assert_eq!(next.active, Some(ReviewId::from("a")));
        assert_eq!(next.notice, Some(PLAYBACK_ERROR_NOTICE));
    }

    #[test]
    fn refusal_keeps_active_and_sets_notice() {
        let next = with_active("a").reduce(PlaybackAction::Refused);
        assert_eq!(next.active, Some(ReviewId::from("a")));
        assert_eq!(next.notice, Some(PLAY_FAILED_NOTICE));
    }

    #[test]
    fn start_clears_notice() {
        let state = with_active("a").reduce(PlaybackAction::Refused);
        let next = state.reduce(PlaybackAction::Started(ReviewId::from("b")));
        assert_eq!(next.active, Some(ReviewId::from("b")));
        assert_eq!(next.notice, None);
    }

    #[test]
    fn same_notice_raised_twice_gets_a_new_serial() {
        let first = Rc::new(PlaybackState::default()).reduce(PlaybackAction::Refused);
        let second = first.clone().reduce(PlaybackAction::Refused);
        assert_eq!(first.notice, second.notice);
        assert_ne!(first.notice_serial, second.notice_serial);
    }

    #[test]
    fn expiry_of_an_earlier_notice_leaves_the_current_one() {
        let first = Rc::new(PlaybackState::default()).reduce(PlaybackAction::Refused);
        let stale_serial = first.notice_serial;
        let second = first.reduce(PlaybackAction::Faulted(ReviewId::from("a")));

        let after_stale = second.clone().reduce(PlaybackAction::Expired(stale_serial));
        assert_eq!(after_stale.notice, Some(PLAYBACK_ERROR_NOTICE));

        let after_current = second.clone().reduce(PlaybackAction::Expired(second.notice_serial));
        assert_eq!(after_current.notice, None);
    }

    #[test]
    fn dismiss_clears_notice_only() {
        let state = with_active("a").reduce(PlaybackAction::Faulted(ReviewId::from("a")));
        let next = state.reduce(PlaybackAction::Dismissed);
        assert_eq!(next.notice, None);
        assert_eq!(next.active, Some(ReviewId::from("a")));
    }

    #[rstest]
    #[case::superseded(StartOutcome::Superseded, None)]
    #[case::refused(StartOutcome::Refused, Some(PlaybackAction::Refused))]
    #[case::playing(
        StartOutcome::Playing(ReviewId::from("a")),
        Some(PlaybackAction::Started(ReviewId::from("a")))
    )]
    fn start_outcomes_map_to_actions(#[case] outcome: StartOutcome, #[case] expected: Option<PlaybackAction>) {
        assert_eq!(PlaybackAction::from_outcome(outcome), expected);
    }

    fn review(thumbnail: Option<&str>) -> Review {
        let thumbnail = match thumbnail {
            Some(path) => format!(r#","video_thumbnail":"{}""#, path),
            None => String::new(),
        };
        let body = format!(
            r#"{{"success":true,"data":[{{"id":1,"customer_name":"Ann","rating":5,"video":"a.mp4"{}}}]}}"#,
            thumbnail
        );
        let (_, mut reviews) = listing(&body);
        reviews.remove(0)
    }

    #[rstest]
    #[case::own_still(Some("a.jpg"), false, false)]
    #[case::after_load_error(Some("a.jpg"), true, true)]
    #[case::no_still(None, false, true)]
    #[case::blank_still(Some("  "), false, true)]
    fn thumbnail_choice(#[case] path: Option<&str>, #[case] load_failed: bool, #[case] fallback: bool) {
        let thumbnail = Thumbnail::for_review(&review(path), load_failed);
        assert_eq!(thumbnail.fallback, fallback);
        if fallback {
            assert_eq!(thumbnail.src, config::DEFAULT_THUMBNAIL);
            assert!(thumbnail.class().contains("review-thumb-fallback"));
        } else {
            assert!(thumbnail.src.ends_with("/uploads/a.jpg"));
            assert_eq!(thumbnail.class(), "review-thumb");
        }
    }
}
