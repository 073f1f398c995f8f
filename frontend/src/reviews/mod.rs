//! Customer review panel: fetches the review listing and plays at most one
//! testimonial video at a time.

pub mod card;
pub mod fetch;
pub mod models;
pub mod panel;
pub mod playback;
pub mod state;

pub use panel::ReviewPanel;
