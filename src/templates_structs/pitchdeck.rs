use askama::Template;

use crate::models::presentation::image_url;
use crate::state::SlideView;

/// Full pitch-deck page: slide image, navigation buttons and the comment feed.
#[derive(Template)]
#[template(path = "pitchdeck.html")]
pub struct PitchdeckTemplate {
    pub view: SlideView,
    pub image_url: String,
}

impl PitchdeckTemplate {
    pub fn new(view: SlideView) -> Self {
        let image_url = image_url(view.slide);
        Self { view, image_url }
    }
}

/// Response to a navigation click. The image replaces the slide container;
/// the page number and comment list are swapped out-of-band.
#[derive(Template)]
#[template(path = "slide_fragment.html")]
pub struct SlideFragmentTemplate {
    pub view: SlideView,
    pub image_url: String,
}

impl SlideFragmentTemplate {
    pub fn new(view: SlideView) -> Self {
        let image_url = image_url(view.slide);
        Self { view, image_url }
    }
}

/// Comment form, pinned to the slide shown when it was opened.
#[derive(Template)]
#[template(path = "newcomment.html")]
pub struct NewCommentTemplate {
    pub slide: u32,
    pub slide_count: u32,
}
