//! Results presenter for the Finder search page.
//!
//! The presenter is a pure function of [`finder_core::SearchState`]:
//! [`present`] maps the state to a [`ResultsView`], and the `render_*`
//! functions turn views into HTML sections and a full page.

mod html;
mod view;

pub use html::*;
pub use view::*;
