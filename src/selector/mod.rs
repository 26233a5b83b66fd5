//! Server-side rendering of the theme selector control.

mod markup;

pub use markup::SelectorMarkup;
