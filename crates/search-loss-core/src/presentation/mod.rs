pub mod copy;
pub mod view;

pub use copy::{CtaUrls, LocaleStrings};
pub use view::{render_view, RenderedField, RenderedView};
