mod footer_bar;
mod header_bar;
mod progress_bar;
mod slide_view;

pub use footer_bar::{FooterBar, FooterBarStyle, FooterButtons, NavButton};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use progress_bar::ProgressBar;
pub use slide_view::SlideView;
