//! RSX components for the lookup page.

mod document_summary;
mod error_display;
mod loading_card;
mod result_region;
mod search_form;
mod site_header;
mod verify_panel;

pub use document_summary::DocumentSummary;
pub use error_display::ErrorDisplay;
pub use loading_card::LoadingCard;
pub use result_region::ResultRegion;
pub use search_form::SearchForm;
pub use site_header::SiteHeader;
pub use verify_panel::VerifyPanel;
