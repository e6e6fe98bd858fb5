//! UI Components
//!
//! Pages and the pieces they are built from.

mod sidebar;
mod footer;
mod page_state;
mod status_search;
mod applications_table;
mod dcrb_button;
mod delete_confirm_button;
mod pagination_bar;
mod dashboard;
mod signature_image;
mod signature_upload;
mod ps_report;

pub use sidebar::Sidebar;
pub use footer::Footer;
pub use page_state::{ErrorPanel, LoadState, LoadingPanel};
pub use status_search::StatusSearch;
pub use applications_table::ApplicationsTable;
pub use dcrb_button::DcrbButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use pagination_bar::PaginationBar;
pub use dashboard::Dashboard;
pub use signature_image::SignatureImage;
pub use signature_upload::SignatureUploadInput;
pub use ps_report::PsReportPage;
