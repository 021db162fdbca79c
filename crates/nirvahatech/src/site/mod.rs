//! Public marketing site: landing page, careers pages, and the HTTP surface
//! that hosts both lead-capture forms.

pub mod assets;
pub mod careers;
pub mod content;
pub mod router;
pub mod templates;
pub mod views;

pub use careers::{find_job, EmploymentType, JobPosting, JOBS};
pub use router::{outcome_status, site_router};
pub use views::{ApplyOrigin, FormView, SiteViews};
