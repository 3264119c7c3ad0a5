//! # ll-services
//!
//! Application services sitting between the screens and the ports:
//! form validation, request submission, forum moderation, contact
//! shortcuts, GPS assist and demo seeding.

pub mod app;
pub mod contact;
pub mod forms;
pub mod forum;
pub mod location;
pub mod requests;
pub mod seed;

pub use app::App;
pub use contact::ContactService;
pub use forms::{ForumPostForm, LocationForm, ReplyForm, RequestForm, UnlistedRequestForm};
pub use forum::{ForumService, ForumThread};
pub use location::LocationService;
pub use requests::RequestService;
pub use seed::{seed_demo_data, SeedSummary};
