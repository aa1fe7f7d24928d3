//! Admin screen view-models
//!
//! Each admin screen is a typed view-model over the API clients: it owns the
//! page-local state, reacts to user events, and surfaces failures through
//! the notice center. One logical thread of control per screen; in-flight
//! requests are never cancelled, so the last response to resolve wins.

pub mod nav;
pub mod pagination;
pub mod ordering;
pub mod notify;
pub mod users;
pub mod carousel;
pub mod testimonials;
pub mod stock;

pub use nav::{SuggestionNav, NavState, NavKey, NavOutcome};
pub use pagination::Pager;
pub use ordering::{Orderable, move_item, sequence_orders, order_updates, reorder_plan};
pub use notify::{Notice, NoticeCenter, NoticeSeverity};
pub use users::UserAdminScreen;
pub use carousel::CarouselScreen;
pub use testimonials::TestimonialScreen;
pub use stock::StockScreen;
