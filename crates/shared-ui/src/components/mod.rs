// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod label;
pub mod navbar;
pub mod progress;
pub mod separator;
pub mod switch;
pub mod toast;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
