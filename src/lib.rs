mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod menu;
pub use menu::*;

mod page;
pub use page::*;

pub mod pagesize;

/// Placeholder artwork generation for items without photos
pub mod placeholder;

pub(crate) mod refs;

/// The menu page renderer
pub mod render;

mod rect;
pub use rect::*;

mod units;
pub use units::*;
