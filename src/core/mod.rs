pub mod engine;
pub mod extract;
pub mod filter;
pub mod layout;
pub mod pagination;

pub use crate::domain::model::{Listing, PageListings, SheetLayout, SheetTable};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
