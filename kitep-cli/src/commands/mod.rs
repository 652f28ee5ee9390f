//! CLI command implementations

mod books;
mod categories;
mod download;
mod show;

pub use books::books;
pub use categories::categories;
pub use download::download;
pub use show::show;
