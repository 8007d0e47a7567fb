//! Page components

mod section;
mod signed_out;

pub use section::SectionPage;
pub use signed_out::SignedOut;
