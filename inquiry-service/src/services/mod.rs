pub mod responder;

pub use responder::{normalize_query, Category, InquiryResponder};
