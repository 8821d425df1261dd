mod route;

pub use route::{filter_insertions, inserted_text};
