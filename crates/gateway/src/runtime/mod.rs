pub mod fallback;
pub mod pipeline;
