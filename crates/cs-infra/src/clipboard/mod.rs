mod history_store;
mod png_encoder;

pub use history_store::InMemoryHistoryStore;
pub use png_encoder::PngImageEncoder;
