pub mod offline;
pub mod text_llm;

pub use offline::OfflineTextAdapter;
pub use text_llm::OpenAiTextAdapter;
