pub mod filter;
pub mod format;
pub mod models;
pub mod opener;
pub mod repository;
pub mod store;

pub use repository::NoteRepository;
pub use store::NoteStore;
