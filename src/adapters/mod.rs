// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod memory;
pub mod storage;

pub use file::JsonFileBeerRepository;
pub use memory::InMemoryBeerRepository;
pub use storage::LocalStorage;
