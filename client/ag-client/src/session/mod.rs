pub mod file_storage;
pub mod memory_storage;
pub mod remember_me;
pub mod session_state;
pub mod session_storage;
pub mod session_store;
