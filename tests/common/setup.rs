use task_manager::config::Config;
use task_manager::handlers::AppState;
use task_manager::store::MemoryStore;

/// Fresh application state over an empty in-memory store.
pub fn setup_test_state() -> AppState<MemoryStore> {
    AppState::new(MemoryStore::new(), Config::default())
}
