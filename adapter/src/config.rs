use std::cell::RefCell;

/// Runtime configuration for the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Emit debug and info messages to the browser console. Warnings and errors
    /// are always logged.
    pub enable_logging: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            enable_logging: false, // Disable by default for production
        }
    }
}

thread_local! {
    static CONFIG: RefCell<AdapterConfig> = RefCell::new(AdapterConfig::default());
}

/// Install the configuration for the current thread.
pub fn configure(config: AdapterConfig) {
    CONFIG.with(|current| *current.borrow_mut() = config);
}

pub fn current_config() -> AdapterConfig {
    CONFIG.with(|current| current.borrow().clone())
}
