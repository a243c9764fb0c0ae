use crate::config::current_config;

/// Console logger tagging every line with the component it came from.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        if current_config().enable_logging {
            gloo::console::debug!(Self::format(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        if current_config().enable_logging {
            gloo::console::info!(Self::format(component, message));
        }
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{component}] {message}")
    }
}
