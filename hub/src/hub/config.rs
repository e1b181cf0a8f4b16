use crate::hub::HubError;

/// Construction options for a [`Hub`](crate::Hub).
///
/// Handler invocations each run on their own named thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Name given to handler threads.
    pub thread_name: String,
}

impl HubConfig {
    pub const DEFAULT_THREAD_NAME: &'static str = "rusty-hub";

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), HubError> {
        if self.thread_name.contains('\0') {
            return Err(HubError::Config {
                reason: "thread name must not contain NUL bytes".into(),
            });
        }
        Ok(())
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            thread_name: Self::DEFAULT_THREAD_NAME.to_string(),
        }
    }
}
