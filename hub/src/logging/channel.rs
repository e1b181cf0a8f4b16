use crossbeam::channel::{Receiver, Sender, unbounded};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// An owned copy of a `log::Record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// A logger forwarding every enabled record to a channel.
pub struct ChannelLogger {
    sender: Sender<LogRecord>,
    level: LevelFilter,
}

impl log::Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A dropped receiver just silences the logger
            let _ = self.sender.try_send(LogRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

impl ChannelLogger {
    pub fn new(sender: Sender<LogRecord>, level: LevelFilter) -> Self {
        Self { sender, level }
    }

    pub fn with_receiver(level: LevelFilter) -> (Self, Receiver<LogRecord>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender, level), receiver)
    }

    /// Install as the global logger and raise the global max level to this logger's level.
    ///
    /// Fails if a global logger is already set.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn forwards_enabled_records() {
        // Given
        let (logger, receiver) = ChannelLogger::with_receiver(LevelFilter::Info);

        // When
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("rusty_hub::hub")
                .args(format_args!("handler panicked"))
                .build(),
        );

        // Then
        assert_eq!(
            receiver.try_recv().unwrap(),
            LogRecord {
                level: Level::Error,
                target: "rusty_hub::hub".to_string(),
                message: "handler panicked".to_string(),
            }
        );
    }

    #[test]
    fn drops_records_above_level() {
        // Given
        let (logger, receiver) = ChannelLogger::with_receiver(LevelFilter::Warn);

        // When
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("registered handler"))
                .build(),
        );

        // Then
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn survives_dropped_receiver() {
        // Given
        let (logger, receiver) = ChannelLogger::with_receiver(LevelFilter::Trace);
        drop(receiver);

        // Then
        logger.log(&Record::builder().args(format_args!("ignored")).build());
    }
}
