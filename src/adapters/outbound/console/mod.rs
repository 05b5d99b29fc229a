/// Console adapters writing to stderr
mod progress_reporter;
mod tag_line;

pub use progress_reporter::StderrProgressReporter;
pub use tag_line::colored_tag_line;
