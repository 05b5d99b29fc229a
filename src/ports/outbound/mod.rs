/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, console, file system).
pub mod character_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use character_repository::CharacterRepository;
pub use formatter::CharacterFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
