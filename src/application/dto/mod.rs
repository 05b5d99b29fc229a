/// Data Transfer Objects for application layer
///
/// DTOs carry presentation choices between the CLI and the adapters,
/// keeping the domain layer isolated.
mod output_format;

pub use output_format::OutputFormat;
