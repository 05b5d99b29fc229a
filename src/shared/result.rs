/// Crate-wide Result alias with anyhow::Error as the error type.
/// Typed `LookupError` values travel inside it and are recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
