/// Dispatches a generic function over the flavor and payload type
/// selected on the command line.
macro_rules! dispatch {
    ($flavor:expr, $payload:expr, $func:ident($($arg:expr),* $(,)?)) => {{
        use tristate_opt::{NullKind, OmitKind, OmitNullKind};
        use $crate::cli::{Flavor, Payload};

        match ($flavor, $payload) {
            (Flavor::Nullable, Payload::String) => $func::<String, NullKind>($($arg),*),
            (Flavor::Nullable, Payload::Int) => $func::<i64, NullKind>($($arg),*),
            (Flavor::Nullable, Payload::Float) => $func::<f64, NullKind>($($arg),*),
            (Flavor::Nullable, Payload::Bool) => $func::<bool, NullKind>($($arg),*),
            (Flavor::Omittable, Payload::String) => $func::<String, OmitKind>($($arg),*),
            (Flavor::Omittable, Payload::Int) => $func::<i64, OmitKind>($($arg),*),
            (Flavor::Omittable, Payload::Float) => $func::<f64, OmitKind>($($arg),*),
            (Flavor::Omittable, Payload::Bool) => $func::<bool, OmitKind>($($arg),*),
            (Flavor::NullableOmittable, Payload::String) => $func::<String, OmitNullKind>($($arg),*),
            (Flavor::NullableOmittable, Payload::Int) => $func::<i64, OmitNullKind>($($arg),*),
            (Flavor::NullableOmittable, Payload::Float) => $func::<f64, OmitNullKind>($($arg),*),
            (Flavor::NullableOmittable, Payload::Bool) => $func::<bool, OmitNullKind>($($arg),*),
        }
    }};
}
pub(crate) use dispatch;

pub mod decode;
pub mod encode;

/// Represents a command in the tristate application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
