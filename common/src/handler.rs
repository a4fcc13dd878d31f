//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Form controller commands and queries, as well as the network transport
/// behind them, are all expressed as [`Handler`]s of their arguments.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
