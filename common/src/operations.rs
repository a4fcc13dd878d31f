//! Abstract operations.

/// Operation to post a value to a remote endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Post<T>(pub T);
