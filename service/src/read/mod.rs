//! Read entities definitions.

pub mod snapshot;

pub use self::snapshot::Snapshot;
