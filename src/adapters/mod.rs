// Adapters layer: concrete output sinks the core writes notifications through.

pub mod sink;

pub use sink::{StdoutSink, TracingSink};
