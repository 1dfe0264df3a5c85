mod read;
mod sink;

pub use read::ArrayRead;
pub use read::NodeRead;
pub use read::ObjectRead;

pub use sink::ArraySink;
pub use sink::NodeSink;
pub use sink::ObjectSink;
