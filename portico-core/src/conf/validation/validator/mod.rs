mod cluster;
mod dynamic_resources;
mod profiling;
mod shutdown;

pub use cluster::*;
pub use dynamic_resources::*;
pub use profiling::*;
pub use shutdown::*;
