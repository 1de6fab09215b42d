mod api_meta;
mod bootstrap;
mod discovery;
mod dynamic_resources;
mod origin;
mod primitives;
mod profiling;
mod resources;
mod shutdown;
mod static_resources;
mod timeout;

pub use api_meta::{ApiMetaConfig, DEFAULT_API_CONFIG_PATH};
pub use bootstrap::Bootstrap;
pub use discovery::{AggregatedConfigSource, ApiConfigSource, ConfigSource, GrpcService};
pub use dynamic_resources::DynamicResources;
pub use origin::Origin;
pub use primitives::{ApiType, parse_duration};
pub use profiling::{Address, MetricConfig, PprofConfig, SocketAddress};
pub use resources::{Adapter, Cluster, Listener, Properties};
pub use shutdown::{
    DEFAULT_REJECT_POLICY, DEFAULT_SHUTDOWN_STEP_TIMEOUT, DEFAULT_SHUTDOWN_TIMEOUT, RejectPolicy,
    ShutdownConfig, ShutdownPolicy,
};
pub use static_resources::StaticResources;
pub use timeout::{ConnectionTimeouts, TimeoutConfig};
