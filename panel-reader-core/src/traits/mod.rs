//! Collaborator abstraction trait definitions

mod building_adapter;
mod sinks;
mod upgrade_accessor;
mod workforce_accessor;

pub use building_adapter::BuildingAdapter;
pub use sinks::{AudioCueSink, NullSink, SpeechSink};
pub use upgrade_accessor::UpgradeAccessor;
pub use workforce_accessor::WorkforceAccessor;
