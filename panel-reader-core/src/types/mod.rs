//! 类型定义模块

mod address;
mod outcome;
mod section;
mod settings;
mod upgrade;
mod workforce;

pub use address::{Address, Cursor, Level};
pub use outcome::{ActionOutcome, AudioCue, KeyResponse, Modifiers, NavCommand};
pub use section::{Section, SectionList};
pub use settings::NavigatorSettings;
pub use upgrade::{Progress, TierState, UnlockOption, UpgradeTier};
pub use workforce::{BuildingId, RaceAvailability, WorkerInfo};
