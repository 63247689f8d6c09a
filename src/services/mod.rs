//! Orchestration services built on the domain layer and the repo traits.

pub mod game_flow;
pub mod notifier;

pub use game_flow::GameFlowService;
pub use notifier::{BroadcastNotifier, GameEvent, GameNotifier, NullNotifier, RecordingNotifier};
