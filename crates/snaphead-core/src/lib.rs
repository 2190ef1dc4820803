pub mod config;
pub mod error;
pub mod header;

pub use config::{AppConfig, EasingType, HeaderConfig, SnapConfig, UiConfig};
pub use error::{Error, Result};
pub use header::{
    CollapsibleHeader, HeaderFrame, HeaderHeight, HeaderStyle, InteractionPhase, ScrollEvent,
};
