#![forbid(unsafe_code)]

//! Headless replay host for selframe.
//!
//! Loads a [`ReplayTrace`] (a container, a [`FrameConfig`] and a list of host
//! steps), drives a fresh [`SelectionFrame`] through it and reports every
//! area-changed notification.
//!
//! [`FrameConfig`]: selframe_layout::FrameConfig
//! [`SelectionFrame`]: selframe_layout::SelectionFrame

pub mod cli;
pub mod error;
pub mod logging;
pub mod replay;
pub mod scenarios;
pub mod trace;

pub use cli::run_from_env;
pub use error::{ReplayError, Result};
pub use replay::{Notification, ReplayOptions, ReplayOutcome, check_area, replay};
pub use trace::{ReplayTrace, Step};
