//! Core publish workflow for the ci2conf build-step tool.
//!
//! After a successful CI build, ci2conf uploads build artifacts as
//! attachments to a Confluence page and rewrites portions of that page's
//! markup through an ordered chain of editors. This crate holds everything
//! that does not touch the wire:
//!
//! - [`BuildContext`] describing one finished build
//! - [`collect_artifacts`] gathering the files to attach
//! - [`MarkupEditor`] and [`apply_pipeline`] transforming page content
//! - [`Publisher`] orchestrating the publish against a [`Session`]
//! - `MockSession` for testing (behind the `mock` feature flag)
//!
//! The wire lives behind the [`Session`] trait; `ci2conf-confluence`
//! provides the real implementation.
//!
//! # Example
//!
//! ```ignore
//! use ci2conf_core::{BuildContext, BuildOutcome, Publisher, PublishSettings};
//!
//! let settings = PublishSettings::new("DOCS", "Release Builds");
//! let publisher = Publisher::new(&session, settings);
//!
//! let context = BuildContext::new(BuildOutcome::Success, workspace)
//!     .with_env(std::env::vars());
//! let report = publisher.publish(&context);
//! ```

mod build;
mod collector;
mod content_type;
mod editor;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod publisher;
mod session;

pub use build::{BuildContext, BuildOutcome, ParseOutcomeError};
pub use collector::collect_artifacts;
pub use content_type::guess_content_type;
pub use editor::{EditError, MarkupEditor, MarkupGenerator, PipelineOutcome, apply_pipeline};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockSession, RecordedUpdate, RecordedUpload};
pub use publisher::{DEFAULT_EDIT_COMMENT, PublishReport, PublishSettings, Publisher};
pub use session::{RemoteAttachment, RemotePage, RemoteSpace, Session, SessionError};
