#![forbid(unsafe_code)]

//! # autointerface
//!
//! Derives structural C# interface declarations from class manifests.
//!
//! Given a snapshot of a class (members, generics, documentation,
//! namespace context), the pipeline selects the members the interface
//! should expose and renders a complete `public partial interface
//! I<ClassName>` declaration with preserved documentation and fully
//! qualified type references.
//!
//! ## Example
//!
//! ```rust
//! use autointerface::{ClassModel, Config, Generator};
//!
//! let config = Config::default();
//! let generator = Generator::new(config);
//!
//! let model: ClassModel = serde_json::from_str(r#"{
//!     "namespace": ["AutomaticInterfaceExample"],
//!     "name": "DemoClass",
//!     "markers": ["GenerateAutomaticInterface"]
//! }"#).unwrap();
//!
//! let outcome = generator.generate(&model);
//! assert_eq!(outcome.artifact.unwrap().file_name, "IDemoClass.cs");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod model;
pub mod renderer;
pub mod selector;
pub mod watch;

// Re-exports
pub use config::Config;
pub use error::{AutoInterfaceError, Result};
pub use generator::{Artifact, GenerationOutcome, Generator, Notice};
pub use manifest::Manifest;
pub use model::{
    Accessibility, ClassModel, EventMember, GenericParam, MemberDeclaration, MethodMember,
    Parameter, PropertyMember, TypeRef,
};
pub use renderer::render_interface;
pub use selector::{select_members, InterfaceMemberDescriptor, MemberKind, Selection};
pub use watch::FileWatcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
