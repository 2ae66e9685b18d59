//! Comment system module
//!
//! Handles the reply tree, comment construction, and per-article threads.

pub mod builder;
pub mod factory;
pub mod model;
pub mod thread;

pub use builder::CommentBuilder;
pub use factory::CommentFactory;
pub use model::CommentNode;
pub use thread::CommentThread;
