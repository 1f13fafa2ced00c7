//! Vendor prefix expansion for parsed style sheets.
//!
//! [`plugin::Prefixly`] walks a [`style::owned_css::RuleBlock`] tree and, for
//! every non-root block, appends the `-webkit`, `-moz`, `-o` and `-ms` variants
//! and the unprefixed form of each prefixable property it finds.

pub mod error;
pub mod options;
pub mod plugin;
pub mod prefix;
pub mod prefixly_generate;
pub mod visitor;

pub mod style {
    pub mod owned_css;
    pub mod prefixly_css;
    pub mod printer;
}

pub use error::{PrefixlyError, Result};
pub use options::PrefixlyOptions;
pub use plugin::{register, Plugin, Prefixly};
