//! Error types for boxstyle operations.

use thiserror::Error;

use crate::layout::NodeId;

/// Errors that can occur while declaring styles or manipulating layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("'{value}' is not a valid value")]
    InvalidValue { value: String },

    #[error("Invalid value '{value}' for property '{property}'; Valid values are: {options}")]
    InvalidPropertyValue {
        property: String,
        value: String,
        options: String,
    },

    #[error("Unknown style '{0}'")]
    UnknownProperty(String),

    #[error("Invalid initial value '{value}' for property '{property}'")]
    InvalidInitialValue { property: String, value: String },

    #[error("Invalid value for '{property}'; value must be a number, or a 1-4 tuple.")]
    InvalidShorthand { property: String },

    #[error("Unknown layout node: {0:?}")]
    UnknownNode(NodeId),

    #[error("Layout node {0:?} has no box")]
    NoLayout(NodeId),

    #[error("Cannot append {child:?} to its own descendant {parent:?}")]
    CyclicAppend { parent: NodeId, child: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
