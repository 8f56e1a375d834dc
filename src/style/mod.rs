//! Style declarations: validated, defaulted properties with change tracking.
//!
//! This module contains:
//! - [`Choices`]: validators describing which values a property accepts
//! - [`StyleSchema`]: an immutable table of properties, built once
//! - [`StyleDeclaration`]: property values for one node, reporting changes to
//!   an [`Applicator`]
//! - Directional shorthands (`margin` → `margin_top`, ...)
//! - [`node_style`]: a ready-made schema for row/column box layout

mod block;
mod choices;
mod color;
mod declaration;
mod directional;
pub mod node_style;
mod schema;
mod value;

pub use choices::Choices;
pub use color::Color;
pub use declaration::{Applicator, StyleDeclaration};
pub use directional::{DirectionalProperty, Side, expand_shorthand_4};
pub use schema::{PropertyDef, StyleSchema, StyleSchemaBuilder, normalize_name};
pub use value::Value;
