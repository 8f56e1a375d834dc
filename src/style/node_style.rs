//! A ready-made schema for laying out boxes in rows and columns.
//!
//! This is the property set a toolkit's box style typically starts from, and
//! is what the `boxstyle` binary validates against.

use std::sync::Arc;

use super::choices::Choices;
use super::schema::StyleSchema;
use super::value::Value;
use crate::error::Result;

/// Macro for defining keyword enums usable as validator constants.
///
/// # Example
///
/// ```ignore
/// keyword_enum! {
///     /// Main axis of a container.
///     pub enum Direction {
///         Row => "row",
///         Column => "column",
///     }
/// }
/// ```
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a keyword into this enum.
            #[inline]
            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::Str(value.as_str().to_string())
            }
        }
    };
}

keyword_enum! {
    /// Whether a node takes part in layout.
    pub enum Display {
        Pack => "pack",
        None => "none",
    }
}

keyword_enum! {
    /// Whether a node is drawn. Hidden nodes still take up space.
    pub enum Visibility {
        Visible => "visible",
        Hidden => "hidden",
    }
}

keyword_enum! {
    /// Main axis of a container.
    pub enum Direction {
        Row => "row",
        Column => "column",
    }
}

keyword_enum! {
    /// Cross-axis alignment of children.
    pub enum Alignment {
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
        Center => "center",
    }
}

keyword_enum! {
    /// Generic font families.
    pub enum FontFamily {
        System => "system",
        Serif => "serif",
        SansSerif => "sans-serif",
        Cursive => "cursive",
        Fantasy => "fantasy",
        Monospace => "monospace",
    }
}

/// The shared node style schema (cached).
pub fn schema() -> Arc<StyleSchema> {
    use std::sync::LazyLock;
    static SCHEMA: LazyLock<Arc<StyleSchema>> =
        LazyLock::new(|| build().expect("node style initial values must validate"));
    Arc::clone(&SCHEMA)
}

fn keywords<T: Copy + Into<Value>>(all: &[T]) -> Choices {
    Choices::new(all.iter().copied())
}

fn build() -> Result<Arc<StyleSchema>> {
    let integer = Choices::new(Vec::<Value>::new()).integer();
    let optional_integer = integer.clone().default_value();
    let optional_color = Choices::new(Vec::<Value>::new()).color().default_value();

    let mut builder = StyleSchema::builder("node")
        .validated("display", keywords(Display::ALL), Display::Pack)?
        .validated("visibility", keywords(Visibility::ALL), Visibility::Visible)?
        .validated("direction", keywords(Direction::ALL), Direction::Row)?
        .validated(
            "alignment",
            keywords(Alignment::ALL).default_value(),
            Value::None,
        )?
        .validated("width", optional_integer.clone(), Value::None)?
        .validated("height", optional_integer, Value::None)?
        .validated("flex", Choices::new(Vec::<Value>::new()).number(), 0.0)?;

    for prefix in ["padding", "margin"] {
        for side in ["top", "right", "bottom", "left"] {
            builder = builder.validated(&format!("{prefix}_{side}"), integer.clone(), 0)?;
        }
        builder = builder.directional(&format!("{prefix}{{}}"))?;
    }

    Ok(builder
        .validated("color", optional_color.clone(), Value::None)?
        .validated("background_color", optional_color, Value::None)?
        .validated(
            "font_family",
            keywords(FontFamily::ALL).string(),
            FontFamily::System,
        )?
        .validated("font_size", integer, 12)?
        .build())
}
