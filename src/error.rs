use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, ModelErr>;

/// The broad category a `ModelErr` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The layers are individually valid but can't be composed together.
    Configuration,
    /// A single attribute of a layer (or of the initialization request) is malformed.
    Validation,
    /// The parameters of a built model couldn't be generated.
    Initialization,
}

/// The crate's error type.
#[derive(Debug)]
pub enum ModelErr {
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
    NonPositiveWidth {
        layer: usize,
        got: i64,
    },
    WidthOutOfRange {
        layer: usize,
        got: i64,
    },
    UnknownActivation {
        layer: Option<usize>,
        got: String,
    },
    ZeroInputWidth,
    SizeOverflow {
        layer: usize,
        shape: (usize, usize),
    },
    InvalidInit {
        layer: usize,
        reason: String,
    },
    ParamAlloc {
        size: usize,
        reason: String,
    },
}

impl ModelErr {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelErr::DuplicateName { .. } => ErrorKind::Configuration,
            ModelErr::NonPositiveWidth { .. }
            | ModelErr::WidthOutOfRange { .. }
            | ModelErr::UnknownActivation { .. }
            | ModelErr::ZeroInputWidth => ErrorKind::Validation,
            ModelErr::SizeOverflow { .. }
            | ModelErr::InvalidInit { .. }
            | ModelErr::ParamAlloc { .. } => ErrorKind::Initialization,
        }
    }

    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Whether this is a validation error.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Validation => "validation error",
            ErrorKind::Initialization => "initialization error",
        };

        f.write_str(s)
    }
}

impl Display for ModelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelErr::DuplicateName {
                name,
                first,
                second,
            } => format!("layers {first} and {second} share the name '{name}'"),
            ModelErr::NonPositiveWidth { layer, got } => {
                format!("layer {layer}: output width must be positive, got {got}")
            }
            ModelErr::WidthOutOfRange { layer, got } => {
                format!("layer {layer}: output width {got} doesn't fit in this platform's usize")
            }
            ModelErr::UnknownActivation {
                layer: Some(layer),
                got,
            } => format!("layer {layer}: unknown activation '{got}'"),
            ModelErr::UnknownActivation { layer: None, got } => {
                format!("unknown activation '{got}'")
            }
            ModelErr::ZeroInputWidth => "the input width must be positive".to_string(),
            ModelErr::SizeOverflow {
                layer,
                shape: (n, m),
            } => format!("layer {layer}: the parameter count of a ({n}, {m}) layer overflows"),
            ModelErr::InvalidInit { layer, reason } => {
                format!("layer {layer}: invalid initializer, {reason}")
            }
            ModelErr::ParamAlloc { size, reason } => {
                format!("couldn't allocate {size} parameter(s), {reason}")
            }
        };

        write!(f, "{}: {s}", self.kind())
    }
}

impl Error for ModelErr {}
