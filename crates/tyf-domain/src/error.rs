//! Error handling types
//!
//! Every failure the factory engine or the container can produce is a variant
//! of [`Error`]. Registration-time variants abort the wiring step; call-time
//! variants abort the single call that raised them.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used for sources coming from user code
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a factory method parameter could not be matched to the constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchReason {
    /// No constructor parameter carries the factory parameter's name
    MissingParameter,
    /// The constructor parameter exists but declares another type
    TypeMismatch {
        /// Type declared by the constructor
        expected: String,
        /// Type declared by the factory method
        actual: String,
    },
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter => write!(f, "which doesn't exist in the constructor"),
            Self::TypeMismatch { expected, actual } => write!(
                f,
                "of type {actual} while the constructor declares {expected}"
            ),
        }
    }
}

/// Main error type for typed factories
#[derive(Error, Debug)]
pub enum Error {
    /// The concrete type does not expose exactly one public constructor
    #[error(
        "Class {concrete_type} has {count} public constructors. It needs to have exactly 1"
    )]
    ConstructorArity {
        /// The offending concrete type
        concrete_type: String,
        /// Number of public constructors found
        count: usize,
    },

    /// A factory method parameter does not line up with the constructor
    #[error(
        "Factory method {method} declares parameter {parameter} {reason} for {concrete_type}"
    )]
    SignatureMismatch {
        /// Full name of the factory method (`Contract::method`)
        method: String,
        /// Name of the factory method parameter
        parameter: String,
        /// The concrete type whose constructor was checked
        concrete_type: String,
        /// What did not match
        reason: MismatchReason,
    },

    /// A constructor parameter left to the container cannot be resolved
    #[error("Dependency {dependency} of {concrete_type} cannot be resolved: {source}")]
    UnresolvableDependency {
        /// The type that could not be resolved
        dependency: String,
        /// The concrete type that needs it
        concrete_type: String,
        /// The container's own error
        #[source]
        source: Box<Error>,
    },

    /// In flavor mode, a method's return type has no registered flavor
    #[error(
        "Factory method {method} returns {return_type} which doesn't have a registered flavor"
    )]
    UnmappedReturnType {
        /// Full name of the factory method
        method: String,
        /// The unmapped return type
        return_type: String,
    },

    /// The bound concrete type is not assignable to the declared return type
    #[error(
        "The concrete type {concrete_type} does not implement the return type {return_type} of {method}"
    )]
    ReturnTypeMismatch {
        /// The bound concrete type
        concrete_type: String,
        /// Full name of the factory method, or the flavor being registered
        method: String,
        /// The declared return type
        return_type: String,
    },

    /// The same return type was mapped twice in one flavor registration
    #[error("Return type {return_type} already has a registered flavor")]
    DuplicateFlavor {
        /// The return type mapped more than once
        return_type: String,
    },

    /// A descriptor is malformed (for example duplicate parameter names)
    #[error("Invalid descriptor: {message}")]
    InvalidDescriptor {
        /// Description of the problem
        message: String,
    },

    /// A positional argument did not have the type the constructor expects
    #[error("Argument {parameter} is not of the expected type {expected}")]
    ArgumentType {
        /// Parameter name
        parameter: String,
        /// Expected type name
        expected: String,
    },

    /// User constructor code returned an error
    #[error("Construction of {concrete_type} failed: {source}")]
    Construction {
        /// The concrete type being constructed
        concrete_type: String,
        /// The error raised by the constructor
        #[source]
        source: BoxError,
    },

    /// The container has no registration for the requested type
    #[error("Service not registered: {requested}")]
    NotRegistered {
        /// The requested type
        requested: String,
    },

    /// A type was registered twice and overriding is disabled
    #[error("Service already registered: {key}")]
    AlreadyRegistered {
        /// The duplicated type
        key: String,
    },

    /// Resolution re-entered a type that is still being resolved
    #[error("Circular dependency detected: {}", chain.join(" -> "))]
    CircularDependency {
        /// Resolution chain, first to last, ending with the repeated type
        chain: Vec<String>,
    },

    /// The container behind a resolver handle has been dropped
    #[error("The dependency container has been disposed")]
    ContainerDisposed,

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Registration error creation methods
impl Error {
    /// Create a constructor arity error
    pub fn constructor_arity<S: Into<String>>(concrete_type: S, count: usize) -> Self {
        Self::ConstructorArity {
            concrete_type: concrete_type.into(),
            count,
        }
    }

    /// Create a signature mismatch error
    pub fn signature_mismatch(
        method: impl Into<String>,
        parameter: impl Into<String>,
        concrete_type: impl Into<String>,
        reason: MismatchReason,
    ) -> Self {
        Self::SignatureMismatch {
            method: method.into(),
            parameter: parameter.into(),
            concrete_type: concrete_type.into(),
            reason,
        }
    }

    /// Wrap a container failure observed while probing a dependency
    pub fn unresolvable_dependency(
        dependency: impl Into<String>,
        concrete_type: impl Into<String>,
        source: Error,
    ) -> Self {
        Self::UnresolvableDependency {
            dependency: dependency.into(),
            concrete_type: concrete_type.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid descriptor error
    pub fn invalid_descriptor<S: Into<String>>(message: S) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    /// Wrap an error returned by user constructor code
    pub fn construction<S: Into<String>>(concrete_type: S, source: impl Into<BoxError>) -> Self {
        Self::Construction {
            concrete_type: concrete_type.into(),
            source: source.into(),
        }
    }
}

// Container error creation methods
impl Error {
    /// Create a not registered error
    pub fn not_registered<S: Into<String>>(requested: S) -> Self {
        Self::NotRegistered {
            requested: requested.into(),
        }
    }

    /// Create an already registered error
    pub fn already_registered<S: Into<String>>(key: S) -> Self {
        Self::AlreadyRegistered { key: key.into() }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// True for errors that can only be raised while wiring a factory
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            Self::ConstructorArity { .. }
                | Self::SignatureMismatch { .. }
                | Self::UnresolvableDependency { .. }
                | Self::UnmappedReturnType { .. }
                | Self::ReturnTypeMismatch { .. }
                | Self::DuplicateFlavor { .. }
                | Self::InvalidDescriptor { .. }
        )
    }
}
