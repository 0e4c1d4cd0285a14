//! # Type Declarations
//!
//! What a property may hold. A declaration is built directly by the caller
//! from the exported kind constants, another schema's [`Builder`], a class
//! tag, a union, or a default-value expression. Nothing is ever inferred by
//! inspecting a closure.
//!
//! ```ignore
//! use typeshape_schema::{union, with_default, NULL, NUMBER, STRING};
//!
//! let price = NUMBER;
//! let size = union([STRING, NULL]);
//! let topping = with_default(STRING, "cheese");
//! ```

use std::fmt;
use std::sync::Arc;

use typeshape_core::{ClassTag, Kind, Record, Value};

use crate::builder::Builder;

pub const BOOLEAN: TypeDecl = TypeDecl::Primitive(Kind::Boolean);
pub const STRING: TypeDecl = TypeDecl::Primitive(Kind::String);
pub const NUMBER: TypeDecl = TypeDecl::Primitive(Kind::Number);
pub const FUNCTION: TypeDecl = TypeDecl::Primitive(Kind::Function);
pub const SYMBOL: TypeDecl = TypeDecl::Primitive(Kind::Symbol);
/// Accepts only an absent value. Combine with another kind to make a
/// property optional.
pub const UNDEFINED: TypeDecl = TypeDecl::Primitive(Kind::Undefined);
/// Accepts only the explicit null marker, never absence.
pub const NULL: TypeDecl = TypeDecl::Primitive(Kind::Null);
pub const ARRAY: TypeDecl = TypeDecl::Primitive(Kind::Array);

/// Declared type of a property.
#[derive(Clone)]
pub enum TypeDecl {
    /// A primitive kind token.
    Primitive(Kind),
    /// An instance produced by exactly this builder.
    Nested(Builder),
    /// A record tagged with exactly this class.
    Class(ClassTag),
    /// Any member matches.
    Union(Vec<TypeDecl>),
    /// A kind paired with a value to use when the property is absent.
    Default(DefaultDecl),
}

impl TypeDecl {
    /// Number of default expressions anywhere in this declaration.
    pub(crate) fn default_count(&self) -> usize {
        match self {
            TypeDecl::Default(d) => 1 + d.kind.default_count(),
            TypeDecl::Union(members) => members.iter().map(TypeDecl::default_count).sum(),
            TypeDecl::Primitive(_) | TypeDecl::Nested(_) | TypeDecl::Class(_) => 0,
        }
    }
}

impl fmt::Debug for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDecl::Primitive(kind) => write!(f, "{kind}"),
            TypeDecl::Nested(builder) => write!(f, "Nested({})", builder.name()),
            TypeDecl::Class(tag) => write!(f, "Class({})", tag.name()),
            TypeDecl::Union(members) => f.debug_list().entries(members).finish(),
            TypeDecl::Default(d) => write!(f, "Default({:?})", d.kind),
        }
    }
}

impl From<Kind> for TypeDecl {
    fn from(kind: Kind) -> Self {
        TypeDecl::Primitive(kind)
    }
}

impl From<&Builder> for TypeDecl {
    fn from(builder: &Builder) -> Self {
        TypeDecl::Nested(builder.clone())
    }
}

impl From<Builder> for TypeDecl {
    fn from(builder: Builder) -> Self {
        TypeDecl::Nested(builder)
    }
}

impl From<ClassTag> for TypeDecl {
    fn from(tag: ClassTag) -> Self {
        TypeDecl::Class(tag)
    }
}

impl From<Vec<TypeDecl>> for TypeDecl {
    fn from(members: Vec<TypeDecl>) -> Self {
        TypeDecl::Union(members)
    }
}

type ComputeFn = dyn Fn(&Record) -> Value + Send + Sync;

/// A default-value expression: the kind validated against, and how to
/// produce the value when the input omits the property.
#[derive(Clone)]
pub struct DefaultDecl {
    pub(crate) kind: Box<TypeDecl>,
    pub(crate) compute: DefaultFn,
}

/// The computation behind a default. Receives the raw input record.
#[derive(Clone)]
pub struct DefaultFn(Arc<ComputeFn>);

impl DefaultFn {
    pub fn new(f: impl Fn(&Record) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn compute(&self, input: &Record) -> Value {
        (*self.0)(input)
    }
}

impl fmt::Debug for DefaultFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFn")
    }
}

/// A union of declarations.
pub fn union<I>(members: I) -> TypeDecl
where
    I: IntoIterator,
    I::Item: Into<TypeDecl>,
{
    TypeDecl::Union(members.into_iter().map(Into::into).collect())
}

/// `kind`, defaulting to a clone of `value` when the input omits the
/// property.
///
/// The default is validated like any supplied value: a default of the
/// wrong kind fails the build.
pub fn with_default(kind: impl Into<TypeDecl>, value: impl Into<Value>) -> TypeDecl {
    let value = value.into();
    with_default_fn(kind, move |_| value.clone())
}

/// `kind`, defaulting to `compute(input)` when the input omits the property.
pub fn with_default_fn(
    kind: impl Into<TypeDecl>,
    compute: impl Fn(&Record) -> Value + Send + Sync + 'static,
) -> TypeDecl {
    TypeDecl::Default(DefaultDecl {
        kind: Box::new(kind.into()),
        compute: DefaultFn::new(compute),
    })
}
