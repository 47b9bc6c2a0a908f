//! Decoded compilation units.
//!
//! A [`Unit`] is the queryable view of one `.class` entry: its name, the
//! interfaces it implements, its fields and methods, and the annotations
//! applied to the class itself. Units are produced by the class-file decoder
//! (see [`crate::core::classfile`]) and are read-only afterwards.
//!
//! Names use the JVM internal form (`com/example/Foo`), and annotation types
//! are referenced by descriptor (`Lcom/example/MyAnno;`).

/// Interface implemented by every annotation-type declaration.
pub const ANNOTATION_INTERFACE: &str = "java/lang/annotation/Annotation";

/// Field access flag: `static`.
pub const ACC_STATIC: u16 = 0x0008;

/// Field access flag: `final`.
pub const ACC_FINAL: u16 = 0x0010;

/// One decoded class or interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    /// Internal name, e.g. `com/example/Foo`.
    pub name: String,
    /// Internal names of the directly implemented interfaces.
    pub interfaces: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    /// Runtime-visible annotations applied to the class.
    pub annotations: Vec<AnnotationUsage>,
}

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when this unit declares an annotation type.
    pub fn is_annotation_type(&self) -> bool {
        self.interfaces.iter().any(|i| i == ANNOTATION_INTERFACE)
    }
}

/// A field and the parts of it relevant to literal harvesting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub name: String,
    pub access_flags: u16,
    /// Value of the `ConstantValue` attribute, if present.
    pub constant: Option<ConstantValue>,
    /// Descriptors of the runtime-visible annotations on the field.
    pub annotations: Vec<String>,
}

impl Field {
    pub fn is_static(&self) -> bool {
        self.access_flags & ACC_STATIC != 0
    }

    pub fn is_final(&self) -> bool {
        self.access_flags & ACC_FINAL != 0
    }

    pub fn has_annotation(&self, descriptor: &str) -> bool {
        self.annotations.iter().any(|a| a == descriptor)
    }
}

/// Compile-time constant attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Text(String),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl ConstantValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConstantValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    pub name: String,
    /// Descriptors of the runtime-visible annotations on the method.
    pub annotations: Vec<String>,
}

impl Method {
    pub fn has_annotation(&self, descriptor: &str) -> bool {
        self.annotations.iter().any(|a| a == descriptor)
    }
}

/// A concrete application of an annotation, with its argument values.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationUsage {
    /// Annotation type descriptor, e.g. `Lcom/example/MyAnno;`.
    pub descriptor: String,
    /// Arguments in declaration order.
    pub arguments: Vec<(String, AnnotationValue)>,
}

impl AnnotationUsage {
    /// Internal name of the annotation type (`Lcom/example/MyAnno;` → `com/example/MyAnno`).
    ///
    /// Returns `None` when the descriptor is not a class descriptor.
    pub fn type_name(&self) -> Option<&str> {
        self.descriptor
            .strip_prefix('L')
            .and_then(|rest| rest.strip_suffix(';'))
    }
}

/// Shape of an annotation argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    /// A single string: `@MyAnno(greeting = "Hi")`.
    Text(String),
    /// An array of strings: `@MyAnno(tags = {"a", "b"})`.
    TextArray(Vec<String>),
    /// Anything else (numbers, enums, classes, nested annotations, mixed arrays).
    Other,
}
