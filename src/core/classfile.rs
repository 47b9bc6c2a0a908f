//! JVM class-file decoding.
//!
//! Parsing is done by [`cafebabe`]; this module maps the parsed class onto a
//! [`Unit`], keeping only what literal harvesting needs: class name and
//! interfaces, fields with their constant values and annotations, methods
//! with their annotations, and class-level annotations.
//!
//! Only `RuntimeVisibleAnnotations` are read; annotations with `CLASS`
//! retention are not visible to the extractor.

use cafebabe::{
    attributes::{Annotation, AnnotationElementValue, AttributeData, AttributeInfo},
    constant_pool::LiteralConstant,
    descriptors::{FieldDescriptor, FieldType},
    parse_class,
};
use thiserror::Error;

use crate::core::unit::{AnnotationUsage, AnnotationValue, ConstantValue, Field, Method, Unit};

/// Errors raised while decoding a class file.
#[derive(Debug, Error)]
pub enum ClassFileError {
    #[error("malformed class file: {0}")]
    Malformed(String),

    /// A string constant that is not valid modified UTF-8, e.g. one holding
    /// an unpaired surrogate. It has no exact `String` form.
    #[error("string constant of field {field} is not valid modified UTF-8")]
    InvalidText { field: String },
}

/// Decode one class file into a [`Unit`].
///
/// # Example
///
/// ```no_run
/// let bytes = std::fs::read("Foo.class")?;
/// let unit = jarloc::core::classfile::decode_unit(&bytes)?;
/// println!("{}", unit.name);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn decode_unit(bytes: &[u8]) -> Result<Unit, ClassFileError> {
    let class = parse_class(bytes).map_err(|err| ClassFileError::Malformed(err.to_string()))?;

    let fields = class
        .fields
        .iter()
        .map(|field| -> Result<Field, ClassFileError> {
            let name = field.name.to_string();
            let constant = field
                .attributes
                .iter()
                .find_map(|attr| match &attr.data {
                    AttributeData::ConstantValue(value) => Some(value),
                    _ => None,
                })
                .map(|value| constant_value(value, &name))
                .transpose()?;

            Ok(Field {
                access_flags: field.access_flags.bits(),
                constant,
                annotations: annotation_types(&field.attributes),
                name,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let methods = class
        .methods
        .iter()
        .map(|method| Method {
            name: method.name.to_string(),
            annotations: annotation_types(&method.attributes),
        })
        .collect();

    Ok(Unit {
        name: class.this_class.to_string(),
        interfaces: class.interfaces.iter().map(|i| i.to_string()).collect(),
        fields,
        methods,
        annotations: visible_annotations(&class.attributes)
            .filter_map(annotation_usage)
            .collect(),
    })
}

fn constant_value(value: &LiteralConstant<'_>, field: &str) -> Result<ConstantValue, ClassFileError> {
    let value = match value {
        LiteralConstant::String(text) => ConstantValue::Text(text.to_string()),
        LiteralConstant::Integer(v) => ConstantValue::Integer(*v),
        LiteralConstant::Long(v) => ConstantValue::Long(*v),
        LiteralConstant::Float(v) => ConstantValue::Float(*v),
        LiteralConstant::Double(v) => ConstantValue::Double(*v),
        // Raw bytes the parser could not decode as modified UTF-8.
        _ => {
            return Err(ClassFileError::InvalidText {
                field: field.to_string(),
            });
        }
    };
    Ok(value)
}

fn visible_annotations<'a, 'b>(
    attributes: &'b [AttributeInfo<'a>],
) -> impl Iterator<Item = &'b Annotation<'a>> {
    attributes
        .iter()
        .filter_map(|attr| match &attr.data {
            AttributeData::RuntimeVisibleAnnotations(annotations) => Some(annotations),
            _ => None,
        })
        .flatten()
}

/// Descriptors of the runtime-visible annotations in an attribute table.
fn annotation_types(attributes: &[AttributeInfo<'_>]) -> Vec<String> {
    visible_annotations(attributes)
        .filter_map(|annotation| type_descriptor(&annotation.type_descriptor))
        .collect()
}

/// `Lpkg/Name;` form of an annotation type. Annotation types are always plain
/// object types.
fn type_descriptor(descriptor: &FieldDescriptor<'_>) -> Option<String> {
    match &descriptor.field_type {
        FieldType::Object(name) if descriptor.dimensions == 0 => Some(format!("L{};", name)),
        _ => None,
    }
}

fn annotation_usage(annotation: &Annotation<'_>) -> Option<AnnotationUsage> {
    let descriptor = type_descriptor(&annotation.type_descriptor)?;
    let arguments = annotation
        .elements
        .iter()
        .map(|element| (element.name.to_string(), element_value(&element.value)))
        .collect();

    Some(AnnotationUsage {
        descriptor,
        arguments,
    })
}

/// Strings and arrays made only of strings are kept; anything else is opaque.
fn element_value(value: &AnnotationElementValue<'_>) -> AnnotationValue {
    match value {
        AnnotationElementValue::StringConstant(text) => AnnotationValue::Text(text.to_string()),
        AnnotationElementValue::ArrayValue(values) => values
            .iter()
            .map(|value| match value {
                AnnotationElementValue::StringConstant(text) => Some(text.to_string()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map_or(AnnotationValue::Other, AnnotationValue::TextArray),
        _ => AnnotationValue::Other,
    }
}
