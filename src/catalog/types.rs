//! Native type descriptors and the compact type-expression syntax used by
//! catalog files.
//!
//! Syntax:
//! - primitives: `bool byte sbyte char string i16 i32 i64 u16 u32 u64 f32 f64
//!   decimal datetime guid binary`
//! - `T?` nullable wrapper, `[T]` sequence, `map<K, V>` dictionary
//! - `any` (structured-value wrapper), `primitive` (primitive-value wrapper)
//! - `enum:Full.Name` enumeration, `Full.Name` object type

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

static TYPE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("type name pattern is valid")
});

/// Element type of a non-string-keyed dictionary when enumerated
pub const KEY_VALUE_PAIR: &str = "KeyValuePair";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    SByte,
    Char,
    String,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    DateTime,
    Guid,
    Binary,
}

impl Primitive {
    pub const ALL: [Primitive; 17] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::SByte,
        Primitive::Char,
        Primitive::String,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::UInt16,
        Primitive::UInt32,
        Primitive::UInt64,
        Primitive::Single,
        Primitive::Double,
        Primitive::Decimal,
        Primitive::DateTime,
        Primitive::Guid,
        Primitive::Binary,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "bool",
            Primitive::Byte => "byte",
            Primitive::SByte => "sbyte",
            Primitive::Char => "char",
            Primitive::String => "string",
            Primitive::Int16 => "i16",
            Primitive::Int32 => "i32",
            Primitive::Int64 => "i64",
            Primitive::UInt16 => "u16",
            Primitive::UInt32 => "u32",
            Primitive::UInt64 => "u64",
            Primitive::Single => "f32",
            Primitive::Double => "f64",
            Primitive::Decimal => "decimal",
            Primitive::DateTime => "datetime",
            Primitive::Guid => "guid",
            Primitive::Binary => "binary",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Whether a member of this type can hold null without a nullable wrapper
    pub fn is_reference(self) -> bool {
        matches!(self, Primitive::String | Primitive::Binary)
    }
}

/// Identifies a native type as seen by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Enum(String),
    Nullable(Box<TypeDescriptor>),
    Dictionary(Box<TypeDescriptor>, Box<TypeDescriptor>),
    Sequence(Box<TypeDescriptor>),
    Object(String),
    /// Any primitive JSON value
    AnyPrimitive,
    /// Any JSON value
    AnyValue,
}

impl TypeDescriptor {
    pub fn enumeration(full_name: impl Into<String>) -> Self {
        TypeDescriptor::Enum(full_name.into())
    }

    pub fn object(full_name: impl Into<String>) -> Self {
        TypeDescriptor::Object(full_name.into())
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Nullable(Box::new(inner))
    }

    pub fn sequence(element: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(element))
    }

    pub fn dictionary(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Dictionary(Box::new(key), Box::new(value))
    }

    /// Strips every nullable wrapper
    pub fn unwrap_nullable(&self) -> &TypeDescriptor {
        let mut current = self;
        while let TypeDescriptor::Nullable(inner) = current {
            current = inner;
        }
        current
    }

    pub fn is_string_keyed_dictionary(&self) -> bool {
        match self {
            TypeDescriptor::Dictionary(key, _) => {
                matches!(
                    key.unwrap_nullable(),
                    TypeDescriptor::Primitive(Primitive::String)
                )
            }
            _ => false,
        }
    }

    /// Element type when the descriptor is enumerable. Dictionaries enumerate
    /// as key/value pairs, so they match here as well.
    pub fn element_type(&self) -> Option<Cow<'_, TypeDescriptor>> {
        match self {
            TypeDescriptor::Sequence(element) => Some(Cow::Borrowed(element.as_ref())),
            TypeDescriptor::Dictionary(..) => {
                Some(Cow::Owned(TypeDescriptor::object(KEY_VALUE_PAIR)))
            }
            _ => None,
        }
    }

    /// True for the any-value and any-primitive wrappers, nullable or not
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self.unwrap_nullable(),
            TypeDescriptor::AnyValue | TypeDescriptor::AnyPrimitive
        )
    }

    /// Nullability a member of this type gets when the catalog doesn't say
    pub fn is_nullable_by_default(&self) -> bool {
        match self {
            TypeDescriptor::Primitive(p) => p.is_reference(),
            TypeDescriptor::Enum(_) => false,
            _ => true,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => f.write_str(p.keyword()),
            TypeDescriptor::Enum(name) => write!(f, "enum:{}", name),
            TypeDescriptor::Nullable(inner) => write!(f, "{}?", inner),
            TypeDescriptor::Dictionary(key, value) => write!(f, "map<{}, {}>", key, value),
            TypeDescriptor::Sequence(element) => write!(f, "[{}]", element),
            TypeDescriptor::Object(name) => f.write_str(name),
            TypeDescriptor::AnyPrimitive => f.write_str("primitive"),
            TypeDescriptor::AnyValue => f.write_str("any"),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = TypeParser { input: s, pos: 0 };
        let descriptor = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            bail!(
                "Unexpected '{}' at offset {} in type expression '{}'",
                &s[parser.pos..],
                parser.pos,
                s
            );
        }
        Ok(descriptor)
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TypeDescriptor> for String {
    fn from(value: TypeDescriptor) -> Self {
        value.to_string()
    }
}

struct TypeParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn parse_type(&mut self) -> Result<TypeDescriptor> {
        let mut descriptor = self.parse_base()?;
        while self.eat('?') {
            descriptor = TypeDescriptor::nullable(descriptor);
        }
        Ok(descriptor)
    }

    fn parse_base(&mut self) -> Result<TypeDescriptor> {
        if self.eat('[') {
            let element = self.parse_type()?;
            self.expect(']')?;
            return Ok(TypeDescriptor::sequence(element));
        }

        let word = self.read_word();
        if word.is_empty() {
            bail!(
                "Expected a type at offset {} in type expression '{}'",
                self.pos,
                self.input
            );
        }

        if word == "map" && self.eat('<') {
            let key = self.parse_type()?;
            self.expect(',')?;
            let value = self.parse_type()?;
            self.expect('>')?;
            return Ok(TypeDescriptor::dictionary(key, value));
        }

        if let Some(name) = word.strip_prefix("enum:") {
            return Ok(TypeDescriptor::Enum(self.type_name(name)?));
        }

        if let Some(primitive) = Primitive::from_keyword(word) {
            return Ok(TypeDescriptor::Primitive(primitive));
        }

        match word {
            "any" => Ok(TypeDescriptor::AnyValue),
            "primitive" => Ok(TypeDescriptor::AnyPrimitive),
            name => Ok(TypeDescriptor::Object(self.type_name(name)?)),
        }
    }

    fn type_name(&self, name: &str) -> Result<String> {
        if !TYPE_NAME.is_match(name) {
            bail!("Invalid type name '{}' in type expression '{}'", name, self.input);
        }
        Ok(name.to_string())
    }

    fn read_word(&mut self) -> &'a str {
        self.skip_whitespace();
        let input = self.input;
        let start = self.pos;
        let rest = &input[start..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == ':'))
            .unwrap_or(rest.len());
        self.pos += len;
        &input[start..self.pos]
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if !self.eat(expected) {
            bail!(
                "Expected '{}' at offset {} in type expression '{}'",
                expected,
                self.pos,
                self.input
            );
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}
