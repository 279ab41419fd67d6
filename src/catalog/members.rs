//! Members and the type declarations that own them

use super::types::TypeDescriptor;
use serde::Deserialize;

/// What a member holds: a declared type, or an open any-value slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberType {
    Declared(TypeDescriptor),
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "MemberDefinition")]
pub struct Member {
    pub name: String,
    pub member_type: MemberType,
    pub nullable: bool,
    pub read_only: bool,
    pub write_only: bool,
    pub hidden: bool,
    pub key: bool,
}

impl Member {
    /// Members typed as `any`/`primitive` become dynamic. Nullability
    /// defaults from the type.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let nullable = ty.is_nullable_by_default();
        let member_type = if ty.is_dynamic() {
            MemberType::Dynamic
        } else {
            MemberType::Declared(ty)
        };

        Self {
            name: name.into(),
            member_type,
            nullable,
            read_only: false,
            write_only: false,
            hidden: false,
            key: false,
        }
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn declared_type(&self) -> Option<&TypeDescriptor> {
        match &self.member_type {
            MemberType::Declared(ty) => Some(ty),
            MemberType::Dynamic => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.member_type == MemberType::Dynamic
    }
}

/// Member as written in a catalog file
#[derive(Debug, Deserialize)]
struct MemberDefinition {
    name: String,
    #[serde(rename = "type")]
    ty: TypeDescriptor,
    nullable: Option<bool>,
    #[serde(default)]
    read_only: bool,
    #[serde(default)]
    write_only: bool,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    key: bool,
}

impl From<MemberDefinition> for Member {
    fn from(def: MemberDefinition) -> Self {
        let mut member = Member::new(def.name, def.ty);
        if let Some(nullable) = def.nullable {
            member.nullable = nullable;
        }
        member.read_only = def.read_only;
        member.write_only = def.write_only;
        member.hidden = def.hidden;
        member.key = def.key;
        member
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value,
        });
        self
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::enumeration(self.name.as_str())
    }
}

/// A complex or entity type with its members in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct StructuredType {
    pub name: String,
    /// The type itself is an open bag (dictionary-backed resources)
    #[serde(default)]
    pub dynamic: bool,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl StructuredType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dynamic: false,
            members: Vec::new(),
        }
    }

    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::object(self.name.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.dynamic || self.members.iter().any(Member::is_dynamic)
    }

    pub fn declared_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.is_dynamic())
    }

    /// Declared members flagged as key, in declaration order
    pub fn key_candidates(&self) -> impl Iterator<Item = &Member> {
        self.declared_members().filter(|m| m.key)
    }
}
