//! The catalog of syntactic node kinds.
//!
//! `NodeKind` is a single tagged union: one variant per construct, with any
//! construction-time payload baked into the variant. The discriminator is
//! fixed when the node is made and never changes (the one exception is the
//! `Modifiers` payload, which the facade's `add_modifier` extends in place).

use crate::String;
use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Declaration modifiers, accumulated one token at a time.
    ///
    /// PUBLIC and PRIVATE are mutually exclusive; the facade rejects the
    /// combination at construction time.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct ModifierSet: u8 {
        const PUBLIC = 1;
        const PRIVATE = 1 << 1;
        const STATIC = 1 << 2;
    }
}

impl ModifierSet {
    /// True if combining `self` with `other` would set mutually exclusive
    /// flags together.
    pub fn conflicts_with(self, other: ModifierSet) -> bool {
        (self | other).contains(ModifierSet::PUBLIC | ModifierSet::PRIVATE)
    }
}

/// The token vocabulary the grammar driver hands to the facade.
///
/// The lexer itself is external; this is just the closed set of keyword
/// tokens that builder operations inspect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    Public,
    Private,
    Static,
    Class,
    Struct,
    Boolean,
    Int,
    Void,
}

impl Token {
    /// The modifier flag this token names, if it names one.
    pub fn as_modifier(self) -> Option<ModifierSet> {
        match self {
            Token::Public => Some(ModifierSet::PUBLIC),
            Token::Private => Some(ModifierSet::PRIVATE),
            Token::Static => Some(ModifierSet::STATIC),
            _ => None,
        }
    }
}

/// Built-in primitive types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Int,
    Void,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "BOOLEAN",
            Primitive::Int => "INT",
            Primitive::Void => "VOID",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names with special meaning inside a class body.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SpecialName {
    This,
    Super,
}

impl SpecialName {
    pub fn text(self) -> &'static str {
        match self {
            SpecialName::This => "this",
            SpecialName::Super => "super",
        }
    }
}

/// Binary operators carried by `Expression` nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl Operator {
    /// The operator's source-text symbol, used for rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }
}

/// The semantic-type annotation slot filled in by later analysis passes.
///
/// The tree engine only stores it; nothing in this crate computes one.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SemanticType {
    Primitive(Primitive),
    Named(String),
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Primitive(p) => write!(f, "{p}"),
            SemanticType::Named(name) => f.write_str(name),
        }
    }
}

/// The variant discriminator for every node in a [`SyntaxTree`].
///
/// Grouped by shape:
/// - leaf/terminal variants carry payload and adopt no children;
/// - composite variants carry no payload (or just an operator) and adopt a
///   fixed sequence of already-built subtrees;
/// - accumulator variants (`FieldDeclarations`, `FieldVariableDeclarators`,
///   `ParameterList`) are lists extended in place by `add_*` builders.
///
/// [`SyntaxTree`]: crate::SyntaxTree
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    // Leaf / terminal variants
    Identifier(String),
    Modifiers(ModifierSet),
    PrimitiveType(Primitive),
    SpecialName(SpecialName),
    NumberLiteral(i64),
    StringLiteral(String),

    // Composite variants
    CompilationUnit,
    ClassDeclaration,
    StructDeclaration,
    ClassBody,
    FieldDeclaration,
    FieldVariableDeclaration,
    MethodDeclaration,
    MethodDeclarator,
    MethodBody,
    Parameter,
    TypeSpecifier,
    TypeName,
    ArraySpecifier,
    Expression(Operator),
    StaticInitializer,

    // Accumulator variants
    FieldDeclarations,
    FieldVariableDeclarators,
    ParameterList,
}

impl NodeKind {
    /// Stable diagnostic name for this variant.
    ///
    /// Fixed per variant at compile time; no runtime type inspection.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Modifiers(_) => "Modifiers",
            NodeKind::PrimitiveType(_) => "PrimitiveType",
            NodeKind::SpecialName(_) => "SpecialName",
            NodeKind::NumberLiteral(_) => "NumberLiteral",
            NodeKind::StringLiteral(_) => "StringLiteral",
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::StructDeclaration => "StructDeclaration",
            NodeKind::ClassBody => "ClassBody",
            NodeKind::FieldDeclaration => "FieldDeclaration",
            NodeKind::FieldVariableDeclaration => "FieldVariableDeclaration",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::MethodDeclarator => "MethodDeclarator",
            NodeKind::MethodBody => "MethodBody",
            NodeKind::Parameter => "Parameter",
            NodeKind::TypeSpecifier => "TypeSpecifier",
            NodeKind::TypeName => "TypeName",
            NodeKind::ArraySpecifier => "ArraySpecifier",
            NodeKind::Expression(_) => "Expression",
            NodeKind::StaticInitializer => "StaticInitializer",
            NodeKind::FieldDeclarations => "FieldDeclarations",
            NodeKind::FieldVariableDeclarators => "FieldVariableDeclarators",
            NodeKind::ParameterList => "ParameterList",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_and_private_conflict() {
        assert!(ModifierSet::PUBLIC.conflicts_with(ModifierSet::PRIVATE));
        assert!(ModifierSet::PRIVATE.conflicts_with(ModifierSet::PUBLIC));
        assert!(!ModifierSet::PUBLIC.conflicts_with(ModifierSet::STATIC));
        assert!(!ModifierSet::STATIC.conflicts_with(ModifierSet::STATIC));
    }

    #[test]
    fn non_modifier_tokens_have_no_flag() {
        assert_eq!(Token::Public.as_modifier(), Some(ModifierSet::PUBLIC));
        assert_eq!(Token::Class.as_modifier(), None);
        assert_eq!(Token::Int.as_modifier(), None);
    }
}
