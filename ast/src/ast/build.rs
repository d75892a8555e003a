//! The construction facade called by the grammar driver.
//!
//! One builder per production shape. Each builder validates its arguments,
//! constructs the variant, and adopts the supplied subtrees in positional
//! order. Builders that extend an existing aggregate (`add_*`) mutate and
//! return the same node, preserving the reference identity the driver's
//! grammar actions expect.
//!
//! Builders whose only linkage is adopting into a freshly made node cannot
//! fail and return a bare [`NodeId`]; the rest return `Result`.

use super::kind::{NodeKind, Operator, Primitive, SpecialName, Token};
use super::node::{NodeId, SyntaxTree};
use crate::error::AstError;
use crate::{String, format};

impl SyntaxTree {
    fn expect_kind(&self, node: NodeId, expected: &'static str) -> Result<(), AstError> {
        let found = self.kind_name(node);
        if found == expected {
            Ok(())
        } else {
            Err(AstError::InvalidArgument {
                reason: format!("expected a {expected} node, found {found}"),
            })
        }
    }

    pub fn make_compilation_unit(&mut self, class_declaration: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::CompilationUnit);
        // A fresh node cannot appear in the adopted chain.
        let _ = self.adopt(node, Some(class_declaration));
        node
    }

    pub fn make_class_declaration(
        &mut self,
        modifiers: NodeId,
        identifier: NodeId,
        class_body: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::ClassDeclaration);
        self.adopt(node, Some(modifiers))?;
        self.adopt(node, Some(identifier))?;
        self.adopt(node, Some(class_body))?;
        Ok(node)
    }

    pub fn make_struct_declaration(
        &mut self,
        modifiers: NodeId,
        identifier: NodeId,
        class_body: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::StructDeclaration);
        self.adopt(node, Some(modifiers))?;
        self.adopt(node, Some(identifier))?;
        self.adopt(node, Some(class_body))?;
        Ok(node)
    }

    /// Start a modifier set from one keyword token.
    pub fn make_modifiers(&mut self, token: Token) -> Result<NodeId, AstError> {
        let set = token
            .as_modifier()
            .ok_or(AstError::UnsupportedModifier { token })?;
        Ok(self.new_node(NodeKind::Modifiers(set)))
    }

    /// Fold one more modifier token into an existing `Modifiers` node.
    ///
    /// Rejects non-modifier tokens with `UnsupportedModifier` and mutually
    /// exclusive combinations (PUBLIC with PRIVATE) with
    /// `ConflictingModifiers`.
    pub fn add_modifier(&mut self, modifiers: NodeId, token: Token) -> Result<NodeId, AstError> {
        let added = token
            .as_modifier()
            .ok_or(AstError::UnsupportedModifier { token })?;
        let held = match self.kind(modifiers) {
            NodeKind::Modifiers(set) => *set,
            _ => {
                return Err(AstError::InvalidArgument {
                    reason: format!(
                        "expected a Modifiers node, found {}",
                        self.kind_name(modifiers)
                    ),
                });
            }
        };
        if held.conflicts_with(added) {
            return Err(AstError::ConflictingModifiers { held, added });
        }
        self.node_mut(modifiers).kind = NodeKind::Modifiers(held | added);
        Ok(modifiers)
    }

    pub fn make_identifier(&mut self, text: impl Into<String>) -> NodeId {
        self.new_node(NodeKind::Identifier(text.into()))
    }

    /// A class body, possibly empty.
    pub fn make_class_body(&mut self, field_declarations: Option<NodeId>) -> NodeId {
        let node = self.new_node(NodeKind::ClassBody);
        let _ = self.adopt(node, field_declarations);
        node
    }

    pub fn make_field_declarations(&mut self, first: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::FieldDeclarations);
        let _ = self.adopt(node, Some(first));
        node
    }

    /// Append one declaration to an existing `FieldDeclarations` list.
    pub fn add_field_declaration(
        &mut self,
        list: NodeId,
        declaration: NodeId,
    ) -> Result<NodeId, AstError> {
        self.expect_kind(list, "FieldDeclarations")?;
        self.adopt(list, Some(declaration))?;
        Ok(list)
    }

    pub fn make_field_declaration(&mut self, member: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::FieldDeclaration);
        let _ = self.adopt(node, Some(member));
        node
    }

    pub fn make_field_variable_declaration(
        &mut self,
        modifiers: NodeId,
        type_specifier: NodeId,
        declarators: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::FieldVariableDeclaration);
        self.adopt(node, Some(modifiers))?;
        self.adopt(node, Some(type_specifier))?;
        self.adopt(node, Some(declarators))?;
        Ok(node)
    }

    /// Wraps a `TypeName` or `ArraySpecifier`.
    pub fn make_type_specifier(&mut self, inner: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::TypeSpecifier);
        let _ = self.adopt(node, Some(inner));
        node
    }

    /// Wraps a `PrimitiveType` or a qualified name.
    pub fn make_type_name(&mut self, inner: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::TypeName);
        let _ = self.adopt(node, Some(inner));
        node
    }

    pub fn make_array_specifier(&mut self, type_name: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::ArraySpecifier);
        let _ = self.adopt(node, Some(type_name));
        node
    }

    pub fn make_primitive_type(&mut self, primitive: Primitive) -> NodeId {
        self.new_node(NodeKind::PrimitiveType(primitive))
    }

    pub fn make_field_variable_declarators(&mut self, first: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::FieldVariableDeclarators);
        let _ = self.adopt(node, Some(first));
        node
    }

    pub fn add_field_variable_declarator(
        &mut self,
        list: NodeId,
        name: NodeId,
    ) -> Result<NodeId, AstError> {
        self.expect_kind(list, "FieldVariableDeclarators")?;
        self.adopt(list, Some(name))?;
        Ok(list)
    }

    pub fn make_method_declaration(
        &mut self,
        modifiers: NodeId,
        type_specifier: NodeId,
        declarator: NodeId,
        body: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::MethodDeclaration);
        self.adopt(node, Some(modifiers))?;
        self.adopt(node, Some(type_specifier))?;
        self.adopt(node, Some(declarator))?;
        self.adopt(node, Some(body))?;
        Ok(node)
    }

    /// Method name plus an optional parameter list.
    pub fn make_method_declarator(
        &mut self,
        name: NodeId,
        parameters: Option<NodeId>,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::MethodDeclarator);
        self.adopt(node, Some(name))?;
        self.adopt(node, parameters)?;
        Ok(node)
    }

    pub fn make_method_body(&mut self, statements: Option<NodeId>) -> NodeId {
        let node = self.new_node(NodeKind::MethodBody);
        let _ = self.adopt(node, statements);
        node
    }

    pub fn make_parameter_list(&mut self, first: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::ParameterList);
        let _ = self.adopt(node, Some(first));
        node
    }

    pub fn add_parameter(&mut self, list: NodeId, parameter: NodeId) -> Result<NodeId, AstError> {
        self.expect_kind(list, "ParameterList")?;
        self.adopt(list, Some(parameter))?;
        Ok(list)
    }

    pub fn make_parameter(
        &mut self,
        type_specifier: NodeId,
        name: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::Parameter);
        self.adopt(node, Some(type_specifier))?;
        self.adopt(node, Some(name))?;
        Ok(node)
    }

    pub fn make_expression(
        &mut self,
        op: Operator,
        lhs: NodeId,
        rhs: NodeId,
    ) -> Result<NodeId, AstError> {
        let node = self.new_node(NodeKind::Expression(op));
        self.adopt(node, Some(lhs))?;
        self.adopt(node, Some(rhs))?;
        Ok(node)
    }

    pub fn make_number_literal(&mut self, value: i64) -> NodeId {
        self.new_node(NodeKind::NumberLiteral(value))
    }

    pub fn make_string_literal(&mut self, text: impl Into<String>) -> NodeId {
        self.new_node(NodeKind::StringLiteral(text.into()))
    }

    pub fn make_special_name(&mut self, name: SpecialName) -> NodeId {
        self.new_node(NodeKind::SpecialName(name))
    }

    pub fn make_static_initializer(&mut self, body: NodeId) -> NodeId {
        let node = self.new_node(NodeKind::StaticInitializer);
        let _ = self.adopt(node, Some(body));
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec;
    use crate::ast::kind::ModifierSet;

    #[test]
    fn class_declaration_adopts_three_children_in_order() {
        let mut tree = SyntaxTree::new();
        let modifiers = tree.make_modifiers(Token::Public).unwrap();
        let name = tree.make_identifier("Point");
        let fields = {
            let member = tree.make_identifier("x");
            let fd = tree.make_field_declaration(member);
            tree.make_field_declarations(fd)
        };
        let body = tree.make_class_body(Some(fields));

        let class = tree.make_class_declaration(modifiers, name, body).unwrap();

        // Exactly three children in call order, whatever their own
        // subtree shapes are.
        let children: Vec<_> = tree.children(class).collect();
        assert_eq!(children, vec![modifiers, name, body]);
        for id in children {
            assert_eq!(tree.parent(id), Some(class));
        }
    }

    #[test]
    fn field_declarations_accumulate_in_call_order() {
        let mut tree = SyntaxTree::new();
        let m1 = tree.make_identifier("x");
        let fd1 = tree.make_field_declaration(m1);
        let m2 = tree.make_identifier("y");
        let fd2 = tree.make_field_declaration(m2);

        let list = tree.make_field_declarations(fd1);
        let same = tree.add_field_declaration(list, fd2).unwrap();

        // The extension builder returns the same aggregate node.
        assert_eq!(same, list);
        let children: Vec<_> = tree.children(list).collect();
        assert_eq!(children, vec![fd1, fd2]);
        for id in children {
            assert_eq!(tree.parent(id), Some(list));
        }
    }

    #[test]
    fn add_field_declaration_rejects_wrong_kind() {
        let mut tree = SyntaxTree::new();
        let not_a_list = tree.make_identifier("oops");
        let member = tree.make_identifier("x");
        let fd = tree.make_field_declaration(member);

        let err = tree.add_field_declaration(not_a_list, fd).unwrap_err();
        assert!(matches!(err, AstError::InvalidArgument { .. }));
        assert_eq!(tree.children(not_a_list).count(), 0);
    }

    #[test]
    fn modifiers_accumulate_compatible_flags() {
        let mut tree = SyntaxTree::new();
        let modifiers = tree.make_modifiers(Token::Public).unwrap();
        tree.add_modifier(modifiers, Token::Static).unwrap();

        assert_eq!(
            *tree.kind(modifiers),
            NodeKind::Modifiers(ModifierSet::PUBLIC | ModifierSet::STATIC)
        );
    }

    #[test]
    fn public_then_private_is_a_conflict() {
        let mut tree = SyntaxTree::new();
        let modifiers = tree.make_modifiers(Token::Public).unwrap();

        let err = tree.add_modifier(modifiers, Token::Private).unwrap_err();
        assert_eq!(
            err,
            AstError::ConflictingModifiers {
                held: ModifierSet::PUBLIC,
                added: ModifierSet::PRIVATE,
            }
        );
        // The node keeps its pre-call payload.
        assert_eq!(*tree.kind(modifiers), NodeKind::Modifiers(ModifierSet::PUBLIC));
    }

    #[test]
    fn non_modifier_token_is_unsupported() {
        let mut tree = SyntaxTree::new();
        let err = tree.make_modifiers(Token::Class).unwrap_err();
        assert_eq!(err, AstError::UnsupportedModifier { token: Token::Class });

        let modifiers = tree.make_modifiers(Token::Static).unwrap();
        let err = tree.add_modifier(modifiers, Token::Void).unwrap_err();
        assert_eq!(err, AstError::UnsupportedModifier { token: Token::Void });
    }

    #[test]
    fn empty_class_body_has_no_children() {
        let mut tree = SyntaxTree::new();
        let body = tree.make_class_body(None);
        assert_eq!(tree.children(body).count(), 0);
    }

    #[test]
    fn method_declarator_with_and_without_parameters() {
        let mut tree = SyntaxTree::new();

        let name = tree.make_identifier("reset");
        let bare = tree.make_method_declarator(name, None).unwrap();
        assert_eq!(tree.children(bare).count(), 1);

        let name = tree.make_identifier("translate");
        let ty = {
            let prim = tree.make_primitive_type(Primitive::Int);
            let tn = tree.make_type_name(prim);
            tree.make_type_specifier(tn)
        };
        let pname = tree.make_identifier("dx");
        let param = tree.make_parameter(ty, pname).unwrap();
        let params = tree.make_parameter_list(param);
        let full = tree.make_method_declarator(name, Some(params)).unwrap();

        let children: Vec<_> = tree.children(full).collect();
        assert_eq!(children, vec![name, params]);
    }

    #[test]
    fn reusing_an_adopted_chain_is_rejected() {
        let mut tree = SyntaxTree::new();
        let modifiers = tree.make_modifiers(Token::Public).unwrap();
        let name = tree.make_identifier("Broken");

        // Passing the same node for two positions joins it to its own
        // chain on the second adoption.
        let err = tree
            .make_class_declaration(modifiers, name, name)
            .unwrap_err();
        assert!(matches!(err, AstError::InvalidArgument { .. }));
    }
}
