//! Field Codegen Engine: per-field parse and serialize fragments.
//!
//! | Kind | Parse | Serialize |
//! |------|-------|-----------|
//! | string | owned copy via `read_string` | `new_string`, null-guarded |
//! | double / int64 / boolean | typed reader | typed constructor |
//! | reference | memoized parser call, owning pointer | memoized serializer call, null-guarded |
//! | array | zero-filled (not parsed) | fresh array filled over `0..<field>Len` |
//!
//! Optional fields are parsed behind a presence check; the absent branch writes
//! the kind's zero value so every native member is initialized.

use crate::context::GeneratorContext;
use crate::fragment::{Expr, Stmt, TypeRef, ValueOp};
use wirebind_core::{Diagnostic, FieldDescriptor, FieldType};

/// Zero value of a field kind: null pointer, `0.0`, or `0`.
pub fn zero_value(ty: &FieldType) -> Expr {
    match ty {
        FieldType::String | FieldType::Reference { .. } | FieldType::Array { .. } => Expr::Null,
        FieldType::Double => Expr::Real(0.0),
        FieldType::Int64 | FieldType::Boolean => Expr::Int(0),
    }
}

impl GeneratorContext<'_> {
    /// Statements writing the zero value of `field` into `target`.
    ///
    /// Array fields also reset their length member.
    pub fn zero_fill(&self, target: &Expr, field: &FieldDescriptor) -> Vec<Stmt> {
        let mut stmts = vec![Stmt::assign(
            target.member(&field.name),
            zero_value(&field.ty),
        )];
        if matches!(field.ty, FieldType::Array { .. }) {
            stmts.push(Stmt::assign(
                target.member(self.length_member(&field.name)),
                Expr::Int(0),
            ));
        }
        stmts
    }

    /// Statements reading `field` from the dynamic value `source` into the
    /// record pointer `target`.
    ///
    /// Fields that cannot be parsed (arrays, unresolved references) are
    /// zero-filled and reported.
    pub fn parse_fragment(
        &mut self,
        owner: &str,
        field: &FieldDescriptor,
        target: &Expr,
        source: &Expr,
    ) -> Vec<Stmt> {
        let member = target.member(&field.name);
        let schema = self.schema;

        let read: Option<Expr> = match &field.ty {
            FieldType::Reference { name } => match schema.resolve(name) {
                Some(referenced) => {
                    let parser = self.ensure_parser(referenced);
                    Some(Expr::call(
                        parser,
                        vec![source.clone(), Expr::str(&field.name)],
                    ))
                }
                None => {
                    self.report(Diagnostic::UnresolvedReference {
                        owner: owner.to_string(),
                        field: field.name.clone(),
                        target: name.clone(),
                    });
                    None
                }
            },
            FieldType::Array { .. } => {
                self.report(Diagnostic::UnparsedArray {
                    owner: owner.to_string(),
                    field: field.name.clone(),
                });
                None
            }
            scalar => scalar.scalar_kind().map(|kind| {
                ValueOp::Read {
                    kind,
                    object: Box::new(source.clone()),
                    key: field.name.clone(),
                }
                .into()
            }),
        };

        let Some(read) = read else {
            return self.zero_fill(target, field);
        };

        let assign = vec![Stmt::assign(member, read)];
        if field.optional {
            vec![Stmt::If {
                condition: ValueOp::HasProperty {
                    object: Box::new(source.clone()),
                    key: field.name.clone(),
                }
                .into(),
                then_branch: assign,
                else_branch: self.zero_fill(target, field),
            }]
        } else {
            assign
        }
    }

    /// Statements writing `field` of the record pointer `source` into the
    /// dynamic object `object`, wrapped in their own scope.
    ///
    /// Returns `None` when no code can be produced for the field.
    pub fn serialize_fragment(
        &mut self,
        owner: &str,
        field: &FieldDescriptor,
        source: &Expr,
        object: &Expr,
    ) -> Option<Vec<Stmt>> {
        let member = source.member(&field.name);

        let stmts = match &field.ty {
            FieldType::Reference { name } => {
                let value = self.serializer_call(owner, field, name, member.clone())?;
                vec![set_property(object, &field.name, value)]
            }
            FieldType::Array { element } => {
                self.serialize_array(owner, field, element, source, object)?
            }
            scalar => {
                let kind = scalar.scalar_kind()?;
                let value = ValueOp::New {
                    kind,
                    value: Box::new(member.clone()),
                };
                vec![set_property(object, &field.name, value.into())]
            }
        };

        let stmts = if field.ty.is_null_guarded() {
            vec![Stmt::guard(member.not_null(), stmts)]
        } else {
            stmts
        };

        Some(vec![Stmt::Scope(stmts)])
    }

    fn serialize_array(
        &mut self,
        owner: &str,
        field: &FieldDescriptor,
        element: &FieldType,
        source: &Expr,
        object: &Expr,
    ) -> Option<Vec<Stmt>> {
        let item = source.member(&field.name).index(Expr::ident("i"));

        let value = match element {
            FieldType::Reference { name } => {
                self.serializer_call(owner, field, name, item.address_of())?
            }
            FieldType::Array { .. } => {
                self.report(Diagnostic::NestedArray {
                    owner: owner.to_string(),
                    field: field.name.clone(),
                });
                return None;
            }
            scalar => {
                let kind = scalar.scalar_kind()?;
                ValueOp::New {
                    kind,
                    value: Box::new(item),
                }
                .into()
            }
        };

        let array = Expr::ident("arr");
        Some(vec![
            Stmt::declare(TypeRef::Value, "arr", ValueOp::NewArray),
            Stmt::Loop {
                index: "i".to_string(),
                bound: source.member(self.length_member(&field.name)),
                body: vec![Stmt::eval(ValueOp::SetElement {
                    array: Box::new(array.clone()),
                    index: Box::new(Expr::ident("i")),
                    value: Box::new(value),
                })],
            },
            set_property(object, &field.name, array),
        ])
    }

    /// Call of the referenced type's serializer, emitting it on first use.
    fn serializer_call(
        &mut self,
        owner: &str,
        field: &FieldDescriptor,
        target: &str,
        argument: Expr,
    ) -> Option<Expr> {
        let schema = self.schema;
        let Some(referenced) = schema.resolve(target) else {
            self.report(Diagnostic::UnresolvedReference {
                owner: owner.to_string(),
                field: field.name.clone(),
                target: target.to_string(),
            });
            return None;
        };
        let serializer = self.ensure_serializer(referenced);
        Some(Expr::call(serializer, vec![argument]))
    }
}

fn set_property(object: &Expr, key: &str, value: Expr) -> Stmt {
    Stmt::eval(ValueOp::SetProperty {
        object: Box::new(object.clone()),
        key: key.to_string(),
        value: Box::new(value),
    })
}
