//! Intermediate representation for generated marshalling code.
//!
//! The engines never produce text directly. They build an ordered
//! [`GeneratedUnit`] of typed fragments ([`Function`] definitions and
//! [`DispatchBlock`]s), and a [`Backend`](crate::backend::Backend) renders them.
//!
//! # Structure
//!
//! - [`Expr`] / [`Stmt`]: a small imperative language (assignments, guarded
//!   blocks, counted loops, calls)
//! - [`ValueOp`]: operations on the engine's dynamic values, the only place the
//!   IR touches the embedding API
//! - [`Function`]: one generated parser or serializer
//! - [`DispatchBlock`]: name-matching branches for one message category
//!
//! The engine context argument is implicit: every [`Expr::Call`] and every
//! [`ValueOp`] receives it as its first argument when rendered.

use wirebind_core::ScalarKind;

/// Storage types that appear in declarations and signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Dynamic engine value
    Value,
    /// Pointer to a native record
    Record(String),
    /// Borrowed wire name string
    Name,
}

/// Expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Null,
    Int(i64),
    Real(f64),
    /// String literal
    Str(String),
    Ident(String),
    /// Member access through a record pointer
    Member { base: Box<Expr>, name: String },
    Index { base: Box<Expr>, index: Box<Expr> },
    AddressOf(Box<Expr>),
    /// Reinterpret an opaque pointer as a record pointer
    Cast { ty: String, expr: Box<Expr> },
    PostIncrement(Box<Expr>),
    NotNull(Box<Expr>),
    /// Call of a generated function
    Call { function: String, args: Vec<Expr> },
    Value(ValueOp),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    /// `self->name`
    pub fn member(&self, name: impl Into<String>) -> Self {
        Expr::Member {
            base: Box::new(self.clone()),
            name: name.into(),
        }
    }

    /// `self[index]`
    pub fn index(self, index: Expr) -> Self {
        Expr::Index {
            base: Box::new(self),
            index: Box::new(index),
        }
    }

    pub fn address_of(self) -> Self {
        Expr::AddressOf(Box::new(self))
    }

    pub fn not_null(self) -> Self {
        Expr::NotNull(Box::new(self))
    }

    pub fn call(function: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            function: function.into(),
            args,
        }
    }
}

impl From<ValueOp> for Expr {
    fn from(op: ValueOp) -> Self {
        Expr::Value(op)
    }
}

/// Dynamic value operations provided by the engine embedding.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueOp {
    HasProperty { object: Box<Expr>, key: String },
    GetProperty { object: Box<Expr>, key: Box<Expr> },
    /// Typed read of a property; strings are returned as owned copies
    Read {
        kind: ScalarKind,
        object: Box<Expr>,
        key: String,
    },
    /// Typed constructor
    New { kind: ScalarKind, value: Box<Expr> },
    NewObject,
    NewArray,
    SetProperty {
        object: Box<Expr>,
        key: String,
        value: Box<Expr>,
    },
    SetElement {
        array: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },
    Free(Box<Expr>),
    /// Allocate one uninitialized record
    Alloc { ty: String },
}

/// Statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare {
        ty: TypeRef,
        name: String,
        value: Expr,
    },
    Assign {
        target: Expr,
        value: Expr,
    },
    Eval(Expr),
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    /// Nested block scope
    Scope(Vec<Stmt>),
    /// `for index in 0..bound`
    Loop {
        index: String,
        bound: Expr,
        body: Vec<Stmt>,
    },
    Return(Expr),
}

impl Stmt {
    pub fn assign(target: Expr, value: impl Into<Expr>) -> Self {
        Stmt::Assign {
            target,
            value: value.into(),
        }
    }

    pub fn declare(ty: TypeRef, name: impl Into<String>, value: impl Into<Expr>) -> Self {
        Stmt::Declare {
            ty,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn eval(expr: impl Into<Expr>) -> Self {
        Stmt::Eval(expr.into())
    }

    pub fn guard(condition: Expr, then_branch: Vec<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch,
            else_branch: Vec::new(),
        }
    }
}

/// Direction of a generated marshalling function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Dynamic value -> native record
    Parser,
    /// Native record -> dynamic value
    Serializer,
}

/// A function parameter. The engine context parameter is implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: TypeRef,
    pub name: String,
}

impl Param {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// One generated parser or serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub kind: FunctionKind,
    /// Composite type this function marshals
    pub type_name: String,
    pub name: String,
    pub returns: TypeRef,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

/// Dispatch categories, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchKind {
    /// Parse request arguments by command name
    RequestParser,
    /// Construct a default event record by event name
    EventInit,
    /// Construct a default response record by command name
    ResponseInit,
    /// Serialize an event body by event name
    EventBodyStringify,
    /// Serialize a response body by command name
    ResponseBodyStringify,
}

impl DispatchKind {
    pub const ALL: [DispatchKind; 5] = [
        DispatchKind::RequestParser,
        DispatchKind::EventInit,
        DispatchKind::ResponseInit,
        DispatchKind::EventBodyStringify,
        DispatchKind::ResponseBodyStringify,
    ];

    /// Template slot the rendered block is placed in.
    pub fn slot(&self) -> &'static str {
        match self {
            DispatchKind::RequestParser => "request_parser",
            DispatchKind::EventInit => "event_init",
            DispatchKind::ResponseInit => "response_init",
            DispatchKind::EventBodyStringify => "event_body_stringify",
            DispatchKind::ResponseBodyStringify => "response_body_stringify",
        }
    }

    /// Variable holding the runtime wire name being matched.
    pub fn discriminant(&self) -> &'static str {
        match self {
            DispatchKind::RequestParser | DispatchKind::ResponseBodyStringify => "command",
            DispatchKind::EventInit | DispatchKind::EventBodyStringify => "event",
            DispatchKind::ResponseInit => "response",
        }
    }
}

/// One name-matching branch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchBranch {
    /// Message type this branch handles
    pub message: String,
    /// Wire name compared against the discriminant
    pub wire_name: String,
    pub body: Vec<Stmt>,
}

/// All branches of one dispatch category.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchBlock {
    pub kind: DispatchKind,
    pub branches: Vec<DispatchBranch>,
}

/// Everything one generation run produced, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedUnit {
    /// Parsers and serializers in first-completed order
    pub functions: Vec<Function>,
    /// Dispatch blocks in [`DispatchKind::ALL`] order
    pub blocks: Vec<DispatchBlock>,
}

impl GeneratedUnit {
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn block(&self, kind: DispatchKind) -> Option<&DispatchBlock> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    /// Number of functions of `kind` generated for `type_name`.
    pub fn count(&self, kind: FunctionKind, type_name: &str) -> usize {
        self.functions
            .iter()
            .filter(|f| f.kind == kind && f.type_name == type_name)
            .count()
    }
}
