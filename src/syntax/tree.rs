//! Typed syntax tree model
//!
//! A deliberately small model of the statements, members, and type
//! annotations the extraction heuristics care about. Each node is a sum
//! type over its legal shapes, so a statement's kind and its populated
//! fields can never disagree. Everything else in a source file collapses
//! into `Statement::Other`.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

/// Declaration modifiers observed during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Export,
    Default,
    Static,
    Async,
    Abstract,
    Readonly,
}

/// One parsed source file: its top-level statements plus a lazily-built
/// import table (identifier -> originating module path). The table is
/// resolved on first lookup and cached for the life of the value;
/// re-parsing produces a fresh `SourceFile`.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
    imports: OnceCell<HashMap<String, String>>,
}

impl SourceFile {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            imports: OnceCell::new(),
        }
    }

    /// Originating module path for an imported identifier, if any.
    pub fn import_path(&self, name: &str) -> Option<&str> {
        self.imports
            .get_or_init(|| self.build_import_table())
            .get(name)
            .map(String::as_str)
    }

    fn build_import_table(&self) -> HashMap<String, String> {
        let mut imports = HashMap::new();
        for statement in &self.statements {
            let Statement::Import(import) = statement else {
                continue;
            };
            if let Some(name) = &import.default_name {
                imports.insert(name.clone(), import.module.clone());
            }
            if let Some(name) = &import.namespace_name {
                imports.insert(name.clone(), import.module.clone());
            }
            for binding in &import.named {
                imports.insert(binding.local_name().to_string(), import.module.clone());
            }
        }
        imports
    }

    /// Whether a name is exported by a standalone export statement, either
    /// `export default Name`, `export { Name }`, or an exported wrapper
    /// call such as `export default withRouter(Name)`.
    pub fn is_name_exported(&self, name: &str) -> bool {
        self.statements.iter().any(|statement| {
            let Statement::Export(export) = statement else {
                return false;
            };
            if export.names.iter().any(|n| n == name) {
                return true;
            }
            match &export.expression {
                Some(Expression::Identifier(id)) => id == name,
                Some(Expression::Call { arguments }) => arguments
                    .iter()
                    .any(|arg| matches!(arg, Expression::Identifier(id) if id == name)),
                _ => false,
            }
        })
    }

    /// Members of an interface declared in this file. Type names that
    /// resolve through the import table live in another module; resolving
    /// those is unsupported and yields `None`.
    pub fn members_of_type(&self, type_name: &str) -> Option<&[Member]> {
        if let Some(module) = self.import_path(type_name) {
            return self.members_of_type_from_module(module, type_name);
        }

        self.statements.iter().find_map(|statement| match statement {
            Statement::Interface(interface) if interface.name == type_name => {
                Some(interface.members.as_slice())
            }
            _ => None,
        })
    }

    fn members_of_type_from_module(&self, _module: &str, _type_name: &str) -> Option<&[Member]> {
        // Cross-module interface resolution is unsupported; callers degrade
        // to an empty prop list.
        None
    }
}

/// A top-level or nested statement. Exactly one shape per variant.
#[derive(Debug, Clone)]
pub enum Statement {
    Class(ClassDecl),
    Function(FunctionDecl),
    Interface(InterfaceDecl),
    Import(ImportDecl),
    Export(ExportAssignment),
    Expression(Expression),
    Return(Option<Expression>),
    Other,
}

impl Statement {
    /// Name of a class declaration. Calling this on any other statement
    /// kind is a detector bug, not malformed input.
    pub fn class_name(&self) -> &str {
        match self {
            Statement::Class(class) => &class.name,
            _ => panic!("expected a class declaration"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub heritage: Vec<HeritageClause>,
    pub members: Vec<Member>,
    pub doc: Vec<String>,
}

impl ClassDecl {
    pub fn is_exported(&self) -> bool {
        self.modifiers.contains(&Modifier::Export)
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub parameters: Vec<Parameter>,
    pub body: Option<Block>,
    pub doc: Vec<String>,
}

impl FunctionDecl {
    pub fn is_exported(&self) -> bool {
        self.modifiers.contains(&Modifier::Export)
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub members: Vec<Member>,
    pub doc: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub module: String,
    pub default_name: Option<String>,
    pub namespace_name: Option<String>,
    pub named: Vec<ImportBinding>,
}

/// One named import binding, `{ name }` or `{ name as alias }`.
#[derive(Debug, Clone)]
pub struct ImportBinding {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportBinding {
    /// The identifier the binding is visible as inside the file.
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A standalone export statement that re-exports existing names:
/// `export default Expr` carries the expression, `export { A, B }` the
/// name list.
#[derive(Debug, Clone, Default)]
pub struct ExportAssignment {
    pub expression: Option<Expression>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Method,
    /// A field whose value is an arrow function or function expression.
    ArrowMethod,
}

/// A class or interface member.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub type_ref: Option<TypeReference>,
    /// Presence of the optional marker (`name?:`).
    pub optional: bool,
    pub modifiers: Vec<Modifier>,
    /// Object-literal initializer, kept only for default-value harvesting.
    pub initializer: Option<ObjectLiteral>,
    pub doc: Vec<String>,
}

impl Member {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method | MemberKind::ArrowMethod)
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub type_ref: Option<TypeReference>,
}

/// One heritage clause (`extends ...` or `implements ...`).
#[derive(Debug, Clone)]
pub struct HeritageClause {
    pub types: Vec<HeritageType>,
}

/// A single base type inside a heritage clause: the base expression
/// (`Component`, `React.Component`, ...) plus its type arguments.
#[derive(Debug, Clone)]
pub struct HeritageType {
    pub expression: Expression,
    pub type_arguments: Vec<TypeReference>,
}

/// Canonical primitive keyword types. `null` and `undefined` appear here
/// because they act as keyword types in annotations even though the
/// grammar surfaces them as literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Number,
    String,
    Boolean,
    Void,
    Any,
    Null,
    Undefined,
    Never,
}

impl Primitive {
    /// Map a predefined-type keyword to its canonical primitive. Keywords
    /// outside the canonical table (`object`, `symbol`, `unknown`) are not
    /// primitives here; they flow through as named references instead.
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "number" => Some(Primitive::Number),
            "string" => Some(Primitive::String),
            "boolean" => Some(Primitive::Boolean),
            "void" => Some(Primitive::Void),
            "any" => Some(Primitive::Any),
            "never" => Some(Primitive::Never),
            _ => None,
        }
    }
}

/// Literal classes that can appear in literal types and union branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
}

/// A member's declared type. At most one interpretation applies.
#[derive(Debug, Clone)]
pub enum TypeReference {
    /// A named reference: interface, class, or any non-canonical keyword.
    Named { name: String },
    Primitive(Primitive),
    /// Union branches in declaration order.
    Union { branches: Vec<TypeReference> },
    Function {
        parameters: Vec<Parameter>,
        return_type: Option<Box<TypeReference>>,
    },
    /// A literal type such as `"left"` or `42`; text is the unquoted form.
    Literal { text: String, kind: LiteralKind },
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Element,
    Fragment,
}

/// The expression shapes the heuristics inspect; everything else is
/// `Other`.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(String),
    PropertyAccess { object: String, property: String },
    Call { arguments: Vec<Expression> },
    Markup(MarkupKind),
    Parenthesized(Box<Expression>),
    Other,
}

/// An object-literal initializer, reduced to its name/value assignments.
#[derive(Debug, Clone, Default)]
pub struct ObjectLiteral {
    pub properties: Vec<PropertyAssignment>,
}

#[derive(Debug, Clone)]
pub struct PropertyAssignment {
    pub name: String,
    pub value: LiteralValue,
}

/// The initializer shapes that produce a usable default-value text.
/// Complex expressions (nested literals, inline functions) are `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    True,
    False,
    Null,
    String(String),
    Number(String),
    Identifier(String),
    Other,
}
