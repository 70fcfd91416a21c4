//! Node kinds: the closed set of node types, the kind bitset the visitor
//! prunes with, and the [`AstNode`] sum over all node views.

use alloc::rc::Rc;
use core::{any::Any, fmt};

use crate::{Ast, Result, Span, nodes::*, strings::Str, value::Value, view::Node, view::View};

const WORDS: usize = NodeKind::COUNT.div_ceil(64);

/// A set of [`NodeKind`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet([u64; WORDS]);

impl KindSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; WORDS])
    }

    /// Adds `kind`, returning whether it was new.
    pub fn insert(&mut self, kind: NodeKind) -> bool {
        let (word, bit) = Self::locate(kind);
        let fresh = self.0[word] & bit == 0;
        self.0[word] |= bit;
        fresh
    }

    /// Whether `kind` is in the set.
    #[must_use]
    pub const fn contains(&self, kind: NodeKind) -> bool {
        let (word, bit) = Self::locate(kind);
        self.0[word] & bit != 0
    }

    /// Whether the two sets share a kind.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(a, b)| a & b != 0)
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }

    /// Number of kinds in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// The kinds in the set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = NodeKind> + '_ {
        NodeKind::ALL.iter().copied().filter(|kind| self.contains(*kind))
    }

    const fn locate(kind: NodeKind) -> (usize, u64) {
        let index = kind as usize;
        (index / 64, 1 << (index % 64))
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<NodeKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

macro_rules! kinds {
    ($($name:ident),* $(,)?) => {
        /// The kind of a node.
        #[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum NodeKind {
            $(
                #[doc = concat!("[`", stringify!($name), "`]")]
                $name,
            )*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(Self::$name),*];

            /// Number of kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// The kind's name, as used in visitor keys.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }

            /// Looks a kind up by its exact name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Plain-object keys of the kind's child fields, in traversal order.
            #[must_use]
            pub fn visit_keys(self) -> &'static [&'static str] {
                match self {
                    $(Self::$name => <$name as Node>::VISIT_KEYS,)*
                }
            }

            /// Adds the kinds that can appear as the nearest node below a node
            /// of this kind.
            pub fn reach_children(self, kinds: &mut KindSet) {
                match self {
                    $(Self::$name => <$name as Node>::reach_children(kinds),)*
                }
            }
        }

        /// Any node view.
        #[derive(Clone, Debug)]
        pub enum AstNode {
            $(
                #[doc = concat!("A [`", stringify!($name), "`] view.")]
                $name(Rc<$name>),
            )*
        }

        impl AstNode {
            /// The kind of the wrapped view.
            #[must_use]
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Self::$name(_) => NodeKind::$name,)*
                }
            }

            /// The source range of the wrapped view.
            ///
            /// # Errors
            ///
            /// As for [`Node::span`].
            pub fn span(&self) -> Result<Span> {
                match self {
                    $(Self::$name(node) => node.span(),)*
                }
            }

            /// The source text the wrapped view spans.
            ///
            /// # Errors
            ///
            /// As for [`Node::source_text`].
            pub fn source_text(&self) -> Result<Str> {
                match self {
                    $(Self::$name(node) => node.source_text(),)*
                }
            }

            /// Offset of the wrapped view in the buffer.
            #[must_use]
            pub fn pos(&self) -> u32 {
                match self {
                    $(Self::$name(node) => node.pos(),)*
                }
            }

            /// The session the wrapped view belongs to.
            #[must_use]
            pub fn ast(&self) -> &Rc<Ast> {
                match self {
                    $(Self::$name(node) => node.ast(),)*
                }
            }

            /// Eagerly decodes the wrapped view and everything below it.
            ///
            /// # Errors
            ///
            /// As for [`View::to_plain`].
            pub fn to_plain(&self) -> Result<Value> {
                match self {
                    $(Self::$name(node) => node.to_plain(),)*
                }
            }

            /// The wrapped view, if it is a `T`.
            #[must_use]
            pub fn get<T: Node>(&self) -> Option<&Rc<T>> {
                let erased: &dyn Any = match self {
                    $(Self::$name(node) => node,)*
                };
                erased.downcast_ref()
            }

            /// Whether both wrap the very same view.
            #[must_use]
            pub fn ptr_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$name(a), Self::$name(b)) => Rc::ptr_eq(a, b),)*
                    _ => false,
                }
            }
        }

        $(
            impl From<Rc<$name>> for AstNode {
                fn from(node: Rc<$name>) -> Self {
                    Self::$name(node)
                }
            }
        )*
    };
}

kinds! {
    BooleanLiteral, NullLiteral, NumericLiteral, StringLiteral, BigIntLiteral,
    RegExpLiteral, TemplateLiteral, TaggedTemplateExpression, TemplateElement,
    IdentifierName, IdentifierReference, BindingIdentifier, LabelIdentifier,
    PrivateIdentifier, ThisExpression, Super, ArrayExpression, Elision,
    ObjectExpression, ObjectProperty, ComputedMemberExpression, StaticMemberExpression,
    PrivateFieldExpression, CallExpression, NewExpression, MetaProperty, SpreadElement,
    UpdateExpression, UnaryExpression, BinaryExpression, PrivateInExpression,
    LogicalExpression, ConditionalExpression, AssignmentExpression,
    ArrayAssignmentTarget, ObjectAssignmentTarget, AssignmentTargetWithDefault,
    AssignmentTargetPropertyIdentifier, AssignmentTargetPropertyProperty,
    SequenceExpression, AwaitExpression, YieldExpression, ChainExpression,
    ParenthesizedExpression, ImportExpression, V8IntrinsicExpression, Program,
    Hashbang, BlockStatement, VariableDeclaration, VariableDeclarator, EmptyStatement,
    ExpressionStatement, IfStatement, DoWhileStatement, WhileStatement, ForStatement,
    ForInStatement, ForOfStatement, ContinueStatement, BreakStatement, ReturnStatement,
    WithStatement, SwitchStatement, SwitchCase, LabeledStatement, ThrowStatement,
    TryStatement, CatchClause, DebuggerStatement, AssignmentPattern, ObjectPattern,
    BindingProperty, ArrayPattern, Function, FormalParameters, FunctionBody,
    ArrowFunctionExpression, Class, ClassBody, MethodDefinition, PropertyDefinition,
    StaticBlock, AccessorProperty, Decorator, ImportDeclaration, ImportSpecifier,
    ImportDefaultSpecifier, ImportNamespaceSpecifier, ImportAttribute,
    ExportNamedDeclaration, ExportDefaultDeclaration, ExportAllDeclaration,
    ExportSpecifier, JSXElement, JSXOpeningElement, JSXClosingElement, JSXFragment,
    JSXOpeningFragment, JSXClosingFragment, JSXNamespacedName, JSXMemberExpression,
    JSXExpressionContainer, JSXEmptyExpression, JSXAttribute, JSXSpreadAttribute,
    JSXIdentifier, JSXSpreadChild, JSXText,
}

impl NodeKind {
    /// Resolves the `"type"` tag of a plain node object.
    ///
    /// Node types whose tag is one of their own fields report the field's
    /// value, so `FunctionDeclaration` resolves to [`NodeKind::Function`] and
    /// `TSAbstractMethodDefinition` to [`NodeKind::MethodDefinition`].
    ///
    /// ```
    /// use lazyast::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_type_tag("IfStatement"), Some(NodeKind::IfStatement));
    /// assert_eq!(NodeKind::from_type_tag("ClassExpression"), Some(NodeKind::Class));
    /// assert_eq!(NodeKind::from_type_tag("Line"), None);
    /// ```
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        Self::from_name(tag).or(match tag {
            "FunctionDeclaration"
            | "FunctionExpression"
            | "TSDeclareFunction"
            | "TSEmptyBodyFunctionExpression" => Some(Self::Function),
            "ClassDeclaration" | "ClassExpression" => Some(Self::Class),
            "TSAbstractMethodDefinition" => Some(Self::MethodDefinition),
            "TSAbstractPropertyDefinition" => Some(Self::PropertyDefinition),
            "TSAbstractAccessorProperty" => Some(Self::AccessorProperty),
            _ => None,
        })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
