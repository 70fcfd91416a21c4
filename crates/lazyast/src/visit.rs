//! The compiled visitor: sparse `"Kind"` / `"Kind:exit"` callbacks, a pruning
//! mask of the kinds worth descending into, and walkers over both lazy views
//! and plain values.

use alloc::{
    boxed::Box,
    collections::BTreeMap,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::{any::TypeId, fmt};

use crate::{
    Ast, AstNode, Error, Result,
    kind::{KindSet, NodeKind},
    layout::Decode,
    value::Value,
    view::{Node, View},
};
#[allow(unused_imports)]
use crate::debug;

const EXIT_SUFFIX: &str = ":exit";

/// A visitor callback.
pub type Callback<'a> = Box<dyn FnMut(NodeRef<'_>) + 'a>;

/// The node a callback is invoked with.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'n> {
    /// A node reached by [`CompiledVisitor::run`].
    Lazy(&'n AstNode),
    /// A node object reached by [`CompiledVisitor::run_plain`].
    Plain(NodeKind, &'n Value),
}

impl<'n> NodeRef<'n> {
    /// Kind of the node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Lazy(node) => node.kind(),
            Self::Plain(kind, _) => *kind,
        }
    }

    /// The lazy view, when walking views.
    #[must_use]
    pub fn lazy(&self) -> Option<&'n AstNode> {
        match self {
            Self::Lazy(node) => Some(node),
            Self::Plain(..) => None,
        }
    }

    /// The plain object, when walking plain values.
    #[must_use]
    pub fn plain(&self) -> Option<&'n Value> {
        match self {
            Self::Lazy(_) => None,
            Self::Plain(_, value) => Some(value),
        }
    }
}

/// Collects callbacks for [`CompiledVisitor::new`].
///
/// # Examples
///
/// ```rust
/// use lazyast::Visitor;
///
/// let mut names = Vec::new();
/// let visitor = Visitor::new()
///     .on("IfStatement", |node| names.push(node.kind()))
///     .compile()
///     .unwrap();
/// drop(visitor);
/// ```
#[derive(Default)]
pub struct Visitor<'a> {
    entries: Vec<(String, Callback<'a>)>,
}

impl<'a> Visitor<'a> {
    /// An empty visitor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `key`, which is a node kind name optionally
    /// followed by `:exit`.
    #[must_use]
    pub fn on(mut self, key: impl Into<String>, callback: impl FnMut(NodeRef<'_>) + 'a) -> Self {
        self.entries.push((key.into(), Box::new(callback)));
        self
    }

    /// Validates the keys and builds the dispatch table.
    ///
    /// # Errors
    ///
    /// As for [`CompiledVisitor::new`].
    pub fn compile(self) -> Result<CompiledVisitor<'a>> {
        CompiledVisitor::new(self.entries)
    }
}

impl fmt::Debug for Visitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(key, _)| key))
            .finish()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Enter,
    Exit,
}

fn parse_key(key: &str) -> Result<(NodeKind, Phase)> {
    let malformed = || Error::MalformedVisitorPhase {
        name: key.to_string(),
    };
    let (name, phase) = match key.strip_suffix(EXIT_SUFFIX) {
        Some(name) => (name, Phase::Exit),
        None => (key, Phase::Enter),
    };
    if name.is_empty() || name.contains(':') {
        return Err(malformed());
    }
    let kind = NodeKind::from_name(name).ok_or_else(|| Error::UnknownVisitorKind {
        name: name.to_string(),
    })?;
    Ok((kind, phase))
}

/// A dispatch table built from visitor callbacks.
///
/// Per kind it holds the enter and exit callbacks in registration order, and
/// a mask of the kinds whose subtrees can contain a kind with callbacks.
/// Walks skip every subtree outside that mask without decoding it.
pub struct CompiledVisitor<'a> {
    enter: Vec<Vec<Callback<'a>>>,
    exit: Vec<Vec<Callback<'a>>>,
    registered: KindSet,
    needed: KindSet,
    reach: BTreeMap<TypeId, bool>,
}

impl fmt::Debug for CompiledVisitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledVisitor")
            .field("registered", &self.registered)
            .field("needed", &self.needed)
            .finish_non_exhaustive()
    }
}

impl<'a> CompiledVisitor<'a> {
    /// Builds the dispatch table from `(key, callback)` pairs.
    ///
    /// A key is a node kind name (`"IfStatement"`), called before the node's
    /// children, or a name with an `:exit` suffix, called after. Several
    /// callbacks may share a key; they run in the order given.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedVisitorPhase`] for a suffix other than `:exit` and
    /// [`Error::UnknownVisitorKind`] for a name that is not a node kind.
    pub fn new<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Callback<'a>)>,
    {
        let mut enter: Vec<Vec<Callback<'a>>> = (0..NodeKind::COUNT).map(|_| Vec::new()).collect();
        let mut exit: Vec<Vec<Callback<'a>>> = (0..NodeKind::COUNT).map(|_| Vec::new()).collect();
        let mut registered = KindSet::new();

        for (key, callback) in entries {
            let (kind, phase) = parse_key(key.as_ref())?;
            registered.insert(kind);
            let table = match phase {
                Phase::Enter => &mut enter,
                Phase::Exit => &mut exit,
            };
            table[kind as usize].push(callback);
        }

        let needed = needed_kinds(&registered);
        debug!(
            registered = registered.len(),
            needed = needed.len(),
            "compiled visitor"
        );
        Ok(Self {
            enter,
            exit,
            registered,
            needed,
            reach: BTreeMap::new(),
        })
    }

    /// Kinds with at least one callback.
    #[must_use]
    pub fn registered(&self) -> &KindSet {
        &self.registered
    }

    /// Kinds the walk descends into.
    #[must_use]
    pub fn needed(&self) -> &KindSet {
        &self.needed
    }

    /// Walks the tree below `root` in schema order, calling back on every
    /// registered node.
    ///
    /// Views are only constructed for nodes with callbacks. Subtrees that
    /// cannot contain such a node are skipped without being read.
    ///
    /// # Errors
    ///
    /// The first decode error hit on the way, or
    /// [`Error::DepthLimitExceeded`] if the tree is nested deeper than the
    /// session allows.
    pub fn run<T: View>(&mut self, root: &T) -> Result<()> {
        let ast = root.ast();
        let mut walker = Walker {
            ast,
            visitor: self,
            depth: 0,
        };
        T::walk(root.pos(), &mut walker)
    }

    /// Walks a plain value produced by [`View::to_plain`], calling back on
    /// every object whose `"type"` tag names a registered kind.
    ///
    /// Children of a node object are visited in the same order as
    /// [`run`](Self::run) visits them; untagged objects are walked in key
    /// order.
    ///
    /// # Errors
    ///
    /// Never fails for values produced by this crate; the `Result` matches
    /// [`run`](Self::run).
    pub fn run_plain(&mut self, root: &Value) -> Result<()> {
        self.walk_plain(root);
        Ok(())
    }

    fn walk_plain(&mut self, value: &Value) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.walk_plain(item);
                }
            }
            Value::Object(map) => {
                match value.type_tag().and_then(NodeKind::from_type_tag) {
                    Some(kind) => {
                        if !self.needed.contains(kind) {
                            return;
                        }
                        self.dispatch(Phase::Enter, kind, NodeRef::Plain(kind, value));
                        for key in kind.visit_keys() {
                            if let Some(child) = map.get(*key) {
                                self.walk_plain(child);
                            }
                        }
                        self.dispatch(Phase::Exit, kind, NodeRef::Plain(kind, value));
                    }
                    None => {
                        for child in map.values() {
                            self.walk_plain(child);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, phase: Phase, kind: NodeKind, node: NodeRef<'_>) {
        let table = match phase {
            Phase::Enter => &mut self.enter,
            Phase::Exit => &mut self.exit,
        };
        for callback in &mut table[kind as usize] {
            callback(node);
        }
    }

    /// Whether a `T` can contain a needed node. Cached per type.
    fn reaches<T: Decode>(&mut self) -> bool {
        let needed = self.needed;
        *self.reach.entry(TypeId::of::<T>()).or_insert_with(|| {
            let mut kinds = KindSet::new();
            T::reach(&mut kinds);
            kinds.intersects(&needed)
        })
    }
}

/// The kinds that have callbacks or can contain, at any depth, a kind that
/// does.
fn needed_kinds(registered: &KindSet) -> KindSet {
    let children: Vec<KindSet> = NodeKind::ALL
        .iter()
        .map(|kind| {
            let mut reach = KindSet::new();
            kind.reach_children(&mut reach);
            reach
        })
        .collect();

    let mut needed = *registered;
    loop {
        let mut changed = false;
        for (kind, reach) in NodeKind::ALL.iter().zip(&children) {
            if !needed.contains(*kind) && reach.intersects(&needed) {
                needed.insert(*kind);
                changed = true;
            }
        }
        if !changed {
            return needed;
        }
    }
}

/// State of one [`CompiledVisitor::run`].
pub struct Walker<'a, 'v> {
    ast: &'a Rc<Ast>,
    visitor: &'a mut CompiledVisitor<'v>,
    depth: usize,
}

impl<'a> Walker<'a, '_> {
    pub(crate) fn ast(&self) -> &'a Rc<Ast> {
        self.ast
    }

    pub(crate) fn reaches<T: Decode>(&mut self) -> bool {
        self.visitor.reaches::<T>()
    }

    /// Visits the node `T` at `pos`: enter callbacks, then `children`, then
    /// exit callbacks.
    pub(crate) fn node<T: Node>(
        &mut self,
        pos: u32,
        children: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        if !self.visitor.needed.contains(T::KIND) {
            return Ok(());
        }
        self.ast.bytes(pos, T::SIZE)?;

        let limit = self.ast.options().max_depth;
        if self.depth >= limit {
            return Err(Error::DepthLimitExceeded { limit });
        }

        let node = if self.visitor.registered.contains(T::KIND) {
            Some(self.ast.construct::<T>(pos)?.into_node())
        } else {
            None
        };
        if let Some(node) = &node {
            self.visitor
                .dispatch(Phase::Enter, T::KIND, NodeRef::Lazy(node));
        }

        self.depth += 1;
        let walked = children(self);
        self.depth -= 1;
        walked?;

        if let Some(node) = &node {
            self.visitor.dispatch(Phase::Exit, T::KIND, NodeRef::Lazy(node));
        }
        Ok(())
    }
}
