//! Pre-order traversal of trees, with pruning.
//!
//! The traversal keeps one cursor per open tree level on an explicit stack,
//! so tree depth never turns into call stack depth.

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::cursor::{BoxedCursor, Cursor};
use crate::step::Step;
use crate::stream::{IntoStream, Stream};

type Children<'a, T> = Rc<dyn Fn(&T) -> Stream<'a, T> + 'a>;

/// The descendants of a root node, in pre-order.
///
/// A node is produced before any of its descendants, and the subtree of a
/// left sibling is complete before the right sibling is produced. The root
/// itself is left out unless the stream was built with
/// [`TreeStream::with_root`].
pub struct TreeStream<'a, T> {
    root: T,
    children: Children<'a, T>,
    include_root: bool,
}

impl<T> Clone for TreeStream<'_, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            children: self.children.clone(),
            include_root: self.include_root,
        }
    }
}

impl<'a, T> TreeStream<'a, T>
where
    T: Clone + 'a,
{
    /// Traverse all descendants of `root`, excluding `root`.
    ///
    /// `children` maps a node to its immediate children, in order.
    pub fn new<S, F>(root: T, children: F) -> Self
    where
        S: IntoStream<'a, Item = T>,
        F: Fn(&T) -> S + 'a,
    {
        Self {
            root,
            children: Rc::new(move |node: &T| children(node).into_stream()),
            include_root: false,
        }
    }

    /// Traverse `root` and all of its descendants.
    pub fn with_root<S, F>(root: T, children: F) -> Self
    where
        S: IntoStream<'a, Item = T>,
        F: Fn(&T) -> S + 'a,
    {
        Self {
            include_root: true,
            ..Self::new(root, children)
        }
    }

    pub fn root(&self) -> &T {
        &self.root
    }

    /// Begin a traversal.
    pub fn cursor(&self) -> TreeCursor<'a, T> {
        let (first, base) = if self.include_root {
            (Stream::once(self.root.clone()).cursor(), 2)
        } else {
            ((self.children)(&self.root).cursor(), 1)
        };
        TreeCursor {
            stack: vec![first],
            children: self.children.clone(),
            prune: false,
            base,
        }
    }

    /// Begin a traversal as a native iterator.
    pub fn iter(&self) -> TreeIter<'a, T> {
        TreeIter {
            cursor: self.cursor(),
        }
    }

    /// The traversal as a plain stream, without pruning.
    pub fn stream(&self) -> Stream<'a, T> {
        let tree = self.clone();
        Stream::from_stable_cursor_fn(move || tree.cursor())
    }
}

impl<'a, T> IntoStream<'a> for TreeStream<'a, T>
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        self.stream()
    }
}

impl<'a, T> IntoIterator for &TreeStream<'a, T>
where
    T: Clone + 'a,
{
    type Item = T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The state of one traversal: a cursor per open level, deepest on top.
pub struct TreeCursor<'a, T> {
    stack: Vec<BoxedCursor<'a, T>>,
    children: Children<'a, T>,
    prune: bool,
    base: usize,
}

impl<T> TreeCursor<'_, T> {
    /// Skip the subtree of the node that was just produced.
    ///
    /// Takes effect at the next step. Only meaningful right after a step
    /// produced a node: pruning twice for the same node is the same as
    /// pruning once, and pruning before the first step ends the traversal.
    pub fn prune(&mut self) {
        tracing::trace!(depth = self.depth(), "pruning subtree");
        self.prune = true;
    }

    /// How many levels below the root the node just produced sits; the
    /// root is at depth 0 and its children at depth 1.
    ///
    /// Only meaningful right after a step produced a node.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(self.base)
    }
}

impl<'a, T> Cursor for TreeCursor<'a, T>
where
    T: 'a,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if std::mem::take(&mut self.prune) {
            // the top cursor is over the children of the last node produced
            self.stack.pop();
        }
        while let Some(top) = self.stack.last_mut() {
            match top.step() {
                Step::Yield(node) => {
                    let children = (self.children)(&node);
                    self.stack.push(children.cursor());
                    return Step::Yield(node);
                }
                Step::Done => {
                    self.stack.pop();
                }
            }
        }
        Step::DONE
    }
}

/// A traversal as a native iterator, with pruning.
pub struct TreeIter<'a, T> {
    cursor: TreeCursor<'a, T>,
}

impl<T> TreeIter<'_, T> {
    /// See [`TreeCursor::prune`].
    pub fn prune(&mut self) {
        self.cursor.prune()
    }

    /// See [`TreeCursor::depth`].
    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }
}

impl<'a, T> Iterator for TreeIter<'a, T>
where
    T: 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.cursor.step().into_option()
    }
}

impl<'a, T> FusedIterator for TreeIter<'a, T> where T: 'a {}
