use std::path::PathBuf;

use clap::Parser;
use xot::{Node, Xot};

use crate::input::load_document;
use crate::xml::{elements, local_name};

#[derive(Debug, Parser)]
pub(crate) struct Outline {
    /// input xml file (default stdin)
    infile: Option<PathBuf>,
    /// Element name whose descendants are left out of the outline (can be
    /// repeated). The element itself is still shown.
    #[arg(long)]
    prune: Vec<String>,
    /// Do not show elements nested deeper than this below the document
    /// element.
    #[arg(long)]
    max_depth: Option<usize>,
}

impl Outline {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut xot = Xot::new();
        let root = load_document(&mut xot, self.infile.as_deref())?;
        print!("{}", render_outline(&xot, root, &self.prune, self.max_depth));
        Ok(())
    }
}

/// One line per element, indented two spaces per level.
pub(crate) fn render_outline(
    xot: &Xot,
    root: Node,
    prune: &[String],
    max_depth: Option<usize>,
) -> String {
    let tree = elements(xot, root);
    let mut out = String::new();
    let mut iter = tree.iter();
    while let Some(node) = iter.next() {
        let depth = iter.depth();
        let name = local_name(xot, node);
        out.push_str(&"  ".repeat(depth));
        out.push_str(name);
        out.push('\n');
        let at_limit = max_depth.is_some_and(|max| depth >= max);
        if at_limit || prune.iter().any(|pruned| pruned == name) {
            iter.prune();
        }
    }
    out
}
