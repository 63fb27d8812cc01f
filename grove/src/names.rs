use std::path::PathBuf;

use ahash::{HashMap, HashMapExt};
use clap::Parser;
use xot::{Node, Xot};

use crate::input::load_document;
use crate::xml::{elements, local_name};

#[derive(Debug, Parser)]
pub(crate) struct Names {
    /// input xml file (default stdin)
    infile: Option<PathBuf>,
    /// Separator placed between names
    #[arg(long, default_value = "\n")]
    separator: String,
    /// Show how often each name occurs
    #[arg(long)]
    count: bool,
}

impl Names {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut xot = Xot::new();
        let root = load_document(&mut xot, self.infile.as_deref())?;
        println!("{}", render_names(&xot, root, &self.separator, self.count));
        Ok(())
    }
}

pub(crate) fn render_names(xot: &Xot, root: Node, separator: &str, count: bool) -> String {
    let names = elements(xot, root)
        .stream()
        .map(move |node| local_name(xot, node));
    let distinct = names.distinct();
    if !count {
        return distinct.join(separator);
    }
    let counts = names.reduce_with(HashMap::new(), |mut counts, name| {
        *counts.entry(name).or_insert(0usize) += 1;
        counts
    });
    distinct
        .map(move |name| format!("{name} {}", counts.get(name).copied().unwrap_or_default()))
        .join(separator)
}
