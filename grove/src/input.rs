use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use xot::{Node, Xot};

/// Load the document from `infile`, or from stdin when there is none, and
/// return its document element.
pub(crate) fn load_document(xot: &mut Xot, infile: Option<&Path>) -> anyhow::Result<Node> {
    match infile {
        Some(path) => {
            let xml = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            parse_document(xot, &xml, &path.display().to_string())
        }
        None => {
            let mut xml = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut xml)
                .context("cannot read stdin")?;
            parse_document(xot, &xml, "<stdin>")
        }
    }
}

/// Parse `xml`, naming `origin` in any error.
pub(crate) fn parse_document(xot: &mut Xot, xml: &str, origin: &str) -> anyhow::Result<Node> {
    let doc = xot
        .parse(xml)
        .with_context(|| format!("{origin} is not well-formed XML"))?;
    let root = xot
        .document_element(doc)
        .with_context(|| format!("{origin} has no document element"))?;
    tracing::debug!(origin, bytes = xml.len(), "loaded document");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("grove-load-{}.xml", std::process::id()));
        std::fs::write(&path, "<grammar><rule/></grammar>").unwrap();
        let mut xot = Xot::new();
        let loaded = load_document(&mut xot, Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();
        let root = loaded.unwrap();
        assert_eq!(crate::xml::local_name(&xot, root), "grammar");
    }

    #[test]
    fn test_missing_file_names_path() {
        let mut xot = Xot::new();
        let err = load_document(&mut xot, Some(Path::new("/nonexistent/grove.xml"))).unwrap_err();
        assert_eq!(err.to_string(), "cannot read /nonexistent/grove.xml");
    }

    #[test]
    fn test_malformed_names_origin() {
        let mut xot = Xot::new();
        let err = parse_document(&mut xot, "<grammar>", "rules.xml").unwrap_err();
        assert_eq!(err.to_string(), "rules.xml is not well-formed XML");
    }
}
