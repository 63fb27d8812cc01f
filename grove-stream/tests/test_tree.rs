use std::rc::Rc;

use insta::assert_snapshot;

use grove_stream::{stream, Stream, TreeStream};

// a small concrete syntax tree
#[derive(Debug)]
enum Syntax {
    Node(&'static str, Vec<Rc<Syntax>>),
    Token(&'static str),
}

fn node(kind: &'static str, children: Vec<Rc<Syntax>>) -> Rc<Syntax> {
    Rc::new(Syntax::Node(kind, children))
}

fn token(text: &'static str) -> Rc<Syntax> {
    Rc::new(Syntax::Token(text))
}

fn children(syntax: &Rc<Syntax>) -> Stream<'static, Rc<Syntax>> {
    match syntax.as_ref() {
        Syntax::Node(_, children) => stream(children.clone()),
        Syntax::Token(_) => Stream::empty(),
    }
}

fn label(syntax: &Syntax) -> &'static str {
    match syntax {
        Syntax::Node(kind, _) => *kind,
        Syntax::Token(text) => *text,
    }
}

// grammar Hello
// rule Person: "person" name=ID;
fn sample() -> Rc<Syntax> {
    node(
        "Grammar",
        vec![
            node("GrammarHeader", vec![token("grammar"), token("Hello")]),
            node(
                "ParserRule",
                vec![
                    token("Person"),
                    token(":"),
                    node(
                        "Group",
                        vec![
                            node("Keyword", vec![token("\"person\"")]),
                            node("Assignment", vec![token("name"), token("="), token("ID")]),
                        ],
                    ),
                    token(";"),
                ],
            ),
        ],
    )
}

fn outline(tree: &TreeStream<'_, Rc<Syntax>>, prune: impl Fn(&Syntax) -> bool) -> String {
    let mut out = String::new();
    let mut iter = tree.iter();
    while let Some(syntax) = iter.next() {
        out.push_str(&"  ".repeat(iter.depth()));
        out.push_str(label(&syntax));
        out.push('\n');
        if prune(&syntax) {
            iter.prune();
        }
    }
    out.trim_end().to_string()
}

#[test]
fn test_outline() {
    let tree = TreeStream::with_root(sample(), children);
    assert_snapshot!(outline(&tree, |_| false), @r#"
    Grammar
      GrammarHeader
        grammar
        Hello
      ParserRule
        Person
        :
        Group
          Keyword
            "person"
          Assignment
            name
            =
            ID
        ;
    "#);
}

#[test]
fn test_outline_pruned() {
    let tree = TreeStream::with_root(sample(), children);
    let pruned = outline(&tree, |syntax| {
        matches!(syntax, Syntax::Node("GrammarHeader" | "Keyword" | "Assignment", _))
    });
    assert_snapshot!(pruned, @r#"
    Grammar
      GrammarHeader
      ParserRule
        Person
        :
        Group
          Keyword
          Assignment
        ;
    "#);
}

#[test]
fn test_tokens_via_stream_combinators() {
    let tree = TreeStream::new(sample(), children);
    let tokens = tree
        .stream()
        .filter(|syntax| matches!(syntax.as_ref(), Syntax::Token(_)))
        .map(|syntax| label(&syntax));
    assert_snapshot!(tokens.join(" "), @r#"grammar Hello Person : "person" name = ID ;"#);
}

#[test]
fn test_find_first_assignment() {
    let tree = TreeStream::new(sample(), children);
    let assignment = tree
        .stream()
        .find(|syntax| matches!(syntax.as_ref(), Syntax::Node("Assignment", _)))
        .unwrap();
    assert_eq!(children(&assignment).map(|s| label(&s)).join(""), "name=ID");
}

#[test]
fn test_pruning_leaves_other_subtrees_intact() {
    let tree = TreeStream::new(sample(), children);
    let mut iter = tree.iter();
    let mut seen = Vec::new();
    while let Some(syntax) = iter.next() {
        seen.push(label(&syntax));
        if label(&syntax) == "Group" {
            iter.prune();
        }
    }
    assert_eq!(
        seen,
        vec!["GrammarHeader", "grammar", "Hello", "ParserRule", "Person", ":", "Group", ";"]
    );
}
