//! Builds an activity-diagram CFG from one Swift function.
//!
//! The walk is deliberately defensive about the grammar: node kinds are
//! matched by substring and every condition lookup has a plain-text
//! fallback, so minor grammar revisions do not break diagram output.
//!
//! Supported statement shapes: linear statements, `if`/`else if`/`else`
//! chains and `return`. A `return` closes its branch with a Final node;
//! branches that stay open meet again at a Merge node.

use crate::errors::Error;
use crate::ir::{ActivityGraph, ActivityNode, EdgeLabel, NodeId};
use tree_sitter::Node;

pub struct CfgBuilder {
    max_label_length: usize,
}

impl Default for CfgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CfgBuilder {
    pub fn new() -> Self {
        Self {
            max_label_length: 60,
        }
    }

    pub fn with_max_label_length(mut self, limit: usize) -> Self {
        self.max_label_length = limit.max(1);
        self
    }

    /// Build the activity graph for `function` (or the first function
    /// declaration when `None`).
    pub fn build(&self, source: &str, function: Option<&str>) -> Result<ActivityGraph, Error> {
        let tree = super::parse(source)?;
        let mut graph = ActivityGraph::new();
        let start = graph.add(ActivityNode::Initial);

        let func = find_function(tree.root_node(), source, function)
            .ok_or_else(|| Error::missing_function(function))?;
        log::debug!(
            "diagramming function '{}'",
            function_name(func, source).unwrap_or_else(|| "<anonymous>".to_string())
        );

        match body_statements(func) {
            None => {
                let end = graph.add(ActivityNode::Final);
                graph.link(start, end);
            }
            Some(block) => {
                if let Some(last) = self.emit_block(&mut graph, start, block, source, None) {
                    let end = graph.add(ActivityNode::Final);
                    graph.link(last, end);
                }
            }
        }
        Ok(graph)
    }

    /// Emit a statement block linearly. Returns the last open node, or
    /// `None` when the block was closed by a `return`.
    fn emit_block(
        &self,
        graph: &mut ActivityGraph,
        entry: NodeId,
        block: Node,
        source: &str,
        entry_label: Option<EdgeLabel>,
    ) -> Option<NodeId> {
        let mut prev = entry;
        let mut label = entry_label;

        for statement in named_children(block) {
            let text = node_text(statement, source);

            if is_if_statement(statement, &text) {
                prev = self.emit_if(graph, prev, statement, source, label.take())?;
                continue;
            }

            if is_return(&text) {
                let action = graph.add(ActivityNode::Action(self.shorten(&text)));
                graph.link_opt(prev, action, label.take());
                let end = graph.add(ActivityNode::Final);
                graph.link(action, end);
                return None;
            }

            let action = graph.add(ActivityNode::Action(self.shorten(&text)));
            graph.link_opt(prev, action, label.take());
            prev = action;
        }

        Some(prev)
    }

    /// Emit `if`/`else` as Decision -> branches -> Merge. Returns the merge
    /// node, or `None` when every branch ended in a `return`.
    fn emit_if(
        &self,
        graph: &mut ActivityGraph,
        prev: NodeId,
        if_node: Node,
        source: &str,
        entry_label: Option<EdgeLabel>,
    ) -> Option<NodeId> {
        let condition = self.extract_condition(if_node, source);
        let decision = graph.add(ActivityNode::Decision(self.shorten(&condition)));
        graph.link_opt(prev, decision, entry_label);

        let children = named_children(if_node);
        let mut blocks = children.iter().copied().filter(|c| c.kind() == "statements");
        let then_block = blocks.next();
        let else_block = blocks.next();
        let else_if = children
            .iter()
            .copied()
            .find(|c| c.kind().contains("if_statement"));

        let then_last = match then_block {
            Some(block) => self.emit_block(graph, decision, block, source, Some(EdgeLabel::Yes)),
            None => Some(decision),
        };

        if let Some(block) = else_block {
            let else_last = self.emit_block(graph, decision, block, source, Some(EdgeLabel::No));
            self.close_if(graph, decision, then_last, else_last)
        } else if let Some(nested) = else_if {
            let else_last = self.emit_if(graph, decision, nested, source, Some(EdgeLabel::No));
            self.close_if(graph, decision, then_last, else_last)
        } else {
            // no else branch: the `no` edge goes straight to the merge
            let merge = graph.add(ActivityNode::Merge);
            link_branch(graph, decision, then_last, merge, EdgeLabel::Yes);
            graph.link_labeled(decision, merge, EdgeLabel::No);
            Some(merge)
        }
    }

    fn close_if(
        &self,
        graph: &mut ActivityGraph,
        decision: NodeId,
        then_last: Option<NodeId>,
        else_last: Option<NodeId>,
    ) -> Option<NodeId> {
        if then_last.is_none() && else_last.is_none() {
            // both branches returned; nothing flows past this decision
            return None;
        }
        let merge = graph.add(ActivityNode::Merge);
        link_branch(graph, decision, then_last, merge, EdgeLabel::Yes);
        link_branch(graph, decision, else_last, merge, EdgeLabel::No);
        Some(merge)
    }

    /// Condition text for an `if`. Prefers the grammar's condition field,
    /// falls back to slicing the text between `if` and the opening brace.
    fn extract_condition(&self, if_node: Node, source: &str) -> String {
        if let Some(condition) = if_node.child_by_field_name("condition") {
            return node_text(condition, source);
        }
        let text = node_text(if_node, source);
        let trimmed = text.trim_start();
        let rest = trimmed.strip_prefix("if").unwrap_or(trimmed).trim_start();
        match rest.find('{') {
            Some(cut) if cut > 0 => rest[..cut].trim().to_string(),
            _ => rest.to_string(),
        }
    }

    /// Collapse whitespace and clamp the label to the configured length.
    fn shorten(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= self.max_label_length {
            return collapsed;
        }
        let mut shortened: String = collapsed
            .chars()
            .take(self.max_label_length.saturating_sub(1))
            .collect();
        shortened.push('…');
        shortened
    }
}

fn link_branch(
    graph: &mut ActivityGraph,
    decision: NodeId,
    last: Option<NodeId>,
    merge: NodeId,
    label: EdgeLabel,
) {
    match last {
        // empty branch: the labeled edge was never consumed, attach it here
        Some(node) if node == decision => graph.link_labeled(decision, merge, label),
        Some(node) => graph.link(node, merge),
        None => {}
    }
}

fn is_if_statement(node: Node, text: &str) -> bool {
    let trimmed = text.trim_start();
    node.kind().contains("if_statement")
        || trimmed.starts_with("if ")
        || trimmed.starts_with("if(")
}

fn is_return(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed == "return"
        || trimmed
            .strip_prefix("return")
            .is_some_and(|rest| rest.starts_with(|c: char| !c.is_alphanumeric() && c != '_'))
}

/// First function declaration in document order, optionally by name.
fn find_function<'t>(root: Node<'t>, source: &str, name: Option<&str>) -> Option<Node<'t>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind().contains("function_declaration") {
            let matches = match name {
                None => true,
                Some(want) => function_name(node, source).as_deref() == Some(want),
            };
            if matches {
                return Some(node);
            }
        }
        for child in named_children(node).into_iter().rev() {
            stack.push(child);
        }
    }
    None
}

fn function_name(node: Node, source: &str) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(node_text(name, source));
    }
    named_children(node)
        .into_iter()
        .find(|c| c.kind().contains("identifier"))
        .map(|c| node_text(c, source))
}

/// The statement block of a function body, if it has one.
fn body_statements(func: Node) -> Option<Node> {
    let scope = descendant_by_kind(func, "function_body").unwrap_or(func);
    descendant_by_kind(scope, "statements")
}

fn descendant_by_kind<'t>(root: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.id() != root.id() && node.kind() == kind {
            return Some(node);
        }
        for child in named_children(node).into_iter().rev() {
            // stay within this function
            if child.kind().contains("function_declaration") {
                continue;
            }
            stack.push(child);
        }
    }
    None
}

fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn nodes_of(graph: &ActivityGraph) -> Vec<ActivityNode> {
        graph.nodes().map(|(_, n)| n.clone()).collect()
    }

    fn edges_of(graph: &ActivityGraph) -> Vec<(usize, usize, Option<EdgeLabel>)> {
        graph.edges().collect()
    }

    #[test]
    fn linear_body_becomes_action_chain() {
        let source = indoc! {r#"
            func main() {
                let x = 1
                print(x)
            }
        "#};
        let graph = CfgBuilder::new().build(source, None).unwrap();

        assert_eq!(
            nodes_of(&graph),
            vec![
                ActivityNode::Initial,
                ActivityNode::Action("let x = 1".into()),
                ActivityNode::Action("print(x)".into()),
                ActivityNode::Final,
            ]
        );
        assert_eq!(
            edges_of(&graph),
            vec![(0, 1, None), (1, 2, None), (2, 3, None)]
        );
    }

    #[test]
    fn if_without_else_merges_back() {
        let source = indoc! {r#"
            func f(_ x: Int) {
                if x > 0 {
                    print(x)
                }
                print(0)
            }
        "#};
        let graph = CfgBuilder::new().build(source, None).unwrap();

        assert_eq!(
            nodes_of(&graph),
            vec![
                ActivityNode::Initial,
                ActivityNode::Decision("x > 0".into()),
                ActivityNode::Action("print(x)".into()),
                ActivityNode::Merge,
                ActivityNode::Action("print(0)".into()),
                ActivityNode::Final,
            ]
        );
        assert_eq!(
            edges_of(&graph),
            vec![
                (0, 1, None),
                (1, 2, Some(EdgeLabel::Yes)),
                (2, 3, None),
                (1, 3, Some(EdgeLabel::No)),
                (3, 4, None),
                (4, 5, None),
            ]
        );
    }

    #[test]
    fn if_else_with_open_branches_meets_at_merge() {
        let source = indoc! {r#"
            func f(_ x: Int) {
                if x > 0 {
                    up()
                } else {
                    down()
                }
                done()
            }
        "#};
        let graph = CfgBuilder::new().build(source, None).unwrap();

        assert_eq!(
            nodes_of(&graph),
            vec![
                ActivityNode::Initial,
                ActivityNode::Decision("x > 0".into()),
                ActivityNode::Action("up()".into()),
                ActivityNode::Action("down()".into()),
                ActivityNode::Merge,
                ActivityNode::Action("done()".into()),
                ActivityNode::Final,
            ]
        );
        assert_eq!(
            edges_of(&graph),
            vec![
                (0, 1, None),
                (1, 2, Some(EdgeLabel::Yes)),
                (1, 3, Some(EdgeLabel::No)),
                (2, 4, None),
                (3, 4, None),
                (4, 5, None),
                (5, 6, None),
            ]
        );
    }

    #[test]
    fn return_closes_the_branch() {
        let source = indoc! {r#"
            func f(_ x: Int) -> Int {
                if x > 0 {
                    return x
                }
                return 0
            }
        "#};
        let graph = CfgBuilder::new().build(source, None).unwrap();

        assert_eq!(
            nodes_of(&graph),
            vec![
                ActivityNode::Initial,
                ActivityNode::Decision("x > 0".into()),
                ActivityNode::Action("return x".into()),
                ActivityNode::Final,
                ActivityNode::Merge,
                ActivityNode::Action("return 0".into()),
                ActivityNode::Final,
            ]
        );
        assert_eq!(
            edges_of(&graph),
            vec![
                (0, 1, None),
                (1, 2, Some(EdgeLabel::Yes)),
                (2, 3, None),
                (1, 4, Some(EdgeLabel::No)),
                (4, 5, None),
                (5, 6, None),
            ]
        );
    }

    #[test]
    fn classifier_chain_is_a_decision_cascade() {
        let source = indoc! {r#"
            func classify(_ x: Int) -> String {
                if x < 0 { return "neg" }
                else if x == 0 { return "zero" }
                else if x < 10 { return "small" }
                else if x < 100 { return "mid" }
                else { return "big" }
            }
        "#};
        let graph = CfgBuilder::new().build(source, None).unwrap();
        let nodes = nodes_of(&graph);

        let decisions: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                ActivityNode::Decision(cond) => Some(cond.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(decisions, vec!["x < 0", "x == 0", "x < 10", "x < 100"]);

        let actions: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                ActivityNode::Action(label) => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            actions,
            vec![
                "return \"neg\"",
                "return \"zero\"",
                "return \"small\"",
                "return \"mid\"",
                "return \"big\"",
            ]
        );

        // every branch returns, so there is a Final per action and no merges
        let finals = nodes.iter().filter(|n| **n == ActivityNode::Final).count();
        assert_eq!(finals, 5);
        assert!(!nodes.contains(&ActivityNode::Merge));

        // each decision forks with labeled yes/no edges
        for (i, node) in graph.nodes() {
            if matches!(node, ActivityNode::Decision(_)) {
                let labels: Vec<_> = graph
                    .edges()
                    .filter(|(from, _, _)| *from == i)
                    .map(|(_, _, label)| label)
                    .collect();
                assert_eq!(labels, vec![Some(EdgeLabel::Yes), Some(EdgeLabel::No)]);
            }
        }
    }

    #[test]
    fn selects_function_by_name() {
        let source = indoc! {r#"
            func first() {
                a()
            }

            func second() {
                b()
            }
        "#};
        let graph = CfgBuilder::new().build(source, Some("second")).unwrap();
        assert!(nodes_of(&graph).contains(&ActivityNode::Action("b()".into())));

        let err = CfgBuilder::new().build(source, Some("third")).unwrap_err();
        assert!(matches!(err, Error::MissingNamedFunction(name) if name == "third"));
    }

    #[test]
    fn source_without_functions_is_an_error() {
        let err = CfgBuilder::new().build("let x = 1\n", None).unwrap_err();
        assert!(matches!(err, Error::MissingFunction));
    }

    #[test]
    fn long_labels_are_shortened() {
        let builder = CfgBuilder::new().with_max_label_length(10);
        let label = builder.shorten("let value = somewhatLongCall(a, b, c)");
        assert_eq!(label.chars().count(), 10);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn shorten_collapses_whitespace() {
        let builder = CfgBuilder::new();
        assert_eq!(builder.shorten("let  x =\n    1"), "let x = 1");
    }

    #[test]
    fn return_detection_requires_the_keyword() {
        assert!(is_return("return 0"));
        assert!(is_return("  return"));
        assert!(is_return("return \"big\""));
        assert!(!is_return("returnValue()"));
        assert!(!is_return("let returns = 1"));
    }
}
