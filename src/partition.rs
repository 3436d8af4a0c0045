/// One contiguous run of sibling nodes: a boundary node and everything
/// after it up to the next boundary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Section<N> {
    pub heading: N,
    pub body: Vec<N>,
}

/// Groups sibling nodes into sections, each starting at a node matched by
/// `boundary` and ending just before the next match or end of input.
///
/// Nodes before the first boundary match are discarded; the caller is
/// expected to have isolated the relevant subtree already. Sections are
/// contiguous, non-overlapping and keep input order.
///
/// Used twice per page: with the group-heading predicate to split the page
/// into groups, then per group with the entity-heading predicate.
pub fn partition<N, P>(nodes: impl IntoIterator<Item = N>, boundary: P) -> Vec<Section<N>>
where
    P: Fn(&N) -> bool,
{
    let mut sections: Vec<Section<N>> = Vec::new();

    for node in nodes {
        if boundary(&node) {
            sections.push(Section {
                heading: node,
                body: Vec::new(),
            });
        } else if let Some(current) = sections.last_mut() {
            current.body.push(node);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heading(node: &&str) -> bool {
        node.starts_with('h')
    }

    #[test]
    fn splits_on_boundaries() {
        let nodes = ["h1", "a", "b", "h2", "c", "h3"];
        let sections = partition(nodes, is_heading);
        assert_eq!(
            sections,
            vec![
                Section {
                    heading: "h1",
                    body: vec!["a", "b"],
                },
                Section {
                    heading: "h2",
                    body: vec!["c"],
                },
                Section {
                    heading: "h3",
                    body: vec![],
                },
            ]
        );
    }

    #[test]
    fn leading_nodes_discarded() {
        let sections = partition(["intro", "also intro", "h1", "a"], is_heading);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "h1");
        assert_eq!(sections[0].body, vec!["a"]);
    }

    #[test]
    fn no_boundary_yields_nothing() {
        assert!(partition(["a", "b"], is_heading).is_empty());
    }

    #[test]
    fn covers_every_node_from_first_boundary() {
        let nodes = ["x", "h1", "a", "h2", "b", "c"];
        let sections = partition(nodes, is_heading);
        let rebuilt: Vec<&str> = sections
            .into_iter()
            .flat_map(|section| std::iter::once(section.heading).chain(section.body))
            .collect();
        assert_eq!(rebuilt, nodes[1..].to_vec());
    }
}
