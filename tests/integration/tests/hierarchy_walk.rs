//! End-to-end tests for walking `ramus_tree` trees with `ramus_visit`.
//!
//! These tests drive the public API of both crates together: tree
//! construction, directive-controlled traversal, payload adaptation,
//! custom fan-out, sorting, and serialization.

use pretty_assertions::assert_eq;
use ramus_tree::{NodeRef, Tree};
use ramus_visit::{
    ChildrenProvider, VisitDirective, VisitError, VisitorCallback, walk_below, walk_tree,
    walk_tree_data, walk_tree_data_with,
};

/// Records every hook invocation, answering directive hooks from a script
/// keyed by node label.
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
    before: Vec<(&'static str, VisitDirective)>,
    after: Vec<(&'static str, VisitDirective)>,
}

impl EventLog {
    fn scripted(
        before: Vec<(&'static str, VisitDirective)>,
        after: Vec<(&'static str, VisitDirective)>,
    ) -> Self {
        Self {
            events: Vec::new(),
            before,
            after,
        }
    }

    fn lookup(script: &[(&'static str, VisitDirective)], label: &str) -> VisitDirective {
        script
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, directive)| *directive)
            .unwrap_or_default()
    }
}

impl<'t> VisitorCallback<NodeRef<'t, &'static str>> for EventLog {
    fn begin(&mut self) {
        self.events.push("begin".into());
    }

    fn on_level_down(&mut self) {
        self.events.push("levelDown".into());
    }

    fn on_level_up(&mut self) {
        self.events.push("levelUp".into());
    }

    fn on_before_children(
        &mut self,
        node: &NodeRef<'t, &'static str>,
    ) -> Result<VisitDirective, VisitError> {
        self.events.push(format!("before({})", node.data()));
        Ok(Self::lookup(&self.before, node.data()))
    }

    fn on_after_children(
        &mut self,
        node: &NodeRef<'t, &'static str>,
    ) -> Result<VisitDirective, VisitError> {
        self.events.push(format!("after({})", node.data()));
        Ok(Self::lookup(&self.after, node.data()))
    }

    fn end(&mut self) {
        self.events.push("end".into());
    }
}

/// R -> (A -> A1, B)
fn sample_tree() -> Tree<&'static str> {
    let mut tree = Tree::new("R");
    let a = tree.add_child(tree.root_id(), "A");
    tree.add_child(a, "A1");
    tree.add_child(tree.root_id(), "B");
    tree
}

mod hook_sequences {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_traversal_order() {
        let tree = sample_tree();
        let mut log = EventLog::default();
        walk_tree(&tree, &mut log).unwrap();

        assert_eq!(
            log.events,
            [
                "begin",
                "before(R)",
                "levelDown",
                "before(A)",
                "levelDown",
                "before(A1)",
                "after(A1)",
                "levelUp",
                "after(A)",
                "before(B)",
                "after(B)",
                "levelUp",
                "after(R)",
                "end"
            ]
        );
    }

    #[test]
    fn stop_at_root_visits_nothing_else() {
        let tree = sample_tree();
        let mut log = EventLog::scripted(vec![("R", VisitDirective::Stop)], Vec::new());
        walk_tree(&tree, &mut log).unwrap();

        assert_eq!(log.events, ["begin", "before(R)", "end"]);
    }

    #[test]
    fn skip_children_keeps_the_after_hook() {
        let tree = sample_tree();
        let mut log = EventLog::scripted(vec![("A", VisitDirective::SkipChildren)], Vec::new());
        walk_tree(&tree, &mut log).unwrap();

        assert_eq!(
            log.events,
            [
                "begin",
                "before(R)",
                "levelDown",
                "before(A)",
                "after(A)",
                "before(B)",
                "after(B)",
                "levelUp",
                "after(R)",
                "end"
            ]
        );
    }

    #[test]
    fn skip_siblings_cuts_off_the_rest_of_the_level() {
        let mut tree = Tree::new("R");
        for label in ["C1", "C2", "C3", "C4"] {
            tree.add_child(tree.root_id(), label);
        }

        let mut log = EventLog::scripted(Vec::new(), vec![("C2", VisitDirective::SkipSiblings)]);
        walk_tree(&tree, &mut log).unwrap();

        assert_eq!(
            log.events,
            [
                "begin",
                "before(R)",
                "levelDown",
                "before(C1)",
                "after(C1)",
                "before(C2)",
                "after(C2)",
                "levelUp",
                "after(R)",
                "end"
            ]
        );
    }

    #[test]
    fn walk_below_treats_the_root_as_invisible() {
        let tree = sample_tree();
        let mut log = EventLog::default();
        walk_below(&tree.root(), &mut log).unwrap();

        assert_eq!(
            log.events,
            [
                "begin",
                "before(A)",
                "levelDown",
                "before(A1)",
                "after(A1)",
                "levelUp",
                "after(A)",
                "before(B)",
                "after(B)",
                "end"
            ]
        );
    }
}

mod data_walks {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct DataLog(Vec<String>);

    impl VisitorCallback<&'static str> for DataLog {
        fn begin(&mut self) {
            self.0.push("begin".into());
        }

        fn on_level_down(&mut self) {
            self.0.push("levelDown".into());
        }

        fn on_level_up(&mut self) {
            self.0.push("levelUp".into());
        }

        fn on_before_children(
            &mut self,
            data: &&'static str,
        ) -> Result<VisitDirective, VisitError> {
            self.0.push(format!("before({data})"));
            Ok(VisitDirective::Continue)
        }

        fn on_after_children(
            &mut self,
            data: &&'static str,
        ) -> Result<VisitDirective, VisitError> {
            self.0.push(format!("after({data})"));
            Ok(VisitDirective::Continue)
        }

        fn end(&mut self) {
            self.0.push("end".into());
        }
    }

    #[test]
    fn data_walk_produces_the_same_sequence_as_the_node_walk() {
        let tree = sample_tree();

        let mut node_log = EventLog::default();
        walk_tree(&tree, &mut node_log).unwrap();

        let mut data_log = DataLog::default();
        walk_tree_data(&tree, &mut data_log).unwrap();

        assert_eq!(data_log.0, node_log.events);
    }

    #[test]
    fn data_callback_state_survives_the_walk() {
        let mut tree = Tree::new(1u64);
        let left = tree.add_child(tree.root_id(), 10);
        tree.add_child(left, 100);
        tree.add_child(tree.root_id(), 1000);

        #[derive(Default)]
        struct Sum(u64);

        impl VisitorCallback<u64> for Sum {
            fn on_before_children(&mut self, data: &u64) -> Result<VisitDirective, VisitError> {
                self.0 += *data;
                Ok(VisitDirective::Continue)
            }
        }

        let mut sum = Sum::default();
        walk_tree_data(&tree, &mut sum).unwrap();
        assert_eq!(sum.0, 1111);
    }
}

mod providers {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Reverses each node's child order.
    struct Reversed;

    impl<'t> ChildrenProvider<NodeRef<'t, &'static str>> for Reversed {
        fn children(
            &self,
            node: &NodeRef<'t, &'static str>,
        ) -> Result<Vec<NodeRef<'t, &'static str>>, VisitError> {
            let mut children: Vec<_> = node.children().collect();
            children.reverse();
            Ok(children)
        }
    }

    /// Refuses to enumerate any node labeled "A".
    struct RefusesA;

    impl<'t> ChildrenProvider<NodeRef<'t, &'static str>> for RefusesA {
        fn children(
            &self,
            node: &NodeRef<'t, &'static str>,
        ) -> Result<Vec<NodeRef<'t, &'static str>>, VisitError> {
            if *node.data() == "A" {
                return Err(VisitError::unsupported_node("A"));
            }
            Ok(node.children().collect())
        }
    }

    #[derive(Default)]
    struct BeforeOrder(Vec<String>);

    impl VisitorCallback<&'static str> for BeforeOrder {
        fn on_before_children(
            &mut self,
            data: &&'static str,
        ) -> Result<VisitDirective, VisitError> {
            self.0.push(data.to_string());
            Ok(VisitDirective::Continue)
        }
    }

    #[test]
    fn custom_provider_reorders_the_walk() {
        let tree = sample_tree();
        let mut order = BeforeOrder::default();
        walk_tree_data_with(&tree, &Reversed, &mut order).unwrap();

        assert_eq!(order.0, ["R", "B", "A", "A1"]);
    }

    #[test]
    fn provider_failure_surfaces_and_end_is_not_called() {
        let tree = sample_tree();
        let mut log = EventLog::default();
        let err = ramus_visit::walk_tree_with(&tree, &RefusesA, &mut log).unwrap_err();

        assert_eq!(err.to_string(), "unsupported node: A");
        assert_eq!(
            log.events,
            ["begin", "before(R)", "levelDown", "before(A)"]
        );
    }
}

mod tree_shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sorting_then_walking_observes_the_new_order() {
        let mut tree = Tree::new("root");
        let m = tree.add_child(tree.root_id(), "m");
        tree.add_child(tree.root_id(), "d");
        tree.add_child(m, "z");
        tree.add_child(m, "a");
        tree.sort_all_children();

        #[derive(Default)]
        struct Labels(Vec<&'static str>);

        impl VisitorCallback<&'static str> for Labels {
            fn on_before_children(
                &mut self,
                data: &&'static str,
            ) -> Result<VisitDirective, VisitError> {
                self.0.push(*data);
                Ok(VisitDirective::Continue)
            }
        }

        let mut labels = Labels::default();
        walk_tree_data(&tree, &mut labels).unwrap();
        assert_eq!(labels.0, ["root", "d", "m", "a", "z"]);
    }

    #[test]
    fn trees_serialize_as_nested_json() {
        let tree = sample_tree();
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": "R",
                "children": [
                    {"data": "A", "children": [{"data": "A1"}]},
                    {"data": "B"},
                ]
            })
        );
    }
}
