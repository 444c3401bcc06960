//! Property tests for merge planning and substitution.

use proptest::prelude::*;

use semclust_core::models::{ClusteredGroup, Label, Triple};
use semclust_merge::{apply_assignment, plan_merge};

fn groups_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-1.0f64..1.0, 0..6), 1..6)
}

fn build(ratios: &[Vec<f64>]) -> Vec<ClusteredGroup> {
    ratios
        .iter()
        .enumerate()
        .map(|(g, rs)| {
            let mut group = ClusteredGroup::new(Label::cluster(g));
            for (i, &r) in rs.iter().enumerate() {
                group.push(format!("g{g}n{i}"), r);
            }
            group
        })
        .collect()
}

proptest! {
    #[test]
    fn mergeable_groups_meet_threshold(ratios in groups_strategy(), threshold in -1.0f64..1.0) {
        let groups = build(&ratios);
        let plan = plan_merge(&groups, threshold);
        for (idx, group) in groups.iter().enumerate() {
            let merged = plan.indices.contains(&idx);
            match group.mean_ratio() {
                Some(mean) => prop_assert_eq!(merged, mean >= threshold),
                None => prop_assert!(!merged),
            }
        }
        prop_assert_eq!(plan.indices.len(), plan.representatives.len());
    }

    #[test]
    fn representatives_belong_to_their_group(ratios in groups_strategy()) {
        let groups = build(&ratios);
        let plan = plan_merge(&groups, -1.0);
        for (idx, rep) in plan.indices.iter().zip(&plan.representatives) {
            prop_assert!(groups[*idx].nodes.contains(rep));
        }
        for (node, rep) in &plan.assignments {
            let owner = groups.iter().position(|g| g.nodes.contains(node)).unwrap();
            prop_assert!(groups[owner].nodes.contains(rep));
        }
    }

    #[test]
    fn substitution_rewrites_at_most_one_side(ratios in groups_strategy(), picks in prop::collection::vec((0usize..6, 0usize..6), 0..10)) {
        let groups = build(&ratios);
        let plan = plan_merge(&groups, -1.0);
        let names: Vec<String> = groups.iter().flat_map(|g| g.nodes.clone()).chain(["outside".to_string()]).collect();
        let edges: Vec<Triple> = picks
            .iter()
            .map(|(s, o)| Triple::new(names[s % names.len()].clone(), "r", names[o % names.len()].clone()))
            .collect();

        let out = apply_assignment(&edges, &plan.assignments);
        prop_assert_eq!(out.len(), edges.len());
        for (before, after) in edges.iter().zip(&out) {
            let subject_changed = before.subject != after.subject;
            let object_changed = before.object != after.object;
            prop_assert!(!(subject_changed && object_changed));
            if plan.assignments.contains_key(&before.subject) {
                prop_assert_eq!(&before.object, &after.object);
            }
        }
    }
}
