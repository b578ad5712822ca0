use paddock::models::*;
use paddock::planner::{build_ancestry_tree, match_percentage, missing_traits, ComboRegistry, RegistryError};
use speculate2::speculate;

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn target_with(traits: &[&str], size: Size, gender: Gender) -> TargetProfile {
    TargetProfile {
        name: "Dream Horse".to_string(),
        size,
        gender,
        traits: strings(traits),
        body_colors: Default::default(),
    }
}

fn candidate_with(traits: &[(&str, bool)], size: Size, gender: Gender) -> Candidate {
    Candidate {
        name: "Entry".to_string(),
        size,
        gender,
        traits: traits.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
        body_colors: Default::default(),
    }
}

/// The combination-node child of a color node, by position.
fn combo_child(node: &AncestryNode, index: usize) -> &AncestryNode {
    &node.children()[index]
}

speculate! {
    describe "match_percentage" {
        it "scores the half-matching candidate at exactly 50" {
            // traits: 1 of 2, size matches, gender does not: 2 of 4
            let target = target_with(&["Speed", "Color"], Size::Normal, Gender::Male);
            let candidate = candidate_with(
                &[("Speed", true), ("Color", false)],
                Size::Normal,
                Gender::Female,
            );

            let percent = match_percentage(&candidate, &target, &[]);
            assert_eq!(percent, 50.0);
        }

        it "scores 100 only when every comparison matches" {
            let mut target = target_with(&["Speed"], Size::Big, Gender::Female);
            target.body_colors.insert("Hoof".to_string(), "Slate".to_string());

            let mut candidate = candidate_with(&[("Speed", true)], Size::Big, Gender::Female);
            candidate.body_colors.insert("Hoof".to_string(), "Slate".to_string());

            assert_eq!(match_percentage(&candidate, &target, &["Hoof"]), 100.0);

            candidate.body_colors.insert("Hoof".to_string(), "Onyx".to_string());
            assert!(match_percentage(&candidate, &target, &["Hoof"]) < 100.0);
        }

        it "counts absent-vs-absent body colors as a match" {
            let target = target_with(&[], Size::Normal, Gender::Female);
            let candidate = candidate_with(&[], Size::Normal, Gender::Female);

            // neither side sets a Hoof color: 3 of 3
            assert_eq!(match_percentage(&candidate, &target, &["Hoof"]), 100.0);
        }

        it "counts a required color against an unset candidate part as a miss" {
            let mut target = target_with(&[], Size::Normal, Gender::Female);
            target.body_colors.insert("Hoof".to_string(), "Slate".to_string());
            let candidate = candidate_with(&[], Size::Normal, Gender::Female);

            // size + gender match, color does not: 2 of 3
            let percent = match_percentage(&candidate, &target, &["Hoof"]);
            assert!((percent - 200.0 / 3.0).abs() < 1e-9);
        }

        it "treats a missing trait entry as false" {
            let target = target_with(&["Speed", "Color"], Size::Normal, Gender::Female);
            let candidate = candidate_with(&[("Speed", true)], Size::Normal, Gender::Female);

            // 1 trait + size + gender of 4
            assert_eq!(match_percentage(&candidate, &target, &[]), 75.0);
        }

        it "stays within 0 and 100 for a fully mismatched candidate" {
            let target = target_with(&["Speed"], Size::Teeny, Gender::Male);
            let candidate = candidate_with(&[("Speed", false)], Size::Draft, Gender::Female);

            let percent = match_percentage(&candidate, &target, &BODY_PARTS);
            assert!((0.0..=100.0).contains(&percent));
        }
    }

    describe "missing_traits" {
        it "reports every target trait for an empty roster" {
            let target = target_with(&["Speed", "Color", "Temperament"], Size::Normal, Gender::Female);
            assert_eq!(
                missing_traits(&target, &[]),
                strings(&["Speed", "Color", "Temperament"])
            );
        }

        it "returns nothing when one candidate covers everything" {
            let target = target_with(&["Speed", "Color"], Size::Normal, Gender::Female);
            let all = candidate_with(&[("Speed", true), ("Color", true)], Size::Teeny, Gender::Male);
            let none = candidate_with(&[], Size::Normal, Gender::Female);

            assert!(missing_traits(&target, &[none, all]).is_empty());
        }

        it "preserves target order for partially covered traits" {
            let target = target_with(&["Speed", "Color", "Temperament"], Size::Normal, Gender::Female);
            let roster = [candidate_with(&[("Color", true)], Size::Normal, Gender::Female)];

            assert_eq!(
                missing_traits(&target, &roster),
                strings(&["Speed", "Temperament"])
            );
        }
    }

    describe "combo registry" {
        describe "upsert" {
            it "folds both parents into the stored results" {
                let mut registry = ComboRegistry::new();
                let fact = registry
                    .upsert("Red", "Blue", strings(&["Purple"]))
                    .expect("upsert failed");

                assert_eq!(fact.results, strings(&["Purple", "Red", "Blue"]));

                let producing_red = registry.facts_producing("Red");
                assert_eq!(producing_red.len(), 1);
                assert!(producing_red[0].produces("Red"));
            }

            it "keeps caller order and de-duplicates by first occurrence" {
                let mut registry = ComboRegistry::new();
                let fact = registry
                    .upsert("Red", "Blue", strings(&["Purple", "Red", "Purple", "Mauve"]))
                    .expect("upsert failed");

                assert_eq!(fact.results, strings(&["Purple", "Red", "Mauve", "Blue"]));
            }

            it "replaces the fact for a swapped parent pair" {
                let mut registry = ComboRegistry::new();
                registry.upsert("Red", "Blue", strings(&["Purple"])).expect("upsert failed");
                registry.upsert("Blue", "Red", strings(&["Mauve"])).expect("upsert failed");

                assert_eq!(registry.len(), 1);
                assert_eq!(
                    registry.facts()[0].results,
                    strings(&["Mauve", "Blue", "Red"])
                );
            }

            it "moves a replaced fact to the end" {
                let mut registry = ComboRegistry::new();
                registry.upsert("Red", "Blue", strings(&["Purple"])).expect("upsert failed");
                registry.upsert("White", "Black", strings(&["Gray"])).expect("upsert failed");
                registry.upsert("Blue", "Red", strings(&["Mauve"])).expect("upsert failed");

                assert_eq!(registry.len(), 2);
                assert!(registry.facts()[0].matches_pair("White", "Black"));
                assert!(registry.facts()[1].matches_pair("Red", "Blue"));
            }

            it "rejects empty parent names" {
                let mut registry = ComboRegistry::new();
                let result = registry.upsert("", "Blue", strings(&["Purple"]));
                assert_eq!(result.unwrap_err(), RegistryError::EmptyParent);
                assert!(registry.is_empty());
            }
        }

        describe "facts_producing" {
            it "returns matching facts in storage order" {
                let mut registry = ComboRegistry::new();
                registry.upsert("Red", "Blue", strings(&["Purple"])).expect("upsert failed");
                registry.upsert("Mauve", "White", strings(&["Purple"])).expect("upsert failed");
                registry.upsert("White", "Black", strings(&["Gray"])).expect("upsert failed");

                let facts = registry.facts_producing("Purple");
                assert_eq!(facts.len(), 2);
                assert_eq!(facts[0].parent1, "Red");
                assert_eq!(facts[1].parent1, "Mauve");
            }
        }
    }

    describe "ancestry trace" {
        it "builds the single-cross tree" {
            let registry = ComboRegistry::from_facts(vec![ColorFact {
                parent1: "Red".to_string(),
                parent2: "Blue".to_string(),
                results: strings(&["Purple"]),
            }]);

            let tree = build_ancestry_tree("Purple", &registry);
            assert_eq!(tree.text(), "Purple");
            assert_eq!(tree.children().len(), 1);

            let combo = combo_child(&tree, 0);
            assert_eq!(combo.text(), "Red + Blue");
            assert_eq!(combo.children().len(), 2);
            assert_eq!(combo.children()[0].text(), "Red");
            assert_eq!(combo.children()[1].text(), "Blue");
            assert!(combo.children()[0].children().is_empty());
            assert!(combo.children()[1].children().is_empty());
        }

        it "returns a bare leaf for a color with no facts" {
            let tree = build_ancestry_tree("Chestnut", &ComboRegistry::new());
            assert_eq!(tree.text(), "Chestnut");
            assert!(tree.children().is_empty());
        }

        it "keeps combination children in stored parent order, not alphabetical" {
            let registry = ComboRegistry::from_facts(vec![ColorFact {
                parent1: "Zinc".to_string(),
                parent2: "Amber".to_string(),
                results: strings(&["Bronze"]),
            }]);

            let tree = build_ancestry_tree("Bronze", &registry);
            let combo = combo_child(&tree, 0);
            assert_eq!(combo.children()[0].text(), "Zinc");
            assert_eq!(combo.children()[1].text(), "Amber");
        }

        it "cuts a self-referencing fact at the repeated color" {
            let mut registry = ComboRegistry::new();
            // parents fold into results, so Purple + White also produces Purple
            registry.upsert("Purple", "White", strings(&["Lilac"])).expect("upsert failed");

            let tree = build_ancestry_tree("Purple", &registry);
            let combo = combo_child(&tree, 0);
            assert_eq!(combo.children()[0].text(), "Purple");
            assert!(combo.children()[0].children().is_empty());
        }

        it "terminates on a two-color cycle with a leaf at the repeated color" {
            let registry = ComboRegistry::from_facts(vec![
                ColorFact {
                    parent1: "X".to_string(),
                    parent2: "Y".to_string(),
                    results: strings(&["X"]),
                },
                ColorFact {
                    parent1: "X".to_string(),
                    parent2: "Z".to_string(),
                    results: strings(&["Y"]),
                },
            ]);

            let tree = build_ancestry_tree("X", &registry);
            let combo = combo_child(&tree, 0);
            assert_eq!(combo.text(), "X + Y");
            // X recurs on its own path: leaf
            assert_eq!(combo.children()[0].text(), "X");
            assert!(combo.children()[0].children().is_empty());
            // Y expands through its own fact, where X is again a leaf
            let y_node = &combo.children()[1];
            assert_eq!(y_node.text(), "Y");
            let y_combo = combo_child(y_node, 0);
            assert_eq!(y_combo.text(), "X + Z");
            assert!(y_combo.children()[0].children().is_empty());
        }

        it "truncates a parent pair already expanded on the same path" {
            let mut registry = ComboRegistry::new();
            // Red + Blue yields Purple, and (implicitly) Red itself
            registry.upsert("Red", "Blue", strings(&["Purple"])).expect("upsert failed");

            let tree = build_ancestry_tree("Purple", &registry);
            let combo = combo_child(&tree, 0);
            let red_node = &combo.children()[0];
            assert_eq!(red_node.text(), "Red");

            // Red's only fact is the pair already shown above it: childless combo node
            let truncated = combo_child(red_node, 0);
            assert_eq!(truncated.text(), "Red + Blue");
            assert!(truncated.children().is_empty());
        }

        it "expands the same color independently in sibling branches" {
            let registry = ComboRegistry::from_facts(vec![
                ColorFact {
                    parent1: "Red".to_string(),
                    parent2: "Blue".to_string(),
                    results: strings(&["Purple"]),
                },
                ColorFact {
                    parent1: "Red".to_string(),
                    parent2: "Green".to_string(),
                    results: strings(&["Purple"]),
                },
                ColorFact {
                    parent1: "White".to_string(),
                    parent2: "Black".to_string(),
                    results: strings(&["Red"]),
                },
            ]);

            let tree = build_ancestry_tree("Purple", &registry);
            assert_eq!(tree.children().len(), 2);
            // Red is not its own ancestor here; both sibling branches must expand it
            for index in 0..2 {
                let red_node = &combo_child(&tree, index).children()[0];
                assert_eq!(red_node.text(), "Red");
                assert_eq!(red_node.children().len(), 1);
                assert_eq!(combo_child(red_node, 0).text(), "White + Black");
            }
        }

        it "matches the true depth on shallow acyclic data" {
            let registry = ComboRegistry::from_facts(vec![
                ColorFact {
                    parent1: "B".to_string(),
                    parent2: "C".to_string(),
                    results: strings(&["A"]),
                },
                ColorFact {
                    parent1: "D".to_string(),
                    parent2: "E".to_string(),
                    results: strings(&["B"]),
                },
            ]);

            // A -> combo -> B -> combo -> D: five nodes on the longest chain
            let tree = build_ancestry_tree("A", &registry);
            assert_eq!(tree.depth(), 5);
        }

        it "stops a deep chain at the depth ceiling" {
            // C0 produced by (C1, F0), C1 by (C2, F1), ... C12 by (C13, F12)
            let facts = (0..13)
                .map(|i| ColorFact {
                    parent1: format!("C{}", i + 1),
                    parent2: format!("F{}", i),
                    results: vec![format!("C{}", i)],
                })
                .collect();
            let registry = ComboRegistry::from_facts(facts);

            let tree = build_ancestry_tree("C0", &registry);
            // colors past recursion depth 10 come back as leaves: C11 ends the
            // chain at node depth 23 even though it has a fact of its own
            assert_eq!(tree.depth(), 23);
        }
    }

    describe "reconcile_traits" {
        it "adds new target traits unset and drops removed ones" {
            let target = target_with(&["Speed", "Grace"], Size::Normal, Gender::Female);
            let roster = [candidate_with(
                &[("Speed", true), ("Temperament", true)],
                Size::Normal,
                Gender::Female,
            )];

            let reconciled = reconcile_traits(&target, &roster);
            let traits = &reconciled[0].traits;
            assert_eq!(traits.len(), 2);
            assert_eq!(traits.get("Speed"), Some(&true));
            assert_eq!(traits.get("Grace"), Some(&false));
            assert!(!traits.contains_key("Temperament"));
        }
    }

    describe "target normalize" {
        it "trims, drops empties, and keeps the first occurrence" {
            let mut target = target_with(&[" Speed ", "", "Color", "Speed"], Size::Normal, Gender::Female);
            target.normalize();
            assert_eq!(target.traits, strings(&["Speed", "Color"]));
        }
    }
}
