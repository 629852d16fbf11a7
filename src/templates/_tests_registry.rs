#[cfg(test)]
mod tests_registry {
    use super::super::registry::*;
    use super::super::template_data;
    use crate::geometry::orient_facets;
    use crate::templates::StructureKind;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::collections::HashSet;

    #[test]
    fn test_seven_blueprints_in_kind_order() {
        let all = blueprints();
        assert_eq!(all.len(), 7);
        for (blueprint, kind) in all.iter().zip(StructureKind::ALL) {
            assert_eq!(blueprint.kind, kind);
        }
    }

    #[test]
    fn test_blueprint_shapes() {
        // (neighbours, facets) per structure family
        let expected = [(6, 8), (12, 20), (12, 20), (12, 20), (14, 24), (16, 28), (16, 28)];
        for (blueprint, (nbrs, facets)) in blueprints().iter().zip(expected) {
            assert_eq!(blueprint.num_nbrs(), nbrs, "{}", blueprint.kind);
            for list in &blueprint.facet_lists {
                assert_eq!(list.len(), facets, "{}", blueprint.kind);
            }
            assert_eq!(blueprint.colouring.len(), nbrs, "{}", blueprint.kind);
        }
    }

    #[test]
    fn test_centre_atom_leads_every_point_set() {
        for blueprint in blueprints() {
            let points = blueprint.points_vec();
            assert_relative_eq!(points[0].norm(), 0.0);
            for p in &points[1..] {
                assert!(p.norm() > 0.1, "{}: neighbour at origin", blueprint.kind);
            }
        }
    }

    #[test]
    fn test_single_shell_structures_are_equidistant() {
        for blueprint in blueprints().iter().take(4) {
            // sc, fcc, hcp, ico neighbours all sit at unit distance
            for p in &blueprint.points_vec()[1..] {
                assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_diamond_colourings_mark_nearest_shell() {
        for blueprint in blueprints().iter().skip(5) {
            assert_eq!(&blueprint.colouring[..4], &[1, 1, 1, 1], "{}", blueprint.kind);
            assert!(blueprint.colouring[4..].iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn test_bcc_carries_two_equivalent_facet_lists() {
        let bcc = &blueprints()[4];
        assert_eq!(bcc.facet_lists.len(), 2);
        assert_ne!(
            template_data::FACETS_BCC.to_vec(),
            template_data::FACETS_BCC_ALT.to_vec()
        );
        // A relabelling by a shell symmetry maps the hull onto itself, so the
        // two lists must hold the same facets, only in a different order.
        let primary: HashSet<[u8; 3]> = template_data::FACETS_BCC.iter().copied().collect();
        let alt: HashSet<[u8; 3]> = template_data::FACETS_BCC_ALT.iter().copied().collect();
        assert_eq!(primary, alt);
    }

    #[test]
    fn test_every_facet_list_is_a_hull_of_its_shell() {
        // Each facet of each list, primary and alternate alike, must admit an
        // outward winding over the structure's actual neighbour points; a
        // degenerate facet here would abort initialization for every caller.
        for blueprint in blueprints() {
            let points = blueprint.points_vec();
            for (index, list) in blueprint.facet_lists.iter().enumerate() {
                let mut facets = list.to_vec();
                orient_facets(&points[1..], &mut facets, &Vector3::zeros()).unwrap_or_else(|e| {
                    panic!("{} facet list {}: {:?}", blueprint.kind, index, e)
                });
            }
        }
    }

    #[test]
    fn test_diamond_inner_shell_is_nearest() {
        for blueprint in blueprints().iter().skip(5) {
            let points = blueprint.points_vec();
            let inner: Vec<f64> = points[1..5].iter().map(|p| p.norm()).collect();
            let outer: Vec<f64> = points[5..].iter().map(|p| p.norm()).collect();
            let max_inner = inner.iter().cloned().fold(0.0, f64::max);
            let min_outer = outer.iter().cloned().fold(f64::INFINITY, f64::min);
            assert!(
                max_inner < min_outer,
                "{}: bond shells out of order",
                blueprint.kind
            );
        }
    }
}
