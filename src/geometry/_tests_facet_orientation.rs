#[cfg(test)]
mod tests_facet_orientation {
    use super::super::facet_orientation::*;
    use crate::error::TemplateError;
    use nalgebra::Vector3;

    /// Octahedron vertices: the six simple-cubic neighbour directions.
    fn octahedron() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ]
    }

    #[test]
    fn test_outward_winding_is_preserved() {
        let points = octahedron();
        let origin = Vector3::zeros();
        // (+x, +y, +z) wound counter-clockwise as seen from outside
        let mut facet = [0u8, 2, 4];
        assert!(facet_normal_alignment(&points, &facet, &origin) > 0.0);

        orient_facet(&points, &mut facet, &origin).unwrap();
        assert_eq!(facet, [0, 2, 4], "outward facet must not be modified");
    }

    #[test]
    fn test_inward_winding_is_flipped() {
        let points = octahedron();
        let origin = Vector3::zeros();
        let mut facet = [0u8, 4, 2];
        assert!(facet_normal_alignment(&points, &facet, &origin) < 0.0);

        orient_facet(&points, &mut facet, &origin).unwrap();
        assert_eq!(facet, [0, 2, 4], "second and third vertex must be swapped");
        assert!(facet_normal_alignment(&points, &facet, &origin) > 0.0);
    }

    #[test]
    fn test_orientation_is_idempotent() {
        let points = octahedron();
        let origin = Vector3::zeros();
        let mut facet = [1u8, 3, 5];
        orient_facet(&points, &mut facet, &origin).unwrap();
        let once = facet;
        orient_facet(&points, &mut facet, &origin).unwrap();
        assert_eq!(facet, once);
    }

    #[test]
    fn test_all_octahedron_facets_outward_after_normalization() {
        let points = octahedron();
        let origin = Vector3::zeros();
        let mut facets = [
            [0u8, 2, 4],
            [0, 2, 5],
            [0, 3, 4],
            [0, 3, 5],
            [1, 2, 4],
            [1, 2, 5],
            [1, 3, 4],
            [1, 3, 5],
        ];
        orient_facets(&points, &mut facets, &origin).unwrap();
        for facet in &facets {
            assert!(
                facet_normal_alignment(&points, facet, &origin) > 0.0,
                "facet {:?} is not outward-facing",
                facet
            );
        }
    }

    #[test]
    fn test_facets_are_order_insensitive() {
        let points = octahedron();
        let origin = Vector3::zeros();
        let mut forward = [[0u8, 4, 2], [1, 2, 4], [0, 3, 4]];
        let mut reversed = forward;
        reversed.reverse();

        orient_facets(&points, &mut forward, &origin).unwrap();
        orient_facets(&points, &mut reversed, &origin).unwrap();
        reversed.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_out_of_range_vertex_is_configuration_error() {
        let points = octahedron();
        let origin = Vector3::zeros();
        let mut facet = [0u8, 2, 9];
        let err = orient_facet(&points, &mut facet, &origin).unwrap_err();
        assert_eq!(
            err,
            TemplateError::VertexOutOfRange {
                vertex: 9,
                num_nbrs: 6
            }
        );
    }

    #[test]
    fn test_zero_area_facet_is_configuration_error() {
        // Three collinear points along x
        let points = vec![
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(2.0, 1.0, 0.0),
            Vector3::new(3.0, 1.0, 0.0),
        ];
        let origin = Vector3::zeros();
        let mut facet = [0u8, 1, 2];
        let err = orient_facet(&points, &mut facet, &origin).unwrap_err();
        assert_eq!(err, TemplateError::DegenerateFacet(0, 1, 2));
    }

    #[test]
    fn test_facet_plane_through_origin_is_configuration_error() {
        let points = octahedron();
        let origin = Vector3::zeros();
        // +x, -x and +y are coplanar with the origin
        let mut facet = [0u8, 1, 2];
        let err = orient_facet(&points, &mut facet, &origin).unwrap_err();
        assert_eq!(err, TemplateError::DegenerateFacet(0, 1, 2));
    }
}
