// Fixed reference template data
//
// For each of the seven reference structures: the template point set (centre
// atom at index 0, neighbours after it, nearest-neighbour distances scaled to
// the conventional cell) and the facet list of the triangulated convex hull
// of the radially projected neighbour shell. Facet indices refer into the
// neighbour list; winding is unspecified here and normalized at
// initialization. The diamond templates list the four nearest neighbours
// first, then each one's three second-shell partners in turn.

// SC: 6 neighbours, 8 facets, max degree 4
pub const POINTS_SC: [[f64; 3]; 7] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];
pub const FACETS_SC: [[u8; 3]; 8] = [
    [1, 3, 5],
    [1, 3, 4],
    [1, 2, 5],
    [1, 2, 4],
    [0, 3, 5],
    [0, 3, 4],
    [0, 2, 5],
    [0, 2, 4],
];

// FCC: 12 neighbours, 20 facets, max degree 6
pub const POINTS_FCC: [[f64; 3]; 13] = [
    [0.0, 0.0, 0.0],
    [0.707106781187, 0.707106781187, 0.0],
    [-0.707106781187, 0.707106781187, 0.0],
    [0.707106781187, -0.707106781187, 0.0],
    [-0.707106781187, -0.707106781187, 0.0],
    [0.707106781187, 0.0, 0.707106781187],
    [-0.707106781187, 0.0, 0.707106781187],
    [0.707106781187, 0.0, -0.707106781187],
    [-0.707106781187, 0.0, -0.707106781187],
    [0.0, 0.707106781187, 0.707106781187],
    [0.0, -0.707106781187, 0.707106781187],
    [0.0, 0.707106781187, -0.707106781187],
    [0.0, -0.707106781187, -0.707106781187],
];
pub const FACETS_FCC: [[u8; 3]; 20] = [
    [1, 3, 7],
    [1, 3, 5],
    [3, 7, 11],
    [3, 5, 9],
    [1, 7, 10],
    [1, 5, 8],
    [2, 3, 9],
    [2, 3, 11],
    [6, 7, 11],
    [6, 7, 10],
    [4, 5, 8],
    [4, 5, 9],
    [0, 1, 10],
    [0, 1, 8],
    [2, 6, 11],
    [2, 4, 9],
    [0, 6, 10],
    [0, 4, 8],
    [0, 2, 4],
    [0, 2, 6],
];

// HCP: 12 neighbours, 20 facets, max degree 6
pub const POINTS_HCP: [[f64; 3]; 13] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.866025403784, 0.0],
    [-0.5, 0.866025403784, 0.0],
    [-1.0, 0.0, 0.0],
    [-0.5, -0.866025403784, 0.0],
    [0.5, -0.866025403784, 0.0],
    [0.5, 0.288675134595, 0.816496580928],
    [-0.5, 0.288675134595, 0.816496580928],
    [-0.0, -0.57735026919, 0.816496580928],
    [0.5, 0.288675134595, -0.816496580928],
    [-0.5, 0.288675134595, -0.816496580928],
    [-0.0, -0.57735026919, -0.816496580928],
];
pub const FACETS_HCP: [[u8; 3]; 20] = [
    [2, 3, 10],
    [2, 3, 7],
    [3, 10, 11],
    [3, 4, 11],
    [3, 4, 8],
    [3, 7, 8],
    [4, 5, 11],
    [4, 5, 8],
    [9, 10, 11],
    [6, 7, 8],
    [1, 9, 10],
    [1, 2, 10],
    [1, 2, 7],
    [1, 6, 7],
    [0, 5, 11],
    [0, 9, 11],
    [0, 6, 8],
    [0, 5, 8],
    [0, 1, 9],
    [0, 1, 6],
];

// ICO: 12 neighbours, 20 facets, max degree 5
pub const POINTS_ICO: [[f64; 3]; 13] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.525731112119, 0.850650808352],
    [0.525731112119, 0.850650808352, 0.0],
    [0.850650808352, 0.0, 0.525731112119],
    [0.0, 0.525731112119, -0.850650808352],
    [0.525731112119, -0.850650808352, 0.0],
    [-0.850650808352, 0.0, 0.525731112119],
    [0.0, -0.525731112119, 0.850650808352],
    [-0.525731112119, 0.850650808352, 0.0],
    [0.850650808352, 0.0, -0.525731112119],
    [0.0, -0.525731112119, -0.850650808352],
    [-0.525731112119, -0.850650808352, 0.0],
    [-0.850650808352, 0.0, -0.525731112119],
];
pub const FACETS_ICO: [[u8; 3]; 20] = [
    [5, 10, 11],
    [5, 7, 11],
    [9, 10, 11],
    [5, 6, 10],
    [3, 7, 11],
    [0, 5, 7],
    [3, 9, 11],
    [0, 5, 6],
    [4, 9, 10],
    [4, 6, 10],
    [1, 3, 7],
    [0, 1, 7],
    [3, 8, 9],
    [0, 2, 6],
    [4, 8, 9],
    [2, 4, 6],
    [1, 3, 8],
    [0, 1, 2],
    [2, 4, 8],
    [1, 2, 8],
];

// BCC: 14 neighbours, 24 facets, max degree 6
pub const POINTS_BCC: [[f64; 3]; 15] = [
    [0.0, 0.0, 0.0],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];
pub const FACETS_BCC: [[u8; 3]; 24] = [
    [6, 7, 9],
    [5, 7, 9],
    [4, 6, 9],
    [4, 5, 9],
    [6, 7, 11],
    [5, 7, 13],
    [4, 6, 12],
    [4, 5, 10],
    [3, 7, 11],
    [2, 6, 11],
    [3, 7, 13],
    [2, 6, 12],
    [1, 5, 13],
    [0, 4, 12],
    [1, 5, 10],
    [0, 4, 10],
    [2, 3, 11],
    [1, 3, 13],
    [0, 2, 12],
    [0, 1, 10],
    [2, 3, 8],
    [1, 3, 8],
    [0, 2, 8],
    [0, 1, 8],
];

// DCUB: 16 neighbours, 28 facets, max degree 7
pub const POINTS_DCUB: [[f64; 3]; 17] = [
    [0.0, 0.0, 0.0],
    [0.25, 0.25, 0.25],
    [0.25, -0.25, -0.25],
    [-0.25, 0.25, -0.25],
    [-0.25, -0.25, 0.25],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
    [0.0, -0.5, -0.5],
    [0.5, -0.5, 0.0],
    [0.5, 0.0, -0.5],
    [-0.5, 0.0, -0.5],
    [-0.5, 0.5, 0.0],
    [0.0, 0.5, -0.5],
    [-0.5, -0.5, 0.0],
    [-0.5, 0.0, 0.5],
    [0.0, -0.5, 0.5],
];
pub const FACETS_DCUB: [[u8; 3]; 28] = [
    [10, 13, 14],
    [10, 11, 14],
    [3, 13, 14],
    [2, 10, 11],
    [7, 10, 13],
    [4, 11, 14],
    [3, 13, 15],
    [3, 14, 15],
    [2, 10, 12],
    [2, 11, 12],
    [7, 8, 15],
    [7, 13, 15],
    [7, 10, 12],
    [7, 9, 12],
    [4, 14, 15],
    [4, 5, 15],
    [4, 6, 12],
    [4, 11, 12],
    [1, 7, 8],
    [1, 7, 9],
    [0, 4, 5],
    [0, 4, 6],
    [5, 8, 15],
    [6, 9, 12],
    [1, 8, 9],
    [0, 5, 6],
    [5, 8, 9],
    [5, 6, 9],
];

// DHEX: 16 neighbours, 28 facets, max degree 7
pub const POINTS_DHEX: [[f64; 3]; 17] = [
    [0.0, 0.0, 0.0],
    [-0.5, -0.288675134595, 0.204124145232],
    [0.0, 0.0, -0.612372435696],
    [0.0, 0.57735026919, 0.204124145232],
    [0.5, -0.288675134595, 0.204124145232],
    [-1.0, 0.0, 0.0],
    [-0.5, -0.866025403784, 0.0],
    [-0.5, -0.288675134595, 0.816496580928],
    [-0.5, -0.288675134595, -0.816496580928],
    [0.0, 0.57735026919, -0.816496580928],
    [0.5, -0.288675134595, -0.816496580928],
    [-0.5, 0.866025403784, 0.0],
    [0.0, 0.57735026919, 0.816496580928],
    [0.5, 0.866025403784, 0.0],
    [0.5, -0.866025403784, 0.0],
    [0.5, -0.288675134595, 0.816496580928],
    [1.0, 0.0, 0.0],
];
pub const FACETS_DHEX: [[u8; 3]; 28] = [
    [0, 4, 5],
    [0, 4, 6],
    [4, 5, 7],
    [4, 8, 10],
    [4, 7, 8],
    [4, 6, 11],
    [4, 10, 11],
    [1, 7, 8],
    [2, 10, 11],
    [0, 5, 6],
    [5, 7, 9],
    [5, 9, 13],
    [5, 13, 14],
    [5, 6, 14],
    [1, 7, 9],
    [6, 11, 14],
    [8, 10, 12],
    [2, 10, 12],
    [3, 13, 14],
    [1, 8, 9],
    [2, 11, 12],
    [8, 12, 15],
    [8, 9, 15],
    [11, 14, 15],
    [11, 12, 15],
    [9, 13, 15],
    [3, 13, 15],
    [3, 14, 15],
];

// BCC relabelled under the quarter-turn about z, a point-group symmetry of
// the shell: vertex permutation [4, 5, 0, 1, 6, 7, 2, 3, 10, 11, 9, 8, 12, 13]
// (cube corners map to cube corners, face centres to face centres).
pub const FACETS_BCC_ALT: [[u8; 3]; 24] = [
    [2, 3, 11],
    [3, 7, 11],
    [2, 6, 11],
    [6, 7, 11],
    [2, 3, 8],
    [3, 7, 13],
    [2, 6, 12],
    [6, 7, 9],
    [1, 3, 8],
    [0, 2, 8],
    [1, 3, 13],
    [0, 2, 12],
    [5, 7, 13],
    [4, 6, 12],
    [5, 7, 9],
    [4, 6, 9],
    [0, 1, 8],
    [1, 5, 13],
    [0, 4, 12],
    [4, 5, 9],
    [0, 1, 10],
    [1, 5, 10],
    [0, 4, 10],
    [4, 5, 10],
];
