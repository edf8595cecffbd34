//! Immutable per-variant board topology.
//!
//! The 24 nodes sit on three concentric rings:
//!
//! ```text
//! 0-----------1-----------2        a7----------d7----------g7
//! |           |           |        |           |           |
//! |   3-------4-------5   |        |   b6------d6------f6  |
//! |   |       |       |   |        |   |       |       |   |
//! |   |   6---7---8   |   |        |   |   c5--d5--e5  |   |
//! 9--10--11      12--13--14        a4--b4--c4      e4--f4--g4
//! |   |  15--16--17   |   |        |   |   c3--d3--e3  |   |
//! |   |       |       |   |        |   |       |       |   |
//! |  18------19------20   |        |   b2------d2------f2  |
//! |           |           |        |           |           |
//! 21----------22----------23       a1----------d1----------g1
//! ```
//!
//! The extended variant additionally connects the ring corners along the
//! four diagonals (`a7-b6-c5`, `g7-f6-e5`, `c3-b2-a1`, `e3-f2-g1`),
//! which adds eight edges and four mills.

use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::core::{Board, Node, Player, NODE_COUNT};

use super::Variant;

/// Undirected movement edges shared by both variants: the three ring
/// rows plus the four cross arms.
const EDGES: [(u8, u8); 32] = [
    // Ring rows, outer to inner.
    (0, 1),
    (1, 2),
    (3, 4),
    (4, 5),
    (6, 7),
    (7, 8),
    (9, 10),
    (10, 11),
    (12, 13),
    (13, 14),
    (15, 16),
    (16, 17),
    (18, 19),
    (19, 20),
    (21, 22),
    (22, 23),
    // Cross arms connecting the rings.
    (0, 9),
    (9, 21),
    (3, 10),
    (10, 18),
    (6, 11),
    (11, 15),
    (1, 4),
    (4, 7),
    (16, 19),
    (19, 22),
    (8, 12),
    (12, 17),
    (5, 13),
    (13, 20),
    (2, 14),
    (14, 23),
];

/// Corner diagonals, extended variant only.
const DIAGONAL_EDGES: [(u8, u8); 8] = [
    (0, 3),
    (3, 6),
    (2, 5),
    (5, 8),
    (15, 18),
    (18, 21),
    (17, 20),
    (20, 23),
];

/// Mill lines shared by both variants: eight rows, eight columns.
const MILLS: [[u8; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

/// Diagonal mill lines, extended variant only.
const DIAGONAL_MILLS: [[u8; 3]; 4] = [[0, 3, 6], [2, 5, 8], [15, 18, 21], [17, 20, 23]];

/// Per-variant adjacency and mill tables.
///
/// Built once per variant and shared (`&'static`) by every position of
/// that variant; immutable after construction.
#[derive(Debug)]
pub struct BoardTopology {
    variant: Variant,
    adjacency: [SmallVec<[Node; 4]>; NODE_COUNT],
    mills: Vec<[Node; 3]>,
    mills_by_node: [SmallVec<[u16; 3]>; NODE_COUNT],
}

impl BoardTopology {
    /// Build the topology for `variant` and validate it exhaustively.
    ///
    /// Panics on an inconsistent table (static data, programming error).
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut adjacency: [SmallVec<[Node; 4]>; NODE_COUNT] =
            std::array::from_fn(|_| SmallVec::new());

        let edges: Vec<(u8, u8)> = match variant {
            Variant::Classic9 => EDGES.to_vec(),
            Variant::Extended12 => EDGES.iter().chain(DIAGONAL_EDGES.iter()).copied().collect(),
        };

        for &(a, b) in &edges {
            adjacency[a as usize].push(Node::new(b));
            adjacency[b as usize].push(Node::new(a));
        }

        let mut raw_mills: Vec<[u8; 3]> = MILLS.to_vec();
        if variant == Variant::Extended12 {
            raw_mills.extend(DIAGONAL_MILLS);
        }

        let mills: Vec<[Node; 3]> = raw_mills
            .iter()
            .map(|&[a, b, c]| [Node::new(a), Node::new(b), Node::new(c)])
            .collect();

        let mut mills_by_node: [SmallVec<[u16; 3]>; NODE_COUNT] =
            std::array::from_fn(|_| SmallVec::new());

        for (mill_index, mill) in mills.iter().enumerate() {
            for node in mill {
                mills_by_node[node.index()].push(mill_index as u16);
            }
        }

        let topology = Self {
            variant,
            adjacency,
            mills,
            mills_by_node,
        };
        topology.validate();
        topology
    }

    /// The shared instance for `variant`.
    #[must_use]
    pub fn get(variant: Variant) -> &'static Self {
        static CLASSIC: OnceLock<BoardTopology> = OnceLock::new();
        static EXTENDED: OnceLock<BoardTopology> = OnceLock::new();

        match variant {
            Variant::Classic9 => CLASSIC.get_or_init(|| Self::new(Variant::Classic9)),
            Variant::Extended12 => EXTENDED.get_or_init(|| Self::new(Variant::Extended12)),
        }
    }

    fn validate(&self) {
        for node in Node::all() {
            let neighbors = self.neighbors(node);
            assert!(!neighbors.is_empty(), "isolated node in adjacency table");

            for &other in neighbors {
                assert_ne!(node, other, "self-loop in adjacency table");
                assert!(
                    self.adjacency[other.index()].contains(&node),
                    "asymmetric adjacency table"
                );
            }

            assert!(
                !self.mills_by_node[node.index()].is_empty(),
                "node outside every mill line"
            );
        }

        for mill in &self.mills {
            assert!(
                mill[0] != mill[1] && mill[1] != mill[2] && mill[0] != mill[2],
                "mill triple with repeated node"
            );
        }
    }

    /// The variant this topology belongs to.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Nodes a piece on `node` may slide to (when they are empty).
    #[must_use]
    pub fn neighbors(&self, node: Node) -> &[Node] {
        &self.adjacency[node.index()]
    }

    /// Every mill line of this variant.
    #[must_use]
    pub fn mills(&self) -> &[[Node; 3]] {
        &self.mills
    }

    /// The mill lines running through `node`.
    pub fn mills_through(&self, node: Node) -> impl Iterator<Item = &[Node; 3]> {
        self.mills_by_node[node.index()]
            .iter()
            .map(|&i| &self.mills[i as usize])
    }

    /// Whether `node` sits in a completed mill of `player`'s color.
    #[must_use]
    pub fn is_mill(&self, board: &Board, player: Player, node: Node) -> bool {
        self.mills_through(node)
            .any(|mill| mill.iter().all(|n| board[n.index()] == Some(player)))
    }

    /// Whether every piece `player` has on the board is inside a mill.
    ///
    /// Vacuously true for a player with no pieces.
    #[must_use]
    pub fn all_in_mills(&self, board: &Board, player: Player) -> bool {
        Node::all()
            .filter(|&n| board[n.index()] == Some(player))
            .all(|n| self.is_mill(board, player, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u8) -> Node {
        Node::new(i)
    }

    #[test]
    fn test_classic_counts() {
        let topo = BoardTopology::new(Variant::Classic9);
        assert_eq!(topo.mills().len(), 16);

        let degree_sum: usize = Node::all().map(|x| topo.neighbors(x).len()).sum();
        assert_eq!(degree_sum, 64); // 32 undirected edges
    }

    #[test]
    fn test_extended_counts() {
        let topo = BoardTopology::new(Variant::Extended12);
        assert_eq!(topo.mills().len(), 20);

        let degree_sum: usize = Node::all().map(|x| topo.neighbors(x).len()).sum();
        assert_eq!(degree_sum, 80); // 40 undirected edges
    }

    #[test]
    fn test_classic_sample_neighbors() {
        let topo = Variant::Classic9.topology();

        let mut cross = topo.neighbors(n(4)).to_vec();
        cross.sort();
        assert_eq!(cross, vec![n(1), n(3), n(5), n(7)]);

        let mut corner = topo.neighbors(n(0)).to_vec();
        corner.sort();
        assert_eq!(corner, vec![n(1), n(9)]);
    }

    #[test]
    fn test_extended_corner_gains_diagonal() {
        let topo = Variant::Extended12.topology();

        let mut corner = topo.neighbors(n(0)).to_vec();
        corner.sort();
        assert_eq!(corner, vec![n(1), n(3), n(9)]);

        let mut mid = topo.neighbors(n(18)).to_vec();
        mid.sort();
        assert_eq!(mid, vec![n(10), n(15), n(19), n(21)]);
    }

    #[test]
    fn test_mills_through_membership() {
        let topo = Variant::Classic9.topology();

        // d5 (7) lies on the inner row and the upper cross arm.
        let through: Vec<_> = topo.mills_through(n(7)).collect();
        assert_eq!(through.len(), 2);
        for mill in through {
            assert!(mill.contains(&n(7)));
        }
    }

    #[test]
    fn test_is_mill_detection() {
        let topo = Variant::Classic9.topology();
        let mut board: Board = [None; NODE_COUNT];

        board[21] = Some(Player::White);
        board[22] = Some(Player::White);
        assert!(!topo.is_mill(&board, Player::White, n(21)));

        board[23] = Some(Player::White);
        assert!(topo.is_mill(&board, Player::White, n(21)));
        assert!(topo.is_mill(&board, Player::White, n(22)));
        assert!(topo.is_mill(&board, Player::White, n(23)));

        // Mixed colors never form a mill.
        board[22] = Some(Player::Black);
        assert!(!topo.is_mill(&board, Player::White, n(21)));
    }

    #[test]
    fn test_diagonal_mill_only_in_extended() {
        let mut board: Board = [None; NODE_COUNT];
        board[0] = Some(Player::Black);
        board[3] = Some(Player::Black);
        board[6] = Some(Player::Black);

        assert!(!Variant::Classic9
            .topology()
            .is_mill(&board, Player::Black, n(0)));
        assert!(Variant::Extended12
            .topology()
            .is_mill(&board, Player::Black, n(0)));
    }

    #[test]
    fn test_all_in_mills() {
        let topo = Variant::Classic9.topology();
        let mut board: Board = [None; NODE_COUNT];

        board[21] = Some(Player::Black);
        board[22] = Some(Player::Black);
        board[23] = Some(Player::Black);
        assert!(topo.all_in_mills(&board, Player::Black));

        board[4] = Some(Player::Black);
        assert!(!topo.all_in_mills(&board, Player::Black));

        // No pieces at all: vacuously true.
        assert!(topo.all_in_mills(&board, Player::White));
    }
}
