use super::model::{CHARACTER_NODE_ID, GraphEdge, GraphNode, NodeKind, Position, RelationGraph};
use crate::catalog::{Character, Film, Starship};

pub const FILM_ROW_Y: f64 = 200.0;
pub const FILM_SPACING: f64 = 300.0;
pub const STARSHIP_ROW_Y: f64 = 400.0;
pub const STARSHIP_SPACING: f64 = 500.0;

/// Film and starship nodes are numbered after the character node.
const FIRST_LINKED_INDEX: usize = 2;

/// x of the `index`-th of `count` nodes in a row centered on the origin.
fn row_x(index: usize, count: usize, spacing: f64) -> f64 {
	index as f64 * spacing - (count.saturating_sub(1) as f64 * spacing / 2.0)
}

/// Lays out the character, its films and its starships as three rows and
/// links them. `films` and `starships` are the resolved records in the same
/// order as the character's references.
pub fn build_graph(character: &Character, films: &[Film], starships: &[Starship]) -> RelationGraph {
	let film_id = |i: usize| (i + FIRST_LINKED_INDEX).to_string();
	let starship_id = |i: usize| (i + films.len() + FIRST_LINKED_INDEX).to_string();

	let mut nodes = Vec::with_capacity(1 + films.len() + starships.len());
	nodes.push(GraphNode {
		id: CHARACTER_NODE_ID.into(),
		position: Position::default(),
		label: character.name.clone(),
		kind: NodeKind::Character,
	});
	nodes.extend(films.iter().enumerate().map(|(i, film)| GraphNode {
		id: film_id(i),
		position: Position {
			x: row_x(i, films.len(), FILM_SPACING),
			y: FILM_ROW_Y,
		},
		label: film.title.clone(),
		kind: NodeKind::Film,
	}));
	nodes.extend(starships.iter().enumerate().map(|(i, ship)| GraphNode {
		id: starship_id(i),
		position: Position {
			x: row_x(i, starships.len(), STARSHIP_SPACING),
			y: STARSHIP_ROW_Y,
		},
		label: ship.name.clone(),
		kind: NodeKind::Starship,
	}));

	let mut edges: Vec<GraphEdge> = (0..films.len())
		.map(|i| GraphEdge::between(CHARACTER_NODE_ID, &film_id(i)))
		.collect();
	for (s, ship) in starships.iter().enumerate() {
		// Film ids outside the character's own films have no node to attach to.
		for film in &ship.films {
			if let Some(f) = films.iter().position(|known| known.id == *film) {
				edges.push(GraphEdge::between(&film_id(f), &starship_id(s)));
			}
		}
	}

	RelationGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::fake::character;

	fn film(id: u32, title: &str) -> Film {
		Film {
			id,
			title: title.into(),
		}
	}

	fn ship(name: &str, films: &[u32]) -> Starship {
		Starship {
			name: name.into(),
			films: films.to_vec(),
		}
	}

	fn has_node(graph: &RelationGraph, id: &str) -> bool {
		graph.nodes.iter().any(|node| node.id == id)
	}

	fn edge_pairs(graph: &RelationGraph) -> Vec<(&str, &str)> {
		graph
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect()
	}

	#[test]
	fn lone_character_is_a_single_node() {
		let graph = build_graph(&character(1, "Beru", &[], &[]), &[], &[]);
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.edges.is_empty());
		assert_eq!(graph.nodes[0].id, "1");
		assert_eq!(graph.nodes[0].label, "Beru");
		assert_eq!(graph.nodes[0].position, Position::default());
	}

	#[test]
	fn counts_nodes_and_character_edges() {
		let films = [film(1, "A"), film(2, "B"), film(3, "C")];
		let ships = [ship("X", &[]), ship("Y", &[])];
		let graph = build_graph(&character(1, "Luke", &[1, 2, 3], &[7, 8]), &films, &ships);

		assert_eq!(graph.nodes.len(), 1 + 3 + 2);
		let from_character = graph.edges.iter().filter(|e| e.source == "1").count();
		assert_eq!(from_character, 3);
		assert_eq!(graph.edges.len(), 3);
	}

	#[test]
	fn disjoint_starship_adds_no_edges() {
		let films = [film(4, "Alpha")];
		let ships = [ship("Speeder", &[9, 10])];
		let graph = build_graph(&character(1, "Han", &[4], &[2]), &films, &ships);
		assert_eq!(edge_pairs(&graph), vec![("1", "2")]);
	}

	#[test]
	fn worked_example() {
		let films = [film(4, "Alpha"), film(5, "Beta")];
		let ships = [ship("Speeder", &[5, 9])];
		let graph = build_graph(&character(1, "Leia", &[4, 5], &[3]), &films, &ships);

		let labels: Vec<(&str, &str)> = graph
			.nodes
			.iter()
			.map(|n| (n.id.as_str(), n.label.as_str()))
			.collect();
		assert_eq!(
			labels,
			vec![("1", "Leia"), ("2", "Alpha"), ("3", "Beta"), ("4", "Speeder")]
		);
		assert_eq!(edge_pairs(&graph), vec![("1", "2"), ("1", "3"), ("3", "4")]);

		let ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, vec!["e1-2", "e1-3", "e3-4"]);
	}

	#[test]
	fn every_edge_endpoint_is_a_node() {
		let films = [film(1, "A"), film(2, "B")];
		let ships = [ship("X", &[2, 1]), ship("Y", &[2, 42])];
		let graph = build_graph(&character(1, "Obi-Wan", &[1, 2], &[5, 6]), &films, &ships);

		for edge in &graph.edges {
			assert!(has_node(&graph, &edge.source), "{edge:?}");
			assert!(has_node(&graph, &edge.target), "{edge:?}");
		}
		assert_eq!(graph.edges.len(), 2 + 3);
	}

	#[test]
	fn rows_are_centered() {
		let films = [film(1, "A"), film(2, "B"), film(3, "C")];
		let ships = [ship("X", &[]), ship("Y", &[])];
		let graph = build_graph(&character(1, "R2-D2", &[1, 2, 3], &[1, 2]), &films, &ships);

		let xs = |kind: NodeKind| -> Vec<f64> {
			graph
				.nodes
				.iter()
				.filter(|n| n.kind == kind)
				.map(|n| n.position.x)
				.collect()
		};
		assert_eq!(xs(NodeKind::Film), vec![-300.0, 0.0, 300.0]);
		assert_eq!(xs(NodeKind::Starship), vec![-250.0, 250.0]);
		assert!(
			graph
				.nodes
				.iter()
				.filter(|n| n.kind == NodeKind::Film)
				.all(|n| n.position.y == FILM_ROW_Y)
		);
		assert!(
			graph
				.nodes
				.iter()
				.filter(|n| n.kind == NodeKind::Starship)
				.all(|n| n.position.y == STARSHIP_ROW_Y)
		);
	}
}
