/// Node id reserved for the selected character.
pub const CHARACTER_NODE_ID: &str = "1";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Character,
	Film,
	Starship,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub position: Position,
	pub label: String,
	pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

impl GraphEdge {
	pub fn between(source: &str, target: &str) -> Self {
		Self {
			id: format!("e{source}-{target}"),
			source: source.into(),
			target: target.into(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}
