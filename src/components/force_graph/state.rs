use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::relations::{NodeKind, RelationGraph};

/// Margin kept around the seeded layout when fitting it to the canvas.
const FIT_PADDING: f64 = 80.0;
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

pub fn node_radius(kind: NodeKind) -> f64 {
	match kind {
		NodeKind::Character => 10.0,
		NodeKind::Film | NodeKind::Starship => 7.0,
	}
}

pub fn node_color(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Character => "#ffe81f",
		NodeKind::Film => "#1f77b4",
		NodeKind::Starship => "#d62728",
	}
}

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: String,
	pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// What the pointer is currently dragging, if anything.
#[derive(Clone, Copy, Debug, Default)]
enum Gesture {
	#[default]
	Idle,
	Node {
		idx: DefaultNodeIdx,
		grab: (f64, f64),
		origin: (f32, f32),
	},
	Pan {
		grab: (f64, f64),
		origin: (f64, f64),
	},
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	pub hovered: Option<DefaultNodeIdx>,
	neighbors: HashSet<DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	gesture: Gesture,
}

impl ForceGraphState {
	/// Seeds the simulation with the layout positions carried by `data`. The
	/// character node is pinned so the layout stays anchored on it.
	pub fn new(data: &RelationGraph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 400.0,
			force_spring: 0.02,
			force_max: 80.0,
			node_speed: 2000.0,
			damping_factor: 0.85,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for node in &data.nodes {
			let idx = graph.add_node(NodeData {
				x: node.position.x as f32,
				y: node.position.y as f32,
				mass: 10.0,
				is_anchor: node.kind == NodeKind::Character,
				user_data: NodeInfo {
					label: node.label.clone(),
					kind: node.kind,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(edge.source.as_str()),
				id_to_idx.get(edge.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			transform: fit_transform(data, width, height),
			width,
			height,
			flow_time: 0.0,
			hovered: None,
			neighbors: HashSet::new(),
			edges,
			gesture: Gesture::Idle,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let reach = node_radius(node.data.user_data.kind) + 4.0;
			if dx * dx + dy * dy < reach * reach {
				found = Some(node.index());
			}
		});
		found
	}

	fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x(), node.y()));
			}
		});
		found
	}

	/// Grabs the node under the pointer, or the background for panning.
	pub fn press(&mut self, sx: f64, sy: f64) {
		self.gesture = match self
			.node_at_position(sx, sy)
			.and_then(|idx| Some((idx, self.node_position(idx)?)))
		{
			Some((idx, origin)) => Gesture::Node {
				idx,
				grab: (sx, sy),
				origin,
			},
			None => Gesture::Pan {
				grab: (sx, sy),
				origin: (self.transform.x, self.transform.y),
			},
		};
	}

	pub fn drag(&mut self, sx: f64, sy: f64) {
		match self.gesture {
			Gesture::Idle => {
				let hovered = self.node_at_position(sx, sy);
				self.set_hover(hovered);
			}
			Gesture::Node { idx, grab, origin } => {
				let k = self.transform.k;
				let nx = origin.0 + ((sx - grab.0) / k) as f32;
				let ny = origin.1 + ((sy - grab.1) / k) as f32;
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
			Gesture::Pan { grab, origin } => {
				self.transform.x = origin.0 + (sx - grab.0);
				self.transform.y = origin.1 + (sy - grab.1);
			}
		}
	}

	/// Ends the current gesture. Dragged nodes stay pinned where dropped.
	pub fn release(&mut self) {
		self.gesture = Gesture::Idle;
	}

	pub fn leave(&mut self) {
		self.release();
		self.set_hover(None);
	}

	/// Zooms by one wheel notch, keeping the point under the cursor fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = k;
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.neighbors = node
			.map(|idx| {
				self.edges
					.iter()
					.filter_map(|&(src, tgt)| {
						if src == idx {
							Some(tgt)
						} else if tgt == idx {
							Some(src)
						} else {
							None
						}
					})
					.collect()
			})
			.unwrap_or_default();
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hovered == Some(idx) || self.neighbors.contains(&idx)
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Centers the seeded layout in the viewport, shrinking it to fit if needed.
fn fit_transform(data: &RelationGraph, width: f64, height: f64) -> ViewTransform {
	let bounds = data.nodes.iter().fold(None::<(f64, f64, f64, f64)>, |acc, node| {
		let (x, y) = (node.position.x, node.position.y);
		Some(match acc {
			None => (x, y, x, y),
			Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
		})
	});
	let Some((x0, y0, x1, y1)) = bounds else {
		return ViewTransform {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		};
	};

	let span_x = (x1 - x0) + 2.0 * FIT_PADDING;
	let span_y = (y1 - y0) + 2.0 * FIT_PADDING;
	let k = (width / span_x).min(height / span_y).clamp(MIN_ZOOM, 1.0);
	ViewTransform {
		x: width / 2.0 - (x0 + x1) / 2.0 * k,
		y: height / 2.0 - (y0 + y1) / 2.0 * k,
		k,
	}
}
