use std::collections::HashMap;

use serde_json::Value;

use error::{MstError, MstResult};

/// One entry in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: isize,
}

/// Weighted undirected graph. Vertices are dense indices with display names;
/// each undirected edge appears in both endpoints' adjacency lists.
#[derive(Debug)]
pub struct Graph {
    names: Vec<String>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            names: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, name: &str) -> usize {
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        self.names.len() - 1
    }

    pub fn add_edge(&mut self, v1: usize, v2: usize, weight: isize) {
        self.adjacency[v1].push(Neighbor { vertex: v2, weight });
        self.adjacency[v2].push(Neighbor { vertex: v1, weight });
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        &self.adjacency[vertex]
    }

    pub fn name(&self, vertex: usize) -> &str {
        &self.names[vertex]
    }

    /// Builds a graph from the driver's file format:
    /// `{"vertices": ["A", "B"], "edges": [["A", "B", 5]]}`.
    pub fn from_json(json: &Value) -> MstResult<Graph> {
        let mut graph = Graph::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let vertices = json["vertices"]
            .as_array()
            .ok_or_else(|| MstError::BadGraphFile("\"vertices\" must be an array".to_string()))?;
        for entry in vertices {
            let name = entry.as_str().ok_or_else(|| {
                MstError::BadGraphFile("vertex names must be strings".to_string())
            })?;
            if index.contains_key(name) {
                return Err(MstError::BadGraphFile(format!(
                    "duplicate vertex \"{}\"",
                    name
                )));
            }
            let v = graph.add_vertex(name);
            index.insert(name.to_string(), v);
        }

        let edges = json["edges"]
            .as_array()
            .ok_or_else(|| MstError::BadGraphFile("\"edges\" must be an array".to_string()))?;
        for entry in edges {
            let edge = entry.as_array().filter(|e| e.len() == 3).ok_or_else(|| {
                MstError::BadGraphFile(format!("edge {} must be [from, to, weight]", entry))
            })?;
            let v1 = lookup(&index, &edge[0])?;
            let v2 = lookup(&index, &edge[1])?;
            let weight = edge[2].as_i64().ok_or_else(|| {
                MstError::BadGraphFile(format!("edge weight {} must be an integer", edge[2]))
            })?;
            graph.add_edge(v1, v2, weight as isize);
        }

        Ok(graph)
    }
}

fn lookup(index: &HashMap<String, usize>, endpoint: &Value) -> MstResult<usize> {
    let name = endpoint
        .as_str()
        .ok_or_else(|| MstError::BadGraphFile(format!("endpoint {} must be a string", endpoint)))?;
    index
        .get(name)
        .cloned()
        .ok_or_else(|| MstError::BadGraphFile(format!("unknown vertex \"{}\"", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_show_up_on_both_endpoints() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        graph.add_edge(a, b, 3);
        assert_eq!(graph.neighbors(a), &[Neighbor { vertex: b, weight: 3 }]);
        assert_eq!(graph.neighbors(b), &[Neighbor { vertex: a, weight: 3 }]);
    }

    #[test]
    fn loads_the_json_format() {
        let json: Value = ::serde_json::from_str(
            r#"{"vertices": ["A", "B", "C"],
                "edges": [["A", "B", 5], ["B", "C", 2], ["A", "C", 9]]}"#,
        )
        .unwrap();
        let graph = Graph::from_json(&json).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.name(0), "A");
        assert_eq!(graph.neighbors(1).len(), 2);
    }

    #[test]
    fn rejects_unknown_endpoints_and_bad_shapes() {
        let bad_endpoint: Value =
            ::serde_json::from_str(r#"{"vertices": ["A"], "edges": [["A", "Z", 1]]}"#).unwrap();
        match Graph::from_json(&bad_endpoint) {
            Err(MstError::BadGraphFile(message)) => assert!(message.contains("Z")),
            other => panic!("expected BadGraphFile, got {:?}", other),
        }

        let not_an_object: Value = ::serde_json::from_str("[1, 2, 3]").unwrap();
        assert!(Graph::from_json(&not_an_object).is_err());
    }
}
