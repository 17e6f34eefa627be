//! JSON canvas document structure.
//!
//! A canvas is a graph of nodes; only `file` and `text` nodes can carry
//! references, everything else (groups, edges, geometry) is irrelevant here.

use serde::Deserialize;

/// Top-level canvas document.
#[derive(Debug, Default, Deserialize)]
pub struct CanvasData {
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,
}

/// One canvas node. Unknown node types are carried but ignored by the walk.
#[derive(Debug, Deserialize)]
pub struct CanvasNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Target path of a `file` node.
    #[serde(default)]
    pub file: Option<String>,
    /// Markdown content of a `text` node.
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canvas_nodes() {
        let json = r#"{
            "nodes": [
                {"id": "1", "type": "file", "file": "diagram.png", "x": 0, "y": 0},
                {"id": "2", "type": "text", "text": "see [[pic.png]]", "x": 10, "y": 10},
                {"id": "3", "type": "group", "label": "stuff"}
            ],
            "edges": []
        }"#;

        let canvas: CanvasData = serde_json::from_str(json).unwrap();
        assert_eq!(canvas.nodes.len(), 3);
        assert_eq!(canvas.nodes[0].file.as_deref(), Some("diagram.png"));
        assert_eq!(canvas.nodes[1].text.as_deref(), Some("see [[pic.png]]"));
        assert_eq!(canvas.nodes[2].node_type, "group");
    }

    #[test]
    fn test_empty_canvas() {
        let canvas: CanvasData = serde_json::from_str("{}").unwrap();
        assert!(canvas.nodes.is_empty());
    }
}
