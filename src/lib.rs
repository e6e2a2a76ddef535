//! # Henkan - Behavior-Graph / Canvas Translator
//!
//! **Henkan** translates between a backend's declarative behavior-graph
//! description (start, invoke and condition nodes plus the structural
//! combinators `sequence`, `fallback` and `parallel`, connected by a flat edge
//! list) and the node-graph documents edited on a drag-and-drop canvas (nodes
//! with 2D coordinates, typed ports and explicit nesting).
//!
//! ## Core Workflow
//!
//! The translator is a pure function from one graph document to another; it
//! never executes the behavior tree it re-shapes.
//!
//! 1.  **Load Your Graph**: Deserialize the backend JSON into a
//!     [`graph::GraphDefinition`].
//! 2.  **Configure**: Use [`convert::Translator::builder`] to inject anything
//!     the conversion needs from outside, such as the start-node output schema
//!     supplied by the property composer.
//! 3.  **Convert**: Call `to_canvas()` to obtain a
//!     [`canvas::CanvasDocument`]. The forward path never fails: malformed
//!     predicates, unknown enum tokens and id-less nodes are recovered locally
//!     and logged, so the host always receives a renderable document.
//! 4.  **Save**: Feed an edited document back through
//!     [`convert::canvas_to_graph`] to produce the backend shape again.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use henkan::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let json = std::fs::read_to_string("graph.json")?;
//!     let graph: GraphDefinition = serde_json::from_str(&json)?;
//!
//!     let document = Translator::builder(graph).build().to_canvas();
//!     println!("{} canvas nodes", document.nodes.len());
//!
//!     let restored = canvas_to_graph(&document, "wf-1", "My workflow", "behavior");
//!     println!("{}", serde_json::to_string_pretty(&restored)?);
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod condition;
pub mod convert;
pub mod error;
pub mod graph;
pub mod lookup;
pub mod prelude;
