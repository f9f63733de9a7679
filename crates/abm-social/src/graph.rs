//! `SocialGraph` — directed, weighted adjacency over agent identities.
//!
//! # Data layout
//!
//! One map entry per vertex; each entry holds that vertex's out-edges as a
//! `Vec<(target, weight)>` in edge-insertion order.  Out-degrees in social
//! models are small, so the linear scans in `add_edge`/`get_weight` beat a
//! nested map in both memory and constant factor, and the `Vec` gives the
//! one property a nested hash map cannot: a documented, deterministic
//! iteration order for propagation (edge-insertion order).
//!
//! At most one edge exists per ordered pair; re-adding overwrites the
//! weight.  Self-loops are permitted.

use abm_core::AgentId;
use abm_engine::MessageSink;
use rustc_hash::FxHashMap;

use crate::error::{GraphError, GraphResult};
use crate::message::DEFAULT_WEIGHT;
use crate::specification::MessageSpecification;

/// A directed, weighted graph over agent identities.
#[derive(Debug, Default)]
pub struct SocialGraph {
    adjacency: FxHashMap<AgentId, Vec<(AgentId, f64)>>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Vertex operations ─────────────────────────────────────────────────

    /// Insert `id` as a vertex.  Returns `false` (no-op) if already present.
    pub fn add_vertex(&mut self, id: AgentId) -> bool {
        match self.adjacency.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Remove `id` and every edge where it is source or target.
    ///
    /// Returns `false` (no-op) if the vertex is absent.
    pub fn remove_vertex(&mut self, id: AgentId) -> bool {
        if self.adjacency.remove(&id).is_none() {
            return false;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|(target, _)| *target != id);
        }
        true
    }

    pub fn has_vertex(&self, id: AgentId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    // ── Edge operations ───────────────────────────────────────────────────

    /// Create the edge `source → target` with `weight`, or overwrite the
    /// weight of the existing edge.
    ///
    /// Returns the previous weight on overwrite (`None` for a fresh edge)
    /// so callers can detect last-write-wins replacements.  Fails with
    /// [`GraphError::UnknownVertex`] if either endpoint is absent.
    pub fn add_edge(
        &mut self,
        source: AgentId,
        target: AgentId,
        weight: f64,
    ) -> GraphResult<Option<f64>> {
        if !self.adjacency.contains_key(&target) {
            return Err(GraphError::UnknownVertex(target));
        }
        let edges = self
            .adjacency
            .get_mut(&source)
            .ok_or(GraphError::UnknownVertex(source))?;
        match edges.iter_mut().find(|(t, _)| *t == target) {
            Some((_, w)) => Ok(Some(std::mem::replace(w, weight))),
            None => {
                edges.push((target, weight));
                Ok(None)
            }
        }
    }

    /// [`add_edge`][Self::add_edge] with the default weight of 1.0.
    pub fn add_edge_default(&mut self, source: AgentId, target: AgentId) -> GraphResult<Option<f64>> {
        self.add_edge(source, target, DEFAULT_WEIGHT)
    }

    /// The weight of `source → target`, or `None` if no such edge exists.
    pub fn get_weight(&self, source: AgentId, target: AgentId) -> Option<f64> {
        self.adjacency
            .get(&source)?
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, w)| *w)
    }

    /// Overwrite the weight of an existing edge.
    ///
    /// Unlike [`add_edge`][Self::add_edge] this never creates: it fails
    /// with [`GraphError::UnknownEdge`] when the endpoints exist but the
    /// edge does not, and [`GraphError::UnknownVertex`] when an endpoint is
    /// absent.
    pub fn set_weight(&mut self, source: AgentId, target: AgentId, weight: f64) -> GraphResult<()> {
        if !self.adjacency.contains_key(&target) {
            return Err(GraphError::UnknownVertex(target));
        }
        let edges = self
            .adjacency
            .get_mut(&source)
            .ok_or(GraphError::UnknownVertex(source))?;
        match edges.iter_mut().find(|(t, _)| *t == target) {
            Some((_, w)) => {
                *w = weight;
                Ok(())
            }
            None => Err(GraphError::UnknownEdge { source, target }),
        }
    }

    /// [`set_weight`][Self::set_weight] with the default weight of 1.0.
    pub fn set_weight_default(&mut self, source: AgentId, target: AgentId) -> GraphResult<()> {
        self.set_weight(source, target, DEFAULT_WEIGHT)
    }

    pub fn has_edge(&self, source: AgentId, target: AgentId) -> bool {
        self.get_weight(source, target).is_some()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Out-degree of `source` (0 for an absent vertex).
    pub fn out_degree(&self, source: AgentId) -> usize {
        self.adjacency.get(&source).map_or(0, Vec::len)
    }

    /// Iterator over `(target, weight)` of the out-edges of `source`, in
    /// edge-insertion order.  Empty for an absent vertex.
    pub fn out_edges(&self, source: AgentId) -> impl Iterator<Item = (AgentId, f64)> + '_ {
        self.adjacency.get(&source).into_iter().flatten().copied()
    }

    // ── Propagation ───────────────────────────────────────────────────────

    /// Expand `spec` over the sender's out-edges and send every resulting
    /// message immediately through `sink`.
    ///
    /// One [`SocialMessage`][crate::SocialMessage] goes out per edge —
    /// destination = edge target, weight = edge weight, shared payload,
    /// fresh identity — in edge-insertion order.  Returns the fan-out count
    /// (= the sender's out-degree).  Fails with
    /// [`GraphError::UnknownVertex`] if the sender is not a vertex.
    pub fn propagate(
        &self,
        sink: &mut dyn MessageSink,
        spec: &MessageSpecification,
    ) -> GraphResult<usize> {
        let edges = self
            .adjacency
            .get(&spec.sender())
            .ok_or(GraphError::UnknownVertex(spec.sender()))?;
        let messages = spec.to_weighted_messages(edges.iter().copied());
        let count = messages.len();
        for message in messages {
            sink.send_now(Box::new(message));
        }
        Ok(count)
    }
}
