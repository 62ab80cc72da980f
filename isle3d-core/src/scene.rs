/// Fixed mesh attachment for the pre-loaded island asset
use std::collections::HashMap;

use crate::error::{IslandError, Result};

/// Geometry nodes attached to the island group, in draw order
pub const ISLAND_NODES: [&str; 7] = [
    "polySurface944_tree_body_0",
    "polySurface945_tree1_0",
    "polySurface946_tree2_0",
    "polySurface947_tree1_0",
    "polySurface948_tree_body_0",
    "polySurface949_tree_body_0",
    "pCube11_rocks1_0",
];

/// Every island mesh shares the palette material
pub const ISLAND_MATERIAL: &str = "PaletteMaterial001";

/// Read access to an already loaded asset bundle.
///
/// Geometry and material handles are opaque to the component; it only clones
/// them into [`MeshAttachment`]s.
pub trait AssetBundle {
    type Geometry: Clone;
    type Material: Clone;

    fn geometry(&self, node: &str) -> Option<&Self::Geometry>;
    fn material(&self, name: &str) -> Option<&Self::Material>;
}

/// One mesh hung off the island transform node
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAttachment<G, M> {
    pub node: &'static str,
    pub geometry: G,
    pub material: M,
}

/// Resolve the fixed island node list against `bundle`
pub fn attach_island_meshes<B: AssetBundle>(
    bundle: &B,
) -> Result<Vec<MeshAttachment<B::Geometry, B::Material>>> {
    let material = bundle
        .material(ISLAND_MATERIAL)
        .ok_or_else(|| IslandError::MissingMaterial(ISLAND_MATERIAL.to_string()))?;

    ISLAND_NODES
        .iter()
        .map(|&node| {
            let geometry = bundle
                .geometry(node)
                .ok_or_else(|| IslandError::MissingGeometry(node.to_string()))?;
            Ok(MeshAttachment {
                node,
                geometry: geometry.clone(),
                material: material.clone(),
            })
        })
        .collect()
}

/// Map-backed bundle, filled by whatever loader the host uses
#[derive(Debug, Clone)]
pub struct MemoryBundle<G, M> {
    nodes: HashMap<String, G>,
    materials: HashMap<String, M>,
}

impl<G, M> MemoryBundle<G, M> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            materials: HashMap::new(),
        }
    }

    pub fn insert_geometry(&mut self, node: impl Into<String>, geometry: G) {
        self.nodes.insert(node.into(), geometry);
    }

    pub fn insert_material(&mut self, name: impl Into<String>, material: M) {
        self.materials.insert(name.into(), material);
    }
}

impl<G, M> Default for MemoryBundle<G, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Clone, M: Clone> AssetBundle for MemoryBundle<G, M> {
    type Geometry = G;
    type Material = M;

    fn geometry(&self, node: &str) -> Option<&G> {
        self.nodes.get(node)
    }

    fn material(&self, name: &str) -> Option<&M> {
        self.materials.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bundle() -> MemoryBundle<usize, &'static str> {
        let mut bundle = MemoryBundle::new();
        for (i, node) in ISLAND_NODES.iter().enumerate() {
            bundle.insert_geometry(*node, i);
        }
        bundle.insert_geometry("unused_node", 99);
        bundle.insert_material(ISLAND_MATERIAL, "palette");
        bundle
    }

    #[test]
    fn test_attach_in_order() {
        let attachments = attach_island_meshes(&full_bundle()).unwrap();
        assert_eq!(attachments.len(), ISLAND_NODES.len());
        for (i, attachment) in attachments.iter().enumerate() {
            assert_eq!(attachment.node, ISLAND_NODES[i]);
            assert_eq!(attachment.geometry, i);
            assert_eq!(attachment.material, "palette");
        }
    }

    #[test]
    fn test_missing_geometry() {
        let mut bundle: MemoryBundle<usize, &str> = MemoryBundle::new();
        bundle.insert_material(ISLAND_MATERIAL, "palette");
        bundle.insert_geometry(ISLAND_NODES[0], 0);
        assert_eq!(
            attach_island_meshes(&bundle),
            Err(IslandError::MissingGeometry(ISLAND_NODES[1].to_string()))
        );
    }

    #[test]
    fn test_missing_material() {
        let mut bundle = full_bundle();
        bundle.materials.clear();
        assert_eq!(
            attach_island_meshes(&bundle),
            Err(IslandError::MissingMaterial(ISLAND_MATERIAL.to_string()))
        );
    }
}
