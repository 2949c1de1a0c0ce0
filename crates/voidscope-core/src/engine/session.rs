use super::cache::StructureCache;
use super::error::EngineError;
use crate::core::models::crystal_void::CrystalVoid;
use crate::core::models::lattice::{LatticeType, VoidType};
use crate::core::models::structure::StructureData;
use std::sync::Arc;
use tracing::debug;

/// Interactive exploration state: the current configuration, the selected
/// void, and the cache that keeps selection changes from regenerating
/// anything.
#[derive(Debug, Default)]
pub struct ExplorerSession {
    lattice: LatticeType,
    void_type: VoidType,
    selected_void_id: Option<String>,
    cache: StructureCache,
}

impl ExplorerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: StructureCache) -> Self {
        Self {
            cache,
            ..Self::default()
        }
    }

    pub fn lattice(&self) -> LatticeType {
        self.lattice
    }

    pub fn void_type(&self) -> VoidType {
        self.void_type
    }

    pub fn selected_void_id(&self) -> Option<&str> {
        self.selected_void_id.as_deref()
    }

    pub fn cache(&self) -> &StructureCache {
        &self.cache
    }

    /// Switches the lattice. Void ids are only meaningful within one
    /// structure, so the selection is always cleared.
    pub fn set_lattice(&mut self, lattice: LatticeType) {
        debug!("Lattice set to {}, clearing selection.", lattice);
        self.lattice = lattice;
        self.selected_void_id = None;
    }

    pub fn set_void_type(&mut self, void_type: VoidType) {
        debug!("Void type set to {}, clearing selection.", void_type);
        self.void_type = void_type;
        self.selected_void_id = None;
    }

    /// Selects `id`, or deselects it if it is already the selection.
    ///
    /// Returns the selection after the toggle.
    pub fn toggle_void(&mut self, id: &str) -> Option<&str> {
        if self.selected_void_id.as_deref() == Some(id) {
            self.selected_void_id = None;
        } else {
            self.selected_void_id = Some(id.to_string());
        }
        self.selected_void_id.as_deref()
    }

    /// Selects `id` after checking that it names a void of the current
    /// structure.
    pub fn select_void(&mut self, id: &str) -> Result<(), EngineError> {
        if self.structure().find_void(id).is_none() {
            return Err(EngineError::VoidNotFound {
                id: id.to_string(),
                lattice: self.lattice,
                void_type: self.void_type,
            });
        }
        self.selected_void_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_void_id = None;
    }

    pub fn structure(&mut self) -> Arc<StructureData> {
        self.cache.get_or_generate(self.lattice, self.void_type)
    }

    /// The selected void, if the selection names a void of the current structure.
    pub fn selected_void(&mut self) -> Option<CrystalVoid> {
        let id = self.selected_void_id.clone()?;
        self.structure().find_void(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_fcc_tetrahedral_and_no_selection() {
        let session = ExplorerSession::new();
        assert_eq!(session.lattice(), LatticeType::Fcc);
        assert_eq!(session.void_type(), VoidType::Tetrahedral);
        assert!(session.selected_void_id().is_none());
        assert!(session.cache().is_empty());
    }

    #[test]
    fn toggling_the_same_void_deselects_it() {
        let mut session = ExplorerSession::new();
        assert_eq!(
            session.toggle_void("v-tet-0.25-0.25-0.25"),
            Some("v-tet-0.25-0.25-0.25")
        );
        assert_eq!(session.toggle_void("v-tet-0.25-0.25-0.25"), None);
    }

    #[test]
    fn toggling_a_different_void_switches_selection() {
        let mut session = ExplorerSession::new();
        session.toggle_void("v-tet-0.25-0.25-0.25");
        assert_eq!(
            session.toggle_void("v-tet-0.75-0.75-0.75"),
            Some("v-tet-0.75-0.75-0.75")
        );
    }

    #[test]
    fn changing_configuration_resets_selection() {
        let mut session = ExplorerSession::new();
        session.toggle_void("v-tet-0.25-0.25-0.25");
        session.set_lattice(LatticeType::Bcc);
        assert!(session.selected_void_id().is_none());

        session.toggle_void("vbcc-tet-z0-1");
        session.set_void_type(VoidType::Tetrahedral);
        assert!(session.selected_void_id().is_none());
    }

    #[test]
    fn selection_changes_do_not_regenerate() {
        let mut session = ExplorerSession::new();
        session.structure();
        for id in ["v-tet-0.25-0.25-0.25", "v-tet-0.75-0.25-0.25", "v-tet-0.75-0.25-0.25"] {
            session.toggle_void(id);
            session.selected_void();
        }
        assert_eq!(session.cache().stats().misses, 1);
        assert_eq!(session.cache().len(), 1);
    }

    #[test]
    fn switching_back_reuses_cached_structure() {
        let mut session = ExplorerSession::new();
        session.structure();
        session.set_void_type(VoidType::Octahedral);
        session.structure();
        session.set_void_type(VoidType::Tetrahedral);
        session.structure();
        let stats = session.cache().stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn selected_void_resolves_against_current_structure() {
        let mut session = ExplorerSession::new();
        session.set_void_type(VoidType::Octahedral);
        session.toggle_void("v-oct-body");
        let void = session.selected_void().unwrap();
        assert_eq!(void.forming_atoms.len(), 6);

        session.toggle_void("no-such-void");
        assert!(session.selected_void().is_none());
    }

    #[test]
    fn select_void_rejects_unknown_ids() {
        let mut session = ExplorerSession::new();
        session.set_lattice(LatticeType::Bcc);
        let err = session.select_void("v-oct-body").unwrap_err();
        assert_eq!(
            err,
            EngineError::VoidNotFound {
                id: "v-oct-body".to_string(),
                lattice: LatticeType::Bcc,
                void_type: VoidType::Tetrahedral,
            }
        );
        assert!(session.selected_void_id().is_none());
        session.select_void("vbcc-tet-y1-4").unwrap();
        assert_eq!(session.selected_void_id(), Some("vbcc-tet-y1-4"));
    }
}
