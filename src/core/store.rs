use crate::core::entity::{Entity, StepCtx};

/// Ordered collection of live entities for one surface. Append-at-admission,
/// reverse-order compaction at integration; survivors keep their paint order
/// (oldest first, so newer entities layer on top).
pub struct EntityStore {
    entities: Vec<Entity>,
    cap: usize,
}

impl EntityStore {
    pub fn new(cap: usize) -> Self {
        Self {
            entities: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn has_room(&self) -> bool {
        self.entities.len() < self.cap
    }

    /// Admit an entity unless the population cap is reached.
    pub fn push(&mut self, entity: Entity) -> bool {
        if !self.has_room() {
            return false;
        }
        self.entities.push(entity);
        true
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Advance every entity one step in store order, then compact out the
    /// dead. The removal sweep runs from the end so indices stay valid while
    /// removing mid-iteration.
    pub fn integrate(&mut self, ctx: &mut StepCtx) {
        for entity in &mut self.entities {
            entity.step(ctx);
        }
        for i in (0..self.entities.len()).rev() {
            if !self.entities[i].is_alive() {
                self.entities.remove(i);
            }
        }
    }
}
