use super::{ColumnBase, ColumnKind, GridColumn};

/// A computed column: it carries a property name, but that property has no
/// counterpart in the backing store.
///
/// The query layer uses the discriminator to skip these when translating
/// sort or search requests; on the rendering side they behave exactly like
/// a [`DataColumn`](super::DataColumn), reading whatever the row source
/// placed under their data key.
#[derive(Clone, Debug)]
pub struct VirtualColumn {
    base: ColumnBase,
}

impl VirtualColumn {
    pub fn new(property: &str) -> Self {
        Self {
            base: ColumnBase::new(property),
        }
    }
}

impl GridColumn for VirtualColumn {
    #[inline]
    fn base(&self) -> &ColumnBase {
        &self.base
    }

    #[inline]
    fn base_mut(&mut self) -> &mut ColumnBase {
        &mut self.base
    }

    fn kind(&self) -> ColumnKind {
        ColumnKind::Virtual
    }
}
