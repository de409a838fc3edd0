use super::{ColumnBase, ColumnKind, GridColumn};

/// A column carrying per-row actions (edit/delete links and the like)
/// instead of entity data.
///
/// Action columns have no backing property and no data key, so a cell
/// resolves to the default content; what actually gets drawn is up to the
/// rendering directive.
#[derive(Clone, Debug, Default)]
pub struct ActionColumn {
    base: ColumnBase,
}

impl ActionColumn {
    pub fn new() -> Self {
        Self {
            base: ColumnBase::new(None),
        }
    }
}

impl GridColumn for ActionColumn {
    #[inline]
    fn base(&self) -> &ColumnBase {
        &self.base
    }

    #[inline]
    fn base_mut(&mut self) -> &mut ColumnBase {
        &mut self.base
    }

    fn kind(&self) -> ColumnKind {
        ColumnKind::Action
    }
}
