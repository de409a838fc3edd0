use super::{ColumnBase, ColumnKind, GridColumn};

/// A plain column backed by one field of the row's data source.
///
/// This is the workhorse variant: the builder points its data key at the
/// declared property when defaults are applied. A [`DataColumn`] may also be
/// built without a property, in which case it resolves to its default
/// content only.
#[derive(Clone, Debug)]
pub struct DataColumn {
    base: ColumnBase,
}

impl DataColumn {
    pub fn new<'a, P: Into<Option<&'a str>>>(property: P) -> Self {
        Self {
            base: ColumnBase::new(property),
        }
    }
}

impl GridColumn for DataColumn {
    #[inline]
    fn base(&self) -> &ColumnBase {
        &self.base
    }

    #[inline]
    fn base_mut(&mut self) -> &mut ColumnBase {
        &mut self.base
    }

    fn kind(&self) -> ColumnKind {
        ColumnKind::Data
    }
}
