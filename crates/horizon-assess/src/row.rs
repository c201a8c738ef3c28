//! Rows of a result list and the renderer that fills them.

/// Produces the presentational content of a row from its result.
///
/// Rendering must be deterministic: rendering an unchanged result again yields
/// equal content, so repeated refreshes are idempotent. Any `Fn(&R) -> C`
/// closure is a renderer.
pub trait RowRenderer<R> {
    /// The rendered content stored in each row.
    type Content;

    /// Renders one result.
    fn render(&self, result: &R) -> Self::Content;
}

impl<R, C, F> RowRenderer<R> for F
where
    F: Fn(&R) -> C,
{
    type Content = C;

    fn render(&self, result: &R) -> C {
        self(result)
    }
}

/// One row of a result list, owning its result and rendered content.
///
/// Rows are created and owned by a
/// [`ResultListController`](crate::ResultListController); callers only reach
/// them through [`row_at`](crate::ResultListController::row_at).
#[derive(Debug, Clone, PartialEq)]
pub struct RowHandle<R, C> {
    index: usize,
    visible: bool,
    result: R,
    content: C,
}

impl<R, C> RowHandle<R, C> {
    pub(crate) fn new<V>(index: usize, result: R, visible: bool, renderer: &V) -> Self
    where
        V: RowRenderer<R, Content = C> + ?Sized,
    {
        let content = renderer.render(&result);
        Self {
            index,
            visible,
            result,
            content,
        }
    }

    /// Returns the position of this row in its list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns whether the row is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the result this row presents.
    pub fn result(&self) -> &R {
        &self.result
    }

    /// Returns the result for out-of-band modification.
    ///
    /// The rendered content is not refreshed until a `Single`, `Add` or `All`
    /// update covering this row is applied.
    pub fn result_mut(&mut self) -> &mut R {
        &mut self.result
    }

    /// Returns the rendered content.
    pub fn content(&self) -> &C {
        &self.content
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn refresh<V>(&mut self, renderer: &V)
    where
        V: RowRenderer<R, Content = C> + ?Sized,
    {
        self.content = renderer.render(&self.result);
    }
}
